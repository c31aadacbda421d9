// Copyright (c) 2026 ANET Contributors
//
// SPDX-License-Identifier: AGPL-3.0-only
// Please see README.md in the repository root for full details.

//! HTML parsing.
//!
//! html5ever builds a small arena DOM ([`PaDom`], "parsed DOM") through
//! [`padom_creator::PaDomCreator`]; [`parse`] then walks it into a
//! [`crate::Fragment`].

mod padom_creator;
mod panode_container;
mod parse;

use html5ever::{LocalName, Namespace, QualName};

pub(crate) use panode_container::PaNodeContainer;
pub use parse::{parse, HtmlParser};
pub(crate) use parse::{collapse_newlines_between_tags, strip_meta_tags};

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

pub(crate) fn paqual_name(name: &str) -> QualName {
    QualName::new(
        None,
        Namespace::from(HTML_NAMESPACE),
        LocalName::from(name),
    )
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct PaDomHandle(pub(crate) usize);

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PaNodeText {
    pub(crate) content: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct PaNodeDocument {
    pub(crate) children: Vec<PaDomHandle>,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum PaDomNode {
    Container(PaNodeContainer),
    Document(PaNodeDocument),
    Text(PaNodeText),
    /// Comments and processing instructions. Kept so html5ever has a handle
    /// to append, skipped when walking.
    Ignored,
}

impl PaDomNode {
    fn children(&self) -> &[PaDomHandle] {
        match self {
            Self::Container(c) => &c.children,
            Self::Document(d) => &d.children,
            Self::Text(_) | Self::Ignored => &[],
        }
    }

    fn children_mut(&mut self) -> Option<&mut Vec<PaDomHandle>> {
        match self {
            Self::Container(c) => Some(&mut c.children),
            Self::Document(d) => Some(&mut d.children),
            Self::Text(_) | Self::Ignored => None,
        }
    }
}

/// Arena of parsed nodes. Handles are indices into `nodes`; nodes are never
/// removed, only detached.
///
/// `parents[i]` is the parent of `nodes[i]`. Children lists are only changed
/// through the methods below, which keep the two in step.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PaDom {
    nodes: Vec<PaDomNode>,
    parents: Vec<Option<PaDomHandle>>,
    document_handle: PaDomHandle,
    unnamed: QualName,
}

impl PaDom {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![PaDomNode::Document(PaNodeDocument::default())],
            parents: vec![None],
            document_handle: PaDomHandle(0),
            unnamed: paqual_name(""),
        }
    }

    pub(crate) fn document_handle(&self) -> &PaDomHandle {
        &self.document_handle
    }

    pub(crate) fn add_node(&mut self, node: PaDomNode) -> PaDomHandle {
        self.nodes.push(node);
        self.parents.push(None);
        PaDomHandle(self.nodes.len() - 1)
    }

    pub(crate) fn get_node(&self, handle: &PaDomHandle) -> &PaDomNode {
        &self.nodes[handle.0]
    }

    pub(crate) fn get_mut_node(
        &mut self,
        handle: &PaDomHandle,
    ) -> &mut PaDomNode {
        &mut self.nodes[handle.0]
    }

    pub(crate) fn children(&self, handle: &PaDomHandle) -> &[PaDomHandle] {
        self.get_node(handle).children()
    }

    fn children_mut(
        &mut self,
        handle: &PaDomHandle,
    ) -> Option<&mut Vec<PaDomHandle>> {
        self.get_mut_node(handle).children_mut()
    }

    fn can_have_children(&self, handle: &PaDomHandle) -> bool {
        matches!(
            self.get_node(handle),
            PaDomNode::Container(_) | PaDomNode::Document(_)
        )
    }

    /// Make `child` the last child of `parent`, detaching it from wherever
    /// it was. Does nothing if `parent` cannot have children.
    pub(crate) fn append_child(
        &mut self,
        parent: &PaDomHandle,
        child: PaDomHandle,
    ) {
        self.detach(&child);
        let index = self.children(parent).len();
        self.insert_child(parent, index, child);
    }

    /// Insert `child` at `index` among the children of `parent`. `child`
    /// must not currently have a parent.
    pub(crate) fn insert_child(
        &mut self,
        parent: &PaDomHandle,
        index: usize,
        child: PaDomHandle,
    ) {
        if !self.can_have_children(parent) {
            return;
        }
        if let Some(children) = self.children_mut(parent) {
            children.insert(index.min(children.len()), child.clone());
        }
        self.parents[child.0] = Some(parent.clone());
    }

    /// Remove `child` from its parent's children, if it has a parent.
    pub(crate) fn detach(&mut self, child: &PaDomHandle) {
        let Some(parent) = self.parents[child.0].take() else {
            return;
        };
        if let Some(children) = self.children_mut(&parent) {
            children.retain(|c| c != child);
        }
    }

    /// Move all children of `from` to the end of `to`'s children.
    pub(crate) fn move_children(
        &mut self,
        from: &PaDomHandle,
        to: &PaDomHandle,
    ) {
        if from == to || !self.can_have_children(to) {
            return;
        }
        let moved = self
            .children_mut(from)
            .map(std::mem::take)
            .unwrap_or_default();
        for child in &moved {
            self.parents[child.0] = Some(to.clone());
        }
        if let Some(children) = self.children_mut(to) {
            children.extend(moved);
        }
    }

    /// The element name of a container, or an empty name for anything else.
    pub(crate) fn name(&self, handle: &PaDomHandle) -> &QualName {
        match self.get_node(handle) {
            PaDomNode::Container(c) => &c.name,
            _ => &self.unnamed,
        }
    }

    pub(crate) fn parent(&self, handle: &PaDomHandle) -> Option<PaDomHandle> {
        self.parents[handle.0].clone()
    }

    /// The first element directly under the document, which fragment
    /// parsing always creates as `<html>`.
    pub(crate) fn root_element(&self) -> Option<&PaDomHandle> {
        self.children(&self.document_handle)
            .iter()
            .find(|h| matches!(self.get_node(h), PaDomNode::Container(_)))
    }
}

#[derive(Clone, Debug)]
pub(crate) struct PaDomCreationError {
    pub(crate) dom: PaDom,
    pub(crate) parse_errors: Vec<String>,
}

impl PaDomCreationError {
    pub(crate) fn new() -> Self {
        Self {
            dom: PaDom::new(),
            parse_errors: Vec::new(),
        }
    }
}
