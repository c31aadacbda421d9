// Copyright (c) 2026 ANET Contributors
//
// SPDX-License-Identifier: AGPL-3.0-only
// Please see README.md in the repository root for full details.

//! Debug rendering of a document as an indented tree, e.g.
//!
//! ```text
//!
//! ├>ul
//! │ └>li
//! │   └>"x" [bold]
//! └>p
//!   └>a Report:abc-123
//! ```

use entity_links::LinkTarget;

use crate::dom::nodes::{
    BlockKind, BlockNode, DomNode, Fragment, LinkNode, TextNode,
};

pub trait ToTree {
    /// One-line description of this node.
    fn tree_label(&self) -> String;

    fn tree_children(&self) -> Vec<&dyn ToTree> {
        Vec::new()
    }

    fn to_tree(&self) -> String
    where
        Self: Sized,
    {
        let mut buf = self.tree_label();
        buf.push('\n');
        write_children(self, "", &mut buf);
        buf
    }
}

fn write_children(node: &dyn ToTree, prefix: &str, buf: &mut String) {
    let children = node.tree_children();
    let last = children.len().saturating_sub(1);
    for (i, child) in children.into_iter().enumerate() {
        let (branch, indent) = if i == last {
            ("└>", "  ")
        } else {
            ("├>", "│ ")
        };
        buf.push_str(prefix);
        buf.push_str(branch);
        buf.push_str(&child.tree_label());
        buf.push('\n');
        write_children(child, &format!("{prefix}{indent}"), buf);
    }
}

impl ToTree for Fragment {
    fn tree_label(&self) -> String {
        String::new()
    }

    fn tree_children(&self) -> Vec<&dyn ToTree> {
        self.children().iter().map(|b| b as &dyn ToTree).collect()
    }
}

impl ToTree for DomNode {
    fn tree_label(&self) -> String {
        match self {
            DomNode::Text(text) => text.tree_label(),
            DomNode::Link(link) => link.tree_label(),
            DomNode::Block(block) => block.tree_label(),
        }
    }

    fn tree_children(&self) -> Vec<&dyn ToTree> {
        match self {
            DomNode::Text(text) => text.tree_children(),
            DomNode::Link(link) => link.tree_children(),
            DomNode::Block(block) => block.tree_children(),
        }
    }
}

impl ToTree for BlockNode {
    fn tree_label(&self) -> String {
        match self.kind() {
            BlockKind::Image { url } => format!("img {url:?}"),
            kind => kind.html_tag().to_owned(),
        }
    }

    fn tree_children(&self) -> Vec<&dyn ToTree> {
        self.children().iter().map(|c| c as &dyn ToTree).collect()
    }
}

impl ToTree for TextNode {
    fn tree_label(&self) -> String {
        let marks: Vec<String> =
            self.marks.iter().map(|m| m.to_string()).collect();
        if marks.is_empty() {
            format!("{:?}", self.text)
        } else {
            format!("{:?} [{}]", self.text, marks.join(", "))
        }
    }
}

impl ToTree for LinkNode {
    fn tree_label(&self) -> String {
        match self.target() {
            LinkTarget::Entity {
                entity_type,
                entity_id,
            } => format!("a {entity_type}:{entity_id}"),
            LinkTarget::External { url } => {
                format!("a {url:?} {:?}", self.label())
            }
        }
    }
}
