// Copyright (c) 2026 ANET Contributors
//
// SPDX-License-Identifier: AGPL-3.0-only
// Please see README.md in the repository root for full details.

//! HTML → document tree.

use entity_links::{LinkCodec, LinkTarget};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use super::padom_creator::PaDomCreator;
use super::{PaDom, PaDomHandle, PaDomNode, PaNodeContainer};
use crate::dom::nodes::{
    BlockKind, BlockNode, DomNode, Fragment, LinkNode, Mark, Marks, TextNode,
};
use crate::dom::HtmlParseError;

/// Whitespace containing a line break between a closing and an opening tag,
/// i.e. the indentation of pretty-printed HTML.
static NEWLINE_BETWEEN_TAGS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r">\s*(\r\n|\n|\r)\s*<").expect("newline pattern is valid")
});

static META_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<meta[^>]*>").expect("meta pattern is valid")
});

/// Elements whose content is never document text.
const DROPPED_TAGS: &[&str] = &["script", "style", "template", "title"];

/// Parse `html` with the default configuration.
pub fn parse(html: &str) -> Fragment {
    HtmlParser::default().parse(html)
}

pub(crate) fn collapse_newlines_between_tags(html: &str) -> String {
    NEWLINE_BETWEEN_TAGS.replace_all(html, "><").into_owned()
}

pub(crate) fn strip_meta_tags(html: &str) -> String {
    META_TAG.replace_all(html, "").into_owned()
}

/// The element a node sits directly inside, as far as conversion cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Parent {
    Root,
    ListItem,
    Other,
}

/// Converts HTML into a [`Fragment`].
///
/// Parsing is lenient: malformed markup is recovered the way a browser
/// would, unknown elements are replaced by their content and links that do
/// not resolve to an entity are kept as external links.
#[derive(Clone, Debug)]
pub struct HtmlParser {
    codec: LinkCodec,
    collapse_whitespace_between_tags: bool,
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new(LinkCodec::default())
    }
}

impl HtmlParser {
    pub fn new(codec: LinkCodec) -> Self {
        Self {
            codec,
            collapse_whitespace_between_tags: true,
        }
    }

    /// Whether to drop line breaks (and the whitespace around them) between
    /// tags before parsing. On by default; without it every indented line of
    /// pretty-printed HTML becomes an empty paragraph.
    #[must_use]
    pub fn collapse_whitespace_between_tags(mut self, collapse: bool) -> Self {
        self.collapse_whitespace_between_tags = collapse;
        self
    }

    pub fn codec(&self) -> &LinkCodec {
        &self.codec
    }

    pub fn parse(&self, html: &str) -> Fragment {
        self.parse_prepared(&self.prepare(html))
    }

    /// Like [`HtmlParser::parse`], but fails if html5ever reported any
    /// error, e.g. to validate stored content.
    pub fn parse_checked(&self, html: &str) -> Result<Fragment, HtmlParseError> {
        let padom = PaDomCreator::parse(&self.prepare(html)).map_err(|e| {
            HtmlParseError {
                parse_errors: e.parse_errors,
            }
        })?;
        Ok(self.convert_document(&padom))
    }

    /// Parse html that has already been through any preprocessing.
    pub(crate) fn parse_prepared(&self, html: &str) -> Fragment {
        let padom = match PaDomCreator::parse(html) {
            Ok(padom) => padom,
            Err(e) => {
                debug!(
                    errors = e.parse_errors.len(),
                    "recovered from malformed html"
                );
                for error in &e.parse_errors {
                    trace!(error = error.as_str(), "html parse error");
                }
                e.dom
            }
        };
        self.convert_document(&padom)
    }

    fn prepare(&self, html: &str) -> String {
        if self.collapse_whitespace_between_tags {
            collapse_newlines_between_tags(html)
        } else {
            html.to_owned()
        }
    }

    fn convert_document(&self, padom: &PaDom) -> Fragment {
        let root = padom
            .root_element()
            .unwrap_or_else(|| padom.document_handle());
        let nodes = padom.children(root).iter().flat_map(|child| {
            self.convert(padom, child, Marks::default(), Parent::Root)
        });
        let fragment = Fragment::from_nodes(nodes);
        fragment.assert_invariants();
        fragment
    }

    fn convert(
        &self,
        padom: &PaDom,
        handle: &PaDomHandle,
        marks: Marks,
        parent: Parent,
    ) -> Vec<DomNode> {
        match padom.get_node(handle) {
            PaDomNode::Text(text) => {
                vec![DomNode::Text(TextNode::new(text.content.as_str(), marks))]
            }
            PaDomNode::Container(container) => {
                self.convert_container(padom, container, marks, parent)
            }
            PaDomNode::Document(_) | PaDomNode::Ignored => Vec::new(),
        }
    }

    fn convert_container(
        &self,
        padom: &PaDom,
        container: &PaNodeContainer,
        marks: Marks,
        parent: Parent,
    ) -> Vec<DomNode> {
        let tag = container.tag();
        if DROPPED_TAGS.contains(&tag) {
            trace!(tag, "dropping element and its content");
            return Vec::new();
        }

        let marks = match tag {
            "span" => container.style_marks(marks),
            _ => marks.with_tag(tag),
        };
        let children_parent = match tag {
            "li" => Parent::ListItem,
            _ => Parent::Other,
        };
        let mut children = self.convert_children(
            padom,
            container,
            marks,
            children_parent,
        );
        if children.is_empty() {
            children.push(DomNode::Text(TextNode::empty(marks)));
        }

        match tag {
            "a" => vec![self.new_link(container, children)],
            "br" => vec![DomNode::Text(TextNode::new("\n", marks))],
            "img" => {
                let url = container.get_attr("src").unwrap_or_default();
                vec![DomNode::Block(BlockNode::new(
                    BlockKind::Image { url: url.to_owned() },
                    children,
                ))]
            }
            // A paragraph directly inside a list item would nest blocks the
            // editor cannot render, so its content joins the item.
            "p" if parent == Parent::ListItem => children,
            _ => match BlockKind::from_html_tag(tag) {
                Some(kind) => vec![DomNode::Block(BlockNode::new(kind, children))],
                None => {
                    if Mark::from_html_tag(tag).is_none() {
                        trace!(tag, "replacing element by its content");
                    }
                    children
                }
            },
        }
    }

    fn convert_children(
        &self,
        padom: &PaDom,
        container: &PaNodeContainer,
        marks: Marks,
        parent: Parent,
    ) -> Vec<DomNode> {
        container
            .children
            .iter()
            .flat_map(|child| self.convert(padom, child, marks, parent))
            .collect()
    }

    /// Entity links drop whatever the anchor contained; external links keep
    /// the anchor's text as their label.
    fn new_link(
        &self,
        container: &PaNodeContainer,
        children: Vec<DomNode>,
    ) -> DomNode {
        let href = container.get_attr("href").unwrap_or_default();
        let target = self.codec.decode(href);
        let label = match &target {
            LinkTarget::Entity { .. } => Vec::new(),
            LinkTarget::External { .. } => children
                .into_iter()
                .flat_map(DomNode::into_text_nodes)
                .collect(),
        };
        DomNode::Link(LinkNode::new(target, label))
    }
}
