// Copyright (c) 2026 ANET Contributors
//
// SPDX-License-Identifier: AGPL-3.0-only
// Please see README.md in the repository root for full details.

use serde::{Deserialize, Serialize};
use strum_macros::IntoStaticStr;

use super::{DomNode, Marks, TextNode};

/// The structural type of a block.
///
/// Serialized as the editor's `type` discriminator (`heading-one`,
/// `block-quote`, …).
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, IntoStaticStr, Serialize, Deserialize,
)]
#[serde(tag = "type", rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum BlockKind {
    HeadingOne,
    HeadingTwo,
    HeadingThree,
    Paragraph,
    NumberedList,
    BulletedList,
    ListItem,
    BlockQuote,
    Image { url: String },
}

impl BlockKind {
    /// Block kind for an HTML element, `None` if the element is not a block
    /// this model knows about. `<img>` is handled by the parser since it
    /// needs the `src` attribute.
    pub fn from_html_tag(tag: &str) -> Option<Self> {
        let kind = match tag {
            "h1" => Self::HeadingOne,
            "h2" => Self::HeadingTwo,
            "h3" => Self::HeadingThree,
            "p" => Self::Paragraph,
            "ol" => Self::NumberedList,
            "ul" => Self::BulletedList,
            "li" => Self::ListItem,
            "blockquote" | "cite" => Self::BlockQuote,
            _ => return None,
        };
        Some(kind)
    }

    pub fn html_tag(&self) -> &'static str {
        match self {
            Self::HeadingOne => "h1",
            Self::HeadingTwo => "h2",
            Self::HeadingThree => "h3",
            Self::Paragraph => "p",
            Self::NumberedList => "ol",
            Self::BulletedList => "ul",
            Self::ListItem => "li",
            Self::BlockQuote => "blockquote",
            Self::Image { .. } => "img",
        }
    }

    /// The editor's name for this kind, e.g. `"numbered-list"`.
    pub fn type_name(&self) -> &'static str {
        self.into()
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::NumberedList | Self::BulletedList)
    }
}

/// A structural node. Never childless.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockNode {
    #[serde(flatten)]
    kind: BlockKind,
    children: Vec<DomNode>,
}

impl BlockNode {
    /// Create a block. An empty `children` is replaced by one empty text
    /// leaf.
    pub fn new(kind: BlockKind, children: Vec<DomNode>) -> Self {
        Self::new_with_marks(kind, children, Marks::default())
    }

    /// Like [`BlockNode::new`], but a synthesized empty leaf carries
    /// `marks`.
    pub fn new_with_marks(
        kind: BlockKind,
        mut children: Vec<DomNode>,
        marks: Marks,
    ) -> Self {
        if children.is_empty() {
            children.push(DomNode::Text(TextNode::empty(marks)));
        }
        Self { kind, children }
    }

    pub fn paragraph(children: Vec<DomNode>) -> Self {
        Self::new(BlockKind::Paragraph, children)
    }

    /// The paragraph that keeps an otherwise empty document editable.
    pub fn empty_paragraph() -> Self {
        Self::paragraph(Vec::new())
    }

    pub fn kind(&self) -> &BlockKind {
        &self.kind
    }

    pub fn children(&self) -> &[DomNode] {
        &self.children
    }

    pub fn into_children(self) -> Vec<DomNode> {
        self.children
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(DomNode::text_content).collect()
    }
}
