// Copyright (c) 2026 ANET Contributors
//
// SPDX-License-Identifier: AGPL-3.0-only
// Please see README.md in the repository root for full details.

use serde::{Deserialize, Serialize};

use super::{BlockNode, LinkNode, TextNode};

/// Any node below the fragment root.
///
/// The serde form is untagged: text leaves are recognised by their `text`
/// field, links and blocks by their `type`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DomNode {
    Text(TextNode),
    Link(LinkNode),
    Block(BlockNode),
}

impl DomNode {
    /// Links are void: a host editor must treat them as one unit.
    pub fn is_void(&self) -> bool {
        matches!(self, Self::Link(_))
    }

    pub fn is_inline(&self) -> bool {
        !self.is_block()
    }

    pub fn is_block(&self) -> bool {
        matches!(self, Self::Block(_))
    }

    pub fn as_block(&self) -> Option<&BlockNode> {
        match self {
            Self::Block(block) => Some(block),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_link(&self) -> Option<&LinkNode> {
        match self {
            Self::Link(link) => Some(link),
            _ => None,
        }
    }

    /// Concatenated raw text of all descendant leaves.
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(text) => text.text.clone(),
            Self::Link(link) => link.label(),
            Self::Block(block) => block.text_content(),
        }
    }

    /// Flatten into text leaves, dropping all structure.
    pub fn into_text_nodes(self) -> Vec<TextNode> {
        match self {
            Self::Text(text) => vec![text],
            Self::Link(link) => link.children().to_vec(),
            Self::Block(block) => block
                .into_children()
                .into_iter()
                .flat_map(DomNode::into_text_nodes)
                .collect(),
        }
    }
}

impl From<TextNode> for DomNode {
    fn from(node: TextNode) -> Self {
        Self::Text(node)
    }
}

impl From<LinkNode> for DomNode {
    fn from(node: LinkNode) -> Self {
        Self::Link(node)
    }
}

impl From<BlockNode> for DomNode {
    fn from(node: BlockNode) -> Self {
        Self::Block(node)
    }
}
