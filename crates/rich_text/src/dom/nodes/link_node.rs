// Copyright (c) 2026 ANET Contributors
//
// SPDX-License-Identifier: AGPL-3.0-only
// Please see README.md in the repository root for full details.

use entity_links::{EntityType, LinkCodec, LinkTarget};
use serde::{Deserialize, Serialize};

use super::TextNode;

/// An inline, void link.
///
/// Entity links always hold exactly one empty leaf: their label is looked up
/// from the entity when rendered, never stored. External links keep the
/// text of the anchor they were parsed from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkNode {
    #[serde(flatten)]
    target: LinkTarget,
    children: Vec<TextNode>,
}

impl LinkNode {
    pub fn new(target: LinkTarget, children: Vec<TextNode>) -> Self {
        let children = if target.is_entity() || children.is_empty() {
            vec![TextNode::default()]
        } else {
            children
        };
        Self { target, children }
    }

    pub fn entity(entity_type: EntityType, entity_id: impl Into<String>) -> Self {
        Self::new(LinkTarget::entity(entity_type, entity_id), Vec::new())
    }

    pub fn external(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(LinkTarget::external(url), vec![TextNode::plain(text)])
    }

    /// The link created from the "link to external" dialog. A URL that
    /// points at an entity page yields an entity link and `text` is dropped.
    pub fn from_user_input(codec: &LinkCodec, url: &str, text: &str) -> Self {
        Self::new(
            LinkTarget::from_user_input(codec, url),
            vec![TextNode::plain(text)],
        )
    }

    pub fn target(&self) -> &LinkTarget {
        &self.target
    }

    pub fn children(&self) -> &[TextNode] {
        &self.children
    }

    /// The concatenated raw text of the children, marks ignored.
    pub fn label(&self) -> String {
        self.children.iter().map(|t| t.text.as_str()).collect()
    }
}
