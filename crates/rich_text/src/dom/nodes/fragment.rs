// Copyright (c) 2026 ANET Contributors
//
// SPDX-License-Identifier: AGPL-3.0-only
// Please see README.md in the repository root for full details.

use serde::{Deserialize, Serialize};

use super::{BlockNode, DomNode, LinkNode};

/// The root of a document: an ordered list of blocks, never empty.
///
/// Serialized as a bare array of blocks, the shape of an editor value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fragment {
    children: Vec<BlockNode>,
}

impl Default for Fragment {
    fn default() -> Self {
        Self {
            children: vec![BlockNode::empty_paragraph()],
        }
    }
}

impl Fragment {
    /// Create a fragment. No blocks at all gives one empty paragraph.
    pub fn new(children: Vec<BlockNode>) -> Self {
        if children.is_empty() {
            Self::default()
        } else {
            Self { children }
        }
    }

    /// Build the root from arbitrary nodes: every run of consecutive inline
    /// nodes is wrapped in a synthesized paragraph.
    pub fn from_nodes(nodes: impl IntoIterator<Item = DomNode>) -> Self {
        let mut blocks = Vec::new();
        let mut inline_run = Vec::new();
        for node in nodes {
            match node {
                DomNode::Block(block) => {
                    wrap_inline_run(&mut inline_run, &mut blocks);
                    blocks.push(block);
                }
                inline => inline_run.push(inline),
            }
        }
        wrap_inline_run(&mut inline_run, &mut blocks);
        Self::new(blocks)
    }

    pub fn children(&self) -> &[BlockNode] {
        &self.children
    }

    pub fn into_children(self) -> Vec<BlockNode> {
        self.children
    }

    /// All text of the document, one line per top level block.
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .map(BlockNode::text_content)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check the structural guarantees every parsed fragment has. Useful for
    /// values that come from elsewhere, e.g. deserialized editor state.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if self.children.is_empty() {
            return Err(InvariantViolation::EmptyFragment);
        }
        for block in &self.children {
            check_block(block)?;
        }
        Ok(())
    }

    /// Panics if [`Fragment::check_invariants`] fails.
    pub fn explicitly_assert_invariants(&self) {
        if let Err(violation) = self.check_invariants() {
            panic!("Document invariant violated: {violation}");
        }
    }

    /// Like [`Fragment::explicitly_assert_invariants`], but only when the
    /// `assert-invariants` feature is enabled.
    pub fn assert_invariants(&self) {
        #[cfg(feature = "assert-invariants")]
        self.explicitly_assert_invariants();
    }
}

fn wrap_inline_run(run: &mut Vec<DomNode>, blocks: &mut Vec<BlockNode>) {
    if !run.is_empty() {
        blocks.push(BlockNode::paragraph(std::mem::take(run)));
    }
}

fn check_block(block: &BlockNode) -> Result<(), InvariantViolation> {
    if block.children().is_empty() {
        return Err(InvariantViolation::ChildlessBlock(
            block.kind().type_name(),
        ));
    }
    for child in block.children() {
        match child {
            DomNode::Block(child) => check_block(child)?,
            DomNode::Link(link) => check_link(link)?,
            DomNode::Text(_) => {}
        }
    }
    Ok(())
}

fn check_link(link: &LinkNode) -> Result<(), InvariantViolation> {
    if link.children().is_empty() {
        return Err(InvariantViolation::ChildlessLink);
    }
    if link.target().is_entity()
        && (link.children().len() != 1 || !link.children()[0].is_empty())
    {
        return Err(InvariantViolation::EntityLinkWithLabel);
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("fragment has no blocks")]
    EmptyFragment,
    #[error("`{0}` block has no children")]
    ChildlessBlock(&'static str),
    #[error("link has no children")]
    ChildlessLink,
    #[error("entity link must hold exactly one empty text leaf")]
    EntityLinkWithLabel,
}
