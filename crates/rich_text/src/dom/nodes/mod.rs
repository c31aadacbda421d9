// Copyright (c) 2026 ANET Contributors
//
// SPDX-License-Identifier: AGPL-3.0-only
// Please see README.md in the repository root for full details.

pub mod block_node;
pub mod dom_node;
pub mod fragment;
pub mod link_node;
pub mod text_node;

pub use block_node::{BlockKind, BlockNode};
pub use dom_node::DomNode;
pub use fragment::{Fragment, InvariantViolation};
pub use link_node::LinkNode;
pub use text_node::{Mark, Marks, TextNode};
