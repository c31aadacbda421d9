// Copyright (c) 2026 ANET Contributors
//
// SPDX-License-Identifier: AGPL-3.0-only
// Please see README.md in the repository root for full details.

//! Conversion between the HTML stored for ANET rich text fields and the
//! document tree the editor works on.
//!
//! ```
//! use rich_text::{to_html, to_tree};
//!
//! let fragment = to_tree("<p>Visited <strong>site</strong></p>");
//! assert_eq!(to_html(&fragment), "<p>Visited <strong>site</strong></p>");
//! ```
//!
//! Links to entity detail pages (`/reports/<uuid>`, `/people/<uuid>`, ...)
//! become structured entity links; see [`entity_links`] for the routing
//! rules.

pub mod dom;

mod config;
mod converter;
mod paste;

pub use crate::config::{ConfigError, RichTextConfig};
pub use crate::converter::{to_html, to_tree, RichText};
pub use crate::dom::nodes::{
    BlockKind, BlockNode, DomNode, Fragment, InvariantViolation, LinkNode,
    Mark, Marks, TextNode,
};
pub use crate::dom::parser::{parse, HtmlParser};
pub use crate::dom::to_html::ToHtml;
pub use crate::dom::to_tree::ToTree;
pub use crate::dom::HtmlParseError;
pub use entity_links::{
    entity_route, EntityType, LinkCodec, LinkCodecError, LinkKind, LinkTarget,
};
