// Copyright (c) 2026 ANET Contributors
//
// SPDX-License-Identifier: AGPL-3.0-only
// Please see README.md in the repository root for full details.

pub mod dom_creation_error;
pub mod nodes;
pub mod parser;
pub mod to_html;
pub mod to_tree;

pub use dom_creation_error::HtmlParseError;
