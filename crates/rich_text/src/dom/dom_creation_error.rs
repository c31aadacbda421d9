// Copyright (c) 2026 ANET Contributors
//
// SPDX-License-Identifier: AGPL-3.0-only
// Please see README.md in the repository root for full details.

/// The errors html5ever reported while building the DOM. Only returned by
/// the strict parsing entry points; the lenient ones log and carry on.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("failed to parse html: {}", .parse_errors.join(", "))]
pub struct HtmlParseError {
    pub parse_errors: Vec<String>,
}
