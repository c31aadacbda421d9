// Copyright (c) 2026 ANET Contributors
//
// SPDX-License-Identifier: AGPL-3.0-only
// Please see README.md in the repository root for full details.

//! Content arriving through the clipboard.

use crate::converter::RichText;
use crate::dom::nodes::{BlockNode, DomNode, Fragment, TextNode};
use crate::dom::parser::{collapse_newlines_between_tags, strip_meta_tags};

impl RichText {
    /// Convert the `text/html` flavour of a paste.
    ///
    /// Office suites and browsers wrap the copied markup in `<meta>` tags and
    /// pretty-print it. The meta tags and surrounding whitespace are removed
    /// and line breaks between tags are always collapsed, whatever the
    /// converter is configured with.
    pub fn from_clipboard_html(&self, html: &str) -> Fragment {
        let html =
            collapse_newlines_between_tags(strip_meta_tags(html).trim());
        self.parser().parse_prepared(&html)
    }

    /// Convert the `text/plain` flavour of a paste: one paragraph per line.
    pub fn from_plain_text(&self, text: &str) -> Fragment {
        Fragment::new(
            text.lines()
                .map(|line| {
                    BlockNode::paragraph(vec![DomNode::Text(TextNode::plain(
                        line,
                    ))])
                })
                .collect(),
        )
    }
}
