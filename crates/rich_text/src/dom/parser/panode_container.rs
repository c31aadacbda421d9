// Copyright (c) 2026 ANET Contributors
//
// SPDX-License-Identifier: AGPL-3.0-only
// Please see README.md in the repository root for full details.

use html5ever::QualName;

use super::PaDomHandle;
use crate::Marks;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PaNodeContainer {
    pub(crate) name: QualName,
    pub(crate) attrs: Vec<(String, String)>,
    pub(crate) children: Vec<PaDomHandle>,
}

impl PaNodeContainer {
    pub(crate) fn tag(&self) -> &str {
        self.name.local.as_ref()
    }

    pub(crate) fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _v)| n == name)
            .map(|(_n, v)| v.as_str())
    }

    /// `(property, value)` pairs of the inline `style` attribute, both
    /// lowercased.
    pub(crate) fn style_declarations(&self) -> Vec<(String, String)> {
        self.get_attr("style")
            .map(|style| {
                style
                    .split(';')
                    .filter_map(|declaration| declaration.split_once(':'))
                    .map(|(property, value)| {
                        (
                            property.trim().to_ascii_lowercase(),
                            value.trim().to_ascii_lowercase(),
                        )
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Marks implied by inline CSS, as found on `<span>`s pasted from
    /// office suites.
    pub(crate) fn style_marks(&self, marks: Marks) -> Marks {
        let declarations = self.style_declarations();
        if declarations.is_empty() {
            return marks;
        }
        let mut marks = marks;
        if has_style(&declarations, "font-weight", "bold")
            || has_style(&declarations, "font-weight", "700")
        {
            marks = marks.with_tag("strong");
        }
        if has_style(&declarations, "font-style", "italic") {
            marks = marks.with_tag("em");
        }
        if has_style(&declarations, "text-decoration", "underline") {
            marks = marks.with_tag("u");
        }
        if has_style(&declarations, "text-decoration", "line-through") {
            marks = marks.with_tag("strike");
        }
        marks
    }
}

/// Whether a declaration sets `name` to a value containing the token `value`,
/// so `text-decoration: underline line-through` has both and
/// `font-weight: bold !important` has `bold`.
fn has_style(
    declarations: &[(String, String)],
    name: &str,
    value: &str,
) -> bool {
    declarations.iter().any(|(property, values)| {
        property == name
            && values
                .split_whitespace()
                .map(|token| token.trim_end_matches("!important"))
                .any(|token| token.eq_ignore_ascii_case(value))
    })
}
