// Copyright (c) 2026 ANET Contributors
//
// SPDX-License-Identifier: AGPL-3.0-only
// Please see README.md in the repository root for full details.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// A single text style flag.
///
/// Iteration order is the nesting order used when writing HTML, outermost
/// first.
#[derive(Clone, Copy, Debug, Display, EnumIter, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Strikethrough,
}

impl Mark {
    pub fn html_tag(&self) -> &'static str {
        match self {
            Self::Bold => "strong",
            Self::Italic => "em",
            Self::Underline => "u",
            Self::Strikethrough => "strike",
        }
    }

    /// The mark an inline formatting tag stands for, if any.
    pub fn from_html_tag(tag: &str) -> Option<Self> {
        match tag {
            "strong" | "b" => Some(Self::Bold),
            "em" | "i" => Some(Self::Italic),
            "u" => Some(Self::Underline),
            "strike" | "s" | "del" => Some(Self::Strikethrough),
            _ => None,
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// The set of marks carried by a text leaf.
///
/// This is a plain value: the parser hands an updated copy to each child
/// instead of mutating a shared set.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct Marks {
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strikethrough: bool,
}

impl Marks {
    pub fn contains(&self, mark: Mark) -> bool {
        match mark {
            Mark::Bold => self.bold,
            Mark::Italic => self.italic,
            Mark::Underline => self.underline,
            Mark::Strikethrough => self.strikethrough,
        }
    }

    #[must_use]
    pub fn with(mut self, mark: Mark) -> Self {
        match mark {
            Mark::Bold => self.bold = true,
            Mark::Italic => self.italic = true,
            Mark::Underline => self.underline = true,
            Mark::Strikethrough => self.strikethrough = true,
        }
        self
    }

    /// Marks in effect inside an element with the given tag.
    #[must_use]
    pub fn with_tag(self, tag: &str) -> Self {
        match Mark::from_html_tag(tag) {
            Some(mark) => self.with(mark),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Active marks, outermost first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Mark> + '_ {
        Mark::iter().filter(|mark| self.contains(*mark))
    }
}

/// A run of text with uniform marks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextNode {
    pub text: String,
    #[serde(flatten)]
    pub marks: Marks,
}

impl TextNode {
    pub fn new(text: impl Into<String>, marks: Marks) -> Self {
        Self {
            text: text.into(),
            marks,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Marks::default())
    }

    /// The empty leaf synthesized wherever an element would otherwise have
    /// no children.
    pub fn empty(marks: Marks) -> Self {
        Self::new(String::new(), marks)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
