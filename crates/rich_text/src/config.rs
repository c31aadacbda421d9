// Copyright (c) 2026 ANET Contributors
//
// SPDX-License-Identifier: AGPL-3.0-only
// Please see README.md in the repository root for full details.

use entity_links::{LinkCodec, LinkCodecError};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    LinkOrigin(#[from] LinkCodecError),
}

/// Settings for a [`crate::RichText`] converter, usually read from the host
/// application's configuration file.
///
/// Missing keys take their default, so an empty object configures the same
/// behaviour as the free functions [`crate::to_tree`] and
/// [`crate::to_html`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RichTextConfig {
    /// Origin entity links are written on, e.g. `https://anet.example.org`.
    /// Entity links are written as site-relative paths when unset.
    pub link_origin: Option<String>,
    pub collapse_whitespace_between_tags: bool,
}

impl Default for RichTextConfig {
    fn default() -> Self {
        Self {
            link_origin: None,
            collapse_whitespace_between_tags: true,
        }
    }
}

impl RichTextConfig {
    pub fn link_codec(&self) -> Result<LinkCodec, ConfigError> {
        match &self.link_origin {
            Some(origin) => Ok(LinkCodec::with_origin(origin)?),
            None => Ok(LinkCodec::new()),
        }
    }
}
