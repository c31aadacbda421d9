// Copyright (c) 2026 ANET Contributors
//
// SPDX-License-Identifier: AGPL-3.0-only
// Please see README.md in the repository root for full details.

use serde::{Deserialize, Serialize};

use crate::{EntityType, LinkCodec};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    InternalEntityLink,
    ExternalLink,
}

/// Where an inline link points.
///
/// The serde form is the one the editor keeps as its value:
/// `{"type": "anet-link", "entityType": "Report", "entityUuid": "…"}` or
/// `{"type": "external-link", "url": "…"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LinkTarget {
    #[serde(rename = "anet-link")]
    Entity {
        #[serde(rename = "entityType")]
        entity_type: EntityType,
        #[serde(rename = "entityUuid")]
        entity_id: String,
    },
    #[serde(rename = "external-link")]
    External { url: String },
}

impl LinkTarget {
    pub fn entity(entity_type: EntityType, entity_id: impl Into<String>) -> Self {
        Self::Entity {
            entity_type,
            entity_id: entity_id.into(),
        }
    }

    pub fn external(url: impl Into<String>) -> Self {
        Self::External { url: url.into() }
    }

    /// Build a target from a URL typed into the "link to external" dialog.
    /// URLs pointing at an entity page become entity links so that their
    /// label keeps following the entity.
    pub fn from_user_input(codec: &LinkCodec, url: &str) -> Self {
        codec.decode(url.trim())
    }

    pub fn kind(&self) -> LinkKind {
        match self {
            Self::Entity { .. } => LinkKind::InternalEntityLink,
            Self::External { .. } => LinkKind::ExternalLink,
        }
    }

    pub fn is_entity(&self) -> bool {
        self.kind() == LinkKind::InternalEntityLink
    }
}
