// Copyright (c) 2026 ANET Contributors
//
// SPDX-License-Identifier: AGPL-3.0-only
// Please see README.md in the repository root for full details.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// The kinds of domain object that can be the target of an entity link.
///
/// `Display` gives the model name (`Report`, `AuthorizationGroup`), which is
/// also the serialized form.
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    EnumIter,
    Eq,
    Hash,
    IntoStaticStr,
    PartialEq,
    Serialize,
    Deserialize,
)]
pub enum EntityType {
    Report,
    Person,
    Organization,
    Position,
    Location,
    Task,
    AuthorizationGroup,
    Attachment,
    Event,
    EventSeries,
}

impl EntityType {
    /// The model name, e.g. `"Person"`.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// The first path segment of the entity's detail page route, e.g.
    /// `"people"` for `/people/<uuid>`.
    pub fn route_segment(&self) -> &'static str {
        match self {
            Self::Report => "reports",
            Self::Person => "people",
            Self::Organization => "organizations",
            Self::Position => "positions",
            Self::Location => "locations",
            Self::Task => "tasks",
            Self::AuthorizationGroup => "authorizationGroups",
            Self::Attachment => "attachments",
            Self::Event => "events",
            Self::EventSeries => "eventSeries",
        }
    }

    pub fn from_route_segment(segment: &str) -> Option<Self> {
        Self::iter().find(|t| t.route_segment() == segment)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a known entity type")]
pub struct EntityTypeParseError(pub String);

impl FromStr for EntityType {
    type Err = EntityTypeParseError;

    /// Accepts the model name (`Report`) or the route segment (`reports`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|t| t.name() == s)
            .or_else(|| Self::from_route_segment(s))
            .ok_or_else(|| EntityTypeParseError(s.to_owned()))
    }
}
