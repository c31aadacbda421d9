// Copyright (c) 2026 ANET Contributors
//
// SPDX-License-Identifier: AGPL-3.0-only
// Please see README.md in the repository root for full details.

//! Entity links for ANET rich text.
//!
//! An entity link is an anchor whose `href` points at the detail page of a
//! domain object, following the application routing convention
//! `/<routeSegment>/<id>` (e.g. `/reports/<uuid>`, `/people/<uuid>`).
//! [`LinkCodec`] converts between such hrefs and structured
//! [`LinkTarget`]s. Anything that is not a recognisable entity route is an
//! external link and is kept verbatim.

mod codec;
mod entity_type;
mod link_target;

pub use crate::codec::{entity_route, LinkCodec, LinkCodecError};
pub use crate::entity_type::{EntityType, EntityTypeParseError};
pub use crate::link_target::{LinkKind, LinkTarget};
