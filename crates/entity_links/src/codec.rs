// Copyright (c) 2026 ANET Contributors
//
// SPDX-License-Identifier: AGPL-3.0-only
// Please see README.md in the repository root for full details.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use percent_encoding::{
    percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC,
};
use regex::Regex;
use tracing::trace;
use url::{Origin, Url};

use crate::{EntityType, LinkTarget};

/// `/<routeSegment>/<id>` and nothing else: no trailing segments, query or
/// fragment. The id is percent-encoded.
static ENTITY_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/([A-Za-z]+)/([A-Za-z0-9._~%-]+)$")
        .expect("entity path pattern is valid")
});

/// Everything but RFC 3986 unreserved characters is escaped in ids.
const ID_ESCAPES: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// `/reports/new` is the creation page, not an entity.
const RESERVED_IDS: &[&str] = &["new"];

#[derive(Debug, thiserror::Error)]
pub enum LinkCodecError {
    #[error("invalid link origin `{origin}`: {source}")]
    InvalidOrigin {
        origin: String,
        #[source]
        source: url::ParseError,
    },
    #[error("link origin `{0}` has no host")]
    OpaqueOrigin(String),
}

/// The application route of an entity's detail page. Characters of the id
/// that cannot appear in a path segment are percent-encoded.
pub fn entity_route(entity_type: EntityType, entity_id: &str) -> String {
    format!(
        "/{}/{}",
        entity_type.route_segment(),
        utf8_percent_encode(entity_id, ID_ESCAPES)
    )
}

/// Converts between [`LinkTarget`]s and anchor hrefs.
///
/// Without an origin entity links are written as site-relative paths. With
/// one they are written as absolute URLs on that origin. Relative entity
/// paths are always recognised when decoding, absolute ones only on the
/// configured origin.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkCodec {
    origin: Option<Origin>,
}

impl LinkCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_origin(origin: &str) -> Result<Self, LinkCodecError> {
        let url =
            Url::parse(origin).map_err(|source| LinkCodecError::InvalidOrigin {
                origin: origin.to_owned(),
                source,
            })?;
        let origin_of_url = url.origin();
        if !origin_of_url.is_tuple() {
            return Err(LinkCodecError::OpaqueOrigin(origin.to_owned()));
        }
        Ok(Self {
            origin: Some(origin_of_url),
        })
    }

    pub fn origin(&self) -> Option<String> {
        self.origin.as_ref().map(Origin::ascii_serialization)
    }

    pub fn encode(&self, target: &LinkTarget) -> String {
        match target {
            LinkTarget::Entity {
                entity_type,
                entity_id,
            } => {
                let route = entity_route(*entity_type, entity_id);
                match &self.origin {
                    Some(origin) => {
                        format!("{}{}", origin.ascii_serialization(), route)
                    }
                    None => route,
                }
            }
            LinkTarget::External { url } => url.clone(),
        }
    }

    /// Never fails: anything that is not an entity route on this
    /// application decodes to an external link carrying `href` verbatim.
    pub fn decode(&self, href: &str) -> LinkTarget {
        self.entity_path(href)
            .and_then(|path| parse_entity_path(&path))
            .unwrap_or_else(|| LinkTarget::external(href))
    }

    fn entity_path<'a>(&self, href: &'a str) -> Option<Cow<'a, str>> {
        if href.starts_with('/') && !href.starts_with("//") {
            return Some(Cow::Borrowed(href));
        }
        let origin = self.origin.as_ref()?;
        let url = Url::parse(href).ok()?;
        if &url.origin() != origin
            || url.query().is_some()
            || url.fragment().is_some()
        {
            return None;
        }
        Some(Cow::Owned(url.path().to_owned()))
    }
}

fn parse_entity_path(path: &str) -> Option<LinkTarget> {
    let captures = ENTITY_PATH.captures(path)?;
    let segment = captures.get(1)?.as_str();
    let Ok(id) = percent_decode_str(captures.get(2)?.as_str()).decode_utf8()
    else {
        trace!(path, "entity id is not valid utf-8, keeping external link");
        return None;
    };
    let Some(entity_type) = EntityType::from_route_segment(segment) else {
        trace!(segment, "unknown entity route segment, keeping external link");
        return None;
    };
    if RESERVED_IDS.contains(&id.as_ref()) {
        return None;
    }
    Some(LinkTarget::entity(entity_type, id))
}

#[cfg(test)]
mod test {
    use strum::IntoEnumIterator;

    use super::*;

    fn report(id: &str) -> LinkTarget {
        LinkTarget::entity(EntityType::Report, id)
    }

    #[test]
    fn encodes_entity_links_as_routes() {
        let codec = LinkCodec::new();
        assert_eq!(codec.encode(&report("abc-123")), "/reports/abc-123");
        assert_eq!(
            codec.encode(&LinkTarget::entity(EntityType::Person, "p1")),
            "/people/p1"
        );
    }

    #[test]
    fn encodes_external_links_unchanged() {
        let codec = LinkCodec::new();
        let url = "https://example.com/a?b=c#d";
        assert_eq!(codec.encode(&LinkTarget::external(url)), url);
    }

    #[test]
    fn entity_link_round_trips() {
        let codec = LinkCodec::new();
        let target = report("abc-123");
        assert_eq!(codec.decode(&codec.encode(&target)), target);
    }

    #[test]
    fn every_entity_type_round_trips_with_and_without_origin() {
        let codecs = [
            LinkCodec::new(),
            LinkCodec::with_origin("https://anet.example.org").unwrap(),
        ];
        for codec in &codecs {
            for entity_type in EntityType::iter() {
                let target = LinkTarget::entity(
                    entity_type,
                    "7d7e5a11-4b5c-4f5e-9d1a-2f3b4c5d6e7f",
                );
                assert_eq!(codec.decode(&codec.encode(&target)), target);
            }
        }
    }

    #[test]
    fn ids_outside_the_path_alphabet_are_escaped() {
        let codec = LinkCodec::new();
        let target = report("a b/c?d#é");
        let href = codec.encode(&target);
        assert_eq!(href, "/reports/a%20b%2Fc%3Fd%23%C3%A9");
        assert_eq!(codec.decode(&href), target);

        let codec = LinkCodec::with_origin("https://anet.example.org").unwrap();
        assert_eq!(codec.decode(&codec.encode(&target)), target);
    }

    #[test]
    fn escaped_ids_are_decoded() {
        let codec = LinkCodec::new();
        assert_eq!(codec.decode("/reports/abc%2D123"), report("abc-123"));
        assert_eq!(
            codec.decode("/reports/%FF"),
            LinkTarget::external("/reports/%FF")
        );
        assert_eq!(
            codec.decode("/reports/%6Eew"),
            LinkTarget::external("/reports/%6Eew")
        );
    }

    #[test]
    fn external_link_round_trips() {
        let codec = LinkCodec::new();
        let target = LinkTarget::external("https://example.com/reports");
        assert_eq!(codec.decode(&codec.encode(&target)), target);
    }

    #[test]
    fn unknown_entity_segment_falls_back_to_external() {
        let codec = LinkCodec::new();
        assert_eq!(
            codec.decode("/widgets/abc-123"),
            LinkTarget::external("/widgets/abc-123")
        );
    }

    #[test]
    fn creation_route_is_not_an_entity() {
        let codec = LinkCodec::new();
        assert_eq!(
            codec.decode("/reports/new"),
            LinkTarget::external("/reports/new")
        );
    }

    #[test]
    fn deeper_paths_queries_and_fragments_are_external() {
        let codec = LinkCodec::new();
        for href in [
            "/reports/abc/edit",
            "/reports/abc?x=1",
            "/reports/abc#top",
            "/reports/",
            "//reports/abc",
            "reports/abc",
        ] {
            assert_eq!(codec.decode(href), LinkTarget::external(href));
        }
    }

    #[test]
    fn absolute_urls_decode_only_on_configured_origin() {
        let codec = LinkCodec::with_origin("https://anet.example.org/").unwrap();
        assert_eq!(
            codec.decode("https://anet.example.org/reports/abc-123"),
            report("abc-123")
        );
        assert_eq!(
            codec.decode("https://elsewhere.example.org/reports/abc-123"),
            LinkTarget::external("https://elsewhere.example.org/reports/abc-123")
        );
        assert_eq!(
            LinkCodec::new().decode("https://anet.example.org/reports/abc-123"),
            LinkTarget::external("https://anet.example.org/reports/abc-123")
        );
    }

    #[test]
    fn relative_paths_decode_even_with_an_origin() {
        let codec = LinkCodec::with_origin("https://anet.example.org").unwrap();
        assert_eq!(codec.decode("/reports/abc-123"), report("abc-123"));
        assert_eq!(
            codec.encode(&report("abc-123")),
            "https://anet.example.org/reports/abc-123"
        );
    }

    #[test]
    fn origin_keeps_non_default_port() {
        let codec = LinkCodec::with_origin("http://localhost:8080/some/page")
            .unwrap();
        assert_eq!(codec.origin().as_deref(), Some("http://localhost:8080"));
        assert_eq!(
            codec.decode("http://localhost:8080/tasks/t-1"),
            LinkTarget::entity(EntityType::Task, "t-1")
        );
        assert_eq!(
            codec.decode("http://localhost:9090/tasks/t-1"),
            LinkTarget::external("http://localhost:9090/tasks/t-1")
        );
    }

    #[test]
    fn rejects_bad_origins() {
        assert!(matches!(
            LinkCodec::with_origin("not a url"),
            Err(LinkCodecError::InvalidOrigin { .. })
        ));
        assert!(matches!(
            LinkCodec::with_origin("data:text/plain,hello"),
            Err(LinkCodecError::OpaqueOrigin(_))
        ));
    }
}
