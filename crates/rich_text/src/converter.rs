// Copyright (c) 2026 ANET Contributors
//
// SPDX-License-Identifier: AGPL-3.0-only
// Please see README.md in the repository root for full details.

use entity_links::{EntityType, LinkCodec};
use tracing::debug;

use crate::config::{ConfigError, RichTextConfig};
use crate::dom::nodes::{Fragment, LinkNode};
use crate::dom::parser::HtmlParser;
use crate::dom::to_html::ToHtml;
use crate::dom::HtmlParseError;

/// Parse `html` into a document tree, writing entity links as
/// site-relative paths.
pub fn to_tree(html: &str) -> Fragment {
    RichText::default().to_tree(html)
}

/// Serialize a document tree, writing entity links as site-relative paths.
pub fn to_html(fragment: &Fragment) -> String {
    RichText::default().to_html(fragment)
}

/// Converts between stored HTML and document trees using one link codec for
/// both directions, so that entity links written by [`RichText::to_html`]
/// are recognised again by [`RichText::to_tree`].
#[derive(Clone, Debug, Default)]
pub struct RichText {
    parser: HtmlParser,
}

impl RichText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_codec(codec: LinkCodec) -> Self {
        Self {
            parser: HtmlParser::new(codec),
        }
    }

    pub fn from_config(config: &RichTextConfig) -> Result<Self, ConfigError> {
        let codec = config.link_codec()?;
        debug!(
            origin = codec.origin().as_deref().unwrap_or("<relative>"),
            collapse = config.collapse_whitespace_between_tags,
            "configured rich text converter"
        );
        Ok(Self {
            parser: HtmlParser::new(codec).collapse_whitespace_between_tags(
                config.collapse_whitespace_between_tags,
            ),
        })
    }

    pub fn codec(&self) -> &LinkCodec {
        self.parser.codec()
    }

    pub(crate) fn parser(&self) -> &HtmlParser {
        &self.parser
    }

    pub fn to_tree(&self, html: &str) -> Fragment {
        self.parser.parse(html)
    }

    pub fn to_tree_checked(&self, html: &str) -> Result<Fragment, HtmlParseError> {
        self.parser.parse_checked(html)
    }

    /// Fields that were never filled in are stored as null; they open as an
    /// empty paragraph.
    pub fn to_tree_or_empty(&self, html: Option<&str>) -> Fragment {
        match html {
            Some(html) => self.to_tree(html),
            None => Fragment::default(),
        }
    }

    pub fn to_html(&self, fragment: &Fragment) -> String {
        fragment.to_html_with(self.codec())
    }

    /// The link inserted when an entity is picked from the link dialog.
    pub fn entity_link(
        &self,
        entity_type: EntityType,
        entity_id: &str,
    ) -> LinkNode {
        LinkNode::entity(entity_type, entity_id)
    }

    /// The link inserted when a URL is typed into the link dialog. A URL to
    /// an entity page still yields an entity link.
    pub fn external_link(&self, url: &str, text: &str) -> LinkNode {
        LinkNode::from_user_input(self.codec(), url, text)
    }
}

#[cfg(test)]
mod test {
    use entity_links::LinkTarget;
    use indoc::indoc;

    use super::*;
    use crate::dom::nodes::{BlockNode, DomNode};
    use crate::dom::to_tree::ToTree;

    fn absolute() -> RichText {
        RichText::with_codec(
            LinkCodec::with_origin("https://anet.example.org").unwrap(),
        )
    }

    #[test]
    fn free_functions_use_relative_links() {
        let fragment = to_tree(r#"<p><a href="/tasks/t-1">x</a></p>"#);
        assert_eq!(to_html(&fragment), r#"<p><a href="/tasks/t-1">Task:t-1</a></p>"#);
    }

    #[test]
    fn configured_origin_is_used_both_ways() {
        let rich_text = absolute();
        let fragment = Fragment::new(vec![BlockNode::paragraph(vec![
            DomNode::Link(rich_text.entity_link(EntityType::Location, "l-9")),
        ])]);
        let html = rich_text.to_html(&fragment);
        assert_eq!(
            html,
            r#"<p><a href="https://anet.example.org/locations/l-9">Location:l-9</a></p>"#
        );
        assert_eq!(rich_text.to_tree(&html), fragment);
        assert_ne!(to_tree(&html), fragment);
    }

    #[test]
    fn missing_field_is_an_empty_document() {
        assert_eq!(RichText::new().to_tree_or_empty(None), Fragment::default());
        assert_eq!(
            RichText::new().to_tree_or_empty(Some("<h1>t</h1>")).to_tree(),
            indoc! {r#"

            └>h1
              └>"t"
            "#}
        );
    }

    #[test]
    fn typed_entity_url_becomes_an_entity_link() {
        let link = absolute().external_link(
            " https://anet.example.org/people/p-2 ",
            "Jane",
        );
        assert_eq!(link.target(), &LinkTarget::entity(EntityType::Person, "p-2"));
        assert_eq!(link.label(), "");

        let link = absolute().external_link("https://example.com", "Site");
        assert_eq!(link.target(), &LinkTarget::external("https://example.com"));
        assert_eq!(link.label(), "Site");
    }

    #[test]
    fn from_config_applies_settings() {
        let config = RichTextConfig {
            link_origin: None,
            collapse_whitespace_between_tags: false,
        };
        let rich_text = RichText::from_config(&config).unwrap();
        assert_eq!(rich_text.codec(), &LinkCodec::new());
        assert_eq!(
            rich_text.to_html(&rich_text.to_tree("<p>a</p>\n<p>b</p>")),
            "<p>a</p><p><br></p><p>b</p>"
        );
    }

    #[test]
    fn checked_conversion_surfaces_errors() {
        assert!(RichText::new().to_tree_checked("<p>a</i>").is_err());
    }
}
