// Copyright (c) 2026 ANET Contributors
//
// SPDX-License-Identifier: AGPL-3.0-only
// Please see README.md in the repository root for full details.

use std::sync::Once;

use indoc::indoc;
use regex::Regex;
use rich_text::{
    to_html, to_tree, BlockKind, BlockNode, DomNode, EntityType, Fragment,
    LinkCodec, LinkKind, LinkNode, LinkTarget, Marks, RichText,
    RichTextConfig, TextNode, ToTree,
};
use serde_json::json;
use speculoos::prelude::*;
use tracing_subscriber::EnvFilter;

static TEST_SETUP: Once = Once::new();

/// Route the library's `tracing` events to stderr, filtered by `RUST_LOG`.
fn init_test_logging() {
    TEST_SETUP.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("rich_text=trace"));
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_test_writer()
            .try_init()
            .unwrap_or_else(|e| {
                eprintln!("Error: Failed to set up logging: {}", e);
            });
    });
}

fn roundtrip(html: &str) -> String {
    to_html(&to_tree(html))
}

#[test]
fn plain_paragraph_roundtrips() {
    assert_eq!(roundtrip("<p>Hello</p>"), "<p>Hello</p>");
}

#[test]
fn canonical_documents_roundtrip() {
    init_test_logging();
    let documents = [
        "<h1>Title</h1><p>Body with <u>underline</u> and <strike>gone</strike></p>",
        "<ol><li>one</li><li><strong>two</strong></li></ol>",
        "<blockquote>said <em>this</em></blockquote>",
        r#"<p>Met <a href="/people/4f1c-9a">Person:4f1c-9a</a> at <a href="/locations/0b2e">Location:0b2e</a></p>"#,
        r#"<p><a href="https://example.com/a?b=c&amp;d=e">example</a></p>"#,
        r#"<img src="/api/attachment/view/77"><p>caption</p>"#,
    ];
    for html in documents {
        assert_eq!(roundtrip(html), html);
    }
}

#[test]
fn nested_marks_compose() {
    let fragment = to_tree("<p><strong><em>x</em></strong></p>");
    let text = fragment.children()[0].children()[0].as_text().unwrap();
    assert_eq!(text.text, "x");
    assert!(text.marks.bold);
    assert!(text.marks.italic);
    assert!(!text.marks.underline);
    assert!(!text.marks.strikethrough);
    assert_eq!(to_html(&fragment), "<p><strong><em>x</em></strong></p>");
}

#[test]
fn all_marks_wrap_in_fixed_order() {
    let marks = Marks {
        bold: true,
        italic: true,
        underline: true,
        strikethrough: true,
    };
    let fragment = Fragment::new(vec![BlockNode::paragraph(vec![
        TextNode::new("x", marks).into(),
    ])]);
    let html = to_html(&fragment);
    assert_eq!(html, "<p><strong><em><u><strike>x</strike></u></em></strong></p>");
    assert_eq!(to_tree(&html), fragment);
}

#[test]
fn empty_input_is_one_empty_paragraph() {
    let fragment = to_tree("");
    assert_that!(fragment.children().len()).is_equal_to(1);
    let paragraph = &fragment.children()[0];
    assert_eq!(paragraph.kind(), &BlockKind::Paragraph);
    assert_that!(paragraph.children().len()).is_equal_to(1);
    assert_eq!(
        paragraph.children()[0].as_text(),
        Some(&TextNode::plain(""))
    );
}

#[test]
fn entity_links_roundtrip_through_the_codec() {
    let codec = LinkCodec::new();
    let target = LinkTarget::entity(EntityType::Report, "abc-123");
    assert_eq!(codec.decode(&codec.encode(&target)), target);
    assert_eq!(target.kind(), LinkKind::InternalEntityLink);
}

#[test]
fn unknown_entity_types_fall_back_to_external_links() {
    init_test_logging();
    let codec = LinkCodec::new();
    assert_eq!(
        codec.decode("/spaceships/abc-123"),
        LinkTarget::external("/spaceships/abc-123")
    );
    assert_eq!(
        codec.decode("/spaceships/abc-123").kind(),
        LinkKind::ExternalLink
    );
}

#[test]
fn list_item_paragraphs_are_flattened() {
    let fragment = to_tree("<ul><li><p>x</p></li></ul>");
    let list = &fragment.children()[0];
    assert_eq!(list.kind(), &BlockKind::BulletedList);
    let item = list.children()[0].as_block().unwrap();
    assert_eq!(item.kind(), &BlockKind::ListItem);
    assert_eq!(item.children(), &[DomNode::Text(TextNode::plain("x"))]);
}

/// Spans of text between two tags.
static TEXT_RUN: &str = r">([^<]+)<";
/// Opening tags, with their attributes.
static OPEN_TAG: &str = r"<[a-z][a-z0-9]*[^>]*>";

const FIXTURES: &[&str] = &[
    "<p>Hello <strong>bold <em>both</em></strong> tail</p>",
    "<ul><li><p>one</p></li><li>two<ol><li>three</li></ol></li></ul>",
    r#"<h2>Head</h2><blockquote><a href="/reports/r-1">Report:r-1</a> and <a href="https://example.com"><u>ext</u></a></blockquote>"#,
    "<div>loose <span>text</span><p>para<br>graph</p></div>",
    r#"<p><img src="/x.png">after</p><h3><s>old</s></h3>"#,
];

/// Every variant of `html` with one text run emptied or one opening tag
/// removed, plus the variant with all text removed.
fn pruned_variants(html: &str) -> Vec<String> {
    let mut variants = Vec::new();
    let text_run = Regex::new(TEXT_RUN).unwrap();
    for m in text_run.find_iter(html) {
        variants.push(format!(
            "{}><{}",
            &html[..m.start()],
            &html[m.end()..]
        ));
    }
    variants.push(text_run.replace_all(html, "><").into_owned());

    let open_tag = Regex::new(OPEN_TAG).unwrap();
    for m in open_tag.find_iter(html) {
        variants
            .push(format!("{}{}", &html[..m.start()], &html[m.end()..]));
    }
    variants
}

fn assert_no_childless_blocks(node: &BlockNode, source: &str) {
    assert!(
        !node.children().is_empty(),
        "childless {:?} block from {source}",
        node.kind()
    );
    for child in node.children() {
        match child {
            DomNode::Block(block) => assert_no_childless_blocks(block, source),
            DomNode::Link(link) => assert!(
                !link.children().is_empty(),
                "childless link from {source}"
            ),
            DomNode::Text(_) => {}
        }
    }
}

#[test]
fn pruned_documents_never_have_childless_blocks() {
    init_test_logging();
    for fixture in FIXTURES {
        for html in pruned_variants(fixture) {
            let fragment = to_tree(&html);
            assert_that!(fragment.check_invariants()).is_ok();
            for block in fragment.children() {
                assert_no_childless_blocks(block, &html);
            }
        }
    }
}

#[test]
fn serializes_to_the_editor_value_shape() {
    let fragment = to_tree(indoc! {r#"
        <p>Hi <strong>there</strong><a href="/reports/r-1">ignored</a></p>
        <ul><li><a href="https://example.com">site</a></li></ul>"#});
    assert_eq!(
        serde_json::to_value(&fragment).unwrap(),
        json!([
            {
                "type": "paragraph",
                "children": [
                    { "text": "Hi " },
                    { "text": "there", "bold": true },
                    {
                        "type": "anet-link",
                        "entityType": "Report",
                        "entityUuid": "r-1",
                        "children": [{ "text": "" }]
                    }
                ]
            },
            {
                "type": "bulleted-list",
                "children": [{
                    "type": "list-item",
                    "children": [{
                        "type": "external-link",
                        "url": "https://example.com",
                        "children": [{ "text": "site" }]
                    }]
                }]
            }
        ])
    );
}

#[test]
fn editor_value_deserializes_into_a_tree() {
    let value = json!([
        {
            "type": "heading-two",
            "children": [{ "text": "Plan", "italic": true }]
        },
        {
            "type": "paragraph",
            "children": [
                { "text": "see " },
                {
                    "type": "anet-link",
                    "entityType": "AuthorizationGroup",
                    "entityUuid": "g-7",
                    "children": [{ "text": "" }]
                }
            ]
        },
        { "type": "image", "url": "/a.png", "children": [{ "text": "" }] }
    ]);
    let fragment: Fragment = serde_json::from_value(value).unwrap();
    assert_that!(fragment.check_invariants()).is_ok();
    assert_eq!(
        fragment.to_tree(),
        indoc! {r#"

        ├>h2
        │ └>"Plan" [italic]
        ├>p
        │ ├>"see "
        │ └>a AuthorizationGroup:g-7
        └>img "/a.png"
          └>""
        "#}
    );
    assert_eq!(
        to_html(&fragment),
        r#"<h2><em>Plan</em></h2><p>see <a href="/authorizationGroups/g-7">AuthorizationGroup:g-7</a></p><img src="/a.png">"#
    );
}

#[test]
fn configured_converter_writes_absolute_links() {
    init_test_logging();
    let config: RichTextConfig = serde_json::from_value(json!({
        "linkOrigin": "https://anet.example.org"
    }))
    .unwrap();
    let rich_text = RichText::from_config(&config).unwrap();

    let fragment = Fragment::new(vec![BlockNode::paragraph(vec![
        TextNode::plain("Task ").into(),
        LinkNode::entity(EntityType::Task, "t-42").into(),
    ])]);
    let html = rich_text.to_html(&fragment);
    assert_eq!(
        html,
        r#"<p>Task <a href="https://anet.example.org/tasks/t-42">Task:t-42</a></p>"#
    );
    assert_eq!(rich_text.to_tree(&html), fragment);

    // Relative links stay recognised after switching to absolute ones.
    assert_eq!(
        rich_text.to_tree(r#"<p>Task <a href="/tasks/t-42">x</a></p>"#),
        fragment
    );
}

#[test]
fn pasted_office_html_is_cleaned() {
    let pasted = indoc! {r#"
        <meta charset="utf-8">
        <p><span style="font-weight: bold">Summary</span></p>
        <p>Line</p>
        "#};
    assert_eq!(
        RichText::new().from_clipboard_html(pasted).to_tree(),
        indoc! {r#"

        ├>p
        │ └>"Summary" [bold]
        └>p
          └>"Line"
        "#}
    );
}

#[test]
fn large_pasted_documents_with_styled_spans_convert() {
    let spans = r#"<span style="font-weight:700">x</span><span style="font-style: italic; color: #000">y</span>"#
        .repeat(4000);
    let html = format!("<p>{spans}</p>");
    let fragment = RichText::new().from_clipboard_html(&html);
    let leaves = fragment.children()[0].children();
    assert_eq!(leaves.len(), 8000);
    assert!(leaves.iter().step_by(2).all(|leaf| leaf.as_text().unwrap().marks.bold));
    assert!(leaves
        .iter()
        .skip(1)
        .step_by(2)
        .all(|leaf| leaf.as_text().unwrap().marks.italic));
}

#[test]
fn office_style_declarations_become_marks() {
    let html = concat!(
        r#"<p><span style="text-decoration: underline line-through">x</span>"#,
        r#"<span style="font-weight: bold !important">y</span></p>"#,
    );
    assert_eq!(
        roundtrip(html),
        "<p><u><strike>x</strike></u><strong>y</strong></p>"
    );
}

#[test]
fn stored_line_breaks_survive_reloading() {
    let fragment = to_tree("<p><b>a</b><br><b>b</b></p>");
    let stored = to_html(&fragment);
    assert_eq!(stored, "<p><strong>a</strong><br><strong>b</strong></p>");
    assert_eq!(to_tree(&stored), fragment);
    assert_eq!(to_html(&to_tree(&stored)), stored);
}

#[test]
fn entity_ids_with_reserved_characters_roundtrip() {
    let fragment = Fragment::new(vec![BlockNode::paragraph(vec![
        LinkNode::entity(EntityType::Report, "a b/c").into(),
    ])]);
    let html = to_html(&fragment);
    assert_eq!(
        html,
        r#"<p><a href="/reports/a%20b%2Fc">Report:a b/c</a></p>"#
    );
    assert_eq!(to_tree(&html), fragment);
}
