// Copyright (c) 2026 ANET Contributors
//
// SPDX-License-Identifier: AGPL-3.0-only
// Please see README.md in the repository root for full details.

//! Tree → HTML.
//!
//! Output is a pure function of the tree and the [`LinkCodec`] used for
//! entity hrefs.

use entity_links::{LinkCodec, LinkTarget};
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::dom::nodes::{
    BlockKind, BlockNode, DomNode, Fragment, LinkNode, TextNode,
};

pub trait ToHtml {
    fn fmt_html(&self, buf: &mut String, codec: &LinkCodec);

    /// HTML with entity links written as site-relative routes.
    fn to_html(&self) -> String {
        self.to_html_with(&LinkCodec::default())
    }

    fn to_html_with(&self, codec: &LinkCodec) -> String {
        let mut buf = String::new();
        self.fmt_html(&mut buf, codec);
        buf
    }
}

impl ToHtml for Fragment {
    fn fmt_html(&self, buf: &mut String, codec: &LinkCodec) {
        for block in self.children() {
            block.fmt_html(buf, codec);
        }
    }
}

impl ToHtml for DomNode {
    fn fmt_html(&self, buf: &mut String, codec: &LinkCodec) {
        match self {
            DomNode::Text(text) => text.fmt_html(buf, codec),
            DomNode::Link(link) => link.fmt_html(buf, codec),
            DomNode::Block(block) => block.fmt_html(buf, codec),
        }
    }
}

impl ToHtml for TextNode {
    fn fmt_html(&self, buf: &mut String, _codec: &LinkCodec) {
        for mark in self.marks.iter() {
            push_open_tag(buf, mark.html_tag());
        }
        // A lone newline is what `<br>` parses to. Written raw it would be
        // collapsed away as whitespace between tags on the next parse.
        if self.text == "\n" {
            buf.push_str("<br>");
        } else {
            buf.push_str(&encode_text(&self.text));
        }
        for mark in self.marks.iter().rev() {
            push_close_tag(buf, mark.html_tag());
        }
    }
}

impl ToHtml for BlockNode {
    fn fmt_html(&self, buf: &mut String, codec: &LinkCodec) {
        if let BlockKind::Image { url } = self.kind() {
            buf.push_str("<img src=\"");
            buf.push_str(&encode_double_quoted_attribute(url));
            buf.push_str("\">");
            return;
        }
        let tag = self.kind().html_tag();
        push_open_tag(buf, tag);
        for child in self.children() {
            child.fmt_html(buf, codec);
        }
        push_close_tag(buf, tag);
    }
}

impl ToHtml for LinkNode {
    fn fmt_html(&self, buf: &mut String, codec: &LinkCodec) {
        buf.push_str("<a href=\"");
        buf.push_str(&encode_double_quoted_attribute(
            &codec.encode(self.target()),
        ));
        buf.push_str("\">");
        match self.target() {
            // The label of an entity link is rendered from the live entity,
            // so only the reference is stored.
            LinkTarget::Entity {
                entity_type,
                entity_id,
            } => {
                buf.push_str(&encode_text(&format!(
                    "{entity_type}:{entity_id}"
                )));
            }
            LinkTarget::External { .. } => {
                buf.push_str(&encode_text(&self.label()));
            }
        }
        buf.push_str("</a>");
    }
}

fn push_open_tag(buf: &mut String, tag: &str) {
    buf.push('<');
    buf.push_str(tag);
    buf.push('>');
}

fn push_close_tag(buf: &mut String, tag: &str) {
    buf.push_str("</");
    buf.push_str(tag);
    buf.push('>');
}
