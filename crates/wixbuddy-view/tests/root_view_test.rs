//! End-to-end tests for the root view and its serializers.
//!
//! These render the page once through every host format and check the
//! counts and literals a visitor sees, then check that repeated renders
//! are byte-identical.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use wixbuddy_common::config::DocumentOptions;
use wixbuddy_view::html::{render_document, render_fragment};
use wixbuddy_view::outline::render_outline;
use wixbuddy_view::regions::PageRegions;
use wixbuddy_view::{Node, Tag, root_view};

// ── Single render ────────────────────────────────────────────────────

#[test]
fn render_once_exposes_expected_nodes() {
    let page = root_view();

    let titles = page.find_by_tag(Tag::H1);
    assert_eq!(titles.len(), 1);
    assert_eq!(titles[0].text_content(), "WixBuddy Frontend");

    let header = page.find_by_tag(Tag::Header);
    assert_eq!(header.len(), 1);
    let subtitles: Vec<_> = header[0]
        .child_elements()
        .filter(|e| e.tag == Tag::P)
        .collect();
    assert_eq!(subtitles.len(), 1);
    assert_eq!(
        subtitles[0].text_content(),
        "Your AI-Powered Partner for Compliance, Innovation, and Growth"
    );

    let cards = page.find_by_class("card");
    assert_eq!(cards.len(), 3);
    for card in &cards {
        let heading = card.child_elements().find(|e| e.tag == Tag::H3).expect("heading");
        let body = card.child_elements().find(|e| e.tag == Tag::P).expect("body");
        assert!(!heading.text_content().is_empty());
        assert!(!body.text_content().is_empty());
    }

    let buttons: Vec<_> = page
        .find_by_tag(Tag::Button)
        .into_iter()
        .map(|b| b.text_content())
        .collect();
    assert_eq!(buttons, vec!["Get Started", "View Documentation"]);
}

#[test]
fn grid_is_between_header_and_actions() {
    let page = root_view();
    let inner = page
        .as_element()
        .and_then(|outer| outer.child_elements().next())
        .expect("inner container");
    let sections: Vec<_> = inner.child_elements().map(|e| e.tag).collect();
    assert_eq!(sections, vec![Tag::Header, Tag::Div, Tag::Div]);

    let grid = inner.child_elements().nth(1).expect("grid");
    assert!(grid.has_class("grid"));
    assert!(grid.has_class("md:grid-cols-3"));
    assert_eq!(grid.child_elements().count(), 3);
}

#[test]
fn html_fragment_contains_copy_in_order() {
    let html = render_fragment();
    let positions: Vec<_> = [
        "WixBuddy Frontend",
        "Project Setup Complete",
        "Dependencies Installed",
        "Ready for Development",
        "Get Started",
        "View Documentation",
    ]
    .iter()
    .map(|needle| html.find(needle).expect(needle))
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(html.matches("<button").count(), 2);
    assert_eq!(html.matches("class=\"card\"").count(), 3);
    assert!(html.starts_with("<div class=\"min-h-screen bg-gray-900 text-white\">"));
}

#[test]
fn html_buttons_have_no_handlers() {
    let html = render_fragment();
    assert!(!html.contains("onclick"));
    assert!(!html.contains(" id="));
}

#[test]
fn document_mounts_page_in_root() {
    let doc = render_document(&DocumentOptions::default());
    assert!(doc.contains("<title>WixBuddy Frontend</title>"));
    assert!(doc.contains("<div id=\"root\"><div class=\"min-h-screen"));
}

#[test]
fn html_and_tree_carry_the_same_text() {
    assert_eq!(strip_tags(&render_fragment()), root_view().text_content());
}

#[test]
fn html_and_tree_carry_the_same_classes() {
    let html = render_fragment();
    let from_html: Vec<_> = html
        .split("class=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect();
    let page = root_view();
    let from_tree: Vec<_> = page.elements().map(|e| e.classes().join(" ")).collect();
    assert_eq!(from_html, from_tree);
}

#[test]
fn json_with_loose_class_lists_reads_back_normalized() {
    let node: Node = serde_json::from_str(
        r#"{"element":{"tag":"div","classes":["card  wide",""],"children":[{"text":"x"}]}}"#,
    )
    .unwrap();
    assert_eq!(render_outline(&node), "div.card.wide\n  \"x\"\n");
    assert_eq!(node.find_by_class("wide").len(), 1);
}

// ── Idempotence ──────────────────────────────────────────────────────

#[test]
fn repeated_renders_are_byte_identical() {
    let html = render_fragment();
    let json = serde_json::to_string(&root_view()).unwrap();
    let outline = render_outline(&root_view());

    for _ in 0..32 {
        assert_eq!(render_fragment(), html);
        assert_eq!(serde_json::to_string(&root_view()).unwrap(), json);
        assert_eq!(render_outline(&root_view()), outline);
    }
}

#[test]
fn json_dump_restores_the_same_tree() {
    let json = serde_json::to_string_pretty(&root_view()).unwrap();
    let restored: Node = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, root_view());
}

#[test]
fn outline_starts_with_page_container() {
    let outline = render_outline(&root_view());
    let mut lines = outline.lines();
    assert_eq!(lines.next(), Some("div.min-h-screen.bg-gray-900.text-white"));
    assert_eq!(lines.next(), Some("  div.container.mx-auto.px-4.py-8"));
    assert_eq!(lines.next(), Some("    header.text-center.mb-8"));
    assert_eq!(outline.lines().count(), page_node_count());
}

#[test]
fn regions_match_tree_queries() {
    let page = root_view();
    let regions = PageRegions::extract(&page).unwrap();
    assert_eq!(regions.cards.len(), page.find_by_class("card").len());
    assert_eq!(regions.actions.len(), page.find_by_tag(Tag::Button).len());
}

fn strip_tags(html: &str) -> String {
    let mut text = String::new();
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text
}

fn page_node_count() -> usize {
    root_view().descendants().count()
}
