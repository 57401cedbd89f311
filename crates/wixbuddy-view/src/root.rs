//! The WixBuddy landing page.
//!
//! [`RootView`] is the page as a dioxus component, rendered to HTML by
//! [`crate::html`]. [`root_view`] builds the same page as a typed tree for
//! hosts that lay it out themselves. Both read the literals below, take no
//! input, touch no clock, file or network, and produce equal output on every
//! call.

use dioxus::prelude::*;

use crate::markup::{Element as Markup, Node, Tag};

/// Page title shown in the header.
pub const TITLE: &str = "WixBuddy Frontend";

/// Tagline shown under the title.
pub const SUBTITLE: &str = "Your AI-Powered Partner for Compliance, Innovation, and Growth";

/// Card headings and bodies, in grid order.
pub const CARDS: [(&str, &str); 3] = [
    (
        "Project Setup Complete",
        "React + TypeScript + Vite foundation is ready with Tailwind CSS configured.",
    ),
    (
        "Dependencies Installed",
        "React Router, Axios, React Hook Form, Zod, and React Query are ready to use.",
    ),
    (
        "Ready for Development",
        "Project structure created with components, pages, hooks, and services folders.",
    ),
];

/// Label of the primary action.
pub const GET_STARTED: &str = "Get Started";

/// Label of the secondary action.
pub const VIEW_DOCUMENTATION: &str = "View Documentation";

const PAGE_CLASS: &str = "min-h-screen bg-gray-900 text-white";
const CONTAINER_CLASS: &str = "container mx-auto px-4 py-8";
const HEADER_CLASS: &str = "text-center mb-8";
const TITLE_CLASS: &str = "text-4xl font-bold text-teal-400 mb-4";
const SUBTITLE_CLASS: &str = "text-gray-300 text-lg";
const GRID_CLASS: &str = "grid grid-cols-1 md:grid-cols-3 gap-6 max-w-4xl mx-auto";
const CARD_TITLE_CLASS: &str = "text-xl font-semibold text-teal-400 mb-3";
const CARD_BODY_CLASS: &str = "text-gray-300";
const ACTIONS_CLASS: &str = "text-center mt-8";
const PRIMARY_BUTTON_CLASS: &str = "btn-primary mr-4";
const OUTLINE_BUTTON_CLASS: &str = "btn-outline";

/// The landing page. The buttons carry no handlers.
#[component]
pub fn RootView() -> Element {
    rsx! {
        div { class: PAGE_CLASS,
            div { class: CONTAINER_CLASS,
                header { class: HEADER_CLASS,
                    h1 { class: TITLE_CLASS, "{TITLE}" }
                    p { class: SUBTITLE_CLASS, "{SUBTITLE}" }
                }
                div { class: GRID_CLASS,
                    for (title, body) in CARDS {
                        div { key: "{title}", class: "card",
                            h3 { class: CARD_TITLE_CLASS, "{title}" }
                            p { class: CARD_BODY_CLASS, "{body}" }
                        }
                    }
                }
                div { class: ACTIONS_CLASS,
                    button { class: PRIMARY_BUTTON_CLASS, "{GET_STARTED}" }
                    button { class: OUTLINE_BUTTON_CLASS, "{VIEW_DOCUMENTATION}" }
                }
            }
        }
    }
}

/// Builds the page as a typed tree, mirroring [`RootView`].
#[must_use]
pub fn root_view() -> Node {
    let grid = CARDS.iter().fold(
        Markup::new(Tag::Div).class(GRID_CLASS),
        |grid, (title, body)| {
            grid.child(
                Markup::new(Tag::Div)
                    .class("card")
                    .child(Markup::new(Tag::H3).class(CARD_TITLE_CLASS).text(*title))
                    .child(Markup::new(Tag::P).class(CARD_BODY_CLASS).text(*body)),
            )
        },
    );

    Markup::new(Tag::Div)
        .class(PAGE_CLASS)
        .child(
            Markup::new(Tag::Div)
                .class(CONTAINER_CLASS)
                .child(
                    Markup::new(Tag::Header)
                        .class(HEADER_CLASS)
                        .child(Markup::new(Tag::H1).class(TITLE_CLASS).text(TITLE))
                        .child(Markup::new(Tag::P).class(SUBTITLE_CLASS).text(SUBTITLE)),
                )
                .child(grid)
                .child(
                    Markup::new(Tag::Div)
                        .class(ACTIONS_CLASS)
                        .child(
                            Markup::new(Tag::Button)
                                .class(PRIMARY_BUTTON_CLASS)
                                .text(GET_STARTED),
                        )
                        .child(
                            Markup::new(Tag::Button)
                                .class(OUTLINE_BUTTON_CLASS)
                                .text(VIEW_DOCUMENTATION),
                        ),
                ),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_appears_once() {
        let page = root_view();
        let titles = page.find_by_tag(Tag::H1);
        assert_eq!(titles.len(), 1);
        assert_eq!(titles[0].text_content(), TITLE);
    }

    #[test]
    fn header_holds_title_and_subtitle_only() {
        let page = root_view();
        let headers = page.find_by_tag(Tag::Header);
        assert_eq!(headers.len(), 1);
        let parts: Vec<_> = headers[0].child_elements().collect();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].tag, Tag::H1);
        assert_eq!(parts[1].tag, Tag::P);
        assert_eq!(parts[1].text_content(), SUBTITLE);
    }

    #[test]
    fn grid_has_three_non_empty_cards() {
        let page = root_view();
        let cards = page.find_by_class("card");
        assert_eq!(cards.len(), 3);
        for (card, (title, body)) in cards.iter().zip(CARDS) {
            let parts: Vec<_> = card.child_elements().collect();
            assert_eq!(parts.len(), 2);
            assert_eq!(parts[0].tag, Tag::H3);
            assert_eq!(parts[0].text_content(), title);
            assert_eq!(parts[1].text_content(), body);
            assert!(!title.is_empty() && !body.is_empty());
        }
    }

    #[test]
    fn action_row_has_two_labelled_buttons() {
        let page = root_view();
        let labels: Vec<_> = page
            .find_by_tag(Tag::Button)
            .into_iter()
            .map(Markup::text_content)
            .collect();
        assert_eq!(labels, vec![GET_STARTED, VIEW_DOCUMENTATION]);
    }

    #[test]
    fn buttons_are_the_only_interactive_elements() {
        let page = root_view();
        let interactive = page.elements().filter(|e| e.tag.is_interactive()).count();
        assert_eq!(interactive, 2);
    }

    #[test]
    fn repeated_calls_build_equal_trees() {
        let first = root_view();
        for _ in 0..16 {
            assert_eq!(root_view(), first);
        }
    }

    #[test]
    fn layout_nesting_is_fixed() {
        let page = root_view();
        // container, inner container, header, h1, p, grid, 3 x (card, h3, p), actions, 2 buttons
        assert_eq!(page.element_count(), 18);
        // div > div > div.grid > div.card > h3 > text
        assert_eq!(page.depth(), 6);
    }
}
