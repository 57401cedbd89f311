//! Page regions a non-HTML host lays out itself.
//!
//! The terminal preview and `inspect` do not walk the raw tree. They read
//! the title, subtitle, cards and actions out of it once, through
//! [`PageRegions::extract`].

use serde::Serialize;

use crate::error::{Result, ViewError};
use crate::markup::{Element, Node, Tag};

/// Class marking a card in the grid.
pub const CARD_CLASS: &str = "card";

/// Class marking the primary action button.
pub const PRIMARY_CLASS: &str = "btn-primary";

/// A card of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Card heading.
    pub title: String,
    /// Card body text.
    pub body: String,
}

/// Visual weight of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionVariant {
    /// Filled, emphasized button.
    Primary,
    /// Outlined button.
    Outline,
}

/// A button of the action row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    /// Button label.
    pub label: String,
    /// Visual weight.
    pub variant: ActionVariant,
}

impl Action {
    /// Activates the action.
    ///
    /// The page attaches no handler to its buttons, so this has no effect.
    #[allow(clippy::unused_self)]
    pub const fn activate(&self) {}
}

/// Title, subtitle, cards and actions of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRegions {
    /// Header title.
    pub title: String,
    /// Header subtitle.
    pub subtitle: String,
    /// Cards in grid order.
    pub cards: Vec<Card>,
    /// Actions in row order.
    pub actions: Vec<Action>,
}

impl PageRegions {
    /// Reads the regions out of a tree.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::MissingRegion`] if the header, title, subtitle
    /// or action buttons are absent, and [`ViewError::UnexpectedShape`] if a
    /// card lacks its heading or body.
    pub fn extract(page: &Node) -> Result<Self> {
        let header = page
            .find_by_tag(Tag::Header)
            .into_iter()
            .next()
            .ok_or(ViewError::MissingRegion { region: "header" })?;
        let title = first_child(header, Tag::H1)
            .ok_or(ViewError::MissingRegion { region: "title" })?
            .text_content();
        let subtitle = first_child(header, Tag::P)
            .ok_or(ViewError::MissingRegion { region: "subtitle" })?
            .text_content();

        let cards = page
            .find_by_class(CARD_CLASS)
            .into_iter()
            .enumerate()
            .map(|(index, card)| read_card(index, card))
            .collect::<Result<Vec<_>>>()?;

        let actions: Vec<Action> = page
            .find_by_tag(Tag::Button)
            .into_iter()
            .map(|button| Action {
                label: button.text_content(),
                variant: if button.has_class(PRIMARY_CLASS) {
                    ActionVariant::Primary
                } else {
                    ActionVariant::Outline
                },
            })
            .collect();
        if actions.is_empty() {
            return Err(ViewError::MissingRegion { region: "actions" });
        }

        tracing::debug!(cards = cards.len(), actions = actions.len(), "extracted page regions");
        Ok(Self {
            title,
            subtitle,
            cards,
            actions,
        })
    }
}

fn first_child(parent: &Element, tag: Tag) -> Option<&Element> {
    parent.child_elements().find(|e| e.tag == tag)
}

fn read_card(index: usize, card: &Element) -> Result<Card> {
    let title = first_child(card, Tag::H3).ok_or_else(|| ViewError::UnexpectedShape {
        message: format!("card {index} has no heading"),
    })?;
    let body = first_child(card, Tag::P).ok_or_else(|| ViewError::UnexpectedShape {
        message: format!("card {index} has no body"),
    })?;
    Ok(Card {
        title: title.text_content(),
        body: body.text_content(),
    })
}
