//! # wixbuddy-view
//!
//! The WixBuddy landing page and the tree it is written in.
//!
//! - **Markup**: a typed tree of elements and text with read-only queries.
//! - **Root**: [`root::RootView`], the page as a dioxus component, and
//!   [`root::root_view`], the same page as a typed tree.
//! - **Html**: fragment and full-document rendering through `dioxus-ssr`.
//! - **Outline**: indented plain-text dump for inspection.
//! - **Regions**: title, subtitle, cards and actions for hosts that lay the
//!   page out themselves.

pub mod error;
pub mod html;
pub mod markup;
pub mod outline;
pub mod regions;
pub mod root;

pub use markup::{Element, Node, Tag};
pub use root::{RootView, root_view};
