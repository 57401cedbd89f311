//! `wixbuddy inspect` — Print a structural summary of the page.

use std::fmt::Write as _;

use clap::Args;
use serde::Serialize;
use wixbuddy_view::regions::{ActionVariant, PageRegions};
use wixbuddy_view::root_view;

/// Arguments for the `inspect` command.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Print the summary as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Element count, depth and regions of the page.
#[derive(Debug, Serialize)]
pub struct Summary {
    /// Number of element nodes.
    pub elements: usize,
    /// Maximum nesting depth.
    pub depth: usize,
    /// Title, subtitle, cards and actions.
    #[serde(flatten)]
    pub regions: PageRegions,
}

impl Summary {
    /// Summarizes the root view.
    ///
    /// # Errors
    ///
    /// Returns an error if the page lacks one of its regions.
    pub fn of_root_view() -> anyhow::Result<Self> {
        let page = root_view();
        Ok(Self {
            elements: page.element_count(),
            depth: page.depth(),
            regions: PageRegions::extract(&page)?,
        })
    }

    /// Human-readable form.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Title:     {}", self.regions.title);
        let _ = writeln!(out, "Subtitle:  {}", self.regions.subtitle);
        let _ = writeln!(out, "Elements:  {}", self.elements);
        let _ = writeln!(out, "Depth:     {}", self.depth);
        let _ = writeln!(out, "Cards ({}):", self.regions.cards.len());
        for card in &self.regions.cards {
            let _ = writeln!(out, "  - {}", card.title);
        }
        let _ = writeln!(out, "Actions ({}):", self.regions.actions.len());
        for action in &self.regions.actions {
            let variant = match action.variant {
                ActionVariant::Primary => "primary",
                ActionVariant::Outline => "outline",
            };
            let _ = writeln!(out, "  - {} [{variant}]", action.label);
        }
        out
    }
}

/// Executes the `inspect` command.
///
/// # Errors
///
/// Returns an error if the summary cannot be built, serialized or printed.
pub fn execute(args: &InspectArgs) -> anyhow::Result<()> {
    tracing::info!(json = args.json, "inspecting page");
    let summary = Summary::of_root_view()?;
    let text = if args.json {
        let mut json = serde_json::to_string_pretty(&summary)?;
        json.push('\n');
        json
    } else {
        summary.to_text()
    };
    crate::output::emit(&text, None)
}
