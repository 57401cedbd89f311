//! `wixbuddy render` — Render the page to stdout or a file.

use std::path::PathBuf;

use clap::Args;
use wixbuddy_common::config::{DocumentOptions, OutputFormat, WixbuddyConfig};
use wixbuddy_view::html::{render_document, render_fragment};
use wixbuddy_view::outline::render_outline;
use wixbuddy_view::root_view;

/// Arguments for the `render` command.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Output format: html, document, json or outline. Defaults to the
    /// configured format.
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write output to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Executes the `render` command.
///
/// # Errors
///
/// Returns an error if serialization or writing the output fails.
pub fn execute(args: &RenderArgs, config: &WixbuddyConfig) -> anyhow::Result<()> {
    let format = args.format.unwrap_or(config.default_format);
    tracing::info!(%format, "rendering page");
    let rendered = render(format, &config.document)?;
    crate::output::emit(&rendered, args.output.as_deref())
}

/// Renders the page in `format`, ending with a newline.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(format: OutputFormat, document: &DocumentOptions) -> anyhow::Result<String> {
    let page = root_view();
    let mut out = match format {
        OutputFormat::Html => render_fragment(),
        OutputFormat::Document => return Ok(render_document(document)),
        OutputFormat::Json => serde_json::to_string_pretty(&page)?,
        OutputFormat::Outline => return Ok(render_outline(&page)),
    };
    out.push('\n');
    Ok(out)
}
