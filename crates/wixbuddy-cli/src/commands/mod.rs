//! CLI command definitions and dispatch.

pub mod inspect;
pub mod preview;
pub mod render;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use wixbuddy_common::config::WixbuddyConfig;
use wixbuddy_common::constants::BIN_NAME;

/// WixBuddy frontend: render and preview the landing page.
#[derive(Parser, Debug)]
#[command(name = BIN_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Path to a JSON configuration file.
    #[arg(long, global = true, env = "WIXBUDDY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the page to stdout or a file.
    Render(render::RenderArgs),
    /// Print a structural summary of the page.
    Inspect(inspect::InspectArgs),
    /// Preview the page in the terminal.
    Preview(preview::PreviewArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the command
/// fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Render(args) => render::execute(&args, &config),
        Command::Inspect(args) => inspect::execute(&args),
        Command::Preview(args) => preview::execute(&args, &config),
    }
}

/// Loads the configuration file, or the defaults when none is given.
fn load_config(path: Option<&Path>) -> anyhow::Result<WixbuddyConfig> {
    let Some(path) = path else {
        return Ok(WixbuddyConfig::default());
    };
    WixbuddyConfig::load(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use clap::CommandFactory;
    use wixbuddy_common::config::OutputFormat;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn render_accepts_format_and_output() {
        let cli = Cli::try_parse_from(["wixbuddy", "render", "--format", "json", "-o", "page.json"])
            .unwrap();
        match cli.command {
            Command::Render(args) => {
                assert_eq!(args.format, Some(OutputFormat::Json));
                assert_eq!(args.output.as_deref(), Some(Path::new("page.json")));
            }
            other => unreachable!("parsed {other:?}"),
        }
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["wixbuddy", "render", "--format", "pdf"]).is_err());
    }

    #[test]
    fn command_is_named_after_binary() {
        assert_eq!(Cli::command().get_name(), BIN_NAME);
    }

    #[test]
    fn zero_tick_is_rejected() {
        assert!(Cli::try_parse_from(["wixbuddy", "preview", "--tick-ms", "0"]).is_err());
    }

    #[test]
    fn positive_tick_is_accepted() {
        let cli = Cli::try_parse_from(["wixbuddy", "preview", "--tick-ms", "40"]).unwrap();
        match cli.command {
            Command::Preview(args) => assert_eq!(args.tick_ms, Some(40)),
            other => unreachable!("parsed {other:?}"),
        }
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli =
            Cli::try_parse_from(["wixbuddy", "inspect", "--verbose", "--config", "c.json"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config.as_deref(), Some(Path::new("c.json")));
    }

    #[test]
    fn missing_config_uses_defaults() {
        assert_eq!(load_config(None).unwrap(), WixbuddyConfig::default());
    }

    #[test]
    fn unreadable_config_names_the_path() {
        let err = load_config(Some(Path::new("/nonexistent/wixbuddy.json"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/wixbuddy.json"));
    }
}
