//! `wixbuddy preview` — Preview the page in the terminal.

use clap::Args;
use wixbuddy_common::config::{PreviewConfig, WixbuddyConfig};
use wixbuddy_view::root_view;

/// Arguments for the `preview` command.
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Event poll interval in milliseconds. Overrides the configured value.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: Option<u64>,
}

/// Executes the `preview` command.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to.
pub fn execute(args: &PreviewArgs, config: &WixbuddyConfig) -> anyhow::Result<()> {
    let preview = preview_config(args, config);
    tracing::info!(tick_ms = preview.tick_ms, "opening preview");
    wixbuddy_tui::run(&root_view(), &preview)?;
    Ok(())
}

/// The configured preview settings with command-line overrides applied.
fn preview_config(args: &PreviewArgs, config: &WixbuddyConfig) -> PreviewConfig {
    let mut preview = config.preview.clone();
    if let Some(tick_ms) = args.tick_ms {
        preview.tick_ms = tick_ms;
    }
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_tick(tick_ms: u64) -> WixbuddyConfig {
        WixbuddyConfig {
            preview: PreviewConfig { tick_ms },
            ..WixbuddyConfig::default()
        }
    }

    #[test]
    fn tick_flag_overrides_config() {
        let args = PreviewArgs { tick_ms: Some(40) };
        assert_eq!(preview_config(&args, &config_with_tick(500)).tick_ms, 40);
    }

    #[test]
    fn config_tick_is_kept_without_flag() {
        let args = PreviewArgs { tick_ms: None };
        assert_eq!(preview_config(&args, &config_with_tick(500)).tick_ms, 500);
    }
}
