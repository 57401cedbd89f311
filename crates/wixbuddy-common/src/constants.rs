//! Workspace-wide constants and defaults.

/// Binary name for the CLI.
pub const BIN_NAME: &str = "wixbuddy";

/// Default `<title>` of the rendered HTML document.
pub const DEFAULT_DOCUMENT_TITLE: &str = "WixBuddy Frontend";

/// Default `lang` attribute of the rendered HTML document.
pub const DEFAULT_DOCUMENT_LANG: &str = "en";

/// Id of the element the page is mounted into.
pub const DEFAULT_MOUNT_ID: &str = "root";

/// Default event poll interval of the terminal preview, in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 250;

/// Terminal width (in columns) from which the card grid switches from a
/// single column to three columns.
pub const WIDE_LAYOUT_MIN_WIDTH: u16 = 96;
