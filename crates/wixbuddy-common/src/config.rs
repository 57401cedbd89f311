//! Configuration model for the WixBuddy hosts.
//!
//! The page itself takes no configuration. These settings only shape how
//! the hosts wrap and present it: the HTML document shell, the default
//! output format of the CLI, and the terminal preview.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{Result, WixbuddyError};

/// Root configuration, loaded from an optional JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WixbuddyConfig {
    /// HTML document shell settings.
    pub document: DocumentOptions,
    /// Format used by `render` when none is given on the command line.
    pub default_format: OutputFormat,
    /// Terminal preview settings.
    pub preview: PreviewConfig,
}

impl WixbuddyConfig {
    /// Loads and validates a configuration file.
    ///
    /// Fields absent from the file keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// holds an invalid value.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading configuration");
        let content = std::fs::read_to_string(path).map_err(|source| WixbuddyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`WixbuddyError::Config`] describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if self.preview.tick_ms == 0 {
            return Err(WixbuddyError::Config {
                message: "preview.tick_ms must be greater than zero".into(),
            });
        }
        if self.document.mount_id.trim().is_empty() {
            return Err(WixbuddyError::Config {
                message: "document.mount_id must not be empty".into(),
            });
        }
        if self.document.mount_id.chars().any(char::is_whitespace) {
            return Err(WixbuddyError::Config {
                message: format!(
                    "document.mount_id must not contain whitespace: \"{}\"",
                    self.document.mount_id
                ),
            });
        }
        Ok(())
    }
}

/// Settings for the HTML document that wraps the rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentOptions {
    /// Document `<title>`.
    pub title: String,
    /// Value of the `lang` attribute on `<html>`.
    pub lang: String,
    /// Id of the `<div>` the page is mounted into.
    pub mount_id: String,
    /// Stylesheet URLs linked from `<head>`, in order.
    pub stylesheets: Vec<String>,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            title: constants::DEFAULT_DOCUMENT_TITLE.into(),
            lang: constants::DEFAULT_DOCUMENT_LANG.into(),
            mount_id: constants::DEFAULT_MOUNT_ID.into(),
            stylesheets: Vec::new(),
        }
    }
}

/// Terminal preview settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Event poll interval in milliseconds.
    pub tick_ms: u64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            tick_ms: constants::DEFAULT_TICK_MS,
        }
    }
}

/// Output formats supported by `render`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bare HTML fragment of the page.
    Html,
    /// Complete HTML document with the page mounted in its body.
    #[default]
    Document,
    /// JSON serialization of the markup tree.
    Json,
    /// Indented plain-text outline of the markup tree.
    Outline,
}

impl OutputFormat {
    /// Every supported format, in display order.
    pub const ALL: [Self; 4] = [Self::Html, Self::Document, Self::Json, Self::Outline];

    /// Returns the lowercase name used on the command line and in config.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Document => "document",
            Self::Json => "json",
            Self::Outline => "outline",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = WixbuddyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| WixbuddyError::Config {
                message: format!(
                    "unknown output format \"{s}\" (expected one of: html, document, json, outline)"
                ),
            })
    }
}
