//! Site configuration module.
//!
//! Handles loading and validating the optional `config.toml` in the content
//! root. All keys have stock defaults, so a site with conventional layout
//! needs no config file at all.
//!
//! ## Config File Location
//!
//! ```text
//! content/
//! ├── config.toml              # Optional, overrides stock defaults
//! ├── index.md
//! └── posting/
//!     └── ...
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! posting_dir = "posting"          # Reserved directory name
//! template_file = "postMain.html"  # Post index template file name
//! base_url = ""                    # Prefix for reported site paths
//! ```
//!
//! Config files are sparse: override just the values you want. Unknown
//! keys are rejected to catch typos early.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have stock defaults. User config files need only specify the
/// values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory name that triggers the post-index build instead of
    /// recursive conversion.
    pub posting_dir: String,
    /// Template file name the post-index builder looks for inside the
    /// posting output root.
    pub template_file: String,
    /// Prefix for the site paths reported in the structure tree. Empty
    /// means paths start at `/`.
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            posting_dir: "posting".to_string(),
            template_file: "postMain.html".to_string(),
            base_url: String::new(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.posting_dir.is_empty() {
            return Err(ConfigError::Validation(
                "posting_dir must not be empty".into(),
            ));
        }
        if has_path_separator(&self.posting_dir) || matches!(self.posting_dir.as_str(), "." | "..")
        {
            return Err(ConfigError::Validation(
                "posting_dir must be a plain directory name".into(),
            ));
        }
        if self.template_file.is_empty() {
            return Err(ConfigError::Validation(
                "template_file must not be empty".into(),
            ));
        }
        if has_path_separator(&self.template_file) {
            return Err(ConfigError::Validation(
                "template_file must be a plain file name".into(),
            ));
        }
        if self.base_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "base_url must not end with '/'".into(),
            ));
        }
        Ok(())
    }
}

fn has_path_separator(name: &str) -> bool {
    name.contains('/') || name.contains('\\')
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Load config from `config.toml` in the given directory.
///
/// Returns stock defaults when no config file exists. Rejects unknown keys
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join("config.toml");
    let config: SiteConfig = if config_path.exists() {
        toml::from_str(&fs::read_to_string(&config_path)?)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and
/// explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# mdsite Configuration
# ====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file in the content root:
#   content/config.toml
#
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Post index
# ---------------------------------------------------------------------------
# Directory name (anywhere in the tree) that is not converted recursively.
# Its mirrored output directory is instead rebuilt as a post index page by
# placeholder substitution in the template file below.
posting_dir = "posting"

# Template file the post-index build expects inside the posting output
# directory. Its {{name}} placeholders are resolved against the .html
# fragments found there, and {{categories}} becomes the category bootstrap.
template_file = "postMain.html"

# ---------------------------------------------------------------------------
# Paths
# ---------------------------------------------------------------------------
# Prefix for the site paths shown in the build report, e.g. "/docs".
# Must not end with a slash. Empty means pages are reported from "/".
base_url = ""
"##
}
