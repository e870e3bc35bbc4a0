//! Site configuration management for `site.toml`.
//!
//! The loaded [`SiteConfig`] is the site identity every deriver reads from.
//! It is built once at startup and handed around by reference; nothing
//! mutates it after [`SiteConfig::validate`] succeeds.
//!
//! # Sections
//!
//! | Section          | Purpose                                         |
//! |------------------|-------------------------------------------------|
//! | `[base]`         | Site metadata (title, description, url, image)  |
//! | `[social]`       | Social handles and contact email                |
//! | `[organization]` | Publisher identity for schema.org               |
//! | `[analytics]`    | Analytics and verification ids                  |
//! | `[build]`        | Content and output directories                  |
//! | `[rss]`          | Feed channel settings                           |
//! | `[ads]`          | Ad providers and display rules                  |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "Hilal Technologic"
//! description = "Blog teknologi"
//! url = "https://hilaltechnologic.info"
//! default_image = "https://hilaltechnologic.info/images/og-default.jpg"
//!
//! [social]
//! twitter = "@hilaltechnologi"
//! email = "hilal@technologist.com"
//!
//! [organization]
//! name = "Hilal Technologic"
//! url = "https://hilaltechnologic.info"
//! logo = "https://hilaltechnologic.info/images/logo.png"
//! ```

mod ads;
mod base;
mod build;
pub mod defaults;
mod error;
mod identity;

pub use ads::{AdSettings, AdsConfig, CustomAd, SlotMap};
pub use base::BaseConfig;
pub use build::{BuildConfig, RssConfig};
pub use error::ConfigError;
pub use identity::{AnalyticsConfig, Founder, OrganizationConfig, SocialConfig};

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Social handles
    #[serde(default)]
    pub social: SocialConfig,

    /// Publishing organization
    #[serde(default)]
    pub organization: OrganizationConfig,

    #[serde(default)]
    pub analytics: AnalyticsConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Feed settings
    #[serde(default)]
    pub rss: RssConfig,

    /// Ad providers
    #[serde(default)]
    pub ads: AdsConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config: SiteConfig = toml::from_str(&content)
            .map_err(|err| ConfigError::Parse(path.to_path_buf(), err))?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Absolute path of the rss feed inside the output directory.
    pub fn feed_path(&self) -> PathBuf {
        self.build.output.join(&self.rss.path)
    }

    /// Channel title, falling back to the site title.
    pub fn feed_title(&self) -> &str {
        non_empty_or(&self.rss.title, &self.base.title)
    }

    /// Channel description, falling back to the site description.
    pub fn feed_description(&self) -> &str {
        non_empty_or(&self.rss.description, &self.base.description)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());

        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());
        self.update_path_with_root(&root, &cli.config);

        if let Commands::Build { rss } = &cli.command {
            Self::update_option(&mut self.rss.enable, rss.as_ref());
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path, config_file: &Path) {
        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(config_file));
        self.build.content = Self::normalize_path(&root.join(&self.build.content));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate the invariants derivers rely on.
    ///
    /// Every derived URL is `base.url` + path, so the base must be
    /// absolute and must not end with `/`.
    pub fn validate(&self) -> Result<()> {
        let url = &self.base.url;

        if url.is_empty() {
            bail!(ConfigError::Validation("[base.url] is required".into()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }
        if url.ends_with('/') {
            bail!(ConfigError::Validation(
                "[base.url] must not end with a trailing slash".into()
            ));
        }
        if self.base.default_image.is_empty() {
            bail!(ConfigError::Validation(
                "[base.default_image] is required".into()
            ));
        }

        Ok(())
    }
}

#[inline]
fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

// ============================================================================
// Tests
// ============================================================================
