//! `[build]` and `[rss]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in site.toml - input and output locations.
///
/// # Example
/// ```toml
/// [build]
/// content = "content/blog"   # Markdown posts with `+++` front matter
/// output = "dist"            # Where meta.json files and the feed go
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Blog collection directory.
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,
}

/// `[rss]` section - feed channel settings.
///
/// # Example
/// ```toml
/// [rss]
/// title = "Hilal Technologic RSS Feed"
/// description = "Update terbaru dari Hilal Technologic"
/// language = "id-id"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RssConfig {
    /// Enable rss feed generation.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Channel title. Falls back to `[base].title` when empty.
    #[serde(default)]
    pub title: String,

    /// Channel description. Falls back to `[base].description` when empty.
    #[serde(default)]
    pub description: String,

    /// Channel `<language>` value.
    #[serde(default = "defaults::rss::language")]
    #[educe(Default = defaults::rss::language())]
    pub language: String,

    /// Output path relative to `[build].output`.
    #[serde(default = "defaults::rss::path")]
    #[educe(Default = defaults::rss::path())]
    pub path: PathBuf,
}
