//! `[base]` section configuration.
//!
//! Contains basic site information like title, author, description, etc.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in site.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "Hilal Technologic"
/// description = "Articles about web development"
/// author = "Hilal Technologic Team"
/// url = "https://hilaltechnologic.info"
/// default_image = "https://hilaltechnologic.info/images/og-default.jpg"
/// keywords = ["astro", "tailwind css"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title, used as the suffix of every page title.
    pub title: String,

    /// Site description for SEO meta tags.
    pub description: String,

    /// Fallback author for pages that do not name one.
    #[serde(default = "defaults::base::author")]
    #[educe(Default = defaults::base::author())]
    pub author: String,

    /// Absolute base URL without trailing slash.
    /// Every derived URL is formed by appending a `/`-prefixed path to it.
    #[serde(default)]
    pub url: String,

    /// Language code emitted as `inLanguage` in JSON-LD.
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,

    /// Locale code (e.g., "id_ID") for Open Graph.
    #[serde(default = "defaults::base::locale")]
    #[educe(Default = defaults::base::locale())]
    pub locale: String,

    /// Absolute URL of the image used when a page has none.
    #[serde(default)]
    pub default_image: String,

    #[serde(default = "defaults::base::favicon")]
    #[educe(Default = defaults::base::favicon())]
    pub favicon: String,

    /// Site-wide keywords, prepended to every page's keyword list.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Page title that marks the home page.
    /// A page with this title gets `"<title> - <description>"` instead of `"<page> | <title>"`.
    #[serde(default = "defaults::base::home_title")]
    #[educe(Default = defaults::base::home_title())]
    pub home_title: String,
}
