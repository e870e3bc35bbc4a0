//! Blog content collection.
//!
//! A [`Post`] is one validated entry of the `blog` collection: a slug plus
//! the [`ContentEntry`] parsed from its front matter.
//!
//! # Front matter
//!
//! ```toml
//! +++
//! title = "Belajar Astro"
//! description = "Pengenalan Astro"
//! publishedDate = 2024-01-15
//! modifiedDate = "2024-02-01T08:00:00Z"
//! author = { name = "Hilal", url = "https://hilaltechnologic.info/author/admin" }
//! tags = ["astro", "web development"]
//! image = "/images/astro.jpg"
//! imageAlt = "Astro logo"
//! featured = true
//! readingTime = "5 min"
//! +++
//! ```
//!
//! Derivers accept any entry, drafts included. Use [`published`] for
//! public listings.

mod error;
mod loader;

pub use error::ContentError;
pub use loader::{load_posts, parse_post};

use crate::utils::date::parse_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, de::Error as _};

/// Front matter of one blog post.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContentEntry {
    pub title: String,
    pub description: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub published_date: DateTime<Utc>,
    #[serde(default, deserialize_with = "deserialize_opt_date")]
    pub modified_date: Option<DateTime<Utc>>,
    pub author: Author,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_alt: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub reading_time: Option<String>,
}

impl ContentEntry {
    /// Last modification date, falling back to the publish date.
    pub fn modified(&self) -> DateTime<Utc> {
        self.modified_date.unwrap_or(self.published_date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// One entry of the blog collection.
#[derive(Debug, Clone)]
pub struct Post {
    /// Collection-relative slug, e.g. `belajar-astro` or `2024/intro`.
    pub slug: String,
    pub entry: ContentEntry,
}

// ============================================================================
// Listings
// ============================================================================

/// Non-draft posts, newest first.
///
/// The sort is stable: posts sharing a publish date keep their input order.
pub fn published(posts: &[Post]) -> Vec<&Post> {
    let mut list: Vec<&Post> = posts.iter().filter(|p| !p.entry.draft).collect();
    list.sort_by(|a, b| b.entry.published_date.cmp(&a.entry.published_date));
    list
}

/// Published posts flagged `featured`, newest first.
pub fn featured(posts: &[Post]) -> Vec<&Post> {
    published(posts)
        .into_iter()
        .filter(|p| p.entry.featured)
        .collect()
}

// ============================================================================
// Date Deserialization
// ============================================================================

/// Accept both TOML datetimes (`2024-01-15`) and strings (`"2024-01-15"`).
fn deserialize_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match toml::Value::deserialize(deserializer)? {
        toml::Value::String(s) => s,
        toml::Value::Datetime(dt) => dt.to_string(),
        other => {
            return Err(D::Error::custom(format!(
                "expected a date, found {}",
                other.type_str()
            )));
        }
    };
    parse_datetime(&raw).ok_or_else(|| D::Error::custom(format!("invalid date `{raw}`")))
}

fn deserialize_opt_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_date(deserializer).map(Some)
}

// ============================================================================
// Tests
// ============================================================================
