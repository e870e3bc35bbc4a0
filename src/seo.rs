//! SEO meta tag derivation.
//!
//! Turns page-level metadata ([`SeoProps`]) plus the site identity into a
//! complete [`SeoTags`] bundle: composed title, canonical URL, robots
//! directive, keyword list, Open Graph and Twitter Card blocks.
//!
//! ```text
//! SeoProps ──┐
//!            ├── generate_seo_tags() ──► SeoTags { title, canonical, robots, keywords,
//! SiteConfig ┘                                     open_graph, twitter }
//! ```
//!
//! Derivation is total: every optional input has a fallback, and empty
//! strings count as absent.

use crate::{
    config::SiteConfig,
    content::Post,
    utils::{
        date::to_iso,
        url::{absolutize, post_url, site_url},
    },
};
use rustc_hash::FxHashSet;
use serde::Serialize;

/// Twitter card variant used for every page.
pub const TWITTER_CARD: &str = "summary_large_image";

// ============================================================================
// Input
// ============================================================================

/// Open Graph `og:type`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    #[default]
    Website,
    Article,
    Blog,
}

/// Page-level SEO input.
///
/// Build one with [`page_seo`] or [`article_seo`] and override fields with
/// struct update syntax:
///
/// ```ignore
/// let props = SeoProps { noindex: true, ..page_seo("Cari", "Pencarian", "/search/", &config) };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeoProps {
    pub title: String,
    pub description: String,
    /// Explicit canonical URL; wins over the current page URL.
    pub canonical: Option<String>,
    /// Absolute URL or site-relative path.
    pub image: Option<String>,
    pub image_alt: Option<String>,
    pub page_type: PageType,
    pub published_time: Option<String>,
    pub modified_time: Option<String>,
    pub author: Option<String>,
    pub tags: Vec<String>,
    pub keywords: Vec<String>,
    pub noindex: bool,
    pub nofollow: bool,
}

impl SeoProps {
    /// Article props for a blog post, filled from its front matter.
    pub fn for_post(post: &Post, config: &SiteConfig) -> Self {
        let entry = &post.entry;
        Self {
            image: entry.image.clone(),
            image_alt: entry.image_alt.clone(),
            published_time: Some(to_iso(&entry.published_date)),
            modified_time: Some(to_iso(&entry.modified())),
            author: Some(entry.author.name.clone()),
            tags: entry.tags.clone(),
            ..article_seo(&entry.title, &entry.description, &post.slug, config)
        }
    }
}

// ============================================================================
// Output
// ============================================================================

/// Derived meta tag values for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoTags {
    pub title: String,
    pub description: String,
    pub canonical: String,
    /// `index|noindex,follow|nofollow`
    pub robots: String,
    /// Comma-separated, deduplicated keywords.
    pub keywords: String,
    pub publisher: String,
    pub author: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub page_type: PageType,
    pub url: String,
    pub image: String,
    pub image_alt: String,
    pub site_name: String,
    pub locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<String>,
    /// Author exactly as given; no site fallback here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub image: String,
    pub image_alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
}

// ============================================================================
// Public API
// ============================================================================

/// Derive the full tag bundle for a page.
///
/// `current_url` is the URL the page is served at; it is the canonical
/// fallback when `props.canonical` is absent.
pub fn generate_seo_tags(props: &SeoProps, current_url: Option<&str>, config: &SiteConfig) -> SeoTags {
    let title = full_title(&props.title, config);
    let canonical = non_empty(props.canonical.as_deref())
        .or(non_empty(current_url))
        .unwrap_or(config.base.url.as_str())
        .to_owned();
    let image = resolve_image(props.image.as_deref(), config);
    let image_alt = non_empty(props.image_alt.as_deref())
        .unwrap_or(props.title.as_str())
        .to_owned();
    let author = non_empty(props.author.as_deref()).map(str::to_owned);
    let twitter_handle = non_empty(config.social.twitter.as_deref()).map(str::to_owned);

    SeoTags {
        title: title.clone(),
        description: props.description.clone(),
        canonical: canonical.clone(),
        robots: robots(props.noindex, props.nofollow),
        keywords: merge_keywords(&config.base.keywords, &props.keywords, &props.tags),
        publisher: config.organization.name.clone(),
        author: author.clone().unwrap_or_else(|| config.base.author.clone()),
        open_graph: OpenGraph {
            title: title.clone(),
            description: props.description.clone(),
            page_type: props.page_type,
            url: canonical,
            image: image.clone(),
            image_alt: image_alt.clone(),
            site_name: config.base.title.clone(),
            locale: config.base.locale.clone(),
            published_time: props.published_time.clone(),
            modified_time: props.modified_time.clone(),
            author,
            tags: props.tags.clone(),
        },
        twitter: TwitterCard {
            card: TWITTER_CARD,
            title,
            description: props.description.clone(),
            image,
            image_alt,
            site: twitter_handle.clone(),
            creator: twitter_handle,
        },
    }
}

/// Props for a regular page at `path` (e.g. `/about/`).
pub fn page_seo(title: &str, description: &str, path: &str, config: &SiteConfig) -> SeoProps {
    SeoProps {
        title: title.to_owned(),
        description: description.to_owned(),
        canonical: Some(site_url(config, path)),
        page_type: PageType::Website,
        ..SeoProps::default()
    }
}

/// Props for a blog article. The slug may carry slashes or a `blog/` prefix.
pub fn article_seo(title: &str, description: &str, slug: &str, config: &SiteConfig) -> SeoProps {
    SeoProps {
        title: title.to_owned(),
        description: description.to_owned(),
        canonical: Some(post_url(config, slug)),
        page_type: PageType::Article,
        ..SeoProps::default()
    }
}

/// Tags joined for a `keywords` meta tag, without site keywords.
pub fn keywords_from_tags(tags: &[String]) -> String {
    tags.join(", ")
}

// ============================================================================
// Helper Functions
// ============================================================================

/// `"<site> - <description>"` for the home page, `"<title> | <site>"` otherwise.
fn full_title(title: &str, config: &SiteConfig) -> String {
    let base = &config.base;
    if title == base.home_title {
        format!("{} - {}", base.title, base.description)
    } else {
        format!("{title} | {}", base.title)
    }
}

fn robots(noindex: bool, nofollow: bool) -> String {
    let index = if noindex { "noindex" } else { "index" };
    let follow = if nofollow { "nofollow" } else { "follow" };
    format!("{index},{follow}")
}

/// Site keywords, then page keywords, then tags; first occurrence wins.
fn merge_keywords(site: &[String], page: &[String], tags: &[String]) -> String {
    let mut seen = FxHashSet::default();
    site.iter()
        .chain(page)
        .chain(tags)
        .map(String::as_str)
        .filter(|kw| seen.insert(*kw))
        .collect::<Vec<_>>()
        .join(", ")
}

fn resolve_image(image: Option<&str>, config: &SiteConfig) -> String {
    match non_empty(image) {
        Some(image) => absolutize(config, image),
        None => config.base.default_image.clone(),
    }
}

#[inline]
fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

// ============================================================================
// Tests
// ============================================================================
