//! URL helpers shared by the derivers.
//!
//! All site URLs are built by concatenating a `/`-prefixed path onto
//! `[base].url`, which has no trailing slash (see `SiteConfig::validate`).

use crate::config::SiteConfig;
use regex::Regex;
use std::sync::LazyLock;

/// Matches a leading URL scheme such as `https://` or `ftp://`.
static RE_ABSOLUTE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://").unwrap());

/// Whether `s` starts with a URL scheme. The rest of the URL is not checked.
pub fn is_absolute_url(s: &str) -> bool {
    RE_ABSOLUTE_URL.is_match(s)
}

/// `base.url` + `path`.
#[inline]
pub fn site_url(config: &SiteConfig, path: &str) -> String {
    format!("{}{}", config.base.url, path)
}

/// Pass absolute URLs through, prefix anything else with the site base URL.
pub fn absolutize(config: &SiteConfig, url: &str) -> String {
    if is_absolute_url(url) {
        url.to_owned()
    } else {
        site_url(config, url)
    }
}

/// Strip surrounding slashes and a leading `blog/` collection prefix.
///
/// `"/blog/hello-world/"` → `"hello-world"`
pub fn clean_slug(slug: &str) -> &str {
    let slug = slug.trim_matches('/');
    slug.strip_prefix("blog/").unwrap_or(slug)
}

/// Site-relative path of a post: `/blog/<slug>/`.
pub fn post_path(slug: &str) -> String {
    format!("/blog/{}/", clean_slug(slug))
}

/// Absolute URL of a post: `<base>/blog/<slug>/`.
pub fn post_url(config: &SiteConfig, slug: &str) -> String {
    site_url(config, &post_path(slug))
}
