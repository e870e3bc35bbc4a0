//! `[social]`, `[organization]` and `[analytics]` sections.
//!
//! The publisher identity behind the site, used by schema.org output and social cards.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[social]` section - social handles and contact.
///
/// # Example
/// ```toml
/// [social]
/// twitter = "@hilaltechnologi"
/// github = "https://github.com/hilaltechnologic"
/// linkedin = "https://linkedin.com/company/hilalabdillah"
/// email = "hilal@technologist.com"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SocialConfig {
    /// Twitter handle including the leading `@`.
    #[serde(default)]
    pub twitter: Option<String>,

    /// GitHub profile URL.
    #[serde(default)]
    pub github: Option<String>,

    /// LinkedIn profile URL.
    #[serde(default)]
    pub linkedin: Option<String>,

    /// Contact email, used as the rss item author.
    #[serde(default = "defaults::social::email")]
    #[educe(Default = defaults::social::email())]
    pub email: String,
}

impl SocialConfig {
    /// Profile URLs for `sameAs`, in twitter, github, linkedin order.
    pub fn profile_urls(&self) -> Vec<String> {
        let twitter = self
            .twitter
            .as_deref()
            .filter(|handle| !handle.is_empty())
            .map(|handle| format!("https://twitter.com/{}", handle.replacen('@', "", 1)));

        twitter
            .into_iter()
            .chain(self.github.iter().cloned())
            .chain(self.linkedin.iter().cloned())
            .filter(|url| !url.is_empty())
            .collect()
    }
}

/// `[organization]` section - the publishing organization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrganizationConfig {
    pub name: String,
    pub url: String,
    /// Absolute logo URL.
    pub logo: String,
    pub description: String,
    /// ISO date string, emitted verbatim as `foundingDate`.
    pub founding_date: String,
    pub founders: Vec<Founder>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Founder {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// `[analytics]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyticsConfig {
    /// GA4 measurement id (`G-XXXX`).
    pub google_analytics: Option<String>,
    /// Search Console verification token.
    pub google_site_verification: Option<String>,
}
