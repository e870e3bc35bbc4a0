//! rss feed derivation and generation.
//!
//! [`derive_feed`] maps the blog collection to channel metadata and items;
//! [`Feed::to_xml`] hands them to the `rss` crate for serialization.

use crate::{
    config::SiteConfig,
    content::{self, Post},
    log,
    utils::{date::to_rfc2822, url::post_path},
};
use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Utc};
use rss::{CategoryBuilder, ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};
use std::fs;

// ============================================================================
// Public API
// ============================================================================

/// Build rss feed if enabled in config.
pub fn build_feed(posts: &[Post], config: &SiteConfig) -> Result<()> {
    if config.rss.enable {
        derive_feed(posts, config).write(config)?;
    }
    Ok(())
}

/// Channel metadata plus items, newest first, drafts removed.
pub fn derive_feed(posts: &[Post], config: &SiteConfig) -> Feed {
    let items = content::published(posts)
        .into_iter()
        .map(|post| FeedItem::from_post(post, config))
        .collect();

    Feed {
        channel: FeedChannel {
            title: config.feed_title().to_owned(),
            description: config.feed_description().to_owned(),
            site: config.base.url.clone(),
            language: config.rss.language.clone(),
        },
        items,
    }
}

// ============================================================================
// Feed Data
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    pub channel: FeedChannel,
    pub items: Vec<FeedItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedChannel {
    pub title: String,
    pub description: String,
    /// Absolute site URL; item links are resolved against it.
    pub site: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub description: String,
    pub pub_date: DateTime<Utc>,
    /// Site-relative: `/blog/<slug>/`
    pub link: String,
    pub author: String,
    pub categories: Vec<String>,
}

impl FeedItem {
    fn from_post(post: &Post, config: &SiteConfig) -> Self {
        let entry = &post.entry;
        Self {
            title: entry.title.clone(),
            description: entry.description.clone(),
            pub_date: entry.published_date,
            link: post_path(&post.slug),
            author: config.social.email.clone(),
            categories: entry.tags.clone(),
        }
    }

    fn to_rss_item(&self, site: &str) -> rss::Item {
        let link = format!("{site}{}", self.link);
        let categories = self
            .categories
            .iter()
            .map(|name| CategoryBuilder::default().name(name.as_str()).build())
            .collect::<Vec<_>>();

        ItemBuilder::default()
            .title(Some(self.title.clone()))
            .link(Some(link.clone()))
            .guid(Some(GuidBuilder::default().permalink(true).value(link).build()))
            .description(Some(self.description.clone()))
            .pub_date(Some(to_rfc2822(&self.pub_date)))
            .author(Some(self.author.clone()))
            .categories(categories)
            .build()
    }
}

impl Feed {
    /// Serialize to rss 2.0 XML, validating the channel first.
    pub fn to_xml(&self) -> Result<String> {
        let items: Vec<_> = self
            .items
            .iter()
            .map(|item| item.to_rss_item(&self.channel.site))
            .collect();

        let channel = ChannelBuilder::default()
            .title(self.channel.title.as_str())
            .link(self.channel.site.as_str())
            .description(self.channel.description.as_str())
            .language(Some(self.channel.language.clone()))
            .generator(Some("sitemeta".to_string()))
            .items(items)
            .build();

        channel
            .validate()
            .map_err(|e| anyhow!("rss validation failed: {e}"))?;
        Ok(channel.to_string())
    }

    /// Write feed to `[build].output` / `[rss].path`.
    fn write(&self, config: &SiteConfig) -> Result<()> {
        let xml = self.to_xml()?;
        let feed_path = config.feed_path();

        if let Some(parent) = feed_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&feed_path, xml)
            .with_context(|| format!("Failed to write feed to {}", feed_path.display()))?;

        log!("feed"; "{} ({} items)", feed_path.file_name().unwrap_or_default().to_string_lossy(), self.items.len());
        Ok(())
    }
}
