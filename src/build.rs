//! Site building orchestration.
//!
//! Loads the blog collection once and writes every derived artifact.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── load_posts() ──► Vec<Post> (drafts included)
//!     │
//!     ├── write_post_meta() ──► <output>/blog/<slug>/meta.json   (published only)
//!     │
//!     ├── write_site_meta() ──► <output>/site.json
//!     │
//!     └── build_feed() ──► <output>/<rss.path>
//! ```

use crate::{
    config::SiteConfig,
    content::{self, Post, load_posts},
    feed::build_feed,
    log,
    schema::{
        ArticleSummary, Crumb, ItemList, OrganizationSchema, PageSchema, SchemaKind,
        SchemaOptions, WebSiteSchema, article_list_schema, breadcrumb_schema, generate_schema,
        organization_schema, post_breadcrumbs, website_schema,
    },
    seo::{SeoProps, SeoTags, generate_seo_tags, page_seo},
    utils::url::{clean_slug, post_path, site_url},
};
use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use std::{fs, path::Path};

// ============================================================================
// Bundles
// ============================================================================

/// Everything a post page embeds in its `<head>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostMeta {
    pub seo: SeoTags,
    pub schema: PageSchema,
    pub breadcrumbs: ItemList<Crumb>,
}

impl PostMeta {
    pub fn new(post: &Post, config: &SiteConfig) -> Self {
        Self {
            seo: generate_seo_tags(&SeoProps::for_post(post, config), None, config),
            schema: generate_schema(&SchemaOptions::for_post(post, config), config),
            breadcrumbs: breadcrumb_schema(&post_breadcrumbs(post, config)),
        }
    }
}

/// Site-wide JSON-LD plus the published article listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteMeta {
    pub organization: OrganizationSchema,
    pub website: WebSiteSchema,
    pub articles: ItemList<ArticleSummary>,
    pub featured: ItemList<ArticleSummary>,
}

impl SiteMeta {
    pub fn new(posts: &[Post], config: &SiteConfig) -> Self {
        Self {
            organization: organization_schema(config),
            website: website_schema(config),
            articles: article_list_schema(&content::published(posts), config),
            featured: article_list_schema(&content::featured(posts), config),
        }
    }
}

/// Tags and schema for a page outside the blog collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub seo: SeoTags,
    pub schema: PageSchema,
}

/// Input for [`PageMeta::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub title: String,
    pub description: String,
    /// Site-relative path, e.g. `/about/`.
    pub path: String,
    pub kind: SchemaKind,
    pub image: Option<String>,
    pub keywords: Vec<String>,
    pub noindex: bool,
    pub nofollow: bool,
}

impl PageMeta {
    pub fn new(page: &PageRequest, config: &SiteConfig) -> Self {
        let props = SeoProps {
            image: page.image.clone(),
            keywords: page.keywords.clone(),
            noindex: page.noindex,
            nofollow: page.nofollow,
            ..page_seo(&page.title, &page.description, &page.path, config)
        };
        let options = SchemaOptions {
            kind: page.kind.clone(),
            title: page.title.clone(),
            description: page.description.clone(),
            url: site_url(config, &page.path),
            organization: None,
        };

        Self {
            seo: generate_seo_tags(&props, None, config),
            schema: generate_schema(&options, config),
        }
    }
}

// ============================================================================
// Build
// ============================================================================

/// Summary of one build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Posts loaded, drafts included.
    pub total: usize,
    /// Posts that got a `meta.json`.
    pub published: usize,
    pub feed: bool,
}

/// Build every artifact into `[build].output`.
pub fn build_site(config: &SiteConfig) -> Result<BuildReport> {
    let output = &config.build.output;
    let posts = load_posts(&config.build.content)?;
    log!("content"; "found {} posts", posts.len());

    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;

    let published = content::published(&posts);
    for post in &published {
        write_post_meta(post, config)?;
    }
    write_site_meta(&posts, config)?;
    build_feed(&posts, config)?;

    let report = BuildReport {
        total: posts.len(),
        published: published.len(),
        feed: config.rss.enable,
    };

    if report.published == 0 {
        log!("warn"; "no published posts, check {}", config.build.content.display());
    } else {
        log!("build"; "done");
    }

    Ok(report)
}

/// Metadata for the published post at `slug`.
pub fn find_post_meta(posts: &[Post], slug: &str, config: &SiteConfig) -> Result<PostMeta> {
    let slug = clean_slug(slug);
    content::published(posts)
        .into_iter()
        .find(|post| clean_slug(&post.slug) == slug)
        .map(|post| PostMeta::new(post, config))
        .ok_or_else(|| anyhow!("no published post with slug `{slug}`"))
}

fn write_post_meta(post: &Post, config: &SiteConfig) -> Result<()> {
    let rel = format!("{}meta.json", post_path(&post.slug));
    write_json(&config.build.output, &rel, &PostMeta::new(post, config))
}

fn write_site_meta(posts: &[Post], config: &SiteConfig) -> Result<()> {
    write_json(&config.build.output, "site.json", &SiteMeta::new(posts, config))
}

/// Pretty-print `value` to `<output>/<rel>`, creating parent directories.
fn write_json<T: Serialize>(output: &Path, rel: &str, value: &T) -> Result<()> {
    let path = output.join(rel.trim_start_matches('/'));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(value)?;
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    log!("meta"; "{}", rel.trim_start_matches('/'));
    Ok(())
}
