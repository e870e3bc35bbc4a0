//! sitemeta: SEO tags, schema.org JSON-LD and rss feeds for a static blog.
//!
//! Every deriver is a pure function of the loaded [`config::SiteConfig`] and
//! the blog collection ([`content::Post`]); [`build::build_site`] writes the
//! results to disk.

pub mod ads;
pub mod build;
pub mod cli;
pub mod config;
pub mod content;
pub mod feed;
pub mod schema;
pub mod seo;
pub mod utils;
