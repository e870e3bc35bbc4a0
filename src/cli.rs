//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use crate::{ads::AdSlot, schema::SchemaKind};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// sitemeta: SEO, JSON-LD and RSS metadata for a static blog
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Site root directory (default: current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Config file name (default: site.toml)
    #[arg(short = 'C', long, default_value = "site.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write per-post metadata, site.json and the rss feed
    Build {
        /// enable rss feed generation
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        rss: Option<bool>,
    },

    /// Write the rss feed only
    Feed,

    /// Print SEO tags, schema and breadcrumbs for one post
    Post {
        /// post slug, e.g. `belajar-astro`
        slug: String,
    },

    /// Print SEO tags and schema for an ad-hoc page
    Page {
        title: String,
        description: String,

        /// site-relative path, e.g. `/about/`
        path: String,

        #[arg(short, long, value_enum, default_value_t = PageKind::Webpage)]
        kind: PageKind,

        /// og:image, absolute or site-relative
        #[arg(long)]
        image: Option<String>,

        /// extra keyword (repeatable)
        #[arg(long = "keyword")]
        keywords: Vec<String>,

        #[arg(long)]
        noindex: bool,

        #[arg(long)]
        nofollow: bool,
    },

    /// Print the ad placement for a slot, or `null`
    Ads {
        /// header, sidebar, content or footer
        slot: AdSlot,

        /// treat as a development build
        #[arg(long)]
        dev: bool,

        /// visitor sent Do Not Track
        #[arg(long)]
        dnt: bool,
    },
}

/// Non-article page kinds accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Website,
    Webpage,
    About,
    Contact,
}

impl From<PageKind> for SchemaKind {
    fn from(kind: PageKind) -> Self {
        match kind {
            PageKind::Website => Self::WebSite,
            PageKind::Webpage => Self::WebPage,
            PageKind::About => Self::AboutPage,
            PageKind::Contact => Self::ContactPage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["sitemeta", "build"]);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert!(cli.root.is_none());
        assert!(matches!(cli.command, Commands::Build { rss: None }));
    }

    #[test]
    fn test_rss_flag_without_value() {
        let cli = Cli::parse_from(["sitemeta", "build", "--rss"]);
        assert!(matches!(cli.command, Commands::Build { rss: Some(true) }));
    }

    #[test]
    fn test_page_command() {
        let cli = Cli::parse_from([
            "sitemeta", "page", "Tentang", "Tentang kami", "/about/", "--kind", "about",
            "--keyword", "profil", "--keyword", "tim", "--noindex",
        ]);
        let Commands::Page { kind, keywords, noindex, nofollow, .. } = cli.command else {
            panic!("expected page command");
        };
        assert_eq!(SchemaKind::from(kind), SchemaKind::AboutPage);
        assert_eq!(keywords, vec!["profil", "tim"]);
        assert!(noindex);
        assert!(!nofollow);
    }

    #[test]
    fn test_unknown_page_kind_rejected() {
        let result = Cli::try_parse_from(["sitemeta", "page", "T", "D", "/x/", "--kind", "faq"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_ads_slot() {
        let cli = Cli::parse_from(["sitemeta", "ads", "sidebar", "--dnt"]);
        assert!(matches!(
            cli.command,
            Commands::Ads { slot: AdSlot::Sidebar, dev: false, dnt: true }
        ));
        assert!(Cli::try_parse_from(["sitemeta", "ads", "popup"]).is_err());
    }
}
