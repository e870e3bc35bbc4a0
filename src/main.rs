//! sitemeta - SEO and feed metadata for a static blog.

use anyhow::{Result, bail};
use clap::Parser;
use serde::Serialize;
use sitemeta::{
    ads::{AdContext, ad_for_slot},
    build::{PageMeta, PageRequest, build_site, find_post_meta},
    cli::{Cli, Commands},
    config::SiteConfig,
    content::load_posts,
    feed::{build_feed, derive_feed},
    log,
    utils::log::print_raw,
};
use std::{path::Path, process::ExitCode};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log!("error"; "{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    match &cli.command {
        Commands::Build { .. } => {
            let report = build_site(&config)?;
            log!("build"; "{} of {} posts published", report.published, report.total);
        }
        Commands::Feed => {
            let posts = load_posts(&config.build.content)?;
            if config.rss.enable {
                build_feed(&posts, &config)?;
            } else {
                // Disabled in config: print instead of writing.
                print_raw(&derive_feed(&posts, &config).to_xml()?);
            }
        }
        Commands::Post { slug } => {
            let posts = load_posts(&config.build.content)?;
            print_json(&find_post_meta(&posts, slug, &config)?)?;
        }
        Commands::Page {
            title,
            description,
            path,
            kind,
            image,
            keywords,
            noindex,
            nofollow,
        } => {
            let page = PageRequest {
                title: title.clone(),
                description: description.clone(),
                path: path.clone(),
                kind: (*kind).into(),
                image: image.clone(),
                keywords: keywords.clone(),
                noindex: *noindex,
                nofollow: *nofollow,
            };
            print_json(&PageMeta::new(&page, &config))?;
        }
        Commands::Ads { slot, dev, dnt } => {
            let ctx = AdContext {
                development: *dev,
                do_not_track: *dnt,
            };
            print_json(&ad_for_slot(*slot, &config, ctx))?;
        }
    }

    Ok(())
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    if !config_path.exists() {
        bail!("Config file not found: {}", config_path.display());
    }

    let mut config = SiteConfig::from_path(&config_path)?;
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    print_raw(&serde_json::to_string_pretty(value)?);
    Ok(())
}
