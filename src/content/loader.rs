//! Read the blog collection from disk.

use super::{ContentEntry, ContentError, Post};
use crate::utils::{
    slug::content_slug,
    url::{clean_slug, is_absolute_url},
};
use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

const FRONT_MATTER_DELIMITER: &str = "+++";

/// Load every `*.md` post under `dir`, sorted by slug.
///
/// Fails on the first file that does not validate, and when two files
/// resolve to the same `/blog/<slug>/` URL.
pub fn load_posts(dir: &Path) -> Result<Vec<Post>> {
    let mut posts = Vec::new();
    let mut seen: FxHashMap<String, PathBuf> = FxHashMap::default();

    for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "md") {
            continue;
        }

        let source =
            fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))?;
        let slug = content_slug(path, dir)?;

        let key = clean_slug(&slug).to_owned();
        if let Some(first) = seen.get(&key) {
            return Err(ContentError::DuplicateSlug {
                slug: key,
                first: first.clone(),
                second: path.to_path_buf(),
            }
            .into());
        }
        seen.insert(key, path.to_path_buf());

        posts.push(parse_post(slug, &source, path)?);
    }

    posts.sort_by(|a, b| a.slug.cmp(&b.slug));
    Ok(posts)
}

/// Parse one post from its source text. `path` is only used in errors.
pub fn parse_post(slug: String, source: &str, path: &Path) -> Result<Post, ContentError> {
    let front_matter = split_front_matter(source)
        .ok_or_else(|| ContentError::MissingFrontMatter(path.to_path_buf()))?;

    let entry: ContentEntry = toml::from_str(front_matter)
        .map_err(|err| ContentError::FrontMatter(path.to_path_buf(), err))?;

    if let Some(url) = entry.author.url.as_deref()
        && (!is_absolute_url(url) || url.contains(char::is_whitespace))
    {
        return Err(ContentError::InvalidUrl {
            path: path.to_path_buf(),
            url: url.to_owned(),
        });
    }

    Ok(Post { slug, entry })
}

/// Return the text between the opening and closing `+++` lines.
fn split_front_matter(source: &str) -> Option<&str> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut lines = source.split_inclusive('\n');

    let first = lines.next()?;
    if first.trim_end() != FRONT_MATTER_DELIMITER {
        return None;
    }

    let start = first.len();
    let mut end = start;
    for line in lines {
        if line.trim_end() == FRONT_MATTER_DELIMITER {
            return Some(&source[start..end]);
        }
        end += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const POST: &str = r#"+++
title = "Belajar Astro"
description = "Pengenalan Astro"
publishedDate = 2024-01-15
author = { name = "Hilal" }
tags = ["astro"]
+++

# Belajar Astro

Body text with +++ inside.
"#;

    #[test]
    fn test_split_front_matter() {
        let fm = split_front_matter(POST).unwrap();
        assert!(fm.starts_with("title = "));
        assert!(fm.ends_with("tags = [\"astro\"]\n"));
    }

    #[test]
    fn test_split_front_matter_crlf_and_bom() {
        let source = "\u{feff}+++\r\ntitle = \"x\"\r\n+++\r\nbody";
        assert_eq!(split_front_matter(source), Some("title = \"x\"\r\n"));
    }

    #[test]
    fn test_split_front_matter_missing() {
        assert!(split_front_matter("# No front matter").is_none());
        assert!(split_front_matter("+++\ntitle = \"unterminated\"\n").is_none());
        assert!(split_front_matter("").is_none());
    }

    #[test]
    fn test_parse_post() {
        let post = parse_post("belajar-astro".into(), POST, Path::new("a.md")).unwrap();
        assert_eq!(post.slug, "belajar-astro");
        assert_eq!(post.entry.title, "Belajar Astro");
        assert_eq!(post.entry.tags, vec!["astro"]);
    }

    #[test]
    fn test_parse_post_missing_front_matter() {
        let err = parse_post("x".into(), "hello", Path::new("x.md")).unwrap_err();
        assert!(matches!(err, ContentError::MissingFrontMatter(p) if p == PathBuf::from("x.md")));
    }

    #[test]
    fn test_parse_post_invalid_author_url() {
        let source = "+++\ntitle = \"T\"\ndescription = \"D\"\npublishedDate = \"2024-01-01\"\nauthor = { name = \"A\", url = \"not a url\" }\n+++\n";
        let err = parse_post("t".into(), source, Path::new("t.md")).unwrap_err();
        assert!(matches!(err, ContentError::InvalidUrl { .. }));
    }

    #[test]
    fn test_parse_post_author_url_with_space() {
        let source = "+++\ntitle = \"T\"\ndescription = \"D\"\npublishedDate = \"2024-01-01\"\nauthor = { name = \"A\", url = \"https://exa mple.com\" }\n+++\n";
        let err = parse_post("t".into(), source, Path::new("t.md")).unwrap_err();
        assert!(matches!(err, ContentError::InvalidUrl { url, .. } if url == "https://exa mple.com"));
    }

    #[test]
    fn test_parse_post_author_url() {
        let source = "+++\ntitle = \"T\"\ndescription = \"D\"\npublishedDate = \"2024-01-01\"\nauthor = { name = \"A\", url = \"https://hilaltechnologic.info/author/admin\" }\n+++\n";
        let post = parse_post("t".into(), source, Path::new("t.md")).unwrap();
        assert_eq!(
            post.entry.author.url.as_deref(),
            Some("https://hilaltechnologic.info/author/admin")
        );
    }

    #[test]
    fn test_parse_post_invalid_toml() {
        let source = "+++\ntitle = \n+++\n";
        let err = parse_post("t".into(), source, Path::new("t.md")).unwrap_err();
        assert!(matches!(err, ContentError::FrontMatter(..)));
    }

    #[test]
    fn test_load_posts() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("2024")).unwrap();
        fs::write(root.join("zeta.md"), POST).unwrap();
        fs::write(root.join("2024/Alpha Post.md"), POST).unwrap();
        fs::write(root.join("notes.txt"), "ignored").unwrap();

        let posts = load_posts(root).unwrap();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["2024/alpha-post", "zeta"]);
    }

    #[test]
    fn test_load_posts_rejects_duplicate_slug() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Tips & Trik.md"), POST).unwrap();
        fs::write(dir.path().join("tips-trik.md"), POST).unwrap();

        let err = load_posts(dir.path()).unwrap_err();
        let err = err.downcast_ref::<ContentError>().unwrap();
        assert!(matches!(err, ContentError::DuplicateSlug { slug, .. } if slug == "tips-trik"));
    }

    #[test]
    fn test_load_posts_rejects_blog_prefixed_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("blog")).unwrap();
        fs::write(dir.path().join("blog/x.md"), POST).unwrap();
        fs::write(dir.path().join("x.md"), POST).unwrap();

        let err = load_posts(dir.path()).unwrap_err();
        let err = err.downcast_ref::<ContentError>().unwrap();
        assert!(matches!(err, ContentError::DuplicateSlug { slug, .. } if slug == "x"));
    }

    #[test]
    fn test_load_posts_reports_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.md"), "no front matter").unwrap();

        let err = load_posts(dir.path()).unwrap_err();
        assert!(err.to_string().contains("broken.md"));
    }
}
