//! Slugs for content files.
//!
//! A post's slug is its path inside the collection directory, without the
//! extension, with every segment made URL-safe.

use anyhow::{Result, anyhow};
use std::path::{Component, Path};

/// Convert one path segment to a URL-safe slug.
///
/// Transliterates to ASCII, lowercases, and turns every run of
/// non-alphanumeric characters into a single `-`.
pub fn slugify(text: &str) -> String {
    let ascii = deunicode::deunicode(text);
    let mut slug = String::with_capacity(ascii.len());

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Compute the slug of a content file relative to its collection root.
///
/// | Source | slug |
/// |--------|------|
/// | `content/blog/hello-world.md` | `hello-world` |
/// | `content/blog/2024/Tips & Trik.md` | `2024/tips-trik` |
pub fn content_slug(path: &Path, root: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).map_err(|_| {
        anyhow!(
            "File is not in content directory: {}",
            path.display()
        )
    })?;
    let relative = relative.with_extension("");

    let segments: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(slugify(&s.to_string_lossy())),
            _ => None,
        })
        .filter(|s| !s.is_empty())
        .collect();

    if segments.is_empty() {
        return Err(anyhow!("Empty slug for {}", path.display()));
    }
    Ok(segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("hello-world"), "hello-world");
        assert_eq!(slugify("Tips & Trik"), "tips-trik");
    }

    #[test]
    fn test_slugify_trims_separators() {
        assert_eq!(slugify("  --Astro 4.0!  "), "astro-4-0");
        assert_eq!(slugify("___"), "");
    }

    #[test]
    fn test_slugify_unicode() {
        assert_eq!(slugify("Café Über"), "cafe-uber");
    }

    #[test]
    fn test_content_slug_flat() {
        let slug = content_slug(
            Path::new("/site/content/blog/hello-world.md"),
            Path::new("/site/content/blog"),
        )
        .unwrap();
        assert_eq!(slug, "hello-world");
    }

    #[test]
    fn test_content_slug_nested() {
        let slug = content_slug(
            Path::new("/site/content/blog/2024/Tips & Trik.md"),
            Path::new("/site/content/blog"),
        )
        .unwrap();
        assert_eq!(slug, "2024/tips-trik");
    }

    #[test]
    fn test_content_slug_outside_root() {
        let result = content_slug(Path::new("/elsewhere/post.md"), Path::new("/site/content"));
        assert!(result.is_err());
    }
}
