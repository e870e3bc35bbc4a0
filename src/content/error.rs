//! Content loading error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading and validating blog posts.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("`{0}` has no `+++` front matter block")]
    MissingFrontMatter(PathBuf),

    #[error("invalid front matter in `{0}`")]
    FrontMatter(PathBuf, #[source] toml::de::Error),

    #[error("`{path}`: author url `{url}` is not an absolute URL")]
    InvalidUrl { path: PathBuf, url: String },

    #[error("`{first}` and `{second}` both map to slug `{slug}`")]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },
}
