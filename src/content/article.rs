//! Article record model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::ArticleMetadata;

/// One article in the aggregated listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// URL-safe identifier, derived from the article's directory name
    pub slug: String,

    /// Article title
    pub title: String,

    /// Short description for index and feed pages
    pub description: String,

    /// Article author
    pub author: String,

    /// Publication date, used for ordering
    pub date: DateTime<Utc>,

    /// Whether the article is highlighted on the front page
    pub is_featured: bool,

    /// Whether the article is hidden from the public listing
    pub is_private: bool,

    /// Full path to the article's entry file
    pub source: PathBuf,
}

impl Article {
    /// Build an article record from its parsed metadata
    pub fn new(slug: String, meta: ArticleMetadata, date: DateTime<Utc>, source: PathBuf) -> Self {
        Self {
            slug,
            title: meta.title,
            description: meta.description,
            author: meta.author,
            date,
            is_featured: meta.is_featured,
            is_private: meta.is_private,
            source,
        }
    }
}
