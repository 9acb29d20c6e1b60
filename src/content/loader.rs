//! Article loader - loads and aggregates article metadata
//!
//! Loads are fanned out concurrently, one task per article, then joined
//! before any ordering happens. The sort key is the declared date, so load
//! completion timing never shows up in the output.

use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tokio::task::JoinSet;

use super::locator::{locate_articles, slug_for};
use super::{Article, ArticleMetadata};
use crate::Folio;

/// Loads articles from the content directory
pub struct ArticleLoader {
    content_dir: PathBuf,
}

impl ArticleLoader {
    /// Create a new loader for the site's content directory
    pub fn new(folio: &Folio) -> Self {
        Self {
            content_dir: folio.content_dir.clone(),
        }
    }

    /// Load every article, filter by visibility, and sort by date descending.
    ///
    /// Fail-fast: one malformed article fails the whole call with no partial
    /// result. Articles sharing a date keep their discovery-order positions.
    pub async fn list_articles(&self, include_private: bool) -> Result<Vec<Article>> {
        let paths = locate_articles(&self.content_dir)?;
        let count = paths.len();

        let mut set = JoinSet::new();
        for (idx, path) in paths.into_iter().enumerate() {
            set.spawn(async move {
                let article = load_article(&path).await?;
                Ok::<_, anyhow::Error>((idx, article))
            });
        }

        // Results land back in discovery-order slots regardless of which
        // task finishes first.
        let mut slots: Vec<Option<Article>> = Vec::new();
        slots.resize_with(count, || None);
        while let Some(joined) = set.join_next().await {
            let (idx, article) = joined??;
            slots[idx] = Some(article);
        }
        let mut articles: Vec<Article> = slots.into_iter().flatten().collect();

        // Two directories mapping to one slug would shadow each other in
        // URLs; refuse rather than pick a winner.
        let mut seen = HashSet::new();
        for article in &articles {
            if !seen.insert(article.slug.as_str()) {
                bail!("duplicate article slug: {}", article.slug);
            }
        }

        if !include_private {
            articles.retain(|a| !a.is_private);
        }

        // Stable sort, newest first
        articles.sort_by(|a, b| b.date.cmp(&a.date));

        tracing::debug!("loaded {} articles", articles.len());
        Ok(articles)
    }
}

/// Load a single article from its entry file
async fn load_article(path: &Path) -> Result<Article> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {:?}", path))?;

    let (meta, _body) = ArticleMetadata::parse(&content)
        .with_context(|| format!("invalid metadata in {:?}", path))?;

    if meta.title.trim().is_empty() {
        bail!("empty title in {:?}", path);
    }

    let date = meta
        .parse_date()
        .with_context(|| format!("invalid date in {:?}", path))?;

    let slug = slug_for(path)?;

    Ok(Article::new(slug, meta, date, path.to_path_buf()))
}
