//! folio-rs: a personal portfolio and blog content engine
//!
//! This crate discovers articles authored one-per-directory under a content
//! root, loads the metadata block each article declares, and produces a
//! filtered listing sorted by publication date. Rendering is left to the
//! consumer; this crate owns discovery, metadata, visibility, and ordering.

pub mod commands;
pub mod config;
pub mod content;

use anyhow::Result;
use std::path::Path;

use content::{Article, ArticleLoader};

/// The main Folio application
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content directory holding one subdirectory per article
    pub content_dir: std::path::PathBuf,
}

impl Folio {
    /// Create a new Folio instance from a site directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("folio.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
        })
    }

    /// List all articles, sorted by date descending (newest first).
    ///
    /// With `include_private` set, private articles are retained; otherwise
    /// they are dropped. Any article that fails to load fails the whole call.
    pub async fn list_articles(&self, include_private: bool) -> Result<Vec<Article>> {
        ArticleLoader::new(self).list_articles(include_private).await
    }
}
