//! Create a new article

use anyhow::Result;
use std::fs;

use crate::content::locator::ENTRY_FILE;
use crate::Folio;

/// Create a new article directory with a metadata scaffold
pub fn create_article(folio: &Folio, title: &str, private: bool) -> Result<()> {
    let now = chrono::Utc::now();

    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("cannot derive a slug from title: {:?}", title);
    }

    let article_dir = folio.content_dir.join(&slug);
    let entry_path = article_dir.join(ENTRY_FILE);

    if entry_path.exists() {
        anyhow::bail!("article already exists: {:?}", entry_path);
    }

    fs::create_dir_all(&article_dir)?;

    let mut content = format!(
        r#"---
title: {}
description: ''
author: {}
date: {}
isFeatured: false
"#,
        title,
        folio.config.author,
        now.format("%Y-%m-%dT%H:%M:%SZ")
    );
    if private {
        content.push_str("isPrivate: true\n");
    }
    content.push_str("---\n");

    fs::write(&entry_path, content)?;

    println!("Created: {:?}", entry_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    fn folio_at(base: &std::path::Path) -> Folio {
        let config = SiteConfig::default();
        Folio {
            content_dir: base.join(&config.content_dir),
            base_dir: base.to_path_buf(),
            config,
        }
    }

    #[tokio::test]
    async fn test_created_article_round_trips_through_listing() {
        let tmp = tempfile::tempdir().unwrap();
        let folio = folio_at(tmp.path());

        create_article(&folio, "My First Article", false).unwrap();

        let articles = folio.list_articles(false).await.unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].slug, "my-first-article");
        assert_eq!(articles[0].title, "My First Article");
        assert!(!articles[0].is_featured);
    }

    #[tokio::test]
    async fn test_private_scaffold_is_hidden_from_public_listing() {
        let tmp = tempfile::tempdir().unwrap();
        let folio = folio_at(tmp.path());

        create_article(&folio, "Secret Draft", true).unwrap();

        assert!(folio.list_articles(false).await.unwrap().is_empty());
        assert_eq!(folio.list_articles(true).await.unwrap().len(), 1);
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let tmp = tempfile::tempdir().unwrap();
        let folio = folio_at(tmp.path());

        create_article(&folio, "Twice", false).unwrap();
        assert!(create_article(&folio, "Twice", false).is_err());
    }
}
