//! Initialize a new Folio site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::content::locator::ENTRY_FILE;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("articles"))?;

    // Create default folio.yml
    let config_content = r#"# Folio configuration

# Site
title: Folio
description: ''
author: John Doe
language: en

# URL
url: http://example.com
root: /

# Directory
content_dir: articles
"#;

    let config_path = target_dir.join("folio.yml");
    if !config_path.exists() {
        fs::write(&config_path, config_content)?;
    }

    // Create a sample article so `list` has something to show
    let sample_dir = target_dir.join("articles").join("hello-world");
    if !sample_dir.exists() {
        fs::create_dir_all(&sample_dir)?;
        let now = chrono::Utc::now();
        let sample = format!(
            r#"---
title: Hello World
description: Welcome to your new site.
author: John Doe
date: {}
isFeatured: true
---

This is your first article. Edit or delete it, then run `folio-rs list`.
"#,
            now.format("%Y-%m-%d")
        );
        fs::write(sample_dir.join(ENTRY_FILE), sample)?;
    }

    Ok(())
}
