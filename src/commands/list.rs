//! List site articles

use anyhow::Result;

use crate::Folio;

/// Print the aggregated article listing
pub async fn run(folio: &Folio, include_private: bool) -> Result<()> {
    let articles = folio.list_articles(include_private).await?;

    println!("Articles ({}):", articles.len());
    for article in articles {
        let mut markers = String::new();
        if article.is_featured {
            markers.push_str(" *");
        }
        if article.is_private {
            markers.push_str(" (private)");
        }
        println!(
            "  {} - {} [{}]{}",
            article.date.format("%Y-%m-%d"),
            article.title,
            article.slug,
            markers
        );
    }

    Ok(())
}
