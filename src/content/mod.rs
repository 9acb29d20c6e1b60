//! Content module - article discovery and metadata aggregation

mod article;
mod frontmatter;
pub mod loader;
pub mod locator;

pub use article::Article;
pub use frontmatter::ArticleMetadata;
pub use loader::ArticleLoader;
