//! Content module - posts, notes, front matter and content discovery

mod aggregator;
mod frontmatter;
mod markdown;
pub mod notes;
mod post;
pub mod source;

pub use aggregator::collect_posts;
pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
pub use post::{Post, PostsGroup, SourceGroup};
pub use source::{load_slug, ContentEntry, ContentSource, FsContentSource};
