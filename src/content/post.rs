//! Post model and group selection

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::ops::BitOr;

use super::FrontMatter;

/// A blog post entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// URL-safe identifier derived from the content file name
    pub slug: String,

    /// Short description shown in listings
    pub description: String,

    /// Publication date
    pub date: NaiveDate,

    /// Post categories
    pub categories: Vec<String>,

    /// Post tags
    pub tags: Vec<String>,

    /// Whether the post is published
    pub published: bool,

    /// Whether the post lives in the archive
    pub archived: bool,

    /// External location for posts hosted elsewhere
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_url: Option<String>,
}

impl Post {
    /// Build a post by merging front matter with its derived slug.
    ///
    /// Fails when the metadata is not well formed (missing title or an
    /// invalid date), so callers can skip the entry.
    pub fn from_matter(slug: &str, matter: &FrontMatter) -> anyhow::Result<Self> {
        let title = matter
            .title
            .clone()
            .ok_or_else(|| anyhow::anyhow!("missing title"))?;
        let date = matter.date()?;

        Ok(Self {
            title,
            slug: slug.to_string(),
            description: matter.description.clone(),
            date,
            categories: matter.categories.clone(),
            tags: matter.tags.clone(),
            published: matter.published,
            archived: matter.archived,
            foreign_url: matter.foreign_url.clone(),
        })
    }
}

/// A fixed storage location posts are discovered from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceGroup {
    Published,
    Archived,
}

impl SourceGroup {
    /// All groups, in discovery order
    pub const ALL: [SourceGroup; 2] = [SourceGroup::Published, SourceGroup::Archived];
}

/// Flag set selecting which post groups to aggregate.
///
/// `ALL` is a convenience value that selects every group and additionally
/// bypasses the publication filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostsGroup(u8);

impl PostsGroup {
    /// Nothing selected
    pub const HIDDEN: PostsGroup = PostsGroup(0);
    /// Published posts
    pub const PUBLISHED: PostsGroup = PostsGroup(1 << 0);
    /// Archived posts
    pub const ARCHIVED: PostsGroup = PostsGroup(1 << 1);
    /// Everything, unpublished entries included
    pub const ALL: PostsGroup = PostsGroup(!(!0 << 3));

    /// Whether the selection includes the given storage group
    pub fn contains(self, group: SourceGroup) -> bool {
        let flag = match group {
            SourceGroup::Published => Self::PUBLISHED,
            SourceGroup::Archived => Self::ARCHIVED,
        };
        self.0 & flag.0 == flag.0
    }

    /// Whether this is the convenience value that bypasses the
    /// publication filter
    pub fn is_all(self) -> bool {
        self == Self::ALL
    }
}

impl BitOr for PostsGroup {
    type Output = PostsGroup;

    fn bitor(self, rhs: PostsGroup) -> PostsGroup {
        PostsGroup(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_flags() {
        let selection = PostsGroup::PUBLISHED | PostsGroup::ARCHIVED;
        assert!(selection.contains(SourceGroup::Published));
        assert!(selection.contains(SourceGroup::Archived));
        assert!(!selection.is_all());

        assert!(PostsGroup::ALL.contains(SourceGroup::Published));
        assert!(PostsGroup::ALL.contains(SourceGroup::Archived));
        assert!(PostsGroup::ALL.is_all());

        assert!(!PostsGroup::HIDDEN.contains(SourceGroup::Published));
        assert!(!PostsGroup::HIDDEN.contains(SourceGroup::Archived));
    }

    #[test]
    fn test_post_from_matter() {
        let matter = FrontMatter {
            title: Some("Hello".to_string()),
            date: Some("2024-01-15".to_string()),
            ..Default::default()
        };
        let post = Post::from_matter("Hello_World", &matter).unwrap();
        assert_eq!(post.slug, "Hello_World");
        assert_eq!(post.date.to_string(), "2024-01-15");
        assert!(post.published);
    }

    #[test]
    fn test_post_from_matter_requires_title_and_date() {
        let matter = FrontMatter {
            date: Some("2024-01-15".to_string()),
            ..Default::default()
        };
        assert!(Post::from_matter("x", &matter).is_err());

        let matter = FrontMatter {
            title: Some("No date".to_string()),
            ..Default::default()
        };
        assert!(Post::from_matter("x", &matter).is_err());
    }
}
