//! Post aggregation - filter, dedup and sort discovered entries

use anyhow::Result;
use std::collections::HashSet;

use super::{ContentSource, Post, PostsGroup, SourceGroup};

/// Collect posts from the selected groups, newest first.
///
/// An entry is kept when its group is selected and it is published, unless
/// the selection is the `ALL` convenience value, which bypasses the
/// publication filter. Entries whose metadata is not well formed are skipped
/// by the source. When two entries derive the same slug, the first one in
/// path-sorted order wins.
pub fn collect_posts(source: &dyn ContentSource, selection: PostsGroup) -> Result<Vec<Post>> {
    let mut posts = Vec::new();
    let mut seen = HashSet::new();

    for group in SourceGroup::ALL {
        if !selection.contains(group) {
            continue;
        }

        for entry in source.entries(group)? {
            let post = match Post::from_matter(&entry.slug, &entry.matter) {
                Ok(post) => post,
                Err(e) => {
                    tracing::warn!("Skipping entry {:?}: {}", entry.slug, e);
                    continue;
                }
            };

            if !seen.insert(post.slug.clone()) {
                tracing::warn!("Duplicate slug {:?}, keeping the first entry", post.slug);
                continue;
            }

            if post.published || selection.is_all() {
                posts.push(post);
            }
        }
    }

    // Stable sort keeps the prior order for equal dates
    posts.sort_by(|a, b| b.date.cmp(&a.date));

    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentEntry, FrontMatter};

    /// In-memory source for exercising the aggregation logic without files
    struct FakeSource {
        published: Vec<ContentEntry>,
        archived: Vec<ContentEntry>,
    }

    impl ContentSource for FakeSource {
        fn entries(&self, group: SourceGroup) -> Result<Vec<ContentEntry>> {
            Ok(match group {
                SourceGroup::Published => self.published.clone(),
                SourceGroup::Archived => self.archived.clone(),
            })
        }
    }

    fn entry(slug: &str, date: &str, published: bool) -> ContentEntry {
        ContentEntry {
            slug: slug.to_string(),
            matter: FrontMatter {
                title: Some(slug.replace('_', " ")),
                date: Some(date.to_string()),
                published,
                ..Default::default()
            },
            body: String::new(),
        }
    }

    #[test]
    fn test_published_filter() {
        let source = FakeSource {
            published: vec![
                entry("Visible", "2024-01-01", true),
                entry("Draft", "2024-02-01", false),
            ],
            archived: vec![],
        };

        let posts = collect_posts(&source, PostsGroup::PUBLISHED).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "Visible");
    }

    #[test]
    fn test_all_bypasses_publication_filter() {
        let source = FakeSource {
            published: vec![
                entry("Visible", "2024-01-01", true),
                entry("Draft", "2024-02-01", false),
            ],
            archived: vec![entry("Old_Draft", "2020-01-01", false)],
        };

        let posts = collect_posts(&source, PostsGroup::ALL).unwrap();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["Draft", "Visible", "Old_Draft"]);
    }

    #[test]
    fn test_group_selection_still_gates_all_groups() {
        let source = FakeSource {
            published: vec![entry("New", "2024-01-01", true)],
            archived: vec![entry("Old", "2020-01-01", true)],
        };

        let only_published = collect_posts(&source, PostsGroup::PUBLISHED).unwrap();
        assert_eq!(only_published.len(), 1);
        assert_eq!(only_published[0].slug, "New");

        let both = collect_posts(&source, PostsGroup::PUBLISHED | PostsGroup::ARCHIVED).unwrap();
        assert_eq!(both.len(), 2);
    }

    #[test]
    fn test_sorted_by_date_descending() {
        let source = FakeSource {
            published: vec![
                entry("Older", "2023-01-01", true),
                entry("Newer", "2024-06-01", true),
            ],
            archived: vec![],
        };

        let posts = collect_posts(&source, PostsGroup::PUBLISHED).unwrap();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["Newer", "Older"]);
    }

    #[test]
    fn test_equal_dates_keep_prior_order() {
        let source = FakeSource {
            published: vec![
                entry("First", "2024-01-01", true),
                entry("Second", "2024-01-01", true),
            ],
            archived: vec![],
        };

        let posts = collect_posts(&source, PostsGroup::PUBLISHED).unwrap();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["First", "Second"]);
    }

    #[test]
    fn test_empty_selection_yields_empty_list() {
        let source = FakeSource {
            published: vec![entry("Post", "2024-01-01", true)],
            archived: vec![entry("Old", "2020-01-01", true)],
        };

        let posts = collect_posts(&source, PostsGroup::HIDDEN).unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn test_malformed_metadata_skipped() {
        let mut bad = entry("Bad", "2024-01-01", true);
        bad.matter.title = None;
        let source = FakeSource {
            published: vec![bad, entry("Good", "2024-01-02", true)],
            archived: vec![],
        };

        let posts = collect_posts(&source, PostsGroup::PUBLISHED).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "Good");
    }

    #[test]
    fn test_slug_collision_first_wins() {
        let mut dup = entry("Post", "2024-05-05", true);
        dup.matter.title = Some("Duplicate".to_string());
        let source = FakeSource {
            published: vec![entry("Post", "2024-01-01", true), dup],
            archived: vec![],
        };

        let posts = collect_posts(&source, PostsGroup::PUBLISHED).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Post");
        assert_eq!(posts[0].date.to_string(), "2024-01-01");
    }
}
