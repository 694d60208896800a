//! Content discovery - enumerates markdown entries from fixed storage locations

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{FrontMatter, SourceGroup};
use crate::Folio;

/// A discovered content entry: a path-derived slug paired with its metadata
/// and body
#[derive(Debug, Clone)]
pub struct ContentEntry {
    pub slug: String,
    pub matter: FrontMatter,
    pub body: String,
}

/// Supplies content entries for a storage group.
///
/// The aggregation logic only depends on this capability, so it can be
/// exercised without real files.
pub trait ContentSource {
    /// Enumerate entries for the group, in path-sorted order
    fn entries(&self, group: SourceGroup) -> Result<Vec<ContentEntry>>;
}

/// Filesystem-backed content source
pub struct FsContentSource {
    posts_dir: PathBuf,
    archive_dir: PathBuf,
}

impl FsContentSource {
    pub fn new(posts_dir: PathBuf, archive_dir: PathBuf) -> Self {
        Self {
            posts_dir,
            archive_dir,
        }
    }

    /// Build a source from the site's configured directories
    pub fn from_site(folio: &Folio) -> Self {
        Self::new(folio.posts_dir.clone(), folio.archive_dir.clone())
    }

    fn dir_for(&self, group: SourceGroup) -> &Path {
        match group {
            SourceGroup::Published => &self.posts_dir,
            SourceGroup::Archived => &self.archive_dir,
        }
    }

    fn load_entry(path: &Path) -> Result<ContentEntry> {
        let content = fs::read_to_string(path)?;
        let (matter, body) = FrontMatter::parse(&content)?;
        Ok(ContentEntry {
            slug: derive_slug(path),
            matter,
            body: body.to_string(),
        })
    }
}

impl ContentSource for FsContentSource {
    fn entries(&self, group: SourceGroup) -> Result<Vec<ContentEntry>> {
        let dir = self.dir_for(group);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut paths: Vec<PathBuf> = WalkDir::new(dir)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .map(|e| e.into_path())
            .filter(|p| p.is_file() && is_markdown_file(p))
            .collect();
        paths.sort();

        let mut entries = Vec::new();
        for path in paths {
            match Self::load_entry(&path) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    tracing::warn!("Skipping content entry {:?}: {}", path, e);
                }
            }
        }

        Ok(entries)
    }
}

/// Resolve a single entry by slug within a directory.
///
/// Returns `None` when no matching content file exists. Slugs containing
/// path separators or parent references never resolve.
pub fn load_slug(dir: &Path, slug: &str) -> Result<Option<ContentEntry>> {
    if slug.is_empty() || slug.contains(['/', '\\']) || slug.contains("..") {
        return Ok(None);
    }

    let path = dir.join(format!("{}.md", slug));
    if !path.is_file() {
        return Ok(None);
    }

    FsContentSource::load_entry(&path).map(Some)
}

/// Derive the slug from the trailing path segment, extension stripped.
///
/// The file name is kept verbatim: `My_Post.md` yields `My_Post`.
pub fn derive_slug(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled")
        .to_string()
}

/// Check if a file is a markdown file
pub fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_derive_slug() {
        assert_eq!(derive_slug(Path::new("path/to/My_Post.md")), "My_Post");
        assert_eq!(derive_slug(Path::new("Simple.markdown")), "Simple");
        // Idempotent over repeated derivation of the same entry
        assert_eq!(
            derive_slug(Path::new("path/to/My_Post.md")),
            derive_slug(Path::new("other/My_Post.md"))
        );
    }

    #[test]
    fn test_entries_are_path_sorted_and_filtered() {
        let tmp = tempfile::tempdir().unwrap();
        let posts = tmp.path().join("posts");
        let archive = posts.join("archive");
        fs::create_dir_all(&archive).unwrap();

        write(&posts, "B_Second.md", "---\ntitle: B\ndate: 2024-01-02\n---\n");
        write(&posts, "A_First.md", "---\ntitle: A\ndate: 2024-01-01\n---\n");
        write(&posts, "notes.txt", "not markdown");
        write(&archive, "Old.md", "---\ntitle: Old\ndate: 2020-01-01\n---\n");

        let source = FsContentSource::new(posts.clone(), archive.clone());

        let published = source.entries(SourceGroup::Published).unwrap();
        let slugs: Vec<_> = published.iter().map(|e| e.slug.as_str()).collect();
        // archive/ is below posts/ but discovery stays within the group's
        // own directory level
        assert_eq!(slugs, vec!["A_First", "B_Second"]);

        let archived = source.entries(SourceGroup::Archived).unwrap();
        assert_eq!(archived.len(), 1);
        assert_eq!(archived[0].slug, "Old");
    }

    #[test]
    fn test_malformed_entry_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let posts = tmp.path().join("posts");
        fs::create_dir_all(&posts).unwrap();

        write(&posts, "Good.md", "---\ntitle: Good\ndate: 2024-01-01\n---\n");
        write(&posts, "Bad.md", "---\ntitle: [unclosed\n---\n");

        let source = FsContentSource::new(posts, tmp.path().join("archive"));
        let entries = source.entries(SourceGroup::Published).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].slug, "Good");
    }

    #[test]
    fn test_missing_dir_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let source = FsContentSource::new(tmp.path().join("nope"), tmp.path().join("nope2"));
        assert!(source.entries(SourceGroup::Published).unwrap().is_empty());
    }
}
