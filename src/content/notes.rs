//! Notes listing

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use walkdir::WalkDir;

use super::source::{derive_slug, is_markdown_file};

/// A note reference: its slug plus the display name derived from it
#[derive(Debug, Clone, Serialize)]
pub struct NoteSummary {
    pub slug: String,
    pub name: String,
}

/// Derive a note's display name from its slug: underscores become spaces,
/// the result is lower-cased
pub fn display_name(slug: &str) -> String {
    slug.replace('_', " ").to_lowercase()
}

/// List all notes in a directory, in path-sorted order
pub fn list_notes(notes_dir: &Path) -> Result<Vec<NoteSummary>> {
    if !notes_dir.exists() {
        return Ok(Vec::new());
    }

    let mut slugs: Vec<String> = WalkDir::new(notes_dir)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file() && is_markdown_file(p))
        .map(|p| derive_slug(&p))
        .collect();
    slugs.sort();

    Ok(slugs
        .into_iter()
        .map(|slug| {
            let name = display_name(&slug);
            NoteSummary { slug, name }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("Borrow_Checker"), "borrow checker");
        assert_eq!(display_name("plain"), "plain");
    }

    #[test]
    fn test_list_notes_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        let notes = tmp.path().join("notes");
        fs::create_dir_all(&notes).unwrap();
        fs::write(notes.join("Traits.md"), "Trait notes\n").unwrap();
        fs::write(notes.join("Borrow_Checker.md"), "Borrowing\n").unwrap();
        fs::write(notes.join("scratch.txt"), "not a note\n").unwrap();

        let listed = list_notes(&notes).unwrap();
        let slugs: Vec<_> = listed.iter().map(|n| n.slug.as_str()).collect();
        assert_eq!(slugs, vec!["Borrow_Checker", "Traits"]);
        assert_eq!(listed[0].name, "borrow checker");
    }

    #[test]
    fn test_missing_notes_dir_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(list_notes(&tmp.path().join("none")).unwrap().is_empty());
    }
}
