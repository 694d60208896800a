//! Create a new content file

use anyhow::Result;
use clap::ValueEnum;
use std::fs;
use std::path::PathBuf;

use crate::helpers::date::format_iso;
use crate::Folio;

/// Where a new content file goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntryKind {
    Post,
    Archive,
    Note,
}

/// Turn a title into the site's file-name style: whitespace becomes
/// underscores, anything outside [A-Za-z0-9_-] is dropped
fn file_stem(title: &str) -> String {
    title
        .trim()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

fn target_path(folio: &Folio, title: &str, kind: EntryKind) -> Result<PathBuf> {
    let stem = file_stem(title);
    if stem.is_empty() {
        anyhow::bail!("Cannot derive a file name from title {:?}", title);
    }

    let dir = match kind {
        EntryKind::Post => &folio.posts_dir,
        EntryKind::Archive => &folio.archive_dir,
        EntryKind::Note => &folio.notes_dir,
    };
    Ok(dir.join(format!("{}.md", stem)))
}

/// Create a new content file with generated front matter
pub fn run(folio: &Folio, title: &str, kind: EntryKind) -> Result<()> {
    let path = target_path(folio, title, kind)?;
    if path.exists() {
        anyhow::bail!("File already exists: {:?}", path);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let today = chrono::Local::now().date_naive();
    let content = match kind {
        // Notes carry no front matter, their name is derived from the file
        EntryKind::Note => format!("# {}\n", title),
        EntryKind::Post => format!(
            "---\ntitle: {}\ndescription: ''\ndate: {}\n---\n",
            title,
            format_iso(&today)
        ),
        EntryKind::Archive => format!(
            "---\ntitle: {}\ndescription: ''\ndate: {}\narchived: true\n---\n",
            title,
            format_iso(&today)
        ),
    };

    fs::write(&path, content)?;
    println!("Created: {:?}", path);

    Ok(())
}
