//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::Folio;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("content/posts/archive"))?;
    fs::create_dir_all(target_dir.join("content/notes"))?;
    fs::create_dir_all(target_dir.join("static"))?;

    // Create default _config.yml
    let config_content = r#"# Folio Configuration

# Site
title: Folio
author: ''
description: ''
url: http://localhost
language: en

# Content directories
posts_dir: content/posts
archive_dir: content/posts/archive
notes_dir: content/notes

# Appearance
default_theme: light
highlight:
  theme: InspiredGitHub

# Server
server:
  ip: localhost
  port: 4000

# Gist proxy
gist:
  api_url: https://api.github.com
  token_env: GH_TOKEN
"#;

    let config_path = target_dir.join("_config.yml");
    if !config_path.exists() {
        fs::write(&config_path, config_content)?;
    }

    // Create a sample post
    let sample_path = target_dir.join("content/posts/Hello_World.md");
    if !sample_path.exists() {
        let today = chrono::Local::now().date_naive();
        let sample = format!(
            "---\ntitle: Hello World\ndescription: Welcome to the site\ndate: {}\n---\n\nWelcome! Edit or delete this post to get started.\n",
            today.format("%Y-%m-%d")
        );
        fs::write(&sample_path, sample)?;
    }

    Ok(())
}

/// Run the init command against an existing site instance
pub fn run(folio: &Folio) -> Result<()> {
    init_site(&folio.base_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_scaffolds_site() {
        let tmp = tempfile::tempdir().unwrap();
        init_site(tmp.path()).unwrap();

        assert!(tmp.path().join("_config.yml").is_file());
        assert!(tmp.path().join("content/posts/archive").is_dir());
        assert!(tmp.path().join("content/notes").is_dir());
        assert!(tmp.path().join("content/posts/Hello_World.md").is_file());

        // The generated config loads back
        let folio = Folio::new(tmp.path()).unwrap();
        assert_eq!(folio.config.title, "Folio");
    }

    #[test]
    fn test_init_does_not_overwrite_config() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("_config.yml"), "title: Mine\n").unwrap();
        init_site(tmp.path()).unwrap();

        let content = fs::read_to_string(tmp.path().join("_config.yml")).unwrap();
        assert_eq!(content, "title: Mine\n");
    }
}
