//! folio-rs: a personal site engine
//!
//! This crate provides the backend of a personal website: a markdown-backed
//! blog and notes section, a résumé builder with named variants, a theme
//! preference store, and a thin JSON API serving all of it.

pub mod commands;
pub mod config;
pub mod content;
pub mod cv;
pub mod gist;
pub mod helpers;
pub mod server;
pub mod theme;

use anyhow::Result;
use std::path::Path;

/// The main Folio application
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Published posts directory
    pub posts_dir: std::path::PathBuf,
    /// Archived posts directory
    pub archive_dir: std::path::PathBuf,
    /// Notes directory
    pub notes_dir: std::path::PathBuf,
}

impl Folio {
    /// Create a new Folio instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);
        let archive_dir = base_dir.join(&config.archive_dir);
        let notes_dir = base_dir.join(&config.notes_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
            archive_dir,
            notes_dir,
        })
    }

    /// Initialize a new site
    pub fn init(&self) -> Result<()> {
        commands::init::run(self)
    }
}
