//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub description: String,
    pub url: String,
    pub language: String,

    // Content directories (relative to the base directory)
    pub posts_dir: String,
    pub archive_dir: String,
    pub notes_dir: String,

    // Appearance
    /// Default theme when no preference has been persisted
    pub default_theme: String,
    #[serde(default)]
    pub highlight: HighlightConfig,

    // Server
    #[serde(default)]
    pub server: ServerConfig,

    // Gist proxy
    #[serde(default)]
    pub gist: GistConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Folio".to_string(),
            author: String::new(),
            description: String::new(),
            url: "http://localhost".to_string(),
            language: "en".to_string(),

            posts_dir: "content/posts".to_string(),
            archive_dir: "content/posts/archive".to_string(),
            notes_dir: "content/notes".to_string(),

            default_theme: "light".to_string(),
            highlight: HighlightConfig::default(),

            server: ServerConfig::default(),
            gist: GistConfig::default(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config file {:?}", path))?;
        Ok(config)
    }
}

/// Syntax highlighting options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub theme: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "InspiredGitHub".to_string(),
        }
    }
}

/// HTTP server options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 4000,
        }
    }
}

/// Gist proxy options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GistConfig {
    /// Base URL of the GitHub API
    pub api_url: String,
    /// Environment variable holding an optional API token
    pub token_env: String,
}

impl Default for GistConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            token_env: "GH_TOKEN".to_string(),
        }
    }
}
