//! Gist proxy client
//!
//! Fetches a single externally hosted code snippet by ID and exposes its
//! first file. One best-effort read, no retries.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::GistConfig;

#[derive(Debug, Error)]
pub enum GistError {
    #[error("gist {0} not found")]
    NotFound(String),

    #[error("gist {0} has no files")]
    Empty(String),

    #[error("failed to fetch gist: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response (status {0})")]
    Status(StatusCode),
}

/// One file of a fetched gist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GistFile {
    pub filename: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub content: String,
}

/// The subset of the gist payload this client cares about.
///
/// `files` keeps the provider's insertion order, so "first file" is
/// deterministic.
#[derive(Debug, Deserialize)]
struct GistPayload {
    files: serde_json::Map<String, serde_json::Value>,
}

impl GistPayload {
    fn into_first_file(self, id: &str) -> Result<GistFile, GistError> {
        let (_, value) = self
            .files
            .into_iter()
            .next()
            .ok_or_else(|| GistError::Empty(id.to_string()))?;
        serde_json::from_value(value).map_err(|_| GistError::Empty(id.to_string()))
    }
}

/// Client for the gist hosting API
pub struct GistClient {
    http: Client,
    api_url: String,
    token: Option<String>,
}

impl GistClient {
    /// Create a client from the site's gist configuration, picking up an
    /// optional token from the configured environment variable
    pub fn new(config: &GistConfig) -> Self {
        let token = std::env::var(&config.token_env).ok().filter(|t| !t.is_empty());
        Self {
            http: Client::new(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Fetch a gist and return its first file
    pub async fn first_file(&self, id: &str) -> Result<GistFile, GistError> {
        let url = format!("{}/gists/{}", self.api_url, id);

        let mut request = self
            .http
            .get(&url)
            .header("User-Agent", concat!("folio-rs/", env!("CARGO_PKG_VERSION")))
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        match response.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => return Err(GistError::NotFound(id.to_string())),
            status => return Err(GistError::Status(status)),
        }

        let payload: GistPayload = response.json().await?;
        payload.into_first_file(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_file_keeps_provider_order() {
        let payload: GistPayload = serde_json::from_str(
            r#"{
                "files": {
                    "main.rs": {"filename": "main.rs", "language": "Rust", "content": "fn main() {}"},
                    "README.md": {"filename": "README.md", "language": "Markdown", "content": "docs"}
                }
            }"#,
        )
        .unwrap();

        let file = payload.into_first_file("abc").unwrap();
        assert_eq!(file.filename, "main.rs");
        assert_eq!(file.language.as_deref(), Some("Rust"));
        assert_eq!(file.content, "fn main() {}");
    }

    #[test]
    fn test_empty_gist_is_error() {
        let payload: GistPayload = serde_json::from_str(r#"{"files": {}}"#).unwrap();
        let err = payload.into_first_file("abc").unwrap_err();
        assert!(matches!(err, GistError::Empty(id) if id == "abc"));
    }

    #[test]
    fn test_missing_optional_fields_tolerated() {
        let payload: GistPayload = serde_json::from_str(
            r#"{"files": {"snippet.py": {"filename": "snippet.py"}}}"#,
        )
        .unwrap();
        let file = payload.into_first_file("abc").unwrap();
        assert_eq!(file.language, None);
        assert_eq!(file.content, "");
    }
}
