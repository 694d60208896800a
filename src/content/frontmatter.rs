//! Front-matter parsing

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Front-matter data from a content file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: String,
    /// Publication date, required to be an ISO-8601 calendar date (YYYY-MM-DD)
    pub date: Option<String>,
    #[serde(deserialize_with = "string_or_vec", default)]
    pub categories: Vec<String>,
    #[serde(deserialize_with = "string_or_vec", default)]
    pub tags: Vec<String>,
    /// Entries are published by default
    #[serde(default = "default_published")]
    pub published: bool,
    pub archived: bool,
    pub foreign_url: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

fn default_published() -> bool {
    true
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            title: None,
            description: String::new(),
            date: None,
            categories: Vec::new(),
            tags: Vec::new(),
            published: true,
            archived: false,
            foreign_url: None,
            extra: HashMap::new(),
        }
    }
}

impl FrontMatter {
    /// Parse front-matter from a content string.
    /// Returns (front_matter, remaining_content).
    ///
    /// A document without a leading `---` fence parses to the defaults with
    /// the whole input as body. Malformed YAML inside the fences is an error
    /// so callers can skip the entry.
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let trimmed = content.trim_start();

        if !trimmed.starts_with("---") {
            return Ok((FrontMatter::default(), content));
        }

        let rest = trimmed[3..].trim_start_matches(['\n', '\r']);
        let Some(end_pos) = rest.find("\n---") else {
            // No closing fence, treat as plain content
            return Ok((FrontMatter::default(), content));
        };

        let yaml_content = &rest[..end_pos];
        let remaining = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        let fm: FrontMatter = serde_yaml::from_str(yaml_content)
            .map_err(|e| anyhow!("invalid front matter: {}", e))?;
        Ok((fm, remaining))
    }

    /// Parse and validate the publication date.
    ///
    /// Dates must be ISO-8601 calendar dates at the authoring boundary;
    /// anything else is malformed data.
    pub fn date(&self) -> Result<NaiveDate> {
        let raw = self
            .date
            .as_deref()
            .ok_or_else(|| anyhow!("missing date"))?;
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map_err(|_| anyhow!("invalid date {:?}, expected YYYY-MM-DD", raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
description: First post
date: 2024-01-15
tags:
  - rust
  - web
categories:
  - programming
---

This is the content.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, Some("Hello World".to_string()));
        assert_eq!(fm.description, "First post");
        assert_eq!(fm.tags, vec!["rust", "web"]);
        assert_eq!(fm.categories, vec!["programming"]);
        assert!(fm.published);
        assert!(!fm.archived);
        assert!(remaining.contains("This is the content."));
    }

    #[test]
    fn test_parse_single_string_tags() {
        let content = "---\ntitle: One\ndate: 2024-01-15\ntags: notes\ncategories: blog\n---\n\nBody.\n";

        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.tags, vec!["notes"]);
        assert_eq!(fm.categories, vec!["blog"]);
    }

    #[test]
    fn test_no_frontmatter_is_default() {
        let content = "Just some markdown.\n";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_malformed_yaml_is_error() {
        let content = "---\ntitle: [unclosed\n---\n\nBody.\n";
        assert!(FrontMatter::parse(content).is_err());
    }

    #[test]
    fn test_iso_date_accepted() {
        let fm = FrontMatter {
            date: Some("2024-06-01".to_string()),
            ..Default::default()
        };
        let date = fm.date().unwrap();
        assert_eq!(date.to_string(), "2024-06-01");
    }

    #[test]
    fn test_non_iso_date_rejected() {
        for raw in ["2024/06/01", "Jun 1, 2024", "01-06-2024", "2024-6-1x"] {
            let fm = FrontMatter {
                date: Some(raw.to_string()),
                ..Default::default()
            };
            assert!(fm.date().is_err(), "{} should be rejected", raw);
        }
    }

    #[test]
    fn test_missing_date_rejected() {
        let fm = FrontMatter::default();
        assert!(fm.date().is_err());
    }

    #[test]
    fn test_foreign_url_passthrough() {
        let content =
            "---\ntitle: Elsewhere\ndate: 2023-03-03\nforeign_url: https://example.com/post\n---\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.foreign_url.as_deref(), Some("https://example.com/post"));
    }
}
