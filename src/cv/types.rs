//! Résumé data model

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Skill lists keyed by category name, in display order
pub type Technologies = IndexMap<String, Vec<String>>;

/// A single position held
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Stable key, unique within a résumé
    pub id: String,
    pub title: String,
    pub company: String,
    /// Display string, e.g. "2020&mdash;2023"
    pub dates: String,
}

/// A position together with what was achieved there
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkExperience {
    pub job: Job,
    pub achievements: Vec<String>,
}

/// A personal project entry.
///
/// `name` and `description_html` may embed markup; the content is authored
/// by the site owner and rendered as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub dates: String,
    #[serde(rename = "descriptionHTML")]
    pub description_html: String,
}

/// One entry in the education section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Education {
    Institution {
        qualification: String,
        provider: String,
        dates: String,
    },
    Comment {
        content: String,
    },
}

/// A fully-populated résumé
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    pub summary: String,
    pub technologies: Technologies,
    #[serde(rename = "workExperiences")]
    pub work_experiences: Vec<WorkExperience>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub interests: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_education_serializes_with_kind_tag() {
        let entry = Education::Comment {
            content: "note".to_string(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["kind"], "comment");
        assert_eq!(json["content"], "note");

        let entry = Education::Institution {
            qualification: "Diploma".to_string(),
            provider: "University".to_string(),
            dates: "2009".to_string(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["kind"], "institution");
        assert_eq!(json["provider"], "University");
    }
}
