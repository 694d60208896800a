//! Résumé builder with named variants

mod master;
mod research;
mod types;

pub use types::{Education, Job, Project, Resume, Technologies, WorkExperience};

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error raised for a résumé option outside the known set
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResumeError {
    #[error("unknown resume variant: {0}")]
    UnknownVariant(String),
}

/// One named, self-contained résumé dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeVariant {
    Master,
    Research,
}

impl ResumeVariant {
    /// Known variants, in display order
    pub const ALL: [ResumeVariant; 2] = [ResumeVariant::Master, ResumeVariant::Research];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeVariant::Master => "master",
            ResumeVariant::Research => "research",
        }
    }
}

impl fmt::Display for ResumeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResumeVariant {
    type Err = ResumeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "master" => Ok(ResumeVariant::Master),
            "research" => Ok(ResumeVariant::Research),
            other => Err(ResumeError::UnknownVariant(other.to_string())),
        }
    }
}

/// Build the résumé for a variant.
///
/// Pure function of its input; every call returns a freshly built value.
pub fn create_resume(variant: ResumeVariant) -> Resume {
    match variant {
        ResumeVariant::Master => master::resume(),
        ResumeVariant::Research => research::resume(),
    }
}

/// String-keyed convenience wrapper around [`create_resume`]
pub fn create_resume_for(option: &str) -> Result<Resume, ResumeError> {
    Ok(create_resume(option.parse()?))
}
