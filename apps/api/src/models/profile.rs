use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// The resume document the chat assistant answers from.
/// Loaded once at startup and never mutated.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeProfile {
    pub personal: PersonalInfo,
    pub summary: String,
    pub technical_level: String,
    pub skills: Skills,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub strengths: Vec<String>,
    pub project_types: Vec<String>,
    pub languages: Languages,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Skills {
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub database: Vec<String>,
    pub tools: Vec<String>,
    pub other: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub period: String,
    pub duration: String,
    pub description: String,
    #[serde(default)]
    pub projects: Option<Vec<ExperienceProject>>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceProject {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub year: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Languages {
    pub turkish: String,
    pub english: String,
}

impl ResumeProfile {
    /// Reads and parses the profile JSON at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read resume profile at {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Invalid resume profile JSON in {}", path.display()))
    }
}
