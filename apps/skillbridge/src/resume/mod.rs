//! Skill extraction — pluggable, trait-based capability that turns an uploaded
//! document into a list of skills.
//!
//! Default: `MockSkillExtractor`, which ignores the document and returns a
//! fixed list. A real parser plugs in behind the same trait.

use std::path::Path;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::{Proficiency, Skill};

/// A document handed to an extractor: its file name and raw bytes.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    pub file_name: String,
    pub contents: Vec<u8>,
}

impl ResumeDocument {
    pub async fn read(path: &Path) -> Result<Self, AppError> {
        let contents = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        debug!("Read resume {} ({} bytes)", file_name, contents.len());
        Ok(Self {
            file_name,
            contents,
        })
    }
}

/// Implement this to swap extraction backends without touching the caller.
#[async_trait]
pub trait SkillExtractor: Send + Sync {
    async fn extract_skills(&self, document: &ResumeDocument) -> Result<Vec<Skill>, AppError>;

    /// Short label for logs.
    fn backend(&self) -> &'static str;
}

/// Stand-in extractor. Always returns the same four skills.
pub struct MockSkillExtractor;

#[async_trait]
impl SkillExtractor for MockSkillExtractor {
    async fn extract_skills(&self, document: &ResumeDocument) -> Result<Vec<Skill>, AppError> {
        info!(
            "Mock extraction for '{}' (document contents ignored)",
            document.file_name
        );
        Ok(mock_skills())
    }

    fn backend(&self) -> &'static str {
        "mock"
    }
}

fn mock_skills() -> Vec<Skill> {
    vec![
        Skill::new("javascript", "JavaScript", "Programming")
            .with_proficiency(Proficiency::Intermediate),
        Skill::new("html", "HTML", "Frontend").with_proficiency(Proficiency::Advanced),
        Skill::new("css", "CSS", "Frontend").with_proficiency(Proficiency::Intermediate),
        Skill::new("git", "Git", "Tools").with_proficiency(Proficiency::Intermediate),
    ]
}
