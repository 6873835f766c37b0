//! Catalog — read-only reference data injected into the analysis.
//!
//! Three tables: career paths, curated resources keyed by skill id, and
//! learning-time estimates keyed by skill display name. Built-in defaults are
//! embedded at compile time; each table can be replaced from a JSON file.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::models::skill::is_canonical_id;
use crate::models::{CareerPath, Resource};

const BUILTIN_CAREERS: &str = include_str!("../../data/careers.json");
const BUILTIN_RESOURCES: &str = include_str!("../../data/resources.json");
const BUILTIN_LEARNING_TIMES: &str = include_str!("../../data/learning_times.json");

/// Optional file overrides for each catalog table.
#[derive(Debug, Clone, Default)]
pub struct CatalogSources {
    pub careers: Option<PathBuf>,
    pub resources: Option<PathBuf>,
    pub learning_times: Option<PathBuf>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub careers: Vec<CareerPath>,
    pub resources: HashMap<String, Vec<Resource>>,
    pub learning_times: HashMap<String, String>,
}

impl Catalog {
    /// Parses the embedded default tables.
    pub fn builtin() -> Result<Self, AppError> {
        Self::from_json(BUILTIN_CAREERS, BUILTIN_RESOURCES, BUILTIN_LEARNING_TIMES)
    }

    /// Loads each table from its configured file, falling back to the embedded default.
    pub fn load(sources: &CatalogSources) -> Result<Self, AppError> {
        let careers = read_or_builtin(sources.careers.as_deref(), BUILTIN_CAREERS)?;
        let resources = read_or_builtin(sources.resources.as_deref(), BUILTIN_RESOURCES)?;
        let learning_times =
            read_or_builtin(sources.learning_times.as_deref(), BUILTIN_LEARNING_TIMES)?;

        let catalog = Self::from_json(&careers, &resources, &learning_times)?;
        info!(
            "Catalog loaded: {} careers, {} skills with curated resources, {} learning-time estimates",
            catalog.careers.len(),
            catalog.resources.len(),
            catalog.learning_times.len()
        );
        Ok(catalog)
    }

    pub fn from_json(
        careers: &str,
        resources: &str,
        learning_times: &str,
    ) -> Result<Self, AppError> {
        let catalog = Catalog {
            careers: serde_json::from_str(careers)
                .map_err(|e| AppError::Catalog(format!("careers table: {e}")))?,
            resources: serde_json::from_str(resources)
                .map_err(|e| AppError::Catalog(format!("resources table: {e}")))?,
            learning_times: serde_json::from_str(learning_times)
                .map_err(|e| AppError::Catalog(format!("learning-times table: {e}")))?,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn career(&self, id: &str) -> Option<&CareerPath> {
        self.careers.iter().find(|c| c.id == id)
    }

    /// Like [`Catalog::career`], but a missing id is an error.
    pub fn require_career(&self, id: &str) -> Result<&CareerPath, AppError> {
        self.career(id)
            .ok_or_else(|| AppError::NotFound(format!("Career '{id}' not found")))
    }

    pub fn curated_resources(&self, skill_id: &str) -> Option<&[Resource]> {
        self.resources.get(skill_id).map(Vec::as_slice)
    }

    pub fn learning_time(&self, skill_name: &str) -> Option<&str> {
        self.learning_times.get(skill_name).map(String::as_str)
    }

    /// Rejects empty or duplicate career ids and empty skill ids.
    /// Non-canonical skill ids only produce a warning.
    fn validate(&self) -> Result<(), AppError> {
        let mut seen = HashSet::new();
        for career in &self.careers {
            if career.id.trim().is_empty() {
                return Err(AppError::Catalog(format!(
                    "career '{}' has an empty id",
                    career.title
                )));
            }
            if !seen.insert(career.id.as_str()) {
                return Err(AppError::Catalog(format!(
                    "duplicate career id '{}'",
                    career.id
                )));
            }
            for skill in career.all_skills() {
                if skill.id.trim().is_empty() {
                    return Err(AppError::Catalog(format!(
                        "career '{}' lists skill '{}' with an empty id",
                        career.id, skill.name
                    )));
                }
                if !is_canonical_id(&skill.id) {
                    warn!(
                        "Career '{}': skill id '{}' is not lowercase/hyphenated",
                        career.id, skill.id
                    );
                }
            }
        }
        Ok(())
    }
}

fn read_or_builtin(path: Option<&Path>, builtin: &str) -> Result<String, AppError> {
    match path {
        Some(path) => {
            debug!("Reading catalog table from {}", path.display());
            std::fs::read_to_string(path).map_err(|e| {
                AppError::Catalog(format!("cannot read {}: {e}", path.display()))
            })
        }
        None => Ok(builtin.to_string()),
    }
}
