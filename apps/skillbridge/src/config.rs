use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::catalog::CatalogSources;

/// Application configuration loaded from environment variables.
/// Every variable is optional; the built-in catalogs are used when no path is set.
#[derive(Debug, Clone)]
pub struct Config {
    pub careers_path: Option<PathBuf>,
    pub resources_path: Option<PathBuf>,
    pub learning_times_path: Option<PathBuf>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            careers_path: optional_path("SKILLBRIDGE_CAREERS_PATH")?,
            resources_path: optional_path("SKILLBRIDGE_RESOURCES_PATH")?,
            learning_times_path: optional_path("SKILLBRIDGE_LEARNING_TIMES_PATH")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn catalog_sources(&self) -> CatalogSources {
        CatalogSources {
            careers: self.careers_path.clone(),
            resources: self.resources_path.clone(),
            learning_times: self.learning_times_path.clone(),
        }
    }
}

fn optional_path(key: &str) -> Result<Option<PathBuf>> {
    match std::env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(PathBuf::from(value.trim()))),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Environment variable '{key}' is not valid UTF-8")),
    }
}
