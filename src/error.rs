use std::io;
use std::path::PathBuf;

use config::ConfigError;
use thiserror::Error;

use crate::validation::ValidationReport;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("invalid settings: {0}")]
    Settings(#[from] ConfigError),
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error(transparent)]
    Invalid(#[from] ValidationReport),
    #[error("failed to render {page}: {source}")]
    Render {
        page: &'static str,
        source: askama::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl SiteError {
    /// Settings are resolved before the subscriber is installed, so these
    /// errors cannot go through `tracing`.
    pub fn precedes_logging(&self) -> bool {
        matches!(self, SiteError::Settings(_))
    }
}
