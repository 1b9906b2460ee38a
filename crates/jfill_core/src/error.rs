//! Error types for jfill.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for jfill operations.
pub type FillResult<T> = Result<T, FillError>;

/// Errors that can occur while loading data, rendering or writing output.
#[derive(Error, Debug)]
pub enum FillError {
    #[error("Data file not found: {}", .0.display())]
    DataFileMissing(PathBuf),

    #[error("Could not read data file {}: {source}", .path.display())]
    DataRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Data file {} must contain a mapping at the top level, found {found}", .path.display())]
    DataNotMapping { path: PathBuf, found: &'static str },

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Template rendering failed: {0}")]
    Rendering(#[from] minijinja::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FillError {
    /// Whether the error comes from reading or parsing the data file.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            FillError::DataFileMissing(_)
                | FillError::DataRead { .. }
                | FillError::DataNotMapping { .. }
                | FillError::Yaml(_)
                | FillError::Json(_)
        )
    }

    /// Whether the error comes from template lookup or evaluation.
    pub fn is_template_error(&self) -> bool {
        matches!(
            self,
            FillError::TemplateNotFound(_) | FillError::Rendering(_)
        )
    }
}
