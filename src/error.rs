use std::path::PathBuf;

use thiserror::Error;

use crate::model::ExportCategory;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to access file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Data source error for {category}: {message}")]
    DataSource {
        category: ExportCategory,
        message: String,
    },

    #[error("Render error: {0}")]
    Render(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ReportError {
    /// Build a data source error for a category.
    #[must_use]
    pub fn data_source(category: ExportCategory, message: impl Into<String>) -> Self {
        Self::DataSource {
            category,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
