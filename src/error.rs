use rust_decimal::Decimal;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvoiceError {
    #[error("Invalid due date '{0}'. Expected a real calendar date as YYYYMMDD (e.g., 20250215)")]
    InvalidDateFormat(String),

    #[error("The following required arguments are missing: {}", .0.join(", "))]
    MissingRequiredFields(Vec<String>),

    #[error("Invalid total value {0}: must not be negative")]
    NegativeTotal(Decimal),

    #[error("Cannot write invoice to {path}: {source}")]
    OutputDirectoryUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file not found: {0}")]
    ConfigFileNotFound(PathBuf),

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to generate PDF: {0}")]
    PdfGeneration(String),

    #[error("Failed to serialize document: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl InvoiceError {
    /// Errors caused by what the user typed rather than by the environment.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            InvoiceError::InvalidDateFormat(_)
                | InvoiceError::MissingRequiredFields(_)
                | InvoiceError::NegativeTotal(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, InvoiceError>;
