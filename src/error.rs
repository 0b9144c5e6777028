//! Error types for the portfolio sidebar

use thiserror::Error;

/// Main error type for sidebar operations
#[derive(Error, Debug)]
pub enum SidebarError {
    #[error("Malformed site configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid site configuration: {0}")]
    InvalidConfig(String),

    #[error("Section '{0}' is not a known navigation entry")]
    UnknownSection(String),

    #[error("No browser window available")]
    NoWindow,

    #[error("Failed to attach '{event}' listener: {reason}")]
    Listener { event: &'static str, reason: String },
}

/// Result type for sidebar operations
pub type SidebarResult<T> = Result<T, SidebarError>;
