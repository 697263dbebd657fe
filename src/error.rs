//! Error types for MindFit operations.
//!
//! This module defines [`MindFitError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Storage write failures inside [`DataManager`](crate::store::DataManager) are
//!   logged and swallowed; the in-memory mirror stays authoritative
//! - Use `MindFitError` for failures the caller must see (bad imports, unknown practices)
//! - Use `anyhow::Error` (via `MindFitError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for MindFit operations.
#[derive(Debug, Error)]
pub enum MindFitError {
    /// A key-value backend rejected an operation.
    #[error("Storage error for '{key}': {message}")]
    Storage { key: String, message: String },

    /// An import document failed the schema gate.
    #[error("Import failed: {message}")]
    InvalidImport { message: String },

    /// No route exists for the requested practice.
    #[error("Unknown practice: {id}")]
    UnknownPractice { id: String },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A prompt was required but no answer could be obtained.
    #[error("Cannot prompt for '{key}' in non-interactive mode (no default value)")]
    PromptUnavailable { key: String },

    /// JSON encode/decode failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for MindFit operations.
pub type Result<T> = std::result::Result<T, MindFitError>;
