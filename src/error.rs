//! Error types for compatibility report generation.
//!
//! This module defines [`CompatError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration defects (missing catalogs, missing requirement labels)
//!   are fatal and surface as a `CompatError` before any output is written
//! - Malformed version or date strings are never errors; the engine
//!   degrades to a best-effort result instead
//! - Use `anyhow::Error` (via `CompatError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for report generation.
#[derive(Debug, Error)]
pub enum CompatError {
    /// Catalog file not found at the given location.
    #[error("Catalog not found: {path}")]
    CatalogNotFound { path: PathBuf },

    /// Failed to parse a catalog file.
    #[error("Failed to parse catalog at {path}: {message}")]
    CatalogParseError { path: PathBuf, message: String },

    /// A requirement set needed by one of the tiers is absent.
    #[error("Missing requirements for version {label}")]
    MissingRequirements { label: String },

    /// The current+3 release number cannot be represented.
    #[error("Invalid release numbers: esr {esr}, release {release}")]
    InvalidVersionLabel { esr: u32, release: u32 },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, CompatError>;
