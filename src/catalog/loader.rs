//! Catalog file loading.
//!
//! Catalogs are JSON by default. Files ending in `.yml` or `.yaml` are
//! parsed as YAML with the same document shape.

use crate::catalog::schema::{DistroCatalog, RequirementsCatalog};
use crate::error::{CompatError, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Default requirements catalog file name.
pub const DEFAULT_REQUIREMENTS_FILE: &str = "requirements.json";

/// Default distro catalog file name.
pub const DEFAULT_DISTROS_FILE: &str = "distro_data.json";

/// Serialization format of a catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml") => {
                CatalogFormat::Yaml
            }
            _ => CatalogFormat::Json,
        }
    }
}

/// Load the requirements catalog.
///
/// # Errors
///
/// Returns `CatalogNotFound` if the file doesn't exist.
/// Returns `CatalogParseError` if the document is invalid.
pub fn load_requirements(path: &Path) -> Result<RequirementsCatalog> {
    let catalog: RequirementsCatalog = load_document(path)?;
    tracing::debug!(
        "Loaded {} requirement sets from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

/// Load the distro catalog.
///
/// # Errors
///
/// Returns `CatalogNotFound` if the file doesn't exist.
/// Returns `CatalogParseError` if the document is invalid.
pub fn load_distros(path: &Path) -> Result<DistroCatalog> {
    let catalog: DistroCatalog = load_document(path)?;
    tracing::debug!("Loaded {} distros from {}", catalog.len(), path.display());
    Ok(catalog)
}

fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CompatError::CatalogNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CompatError::Io(e)
        }
    })?;

    parse_document(&content, CatalogFormat::from_path(path), path)
}

/// Parse catalog content in the given format.
///
/// # Arguments
///
/// * `content` - The document text
/// * `format` - JSON or YAML
/// * `source_path` - Path for error reporting
pub fn parse_document<T: DeserializeOwned>(
    content: &str,
    format: CatalogFormat,
    source_path: &Path,
) -> Result<T> {
    let parsed = match format {
        CatalogFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        CatalogFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
    };

    parsed.map_err(|message| CompatError::CatalogParseError {
        path: source_path.to_path_buf(),
        message,
    })
}
