//! Input catalogs.
//!
//! - [`schema`] - Requirement and distro document types
//! - [`loader`] - Reading catalogs from JSON or YAML files

pub mod loader;
pub mod schema;

pub use loader::{
    load_distros, load_requirements, parse_document, CatalogFormat, DEFAULT_DISTROS_FILE,
    DEFAULT_REQUIREMENTS_FILE,
};
pub use schema::{
    DistroCatalog, DistroRecord, ReleaseInfo, RequirementSet, RequirementsCatalog, VersionMap,
    VersionSpec,
};
