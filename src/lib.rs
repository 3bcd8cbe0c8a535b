//! distro-compat - Linux distribution compatibility matrix.
//!
//! Compares the library and toolchain versions shipped by each distro
//! against the minimum requirements of three release tiers (ESR, current,
//! current+3) and renders the result as a colored HTML table.
//!
//! # Modules
//!
//! - [`catalog`] - Requirement and distro catalogs
//! - [`cli`] - Command-line interface and argument parsing
//! - [`compat`] - Version comparison, tier classification, staleness
//! - [`error`] - Error types and result aliases
//! - [`report`] - Row assembly and HTML rendering
//!
//! # Example
//!
//! ```
//! use distro_compat::compat::{compare_versions, satisfies};
//! use std::cmp::Ordering;
//!
//! assert_eq!(compare_versions("2.10", "2.9"), Ordering::Greater);
//! assert!(satisfies(&["7", "8"], &["8"]));
//! ```

pub mod catalog;
pub mod cli;
pub mod compat;
pub mod error;
pub mod report;

pub use error::{CompatError, Result};
