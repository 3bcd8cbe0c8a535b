//! Version compatibility engine.
//!
//! - [`version`] - Loose version parsing and comparison
//! - [`tier`] - Requirement tiers, colors, and tracked components
//! - [`classify`] - Tiered per-component classification and row headline
//! - [`release`] - Release date formatting and end-of-life staleness
//! - [`sort`] - Distro row ordering

pub mod classify;
pub mod release;
pub mod sort;
pub mod tier;
pub mod version;

pub use classify::{display_text, Classification, TieredRequirements, NOT_APPLICABLE};
pub use release::{end_of_life, format_date, reference_month, EndOfLife, UNKNOWN_DATE};
pub use sort::{distro_key, DistroKey, DISTRO_PRIORITY};
pub use tier::{Color, Component, Rgb, Tier};
pub use version::{compare_versions, satisfies, LooseVersion};
