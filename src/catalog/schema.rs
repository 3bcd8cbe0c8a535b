//! Catalog document types.
//!
//! Both input documents are plain maps:
//!
//! ```yaml
//! # requirements catalog
//! "78":
//!   glibc: "2.17"
//!   gtk+3: ["3.4", "3.10"]
//!
//! # distro catalog
//! Debian 10:
//!   versions:
//!     glibc: "2.28"
//!   release:
//!     date: "2019-07"
//!     eol: "2022-09"
//!     lts: "2024-06"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A version value: one version string or a list of alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VersionSpec {
    /// A single version string.
    One(String),
    /// Several alternatives; any one of them counts.
    Any(Vec<String>),
}

impl VersionSpec {
    /// Non-empty alternatives in declaration order.
    pub fn alternatives(&self) -> Vec<&str> {
        let all: Vec<&str> = match self {
            VersionSpec::One(v) => vec![v.as_str()],
            VersionSpec::Any(vs) => vs.iter().map(String::as_str).collect(),
        };
        all.into_iter().filter(|v| !v.is_empty()).collect()
    }

    /// Whether the value carries no usable version.
    pub fn is_empty(&self) -> bool {
        self.alternatives().is_empty()
    }

    /// Text shown in a report cell.
    pub fn display(&self) -> String {
        self.alternatives().join(", ")
    }
}

impl From<&str> for VersionSpec {
    fn from(s: &str) -> Self {
        VersionSpec::One(s.to_string())
    }
}

impl From<Vec<&str>> for VersionSpec {
    fn from(vs: Vec<&str>) -> Self {
        VersionSpec::Any(vs.into_iter().map(String::from).collect())
    }
}

/// Component name to version mapping.
///
/// Used both for a distro's installed versions and for the minimum
/// versions of a requirement set. Null and empty values read as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionMap(BTreeMap<String, Option<VersionSpec>>);

impl VersionMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the version for a component.
    pub fn insert(&mut self, component: impl Into<String>, spec: impl Into<VersionSpec>) {
        self.0.insert(component.into(), Some(spec.into()));
    }

    /// Version for a component, if present and non-empty.
    pub fn get(&self, component: &str) -> Option<&VersionSpec> {
        self.0
            .get(component)
            .and_then(Option::as_ref)
            .filter(|spec| !spec.is_empty())
    }

    /// Number of entries, including null ones.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Minimum versions for one release.
pub type RequirementSet = VersionMap;

/// Requirement sets keyed by release-version label (e.g. `"78"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequirementsCatalog(BTreeMap<String, RequirementSet>);

impl RequirementsCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a requirement set under a label.
    pub fn insert(&mut self, label: impl Into<String>, set: RequirementSet) {
        self.0.insert(label.into(), set);
    }

    /// Requirement set for a label.
    pub fn get(&self, label: &str) -> Option<&RequirementSet> {
        self.0.get(label)
    }

    /// All labels, in lexical order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of requirement sets.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Release metadata for a distro.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseInfo {
    /// Release date (`YYYY-MM`, or a quarter such as `2019-Q3`).
    #[serde(default)]
    pub date: Option<String>,

    /// End of regular support (`YYYY-MM`).
    #[serde(default)]
    pub eol: Option<String>,

    /// End of long-term support (`YYYY-MM`). Presence marks an LTS track.
    #[serde(default)]
    pub lts: Option<String>,
}

impl ReleaseInfo {
    /// Release date, if present and non-empty.
    pub fn date(&self) -> Option<&str> {
        non_empty(&self.date)
    }

    /// End-of-life date, if present and non-empty.
    pub fn eol(&self) -> Option<&str> {
        non_empty(&self.eol)
    }

    /// LTS end date, if present and non-empty.
    pub fn lts(&self) -> Option<&str> {
        non_empty(&self.lts)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// One distribution entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistroRecord {
    /// Installed component versions.
    #[serde(default)]
    pub versions: VersionMap,

    /// Release metadata.
    #[serde(default)]
    pub release: Option<ReleaseInfo>,
}

/// Distro records keyed by display name (e.g. `"Ubuntu 22.04"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistroCatalog(BTreeMap<String, DistroRecord>);

impl DistroCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a distro record.
    pub fn insert(&mut self, name: impl Into<String>, record: DistroRecord) {
        self.0.insert(name.into(), record);
    }

    /// Record for a display name.
    pub fn get(&self, name: &str) -> Option<&DistroRecord> {
        self.0.get(name)
    }

    /// Iterate over `(name, record)` pairs in lexical name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DistroRecord)> {
        self.0.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// Number of distros.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
