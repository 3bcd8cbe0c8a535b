//! Compatibility rows derived from the catalogs.

use chrono::NaiveDate;

use crate::catalog::{DistroCatalog, DistroRecord};
use crate::compat::{
    display_text, distro_key, end_of_life, format_date, Color, Component, EndOfLife,
    TieredRequirements,
};

/// One component cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentCell {
    pub component: Component,
    pub color: Color,
    pub text: String,
}

/// One distro row of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityRow {
    /// Distro display name.
    pub name: String,
    /// Headline verdict from the non-toolchain components.
    pub overall: Color,
    /// Component cells in display order.
    pub components: Vec<ComponentCell>,
    /// Formatted release date.
    pub release_date: String,
    /// Formatted end of life with staleness.
    pub end_of_life: EndOfLife,
}

impl CompatibilityRow {
    /// Build the row for one distro.
    pub fn build(
        name: &str,
        record: &DistroRecord,
        requirements: &TieredRequirements<'_>,
        today: NaiveDate,
    ) -> Self {
        let classification = requirements.classify(&record.versions);
        let components = classification
            .iter()
            .map(|(component, color)| ComponentCell {
                component,
                color,
                text: display_text(&record.versions, component),
            })
            .collect();

        let release = record.release.as_ref();
        let overall = classification.overall();
        tracing::debug!("{}: {}", name, overall);

        Self {
            name: name.to_string(),
            overall,
            components,
            release_date: format_date(release.and_then(|r| r.date())),
            end_of_life: end_of_life(release, today),
        }
    }
}

/// All rows, sorted by distro family.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompatibilityMatrix {
    rows: Vec<CompatibilityRow>,
}

impl CompatibilityMatrix {
    /// Classify every distro against the selected tiers.
    pub fn build(
        distros: &DistroCatalog,
        requirements: &TieredRequirements<'_>,
        today: NaiveDate,
    ) -> Self {
        let mut entries: Vec<(&str, &DistroRecord)> = distros.iter().collect();
        entries.sort_by_cached_key(|(name, _)| distro_key(name));

        let rows = entries
            .into_iter()
            .map(|(name, record)| CompatibilityRow::build(name, record, requirements, today))
            .collect();

        Self { rows }
    }

    /// Rows in display order.
    pub fn rows(&self) -> &[CompatibilityRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
