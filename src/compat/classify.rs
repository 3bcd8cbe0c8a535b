//! Tiered classification of a distro's components.
//!
//! Each component starts RED. Tiers are evaluated in ESR, current,
//! current+3 order and every satisfied tier overwrites the color, so the
//! last satisfied tier wins. With monotonic requirement data that is also
//! the highest one.

use std::collections::BTreeMap;

use crate::catalog::{RequirementSet, RequirementsCatalog, VersionMap, VersionSpec};
use crate::compat::tier::{Color, Component, Tier};
use crate::compat::version::satisfies;
use crate::error::{CompatError, Result};

/// Text shown for a component with no installed version.
pub const NOT_APPLICABLE: &str = "N/A";

/// The three requirement sets selected for a run.
#[derive(Debug, Clone)]
pub struct TieredRequirements<'a> {
    tiers: Vec<(Tier, String, &'a RequirementSet)>,
}

impl<'a> TieredRequirements<'a> {
    /// Look up the ESR, current and current+3 requirement sets.
    ///
    /// All three labels are derived before any lookup, so an unrepresentable
    /// current+3 is reported ahead of a missing label.
    ///
    /// # Errors
    ///
    /// Returns `InvalidVersionLabel` if current+3 overflows, otherwise
    /// `MissingRequirements` naming the first absent label.
    pub fn select(catalog: &'a RequirementsCatalog, esr: u32, release: u32) -> Result<Self> {
        let labels = Tier::ALL
            .into_iter()
            .map(|tier| {
                tier.release_number(esr, release)
                    .map(|number| (tier, number.to_string()))
                    .ok_or(CompatError::InvalidVersionLabel { esr, release })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut tiers = Vec::with_capacity(labels.len());
        for (tier, label) in labels {
            let set = catalog
                .get(&label)
                .ok_or_else(|| CompatError::MissingRequirements {
                    label: label.clone(),
                })?;
            tracing::debug!("Tier {} uses requirements for version {}", tier, label);
            tiers.push((tier, label, set));
        }

        Ok(Self { tiers })
    }

    /// Version labels in tier order.
    pub fn labels(&self) -> Vec<&str> {
        self.tiers
            .iter()
            .map(|(_, label, _)| label.as_str())
            .collect()
    }

    /// Classify one component of a distro.
    pub fn classify_component(&self, versions: &VersionMap, component: Component) -> Color {
        let installed = alternatives(versions.get(component.key()));
        let mut color = Color::Red;
        let mut missed: Option<Tier> = None;

        for (tier, label, set) in &self.tiers {
            let required = alternatives(set.get(component.key()));
            if satisfies(&installed, &required) {
                if let Some(missed) = missed {
                    tracing::warn!(
                        "{} satisfies the {} tier ({}) but not the {} tier",
                        component,
                        tier,
                        label,
                        missed
                    );
                }
                color = tier.color();
            } else if missed.is_none() {
                missed = Some(*tier);
            }
        }

        color
    }

    /// Classify every tracked component of a distro.
    pub fn classify(&self, versions: &VersionMap) -> Classification {
        let colors = Component::ALL
            .into_iter()
            .map(|component| (component, self.classify_component(versions, component)))
            .collect();
        Classification { colors }
    }
}

fn alternatives(spec: Option<&VersionSpec>) -> Vec<&str> {
    spec.map(VersionSpec::alternatives).unwrap_or_default()
}

/// Per-component colors for one distro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    colors: BTreeMap<Component, Color>,
}

impl Classification {
    /// Color of one component.
    pub fn color(&self, component: Component) -> Color {
        self.colors.get(&component).copied().unwrap_or(Color::Red)
    }

    /// Components and colors in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Component, Color)> + '_ {
        self.colors.iter().map(|(c, color)| (*c, *color))
    }

    /// Headline color: the best color among non-toolchain components.
    pub fn overall(&self) -> Color {
        self.iter()
            .filter(|(component, _)| !component.is_toolchain())
            .map(|(_, color)| color)
            .max()
            .unwrap_or(Color::Red)
    }
}

/// Text shown in a component's cell.
pub fn display_text(versions: &VersionMap, component: Component) -> String {
    versions
        .get(component.key())
        .map(VersionSpec::display)
        .unwrap_or_else(|| NOT_APPLICABLE.to_string())
}
