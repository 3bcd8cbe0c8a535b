//! Row ordering by distro family.

/// Known distro families, in display order.
pub const DISTRO_PRIORITY: [&str; 5] = ["fedora", "rhel", "opensuse", "debian", "ubuntu"];

/// Sort key for a distro display name.
///
/// Known families sort by their position in [`DISTRO_PRIORITY`], unknown
/// ones after all of them; ties fall back to the full name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DistroKey {
    rank: usize,
    name: String,
}

/// Compute the sort key for a display name.
pub fn distro_key(name: &str) -> DistroKey {
    let family = name
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase();

    let rank = DISTRO_PRIORITY
        .iter()
        .position(|known| *known == family)
        .unwrap_or(usize::MAX);

    DistroKey {
        rank,
        name: name.to_string(),
    }
}
