//! Loose version comparison.
//!
//! Versions are split into numeric runs, lowercase alphabetic runs, and any
//! other character runs; dots only separate. Segments compare pairwise:
//! numbers numerically, everything else lexically, and a number always
//! sorts below a non-number. The shorter version is padded with zeros, so
//! `2.10` equals `2.10.0` and is greater than `2.9`.
//!
//! Parsing never fails. Garbage in yields a best-effort ordering.

use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

static SEGMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+|[a-z]+|[^\da-z.]+").expect("segment regex is valid"));

/// Version assumed when a value is absent.
pub const ZERO_VERSION: &str = "0";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Digits with leading zeros stripped (`""` is zero).
    Number(String),
    Text(String),
}

impl Segment {
    fn parse(token: &str) -> Self {
        if token.bytes().all(|b| b.is_ascii_digit()) {
            Segment::Number(token.trim_start_matches('0').to_string())
        } else {
            Segment::Text(token.to_string())
        }
    }

    fn zero() -> Self {
        Segment::Number(String::new())
    }
}

impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // Stripped digit strings: longer is bigger, same length is lexical.
            (Segment::Number(a), Segment::Number(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            (Segment::Number(_), Segment::Text(_)) => Ordering::Less,
            (Segment::Text(_), Segment::Number(_)) => Ordering::Greater,
            (Segment::Text(a), Segment::Text(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A parsed loosely-formatted version string.
#[derive(Debug, Clone)]
pub struct LooseVersion {
    raw: String,
    segments: Vec<Segment>,
}

impl LooseVersion {
    /// Parse a version string.
    pub fn parse(s: &str) -> Self {
        let segments = SEGMENT_REGEX
            .find_iter(s)
            .map(|m| Segment::parse(m.as_str()))
            .collect();

        Self {
            raw: s.to_string(),
            segments,
        }
    }
}

impl From<&str> for LooseVersion {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl fmt::Display for LooseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl Ord for LooseVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        let zero = Segment::zero();

        for idx in 0..len {
            let a = self.segments.get(idx).unwrap_or(&zero);
            let b = other.segments.get(idx).unwrap_or(&zero);
            match a.cmp(b) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }

        Ordering::Equal
    }
}

impl PartialOrd for LooseVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for LooseVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for LooseVersion {}

/// Compare two version strings loosely.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    LooseVersion::parse(a).cmp(&LooseVersion::parse(b))
}

/// Whether any installed alternative is at least any required alternative.
///
/// Empty slices stand for [`ZERO_VERSION`], so a missing requirement is
/// met by anything and a missing installation only meets a zero
/// requirement.
pub fn satisfies(installed: &[&str], required: &[&str]) -> bool {
    let installed = or_zero(installed);
    let required = or_zero(required);

    installed.iter().any(|have| {
        let have = LooseVersion::parse(have);
        required
            .iter()
            .any(|need| have >= LooseVersion::parse(need))
    })
}

fn or_zero<'a>(versions: &[&'a str]) -> Vec<&'a str> {
    if versions.is_empty() {
        vec![ZERO_VERSION]
    } else {
        versions.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_segments_compare_numerically() {
        assert_eq!(compare_versions("2.10", "2.9"), Ordering::Greater);
        assert_eq!(compare_versions("2.9", "2.10"), Ordering::Less);
        assert_eq!(compare_versions("10.0", "9.99.99"), Ordering::Greater);
    }

    #[test]
    fn equal_versions() {
        assert_eq!(compare_versions("2.28", "2.28"), Ordering::Equal);
        assert_eq!(compare_versions("0", "0"), Ordering::Equal);
    }

    #[test]
    fn missing_trailing_segments_are_zero() {
        assert_eq!(compare_versions("2.10", "2.10.0"), Ordering::Equal);
        assert_eq!(compare_versions("3", "3.0.0.0"), Ordering::Equal);
        assert_eq!(compare_versions("3", "3.0.1"), Ordering::Less);
    }

    #[test]
    fn leading_zeros_are_ignored() {
        assert_eq!(compare_versions("1.01", "1.1"), Ordering::Equal);
        assert_eq!(compare_versions("1.010", "1.9"), Ordering::Greater);
    }

    #[test]
    fn huge_numbers_do_not_overflow() {
        assert_eq!(
            compare_versions("1.99999999999999999999999", "1.100000000000000000000000"),
            Ordering::Less
        );
    }

    #[test]
    fn alpha_suffix_follows_numeric_run() {
        assert_eq!(compare_versions("1.0a", "1.0"), Ordering::Greater);
        assert_eq!(compare_versions("1.0a", "1.0b"), Ordering::Less);
        assert_eq!(compare_versions("1.0b", "1.1"), Ordering::Less);
    }

    #[test]
    fn numbers_sort_below_text() {
        assert_eq!(compare_versions("1.5", "1.rc"), Ordering::Less);
    }

    #[test]
    fn separators_other_than_dot_are_segments() {
        assert_eq!(compare_versions("4.8.5-rc1", "4.8.5-rc2"), Ordering::Less);
        assert_eq!(compare_versions("6.0.21", "6.0.19"), Ordering::Greater);
    }

    #[test]
    fn malformed_input_degrades() {
        assert_eq!(compare_versions("", "0"), Ordering::Equal);
        assert_eq!(compare_versions("...", ""), Ordering::Equal);
        assert_eq!(compare_versions("garbage", "1.0"), Ordering::Greater);
    }

    #[test]
    fn loose_version_display_keeps_raw() {
        let v = LooseVersion::from("2.17-el7");
        assert_eq!(v.to_string(), "2.17-el7");
    }

    #[test]
    fn loose_version_equality_uses_padding() {
        assert_eq!(LooseVersion::parse("2.4"), LooseVersion::parse("2.4.0"));
        assert_ne!(LooseVersion::parse("2.4"), LooseVersion::parse("2.40"));
    }

    #[test]
    fn satisfies_equal_counts() {
        assert!(satisfies(&["2.17"], &["2.17"]));
    }

    #[test]
    fn satisfies_any_installed_alternative() {
        assert!(satisfies(&["7", "8"], &["8"]));
        assert!(!satisfies(&["6", "7"], &["8"]));
    }

    #[test]
    fn satisfies_any_required_alternative() {
        assert!(satisfies(&["3.4.2"], &["3.10", "3.4"]));
        assert!(!satisfies(&["3.2"], &["3.10", "3.4"]));
    }

    #[test]
    fn missing_requirement_is_always_met() {
        assert!(satisfies(&[], &[]));
        assert!(satisfies(&["1.0"], &[]));
    }

    #[test]
    fn missing_installation_fails_positive_requirement() {
        assert!(!satisfies(&[], &["2.17"]));
        assert!(satisfies(&[], &["0"]));
    }
}
