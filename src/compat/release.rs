//! Release date formatting and end-of-life staleness.
//!
//! Dates in the distro catalog have month granularity (`YYYY-MM`). A
//! distro is stale when its effective end of life falls before the first
//! day of the reference month. The LTS date, when present, replaces the
//! plain EOL date for that check.

use chrono::{Datelike, Days, NaiveDate};

use crate::catalog::ReleaseInfo;

/// Placeholder for an unknown date.
pub const UNKNOWN_DATE: &str = "?";

/// Parse a `YYYY-MM` string as the first day of that month.
pub fn parse_year_month(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", text), "%Y-%m-%d").ok()
}

/// Format a release date for display.
///
/// `2019-07` becomes `Jul 2019`. Two hyphenated tokens that are not a
/// calendar month are swapped, so `2019-Q3` becomes `Q3 2019`. Anything
/// else is shown as given.
pub fn format_date(text: Option<&str>) -> String {
    let Some(text) = text else {
        return UNKNOWN_DATE.to_string();
    };

    if let Some(date) = parse_year_month(text) {
        return date.format("%b %Y").to_string();
    }

    match text.split_once('-') {
        Some((year, period)) if !period.contains('-') => format!("{} {}", period, year),
        _ => text.to_string(),
    }
}

/// First day of the month containing `today`.
pub fn reference_month(today: NaiveDate) -> NaiveDate {
    today - Days::new(u64::from(today.day0()))
}

/// Formatted end-of-life cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndOfLife {
    /// Display text, e.g. `Sep 2022 / Jun 2024 (LTS)`.
    pub text: String,
    /// Whether support ended before the reference month.
    pub stale: bool,
}

/// Compute the end-of-life cell for a release.
///
/// An effective end-of-life date that fails to parse never marks the
/// distro stale.
pub fn end_of_life(release: Option<&ReleaseInfo>, today: NaiveDate) -> EndOfLife {
    let eol = release.and_then(ReleaseInfo::eol);
    let lts = release.and_then(ReleaseInfo::lts);

    let (text, effective) = match lts {
        Some(lts) => (
            format!("{} / {} (LTS)", format_date(eol), format_date(Some(lts))),
            Some(lts),
        ),
        None => (format_date(eol), eol),
    };

    let stale = match effective {
        Some(effective) => match parse_year_month(effective) {
            Some(date) => date < reference_month(today),
            None => {
                tracing::warn!(
                    "Unparseable end-of-life date '{}', treating as current",
                    effective
                );
                false
            }
        },
        None => false,
    };

    EndOfLife { text, stale }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn release(eol: Option<&str>, lts: Option<&str>) -> ReleaseInfo {
        ReleaseInfo {
            date: None,
            eol: eol.map(String::from),
            lts: lts.map(String::from),
        }
    }

    #[test]
    fn format_year_month() {
        assert_eq!(format_date(Some("2019-07")), "Jul 2019");
        assert_eq!(format_date(Some("2024-12")), "Dec 2024");
    }

    #[test]
    fn format_quarter_swaps_tokens() {
        assert_eq!(format_date(Some("2019-Q3")), "Q3 2019");
        assert_eq!(format_date(Some("2020-H1")), "H1 2020");
    }

    #[test]
    fn format_absent_is_placeholder() {
        assert_eq!(format_date(None), "?");
    }

    #[test]
    fn format_unrecognized_is_verbatim() {
        assert_eq!(format_date(Some("soon")), "soon");
        assert_eq!(format_date(Some("2019-07-15")), "2019-07-15");
    }

    #[test]
    fn reference_month_truncates() {
        assert_eq!(reference_month(date(2024, 6, 17)), date(2024, 6, 1));
        assert_eq!(reference_month(date(2024, 6, 1)), date(2024, 6, 1));
        assert_eq!(reference_month(date(2024, 2, 29)), date(2024, 2, 1));
    }

    #[test]
    fn past_eol_is_stale() {
        let eol = end_of_life(Some(&release(Some("2020-01"), None)), date(2024, 6, 15));
        assert_eq!(eol.text, "Jan 2020");
        assert!(eol.stale);
    }

    #[test]
    fn future_eol_is_not_stale() {
        let eol = end_of_life(Some(&release(Some("2099-01"), None)), date(2024, 6, 15));
        assert_eq!(eol.text, "Jan 2099");
        assert!(!eol.stale);
    }

    #[test]
    fn eol_in_reference_month_is_not_stale() {
        let today = date(2024, 6, 30);
        assert!(!end_of_life(Some(&release(Some("2024-06"), None)), today).stale);
        assert!(end_of_life(Some(&release(Some("2024-05"), None)), today).stale);
    }

    #[test]
    fn lts_extends_support() {
        let eol = end_of_life(
            Some(&release(Some("2024-01"), Some("2026-01"))),
            date(2024, 6, 15),
        );
        assert_eq!(eol.text, "Jan 2024 / Jan 2026 (LTS)");
        assert!(!eol.stale);
    }

    #[test]
    fn expired_lts_is_stale() {
        let eol = end_of_life(
            Some(&release(Some("2019-01"), Some("2023-01"))),
            date(2024, 6, 15),
        );
        assert!(eol.stale);
    }

    #[test]
    fn lts_without_eol() {
        let eol = end_of_life(Some(&release(None, Some("2026-01"))), date(2024, 6, 15));
        assert_eq!(eol.text, "? / Jan 2026 (LTS)");
        assert!(!eol.stale);
    }

    #[test]
    fn unparseable_eol_fails_open() {
        let eol = end_of_life(Some(&release(Some("2019-Q3"), None)), date(2024, 6, 15));
        assert_eq!(eol.text, "Q3 2019");
        assert!(!eol.stale);
    }

    #[test]
    fn absent_eol_is_placeholder() {
        let eol = end_of_life(Some(&release(None, None)), date(2024, 6, 15));
        assert_eq!(eol.text, "?");
        assert!(!eol.stale);

        let eol = end_of_life(None, date(2024, 6, 15));
        assert_eq!(eol.text, "?");
        assert!(!eol.stale);
    }
}
