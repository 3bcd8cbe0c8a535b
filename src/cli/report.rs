//! Report command implementation.
//!
//! Loads both catalogs, classifies every distro and writes the HTML table.
//! The document is rendered in memory first, so a failure writes nothing.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDate};

use crate::catalog::{load_distros, load_requirements};
use crate::cli::args::Cli;
use crate::compat::TieredRequirements;
use crate::error::Result;
use crate::report::{render_html, CompatibilityMatrix};

/// Options for one report run.
#[derive(Debug, Clone)]
pub struct ReportArgs {
    pub esr: u32,
    pub release: u32,
    pub requirements: PathBuf,
    pub distros: PathBuf,
    pub today: Option<NaiveDate>,
}

impl From<&Cli> for ReportArgs {
    fn from(cli: &Cli) -> Self {
        Self {
            esr: cli.esr,
            release: cli.release,
            requirements: cli.requirements.clone(),
            distros: cli.distros.clone(),
            today: cli.today,
        }
    }
}

/// The report command implementation.
pub struct ReportCommand {
    args: ReportArgs,
}

impl ReportCommand {
    /// Create a new report command.
    pub fn new(args: ReportArgs) -> Self {
        Self { args }
    }

    /// Reference date for staleness checks.
    pub fn today(&self) -> NaiveDate {
        self.args
            .today
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Build the HTML document.
    ///
    /// # Errors
    ///
    /// Fails if a catalog cannot be loaded or a tier's requirement set is
    /// missing. Requirement sets are checked before the distro catalog is
    /// read.
    pub fn render(&self) -> Result<String> {
        let catalog = load_requirements(&self.args.requirements)?;
        let tiers = TieredRequirements::select(&catalog, self.args.esr, self.args.release)?;

        let distros = load_distros(&self.args.distros)?;
        let today = self.today();
        tracing::debug!("Checking end of life against {}", today);

        let matrix = CompatibilityMatrix::build(&distros, &tiers, today);
        Ok(render_html(&matrix))
    }

    /// Render the report and write it to `out`.
    pub fn execute(&self, out: &mut dyn Write) -> Result<()> {
        let html = self.render()?;
        out.write_all(html.as_bytes())
            .and_then(|()| out.flush())
            .context("Failed to write report")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompatError;
    use std::fs;
    use std::io;
    use tempfile::TempDir;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    const REQUIREMENTS: &str = r#"{
        "60": {"glibc": "2.17"},
        "78": {"glibc": "2.24"},
        "81": {"glibc": "2.31"}
    }"#;

    const DISTROS: &str = r#"{
        "Debian 10": {
            "versions": {"glibc": "2.28"},
            "release": {"date": "2019-07", "eol": "2022-09"}
        }
    }"#;

    fn setup(requirements: &str, distros: &str) -> (TempDir, ReportArgs) {
        let temp = TempDir::new().unwrap();
        let req_path = temp.path().join("requirements.json");
        let distro_path = temp.path().join("distro_data.json");
        fs::write(&req_path, requirements).unwrap();
        fs::write(&distro_path, distros).unwrap();

        let args = ReportArgs {
            esr: 60,
            release: 78,
            requirements: req_path,
            distros: distro_path,
            today: NaiveDate::from_ymd_opt(2024, 6, 15),
        };
        (temp, args)
    }

    #[test]
    fn execute_writes_table() {
        let (_temp, args) = setup(REQUIREMENTS, DISTROS);
        let cmd = ReportCommand::new(args);
        let mut out = Vec::new();
        cmd.execute(&mut out).unwrap();

        let html = String::from_utf8(out).unwrap();
        assert!(html.starts_with("<table>\n"));
        assert!(html.ends_with("</table>\n"));
        assert!(html.contains("Debian 10"));
        assert!(html.contains("<td style=\"background-color: rgb(255, 204, 204);\">Sep 2022</td>"));
    }

    #[test]
    fn write_failure_is_reported_with_context() {
        let (_temp, args) = setup(REQUIREMENTS, DISTROS);
        let err = ReportCommand::new(args).execute(&mut ClosedPipe).unwrap_err();

        assert_eq!(err.to_string(), "Failed to write report");
        match err {
            CompatError::Other(inner) => {
                assert!(format!("{:#}", inner).contains("pipe closed"));
            }
            other => panic!("Expected Other, got {:?}", other),
        }
    }

    #[test]
    fn missing_tier_writes_nothing() {
        let (_temp, mut args) = setup(REQUIREMENTS, DISTROS);
        args.release = 79;
        let cmd = ReportCommand::new(args);
        let mut out = Vec::new();

        let err = cmd.execute(&mut out).unwrap_err();
        assert!(matches!(err, CompatError::MissingRequirements { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn requirements_checked_before_distros() {
        let (temp, mut args) = setup(REQUIREMENTS, DISTROS);
        args.release = 79;
        args.distros = temp.path().join("missing.json");
        let err = ReportCommand::new(args).render().unwrap_err();
        assert!(matches!(err, CompatError::MissingRequirements { .. }));
    }

    #[test]
    fn missing_distro_catalog_is_error() {
        let (temp, mut args) = setup(REQUIREMENTS, DISTROS);
        args.distros = temp.path().join("missing.json");
        let err = ReportCommand::new(args).render().unwrap_err();
        assert!(matches!(err, CompatError::CatalogNotFound { .. }));
    }

    #[test]
    fn today_defaults_to_local_date() {
        let (_temp, mut args) = setup(REQUIREMENTS, DISTROS);
        args.today = None;
        let cmd = ReportCommand::new(args);
        let before = Local::now().date_naive();
        let today = cmd.today();
        let after = Local::now().date_naive();
        assert!(before <= today && today <= after);
    }
}
