//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

use crate::catalog::{DEFAULT_DISTROS_FILE, DEFAULT_REQUIREMENTS_FILE};

/// Render an HTML matrix of distro compatibility with the ESR, current and
/// current+3 releases.
#[derive(Debug, Parser)]
#[command(name = "distro-compat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Version number of the current ESR
    #[arg(value_name = "ESR")]
    pub esr: u32,

    /// Version number of the current release
    #[arg(value_name = "RELEASE")]
    pub release: u32,

    /// Requirements catalog (JSON, or YAML by extension)
    #[arg(short, long, default_value = DEFAULT_REQUIREMENTS_FILE)]
    pub requirements: PathBuf,

    /// Distro catalog (JSON, or YAML by extension)
    #[arg(short, long, default_value = DEFAULT_DISTROS_FILE)]
    pub distros: PathBuf,

    /// Reference date for end-of-life checks (defaults to today)
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_today)]
    pub today: Option<NaiveDate>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

fn parse_today(s: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got '{}': {}", s, e))
}
