//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`report`] - The report command

pub mod args;
pub mod report;

pub use args::Cli;
pub use report::{ReportArgs, ReportCommand};
