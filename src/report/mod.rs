//! Report assembly and rendering.
//!
//! - [`matrix`] - Sorted compatibility rows
//! - [`html`] - HTML table output

pub mod html;
pub mod matrix;

pub use html::{escape, render_html, row_cells, Cell, HtmlTable};
pub use matrix::{CompatibilityMatrix, CompatibilityRow, ComponentCell};
