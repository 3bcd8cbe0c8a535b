//! HTML table rendering.

use crate::compat::{Color, Rgb};
use crate::report::matrix::{CompatibilityMatrix, CompatibilityRow};

/// A table cell with an optional background color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    text: String,
    background: Option<Rgb>,
}

impl Cell {
    /// An unstyled cell.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            background: None,
        }
    }

    /// A cell with a background color.
    pub fn colored(text: impl Into<String>, background: Rgb) -> Self {
        Self {
            text: text.into(),
            background: Some(background),
        }
    }

    fn render(&self) -> String {
        match self.background {
            Some(rgb) => format!(
                "  <td style=\"background-color: {};\">{}</td>",
                rgb,
                escape(&self.text)
            ),
            None => format!("  <td>{}</td>", escape(&self.text)),
        }
    }
}

/// A bare `<table>` made of `<tr>`/`<td>` rows.
#[derive(Debug, Default)]
pub struct HtmlTable {
    rows: Vec<Vec<Cell>>,
}

impl HtmlTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Render the table, one tag per line.
    pub fn render(&self) -> String {
        let mut output = String::from("<table>\n");

        for row in &self.rows {
            output.push_str("<tr>\n");
            for cell in row {
                output.push_str(&cell.render());
                output.push('\n');
            }
            output.push_str("</tr>\n");
        }

        output.push_str("</table>\n");
        output
    }
}

/// Cells for one row: name, components, release date, end of life.
pub fn row_cells(row: &CompatibilityRow) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(row.components.len() + 3);
    cells.push(Cell::colored(&row.name, row.overall.rgb()));

    for component in &row.components {
        cells.push(Cell::colored(&component.text, component.color.rgb()));
    }

    cells.push(Cell::plain(&row.release_date));
    cells.push(if row.end_of_life.stale {
        Cell::colored(&row.end_of_life.text, Color::Red.rgb())
    } else {
        Cell::plain(&row.end_of_life.text)
    });

    cells
}

/// Render the whole matrix as an HTML table.
pub fn render_html(matrix: &CompatibilityMatrix) -> String {
    let mut table = HtmlTable::new();
    for row in matrix.rows() {
        table.add_row(row_cells(row));
    }
    table.render()
}

/// Escape text for use inside an element.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
