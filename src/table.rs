//! Table: a vertical stack of rows sharing one reconciled column grid.
//!
//! Column widths are reconciled as the element-wise maximum across the
//! header, every body row, and the footer; each row is then re-rendered at
//! the reconciled widths so the whole table shares one grid. Optional
//! divider lines separate the header and footer from the body.

use log::debug;

use crate::divider::Divider;
use crate::error::ConfigError;
use crate::renderable::Renderable;
use crate::row::{Row, RowBuilder};
use crate::text::max_width;

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// A finished table of columnized rows with optional header and footer.
///
/// Output ordering is fixed: header rows, header divider, body rows in
/// insertion order, footer divider, footer rows. A table with no content at
/// all is a valid zero-by-zero rectangle.
#[derive(Debug, Clone)]
pub struct Table {
    header: Option<Row>,
    footer: Option<Row>,
    body: Vec<Row>,
    header_divider: Option<(char, char)>,
    footer_divider: Option<(char, char)>,
    column_widths: Vec<usize>,
    width: usize,
    height: usize,
    lines: Vec<String>,
}

impl Table {
    /// Start configuring a new table.
    pub fn builder() -> TableBuilder {
        TableBuilder::new()
    }

    /// The number of columns shared by every row.
    pub fn total_columns(&self) -> usize {
        self.column_widths.len()
    }

    /// The reconciled width of each column.
    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }
}

impl Renderable for Table {
    fn height(&self) -> usize {
        self.height
    }

    fn width(&self) -> usize {
        self.width
    }

    fn lines(&self) -> &[String] {
        &self.lines
    }
}

// ---------------------------------------------------------------------------
// TableBuilder
// ---------------------------------------------------------------------------

/// Staged configuration for a [`Table`].
#[derive(Debug, Clone)]
pub struct TableBuilder {
    header: Option<Row>,
    footer: Option<Row>,
    body: Vec<Row>,
    header_divider: Option<(char, char)>,
    footer_divider: Option<(char, char)>,
}

impl TableBuilder {
    /// A builder with no header, footer, body, or dividers.
    pub fn new() -> Self {
        Self {
            header: None,
            footer: None,
            body: Vec::new(),
            header_divider: None,
            footer_divider: None,
        }
    }

    /// The header row, rendered above the body.
    pub fn header(mut self, row: Row) -> Self {
        self.header = Some(row);
        self
    }

    /// The footer row, rendered below the body.
    pub fn footer(mut self, row: Row) -> Self {
        self.footer = Some(row);
        self
    }

    /// Append one body row.
    pub fn row(mut self, row: Row) -> Self {
        self.body.push(row);
        self
    }

    /// Append body rows in order.
    pub fn rows<I: IntoIterator<Item = Row>>(mut self, rows: I) -> Self {
        self.body.extend(rows);
        self
    }

    /// Separate the header from the body with a divider line built from the
    /// given vertical (joint) and horizontal (fill) characters.
    pub fn header_divider(mut self, vertical: char, horizontal: char) -> Self {
        self.header_divider = Some((vertical, horizontal));
        self
    }

    /// Separate the body from the footer with a divider line built from the
    /// given vertical (joint) and horizontal (fill) characters.
    pub fn footer_divider(mut self, vertical: char, horizontal: char) -> Self {
        self.footer_divider = Some((vertical, horizontal));
        self
    }

    /// Drop the accumulated body rows, keeping header, footer, and dividers.
    pub fn reset_contents(mut self) -> Self {
        self.body.clear();
        self
    }

    /// Validate the configuration and render the table.
    pub fn finish(self) -> Result<Table, ConfigError> {
        let expected = self
            .body
            .first()
            .or(self.header.as_ref())
            .or(self.footer.as_ref())
            .map_or(0, Row::total_columns);

        for row in &self.body {
            if row.total_columns() != expected {
                return Err(ConfigError::TableColumnMismatch {
                    role: "body",
                    expected,
                    found: row.total_columns(),
                });
            }
        }
        if let Some(header) = &self.header {
            if header.total_columns() != expected {
                return Err(ConfigError::TableColumnMismatch {
                    role: "header",
                    expected,
                    found: header.total_columns(),
                });
            }
        }
        if let Some(footer) = &self.footer {
            if footer.total_columns() != expected {
                return Err(ConfigError::TableColumnMismatch {
                    role: "footer",
                    expected,
                    found: footer.total_columns(),
                });
            }
        }

        // Reconcile: element-wise maximum across header, body, and footer.
        let mut column_widths = vec![0usize; expected];
        let participants = self
            .header
            .iter()
            .chain(&self.body)
            .chain(self.footer.iter());
        for row in participants {
            for (reconciled, &width) in column_widths.iter_mut().zip(row.column_widths()) {
                *reconciled = (*reconciled).max(width);
            }
        }
        debug!("table column widths: {column_widths:?}");

        let divider_at = |tokens: Option<(char, char)>| -> Result<Option<Divider>, ConfigError> {
            tokens
                .map(|(vertical, horizontal)| {
                    Divider::builder()
                        .column_widths(column_widths.iter().copied())
                        .vertical_divider(vertical)
                        .horizontal_divider(horizontal)
                        .finish()
                })
                .transpose()
        };

        let mut lines = Vec::new();
        if let Some(header) = &self.header {
            let rendered = RowBuilder::from(header)
                .column_widths(column_widths.iter().copied())
                .finish()?;
            lines.extend_from_slice(rendered.lines());
        }
        if let Some(divider) = divider_at(self.header_divider)? {
            lines.extend(divider.into_lines());
        }
        for row in &self.body {
            let rendered = RowBuilder::from(row)
                .column_widths(column_widths.iter().copied())
                .finish()?;
            lines.extend_from_slice(rendered.lines());
        }
        if let Some(divider) = divider_at(self.footer_divider)? {
            lines.extend(divider.into_lines());
        }
        if let Some(footer) = &self.footer {
            let rendered = RowBuilder::from(footer)
                .column_widths(column_widths.iter().copied())
                .finish()?;
            lines.extend_from_slice(rendered.lines());
        }

        let width = max_width(&lines);
        let height = lines.len();
        debug!("table dimensions: ({width}, {height})");

        Ok(Table {
            header: self.header,
            footer: self.footer,
            body: self.body,
            header_divider: self.header_divider,
            footer_divider: self.footer_divider,
            column_widths,
            width,
            height,
            lines,
        })
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy-construction: an independent builder seeded with the table's rows
/// and divider configuration.
impl From<&Table> for TableBuilder {
    fn from(table: &Table) -> Self {
        Self {
            header: table.header.clone(),
            footer: table.footer.clone(),
            body: table.body.clone(),
            header_divider: table.header_divider,
            footer_divider: table.footer_divider,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use pretty_assertions::assert_eq;

    fn row(words: &[&str]) -> Row {
        let cells = words
            .iter()
            .map(|word| Cell::builder().line(word).finish().unwrap());
        Row::builder().cells(cells).finish().unwrap()
    }

    // ── degenerate tables ────────────────────────────────────────────

    #[test]
    fn empty_table_is_a_zero_rectangle() {
        let table = Table::builder().finish().unwrap();
        assert_eq!(table.width(), 0);
        assert_eq!(table.height(), 0);
        assert!(table.lines().is_empty());
        assert_eq!(table.total_columns(), 0);
    }

    #[test]
    fn single_row_table_matches_the_row() {
        let table = Table::builder().row(row(&["word"])).finish().unwrap();
        assert_eq!(table.height(), 1);
        assert_eq!(table.width(), 4);
        assert_eq!(table.lines(), ["word"]);
    }

    // ── reconciliation ───────────────────────────────────────────────

    #[test]
    fn column_widths_reconcile_elementwise() {
        let table = Table::builder()
            .header(row(&["aaa", "bbb", "ccc"]))
            .row(row(&["xxxxx", "yy", "zzzzzzz"]))
            .finish()
            .unwrap();
        assert_eq!(table.column_widths(), [5, 3, 7]);
    }

    #[test]
    fn rows_stretch_to_reconciled_widths() {
        let table = Table::builder()
            .rows([row(&["a", "bbbb"]), row(&["ccc", "d"])])
            .finish()
            .unwrap();
        assert_eq!(table.column_widths(), [3, 4]);
        assert_eq!(table.lines(), ["a  |bbbb", "ccc|d   "]);
    }

    #[test]
    fn footer_participates_in_reconciliation() {
        let table = Table::builder()
            .row(row(&["a"]))
            .footer(row(&["total"]))
            .finish()
            .unwrap();
        assert_eq!(table.column_widths(), [5]);
        assert_eq!(table.lines(), ["a    ", "total"]);
    }

    // ── dividers and ordering ────────────────────────────────────────

    #[test]
    fn header_divider_separates_header_from_body() {
        let table = Table::builder()
            .header(row(&["hh", "k"]))
            .header_divider('|', '=')
            .row(row(&["a", "bbb"]))
            .finish()
            .unwrap();
        assert_eq!(table.lines(), ["hh|k  ", "==|===", "a |bbb"]);
    }

    #[test]
    fn footer_divider_separates_body_from_footer() {
        let table = Table::builder()
            .row(row(&["a", "b"]))
            .footer_divider('+', '-')
            .footer(row(&["c", "d"]))
            .finish()
            .unwrap();
        assert_eq!(table.lines(), ["a|b", "-+-", "c|d"]);
    }

    #[test]
    fn unconfigured_dividers_are_absent() {
        let table = Table::builder()
            .header(row(&["h"]))
            .row(row(&["a"]))
            .footer(row(&["f"]))
            .finish()
            .unwrap();
        assert_eq!(table.lines(), ["h", "a", "f"]);
    }

    #[test]
    fn output_ordering_is_fixed() {
        let table = Table::builder()
            .footer(row(&["f"]))
            .row(row(&["a"]))
            .header(row(&["h"]))
            .header_divider('|', '=')
            .footer_divider('|', '-')
            .row(row(&["b"]))
            .finish()
            .unwrap();
        assert_eq!(table.lines(), ["h", "=", "a", "b", "-", "f"]);
    }

    // ── validation ───────────────────────────────────────────────────

    #[test]
    fn mismatched_body_row_is_rejected() {
        let err = Table::builder()
            .rows([row(&["a", "b"]), row(&["c"])])
            .finish()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::TableColumnMismatch {
                role: "body",
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn mismatched_header_is_rejected() {
        let err = Table::builder()
            .header(row(&["h"]))
            .row(row(&["a", "b"]))
            .finish()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::TableColumnMismatch {
                role: "header",
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn mismatched_footer_is_rejected() {
        let err = Table::builder()
            .row(row(&["a", "b"]))
            .footer(row(&["f", "g", "h"]))
            .finish()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::TableColumnMismatch {
                role: "footer",
                expected: 2,
                found: 3,
            }
        );
    }

    // ── copy-construction and invariants ─────────────────────────────

    #[test]
    fn copied_builder_reproduces_the_table() {
        let original = Table::builder()
            .header(row(&["h", "k"]))
            .header_divider('|', '=')
            .rows([row(&["a", "b"]), row(&["ccc", "d"])])
            .finish()
            .unwrap();
        let copy = TableBuilder::from(&original).finish().unwrap();
        assert_eq!(copy.lines(), original.lines());
    }

    #[test]
    fn rectangle_invariant_holds() {
        let table = Table::builder()
            .header(row(&["name", "count"]))
            .header_divider('|', '-')
            .rows([row(&["alpha", "1"]), row(&["b", "22222"])])
            .footer_divider('|', '-')
            .footer(row(&["sum", "22223"]))
            .finish()
            .unwrap();
        assert_eq!(table.lines().len(), table.height());
        for line in table.lines() {
            assert_eq!(line.chars().count(), table.width());
        }
    }
}
