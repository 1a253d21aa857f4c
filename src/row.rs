//! Row: a horizontal composition of cells sharing one baseline grid.
//!
//! Each cell occupies one column. A column width of zero means "use the
//! cell's own width"; a nonzero width must be at least the cell's natural
//! width. At finish time every cell is re-rendered at its resolved column
//! width and the row's shared height, then the cells' lines are joined
//! index-wise with the vertical separator.

use log::debug;

use crate::cell::{Cell, CellBuilder};
use crate::error::ConfigError;
use crate::renderable::Renderable;
use crate::text::is_printable;

// ---------------------------------------------------------------------------
// Row
// ---------------------------------------------------------------------------

/// A finished border-less row of columnized cells.
#[derive(Debug, Clone)]
pub struct Row {
    cells: Vec<Cell>,
    column_widths: Vec<usize>,
    vertical_divider: char,
    width: usize,
    height: usize,
    lines: Vec<String>,
}

impl Row {
    /// Start configuring a new row.
    pub fn builder() -> RowBuilder {
        RowBuilder::new()
    }

    /// The number of columns in the row.
    pub fn total_columns(&self) -> usize {
        self.column_widths.len()
    }

    /// The resolved width of each column.
    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }
}

impl Renderable for Row {
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
// RowBuilder
// ---------------------------------------------------------------------------

/// Staged configuration for a [`Row`].
#[derive(Debug, Clone)]
pub struct RowBuilder {
    cells: Vec<Cell>,
    column_widths: Vec<usize>,
    vertical_divider: char,
}

impl RowBuilder {
    /// A builder with no cells and a `'|'` separator.
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            column_widths: Vec::new(),
            vertical_divider: '|',
        }
    }

    /// Append one cell, assigning it a column of its natural width.
    pub fn cell(mut self, cell: Cell) -> Self {
        self.column_widths.push(cell.width());
        self.cells.push(cell);
        self
    }

    /// Append cells, assigning each a column of its natural width.
    pub fn cells<I: IntoIterator<Item = Cell>>(mut self, cells: I) -> Self {
        for cell in cells {
            self = self.cell(cell);
        }
        self
    }

    /// Set the column widths, replacing any widths set before. Must match
    /// the cell count at finish time; a width of zero keeps the cell's own
    /// width.
    pub fn column_widths<I: IntoIterator<Item = usize>>(mut self, widths: I) -> Self {
        self.column_widths.clear();
        self.column_widths.extend(widths);
        self
    }

    /// The character separating adjacent columns. Default: `'|'`.
    pub fn vertical_divider(mut self, token: char) -> Self {
        self.vertical_divider = token;
        self
    }

    /// Drop the accumulated cells and column widths, keeping the separator.
    pub fn reset_contents(mut self) -> Self {
        self.cells.clear();
        self.column_widths.clear();
        self
    }

    /// Validate the configuration and render the row.
    pub fn finish(self) -> Result<Row, ConfigError> {
        if !is_printable(self.vertical_divider) {
            return Err(ConfigError::UnprintableToken {
                role: "vertical divider",
                token: self.vertical_divider,
            });
        }
        if self.cells.is_empty() {
            return Err(ConfigError::EmptyRow);
        }
        if self.cells.len() != self.column_widths.len() {
            return Err(ConfigError::ColumnCountMismatch {
                cells: self.cells.len(),
                widths: self.column_widths.len(),
            });
        }
        for (index, (cell, &column_width)) in
            self.cells.iter().zip(&self.column_widths).enumerate()
        {
            if column_width > 0 && cell.width() > column_width {
                return Err(ConfigError::CellOverflowsColumn {
                    index,
                    cell_width: cell.width(),
                    column_width,
                });
            }
        }

        let resolved: Vec<usize> = self
            .cells
            .iter()
            .zip(&self.column_widths)
            .map(|(cell, &width)| if width == 0 { cell.width() } else { width })
            .collect();

        let height = self
            .cells
            .iter()
            .map(Renderable::height)
            .max()
            .unwrap_or(0);
        let width = resolved.iter().sum::<usize>() + resolved.len() - 1;
        debug!("row dimensions: ({width}, {height})");

        // Stretch every cell to its column width and the shared row height.
        let mut rendered = Vec::with_capacity(self.cells.len());
        for (cell, &column_width) in self.cells.iter().zip(&resolved) {
            let stretched = CellBuilder::from(cell)
                .width(column_width)
                .height(height)
                .finish()?;
            rendered.push(stretched);
        }

        let separator = self.vertical_divider.to_string();
        let lines = (0..height)
            .map(|line_index| {
                rendered
                    .iter()
                    .map(|cell| cell.lines()[line_index].as_str())
                    .collect::<Vec<_>>()
                    .join(&separator)
            })
            .collect();

        Ok(Row {
            cells: self.cells,
            column_widths: resolved,
            vertical_divider: self.vertical_divider,
            width,
            height,
            lines,
        })
    }
}

impl Default for RowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy-construction: an independent builder seeded with the row's cells,
/// resolved column widths, and separator.
impl From<&Row> for RowBuilder {
    fn from(row: &Row) -> Self {
        Self {
            cells: row.cells.clone(),
            column_widths: row.column_widths.clone(),
            vertical_divider: row.vertical_divider,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
