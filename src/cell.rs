//! Cell: the leaf rectangle of formatted text.
//!
//! A cell owns raw content lines and turns them into a padded, aligned
//! rectangle. Raw lines accumulate on a [`CellBuilder`]; `finish()`
//! validates the configuration, resolves the final dimensions, and renders
//! the line buffer once. The finished [`Cell`] is immutable.

use log::debug;

use crate::align::Align;
use crate::error::ConfigError;
use crate::renderable::Renderable;
use crate::text::{is_printable, max_width, repeated, sanitize};

/// Tab expansion applied to lines appended to a cell.
pub(crate) const CELL_TAB_WIDTH: usize = 2;

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A finished block of aligned text, optionally padded with empty rows and
/// columns.
///
/// Width is the longest raw line plus twice the horizontal padding, unless
/// an explicit wider floor was set; height works the same way vertically.
#[derive(Debug, Clone)]
pub struct Cell {
    raw_lines: Vec<String>,
    align: Align,
    filling_spacer: char,
    padding_spacer: char,
    vertical_padding: usize,
    horizontal_padding: usize,
    width: usize,
    height: usize,
    lines: Vec<String>,
}

impl Cell {
    /// Start configuring a new cell.
    pub fn builder() -> CellBuilder {
        CellBuilder::new()
    }

    /// The alignment applied to the cell's content.
    pub fn align(&self) -> Align {
        self.align
    }

    /// Consume the cell, returning its rendered lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Renderable for Cell {
    fn height(&self) -> usize {
        self.height
    }

    fn width(&self) -> usize {
        self.width
    }

    fn lines(&self) -> &[String] {
        &self.lines
    }

    fn reflow(&self, width: usize) -> Option<Vec<String>> {
        CellBuilder::from(self)
            .width(width)
            .finish()
            .ok()
            .map(Cell::into_lines)
    }
}

// ---------------------------------------------------------------------------
// CellBuilder
// ---------------------------------------------------------------------------

/// Staged configuration for a [`Cell`].
#[derive(Debug, Clone)]
pub struct CellBuilder {
    raw_lines: Vec<String>,
    align: Align,
    filling_spacer: char,
    padding_spacer: char,
    vertical_padding: usize,
    horizontal_padding: usize,
    min_width: usize,
    min_height: usize,
}

impl CellBuilder {
    /// A builder with no content, left alignment, space spacers, and no
    /// padding.
    pub fn new() -> Self {
        Self {
            raw_lines: Vec::new(),
            align: Align::Left,
            filling_spacer: ' ',
            padding_spacer: ' ',
            vertical_padding: 0,
            horizontal_padding: 0,
            min_width: 0,
            min_height: 0,
        }
    }

    /// Append one raw line. Multi-line input is split and sanitized.
    pub fn line(self, line: impl AsRef<str>) -> Self {
        self.lines([line])
    }

    /// Append raw lines. Each item is sanitized: split on newline variants,
    /// trailing whitespace trimmed, tabs expanded.
    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.raw_lines
                .extend(sanitize(line.as_ref(), CELL_TAB_WIDTH));
        }
        self
    }

    /// How content lines are aligned within the cell. Default: [`Align::Left`].
    pub fn alignment(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// The character filling the space between content and padding.
    /// Default: `' '`.
    pub fn filling_spacer(mut self, token: char) -> Self {
        self.filling_spacer = token;
        self
    }

    /// The character filling padding rows and columns. Default: `' '`.
    pub fn padding_spacer(mut self, token: char) -> Self {
        self.padding_spacer = token;
        self
    }

    /// Empty rows above and below, and empty columns left and right, of the
    /// content.
    pub fn padding(mut self, vertical: usize, horizontal: usize) -> Self {
        self.vertical_padding = vertical;
        self.horizontal_padding = horizontal;
        self
    }

    /// Raise the cell's total width floor. The cell never shrinks below its
    /// content width plus padding.
    pub fn width(mut self, columns: usize) -> Self {
        self.min_width = self.min_width.max(columns);
        self
    }

    /// Raise the cell's total height floor. The cell never shrinks below its
    /// content height plus padding.
    pub fn height(mut self, rows: usize) -> Self {
        self.min_height = self.min_height.max(rows);
        self
    }

    /// Drop accumulated content and dimension floors, keeping formatting
    /// options.
    pub fn reset_contents(mut self) -> Self {
        self.raw_lines.clear();
        self.min_width = 0;
        self.min_height = 0;
        self
    }

    /// The longest raw line, excluding padding.
    pub fn content_width(&self) -> usize {
        max_width(&self.raw_lines)
    }

    /// The number of raw lines, excluding padding.
    pub fn content_height(&self) -> usize {
        self.raw_lines.len()
    }

    /// The width the finished cell will have: the larger of the explicit
    /// floor and content width plus horizontal padding.
    pub fn total_width(&self) -> usize {
        self.min_width
            .max(self.content_width() + 2 * self.horizontal_padding)
    }

    /// The height the finished cell will have: the larger of the explicit
    /// floor and content height plus vertical padding.
    pub fn total_height(&self) -> usize {
        self.min_height
            .max(self.content_height() + 2 * self.vertical_padding)
    }

    /// Validate the configuration and render the cell.
    pub fn finish(self) -> Result<Cell, ConfigError> {
        if !is_printable(self.filling_spacer) {
            return Err(ConfigError::UnprintableToken {
                role: "filling spacer",
                token: self.filling_spacer,
            });
        }
        if !is_printable(self.padding_spacer) {
            return Err(ConfigError::UnprintableToken {
                role: "padding spacer",
                token: self.padding_spacer,
            });
        }

        let width = self.total_width();
        let height = self.total_height();
        let inner_width = width - 2 * self.horizontal_padding;
        debug!("cell dimensions: ({width}, {height})");

        let pad_row = repeated(self.padding_spacer, width);
        let horizontal_pad = repeated(self.padding_spacer, self.horizontal_padding);

        let mut lines = Vec::with_capacity(height);
        for _ in 0..self.vertical_padding {
            lines.push(pad_row.clone());
        }
        for raw in &self.raw_lines {
            let aligned = self.align.pad(raw, inner_width, self.filling_spacer);
            lines.push(format!("{horizontal_pad}{aligned}{horizontal_pad}"));
        }
        let filler_rows = height - self.raw_lines.len() - 2 * self.vertical_padding;
        if filler_rows > 0 {
            let filler = format!(
                "{horizontal_pad}{}{horizontal_pad}",
                repeated(self.filling_spacer, inner_width)
            );
            for _ in 0..filler_rows {
                lines.push(filler.clone());
            }
        }
        for _ in 0..self.vertical_padding {
            lines.push(pad_row.clone());
        }

        Ok(Cell {
            raw_lines: self.raw_lines,
            align: self.align,
            filling_spacer: self.filling_spacer,
            padding_spacer: self.padding_spacer,
            vertical_padding: self.vertical_padding,
            horizontal_padding: self.horizontal_padding,
            width,
            height,
            lines,
        })
    }
}

impl Default for CellBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy-construction: an independent builder seeded with the cell's raw
/// content, options, and finished dimensions as floors. Re-finishing it
/// without further changes reproduces the cell exactly.
impl From<&Cell> for CellBuilder {
    fn from(cell: &Cell) -> Self {
        Self {
            raw_lines: cell.raw_lines.clone(),
            align: cell.align,
            filling_spacer: cell.filling_spacer,
            padding_spacer: cell.padding_spacer,
            vertical_padding: cell.vertical_padding,
            horizontal_padding: cell.horizontal_padding,
            min_width: cell.width,
            min_height: cell.height,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── sizing ───────────────────────────────────────────────────────

    #[test]
    fn empty_cell_is_a_zero_rectangle() {
        let cell = Cell::builder().finish().unwrap();
        assert_eq!(cell.width(), 0);
        assert_eq!(cell.height(), 0);
        assert!(cell.lines().is_empty());
    }

    #[test]
    fn single_line_cell_fits_content() {
        let cell = Cell::builder().line("Hi").finish().unwrap();
        assert_eq!(cell.height(), 1);
        assert_eq!(cell.width(), 2);
        assert_eq!(cell.lines(), ["Hi"]);
    }

    #[test]
    fn width_is_longest_line() {
        let cell = Cell::builder().lines(["a", "abcd", "ab"]).finish().unwrap();
        assert_eq!(cell.width(), 4);
        assert_eq!(cell.height(), 3);
        assert_eq!(cell.lines(), ["a   ", "abcd", "ab  "]);
    }

    #[test]
    fn multiline_input_is_split() {
        let cell = Cell::builder().line("a\nb\r\nc").finish().unwrap();
        assert_eq!(cell.height(), 3);
        assert_eq!(cell.lines(), ["a", "b", "c"]);
    }

    #[test]
    fn explicit_floors_raise_dimensions() {
        let cell = Cell::builder()
            .line("ab")
            .width(5)
            .height(3)
            .finish()
            .unwrap();
        assert_eq!(cell.width(), 5);
        assert_eq!(cell.height(), 3);
        assert_eq!(cell.lines(), ["ab   ", "     ", "     "]);
    }

    #[test]
    fn floors_never_shrink_below_content() {
        let cell = Cell::builder()
            .lines(["abcdef", "x"])
            .width(2)
            .height(1)
            .finish()
            .unwrap();
        assert_eq!(cell.width(), 6);
        assert_eq!(cell.height(), 2);
    }

    // ── padding and spacers ──────────────────────────────────────────

    #[test]
    fn padding_frames_the_content() {
        let cell = Cell::builder().line("ab").padding(1, 2).finish().unwrap();
        assert_eq!(cell.width(), 6);
        assert_eq!(cell.height(), 3);
        assert_eq!(cell.lines(), ["      ", "  ab  ", "      "]);
    }

    #[test]
    fn padding_spacer_fills_padding_rows() {
        let cell = Cell::builder()
            .line("ab")
            .padding(1, 1)
            .padding_spacer('.')
            .finish()
            .unwrap();
        assert_eq!(cell.lines(), ["....", ".ab.", "...."]);
    }

    #[test]
    fn filling_spacer_fills_alignment_slack_and_filler_rows() {
        let cell = Cell::builder()
            .line("ab")
            .width(4)
            .height(2)
            .filling_spacer('_')
            .finish()
            .unwrap();
        assert_eq!(cell.lines(), ["ab__", "____"]);
    }

    // ── alignment ────────────────────────────────────────────────────

    #[test]
    fn center_alignment_pads_both_sides() {
        let cell = Cell::builder()
            .line("ab")
            .alignment(Align::Center)
            .width(6)
            .finish()
            .unwrap();
        assert_eq!(cell.lines(), ["  ab  "]);
    }

    #[test]
    fn right_alignment_pads_left() {
        let cell = Cell::builder()
            .lines(["a", "bb"])
            .alignment(Align::Right)
            .finish()
            .unwrap();
        assert_eq!(cell.lines(), [" a", "bb"]);
    }

    // ── validation ───────────────────────────────────────────────────

    #[test]
    fn control_character_spacer_is_rejected() {
        let err = Cell::builder()
            .line("x")
            .filling_spacer('\t')
            .finish()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnprintableToken {
                role: "filling spacer",
                token: '\t',
            }
        );
    }

    #[test]
    fn control_character_padding_spacer_is_rejected() {
        let err = Cell::builder()
            .line("x")
            .padding_spacer('\u{7}')
            .finish()
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnprintableToken { role, .. } if role == "padding spacer"));
    }

    // ── copy-construction ────────────────────────────────────────────

    #[test]
    fn copied_builder_reproduces_the_cell() {
        let original = Cell::builder()
            .lines(["one", "two"])
            .alignment(Align::Center)
            .padding(1, 1)
            .finish()
            .unwrap();
        let copy = CellBuilder::from(&original).finish().unwrap();
        assert_eq!(copy.align(), original.align());
        assert_eq!(copy.lines(), original.lines());
        assert_eq!(copy.width(), original.width());
        assert_eq!(copy.height(), original.height());
    }

    #[test]
    fn copied_builder_is_independent() {
        let original = Cell::builder().line("Testy").finish().unwrap();
        let extended = CellBuilder::from(&original)
            .line("McTesterson")
            .finish()
            .unwrap();
        assert_eq!(original.lines(), ["Testy"]);
        assert_ne!(extended.lines(), original.lines());
    }

    #[test]
    fn reset_contents_keeps_formatting() {
        let cell = Cell::builder()
            .line("abc")
            .padding_spacer('.')
            .padding(0, 1)
            .reset_contents()
            .line("z")
            .finish()
            .unwrap();
        assert_eq!(cell.lines(), [".z."]);
    }

    // ── reflow ───────────────────────────────────────────────────────

    #[test]
    fn reflow_stretches_to_target_width() {
        let cell = Cell::builder().line("ab").finish().unwrap();
        assert_eq!(cell.reflow(5), Some(vec!["ab   ".to_owned()]));
    }

    #[test]
    fn builder_dimension_accessors() {
        let builder = Cell::builder().lines(["abc", "x"]).padding(1, 2);
        assert_eq!(builder.content_width(), 3);
        assert_eq!(builder.content_height(), 2);
        assert_eq!(builder.total_width(), 7);
        assert_eq!(builder.total_height(), 4);
    }
}
