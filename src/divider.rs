//! Divider: a single-line horizontal separator spanning column widths.

use log::debug;

use crate::error::ConfigError;
use crate::renderable::Renderable;
use crate::text::{is_printable, repeated};

// ---------------------------------------------------------------------------
// Divider
// ---------------------------------------------------------------------------

/// A one-line separator: each column is a run of the horizontal character,
/// columns are joined by the vertical character.
///
/// Width is the sum of the column widths plus one joint per interior column
/// boundary. Height is always 1.
#[derive(Debug, Clone)]
pub struct Divider {
    column_widths: Vec<usize>,
    vertical_divider: char,
    horizontal_divider: char,
    width: usize,
    lines: Vec<String>,
}

impl Divider {
    /// Start configuring a new divider.
    pub fn builder() -> DividerBuilder {
        DividerBuilder::new()
    }

    /// The number of columns spanned.
    pub fn total_columns(&self) -> usize {
        self.column_widths.len()
    }

    /// The width of each spanned column.
    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    /// Consume the divider, returning its rendered line.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Renderable for Divider {
    fn height(&self) -> usize {
        1
    }

    fn width(&self) -> usize {
        self.width
    }

    fn lines(&self) -> &[String] {
        &self.lines
    }

    fn reflow(&self, width: usize) -> Option<Vec<String>> {
        DividerBuilder::from(self)
            .column_widths([width])
            .finish()
            .ok()
            .map(Divider::into_lines)
    }
}

// ---------------------------------------------------------------------------
// DividerBuilder
// ---------------------------------------------------------------------------

/// Staged configuration for a [`Divider`].
#[derive(Debug, Clone)]
pub struct DividerBuilder {
    column_widths: Vec<usize>,
    vertical_divider: char,
    horizontal_divider: char,
}

impl DividerBuilder {
    /// A builder with no columns, `'|'` joints, and `'-'` fill.
    pub fn new() -> Self {
        Self {
            column_widths: Vec::new(),
            vertical_divider: '|',
            horizontal_divider: '-',
        }
    }

    /// Set the column widths, replacing any widths set before.
    pub fn column_widths<I: IntoIterator<Item = usize>>(mut self, widths: I) -> Self {
        self.column_widths.clear();
        self.column_widths.extend(widths);
        self
    }

    /// The character joining adjacent columns. Default: `'|'`.
    pub fn vertical_divider(mut self, token: char) -> Self {
        self.vertical_divider = token;
        self
    }

    /// The character filling each column. Default: `'-'`.
    pub fn horizontal_divider(mut self, token: char) -> Self {
        self.horizontal_divider = token;
        self
    }

    /// Drop the configured columns, keeping the divider characters.
    pub fn reset_contents(mut self) -> Self {
        self.column_widths.clear();
        self
    }

    /// The width the finished divider will have.
    pub fn total_width(&self) -> usize {
        self.column_widths.iter().sum::<usize>() + self.column_widths.len().saturating_sub(1)
    }

    /// Validate the configuration and render the divider.
    pub fn finish(self) -> Result<Divider, ConfigError> {
        if !is_printable(self.vertical_divider) {
            return Err(ConfigError::UnprintableToken {
                role: "vertical divider",
                token: self.vertical_divider,
            });
        }
        if !is_printable(self.horizontal_divider) {
            return Err(ConfigError::UnprintableToken {
                role: "horizontal divider",
                token: self.horizontal_divider,
            });
        }
        if self.column_widths.is_empty() {
            return Err(ConfigError::EmptyDivider);
        }
        if let Some(index) = self.column_widths.iter().position(|&width| width == 0) {
            return Err(ConfigError::ZeroColumnWidth { index });
        }

        let width = self.total_width();
        debug!("divider width: {width}");

        let joint = self.vertical_divider.to_string();
        let line = self
            .column_widths
            .iter()
            .map(|&columns| repeated(self.horizontal_divider, columns))
            .collect::<Vec<_>>()
            .join(&joint);

        Ok(Divider {
            column_widths: self.column_widths,
            vertical_divider: self.vertical_divider,
            horizontal_divider: self.horizontal_divider,
            width,
            lines: vec![line],
        })
    }
}

impl Default for DividerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy-construction: an independent builder seeded with the divider's
/// columns and characters.
impl From<&Divider> for DividerBuilder {
    fn from(divider: &Divider) -> Self {
        Self {
            column_widths: divider.column_widths.clone(),
            vertical_divider: divider.vertical_divider,
            horizontal_divider: divider.horizontal_divider,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
