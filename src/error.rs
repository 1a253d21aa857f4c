//! Validation errors raised when finishing a builder.
//!
//! Every builder in textgrid validates its accumulated configuration inside
//! `finish()`. Validation is fail-fast and synchronous: either `finish()`
//! returns a fully rendered value, or it returns a [`ConfigError`] and
//! produces nothing. There are no partial results and no deferred failures.

/// Errors from finishing a misconfigured builder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A formatting character (spacer, divider, or border) is a control
    /// character and cannot occupy a grid column.
    #[error("{role} token is not a printable character: {token:?}")]
    UnprintableToken { role: &'static str, token: char },

    /// A row was finished with no cells.
    #[error("unable to generate a row with no columns")]
    EmptyRow,

    /// A row's cell count disagrees with its column-width count.
    #[error("unable to align {cells} cells with {widths} column widths")]
    ColumnCountMismatch { cells: usize, widths: usize },

    /// A cell's natural width exceeds the column width assigned to it.
    #[error("cell {index} with width {cell_width} does not fit column width {column_width}")]
    CellOverflowsColumn {
        index: usize,
        cell_width: usize,
        column_width: usize,
    },

    /// A divider was finished with no columns.
    #[error("unable to generate a divider with no columns")]
    EmptyDivider,

    /// A divider column was assigned a width of zero.
    #[error("invalid zero column width at index {index}")]
    ZeroColumnWidth { index: usize },

    /// A table's header, footer, or body row reports a column count that
    /// disagrees with the rest of the table.
    #[error("unexpected {role} column count: expected {expected}, found {found}")]
    TableColumnMismatch {
        role: &'static str,
        expected: usize,
        found: usize,
    },

    /// A block was finished with no children.
    #[error("Unexpected empty body content size.")]
    EmptyBlock,

    /// A block child reports a width of zero and cannot be framed.
    #[error("unexpected zero-width body content at index {index}")]
    ZeroWidthChild { index: usize },
}
