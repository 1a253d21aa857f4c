//! Renderable: the contract every formatted element satisfies.
//!
//! A renderable is an immutable rectangle of characters: `height()` lines,
//! each exactly `width()` columns wide. Containers (rows, tables, blocks)
//! consume other renderables purely through this contract, which is what
//! makes the elements freely composable: a finished table can be dropped
//! into a block exactly like a single cell can.

use std::io::{self, Write};

// ---------------------------------------------------------------------------
// Renderable trait
// ---------------------------------------------------------------------------

/// An immutable rectangle of formatted text.
///
/// Implementations uphold the rectangle invariant: `lines().len()` equals
/// `height()` and every line is exactly `width()` columns wide. (The one
/// escape hatch is [`Align::None`](crate::align::Align::None), where the
/// caller takes over the exact-width guarantee.) Once produced, the output
/// never changes.
pub trait Renderable {
    /// Total number of lines, including any padding.
    fn height(&self) -> usize;

    /// Total character width, including any padding.
    fn width(&self) -> usize;

    /// The rendered lines, top to bottom.
    fn lines(&self) -> &[String];

    /// Re-render this element at exactly `width` columns, if it knows how.
    ///
    /// Elements that can stretch themselves (cells re-align their content,
    /// dividers span the new width) return `Some`. Everything else returns
    /// `None` and the enclosing container pads the rendered lines instead.
    /// `width` is never smaller than [`width()`](Renderable::width) when
    /// called by the containers in this crate.
    fn reflow(&self, width: usize) -> Option<Vec<String>> {
        let _ = width;
        None
    }
}

// ---------------------------------------------------------------------------
// Stream output
// ---------------------------------------------------------------------------

/// The platform line separator used by [`write_to`].
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
/// The platform line separator used by [`write_to`].
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Write a renderable to an output sink as UTF-8 bytes.
///
/// Lines are joined with [`LINE_SEPARATOR`], and the body is surrounded by
/// a leading and trailing separator so consecutive writes stay visually
/// separated. This is a thin I/O wrapper over [`Renderable::lines`]; the
/// core contract stays byte-free.
pub fn write_to<W: Write>(renderable: &dyn Renderable, out: &mut W) -> io::Result<()> {
    out.write_all(LINE_SEPARATOR.as_bytes())?;
    for line in renderable.lines() {
        out.write_all(line.as_bytes())?;
        out.write_all(LINE_SEPARATOR.as_bytes())?;
    }
    Ok(())
}

// ===========================================================================
// Tests
// ===========================================================================
