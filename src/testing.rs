//! Test helpers for rendering to plain strings.
//!
//! Functions for converting rendered output into single strings suitable
//! for snapshot testing and assertions.

use crate::renderable::Renderable;

/// Render to a plain text string: lines joined with `'\n'`.
///
/// No trimming is applied — the output is the exact rectangle, which is what
/// snapshot assertions should compare against.
pub fn render_to_string(renderable: &dyn Renderable) -> String {
    renderable.lines().join("\n")
}

// ===========================================================================
// Tests
// ===========================================================================
