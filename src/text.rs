//! Text utilities shared by the formatters.
//!
//! The grid model is deliberately simple: one `char` occupies one display
//! column. Widths everywhere in this crate are therefore `chars().count()`,
//! not byte lengths.

// ---------------------------------------------------------------------------
// Width helpers
// ---------------------------------------------------------------------------

/// The display width of a line, counting one column per `char`.
#[inline]
pub fn display_width(line: &str) -> usize {
    line.chars().count()
}

/// The maximum [`display_width`] across a set of lines. Zero for an empty set.
pub fn max_width<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .iter()
        .map(|line| display_width(line.as_ref()))
        .max()
        .unwrap_or(0)
}

/// A run of `count` copies of `token`.
pub(crate) fn repeated(token: char, count: usize) -> String {
    std::iter::repeat(token).take(count).collect()
}

// ---------------------------------------------------------------------------
// Sanitizing
// ---------------------------------------------------------------------------

/// Break a raw string into clean physical lines.
///
/// Splits on any newline variant (`\r\n`, `\r`, `\n`), trims trailing
/// whitespace from each resulting line, and expands remaining tab characters
/// to `tab_width` spaces. Always returns at least one element: sanitizing an
/// empty string yields `[""]`.
pub fn sanitize(text: &str, tab_width: usize) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n");
    normalized
        .split(['\n', '\r'])
        .map(|segment| {
            let trimmed = segment.trim_end();
            if trimmed.contains('\t') {
                trimmed.replace('\t', &repeated(' ', tab_width))
            } else {
                trimmed.to_owned()
            }
        })
        .collect()
}

/// Whether `token` can occupy a grid column.
///
/// Space is allowed; every other control character is not.
pub fn is_printable(token: char) -> bool {
    token == ' ' || !token.is_control()
}

// ===========================================================================
// Tests
// ===========================================================================
