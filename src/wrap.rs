//! Line breaking: split logical lines into physical lines within a margin.
//!
//! Breaks happen only at whitespace run boundaries, never inside a word.
//! Among all arrangements the breaker first minimizes the number of physical
//! lines, then minimizes total raggedness: the sum over every line of the
//! squared slack left against the margin. Balanced paragraphs win over
//! greedily front-loaded ones. See <https://xxyxyz.org/line-breaking/> for
//! the family of algorithms.
//!
//! The search is a dynamic program over word prefix sums. The backward scan
//! per breakpoint is bounded by the number of words that fit inside one
//! margin, so the whole pass is linear in the input for a fixed margin.

use crate::text::{display_width, sanitize};

/// Spaces substituted for each tab character by [`wrap`].
pub const DEFAULT_TAB_WIDTH: usize = 4;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Wrap `text` to at most `margin` columns per line.
///
/// Tabs expand to [`DEFAULT_TAB_WIDTH`] spaces. The input is first split on
/// any newline variant (`\r\n`, `\r`, `\n`) into independent logical lines;
/// each logical line is then broken at whitespace boundaries. A logical line
/// that already fits inside the margin is passed through sanitized but
/// otherwise untouched, internal whitespace included. A single word longer
/// than the margin is emitted on a line of its own rather than split.
///
/// This is a pure function: equal inputs produce equal outputs and the
/// result is always finite and non-empty.
pub fn wrap(text: &str, margin: usize) -> Vec<String> {
    wrap_with_tab_width(text, margin, DEFAULT_TAB_WIDTH)
}

/// [`wrap`] with an explicit tab expansion width.
pub fn wrap_with_tab_width(text: &str, margin: usize, tab_width: usize) -> Vec<String> {
    sanitize(text, tab_width)
        .iter()
        .flat_map(|line| break_line(line, margin))
        .collect()
}

// ---------------------------------------------------------------------------
// Break search
// ---------------------------------------------------------------------------

/// Cost of a candidate arrangement, compared lexicographically: overflow
/// columns first, then line count, then squared slack.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Badness {
    overflow: u64,
    lines: u32,
    slack: u64,
}

impl Badness {
    const ZERO: Badness = Badness {
        overflow: 0,
        lines: 0,
        slack: 0,
    };

    const WORST: Badness = Badness {
        overflow: u64::MAX,
        lines: u32::MAX,
        slack: u64::MAX,
    };
}

/// Break one sanitized logical line into physical lines of width <= `margin`.
fn break_line(line: &str, margin: usize) -> Vec<String> {
    if display_width(line) <= margin {
        return vec![line.to_owned()];
    }

    // A sanitized line wider than the margin has no trailing whitespace,
    // so at least one word is present.
    let words: Vec<&str> = line.split_whitespace().collect();
    let count = words.len();

    let mut prefix = vec![0usize; count + 1];
    for (i, word) in words.iter().enumerate() {
        prefix[i + 1] = prefix[i] + display_width(word);
    }

    // best[j] is the cheapest arrangement of words[..j]; breaks[j] is the
    // start of its final line.
    let mut best = vec![Badness::WORST; count + 1];
    let mut breaks = vec![0usize; count + 1];
    best[0] = Badness::ZERO;

    for j in 1..=count {
        for i in (0..j).rev() {
            let width = prefix[j] - prefix[i] + (j - i - 1);
            if width > margin && i + 1 < j {
                break;
            }

            let previous = best[i];
            let candidate = if width > margin {
                Badness {
                    overflow: previous.overflow + (width - margin) as u64,
                    lines: previous.lines + 1,
                    slack: previous.slack,
                }
            } else {
                Badness {
                    overflow: previous.overflow,
                    lines: previous.lines + 1,
                    slack: previous.slack + ((margin - width) as u64).pow(2),
                }
            };

            if candidate < best[j] {
                best[j] = candidate;
                breaks[j] = i;
            }
        }
    }

    let mut lines = Vec::new();
    let mut end = count;
    while end > 0 {
        let start = breaks[end];
        lines.push(words[start..end].join(" "));
        end = start;
    }
    lines.reverse();
    lines
}

// ===========================================================================
// Tests
// ===========================================================================
