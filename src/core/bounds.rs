//! Terminal size plumbing.

use terminal_size::{Width, terminal_size};

use crate::core::constants::{LABEL_GUTTER, MIN_CHART_WIDTH, Y_AXIS_WIDTH};

/// Columns assumed when stdout is not a terminal.
const FALLBACK_COLUMNS: u16 = 120;

/// Current terminal width (120 column fallback).
#[inline]
#[must_use]
pub fn terminal_width() -> Width {
    terminal_size().map_or(Width(FALLBACK_COLUMNS), |(w, _)| w)
}

/// Chart body width for a terminal: what is left after the axis column and
/// gutter plus one spare column, never below [`MIN_CHART_WIDTH`].
#[inline]
#[must_use]
pub fn chart_width(term: Width) -> usize {
    usize::from(term.0)
        .saturating_sub(Y_AXIS_WIDTH + LABEL_GUTTER + 1)
        .max(MIN_CHART_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_room_for_axis() {
        assert_eq!(chart_width(Width(120)), 113);
    }

    #[test]
    fn never_below_minimum() {
        assert_eq!(chart_width(Width(20)), MIN_CHART_WIDTH);
        assert_eq!(chart_width(Width(0)), MIN_CHART_WIDTH);
    }
}
