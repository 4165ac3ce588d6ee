//! A collection of constants.

/// Character rows in the chart body (= 72 pixel rows).
pub const CHART_HEIGHT: usize = 18;
/// Columns reserved for the right-aligned y-axis labels ("  100").
pub const Y_AXIS_WIDTH: usize = 5;
/// One character of space between y axis labels and the plotted data
pub const LABEL_GUTTER: usize = 1;

/// Chart body must be at least 40 characters wide when sized from the terminal
pub const MIN_CHART_WIDTH: usize = 40;

/// Braille has 2 horizontal dots and four vertical dots that can be either off or on
pub const BRAILLE_HORIZONTAL_RESOLUTION: usize = 2;
/// Braille has 2 horizontal dots and four vertical dots that can be either off or on
pub const BRAILLE_VERTICAL_RESOLUTION: usize = 4;

/// Values are pre-normalised to `0..=Y_MAX`.
pub const Y_MAX: f64 = 100.0;
/// Distance between y-axis ticks.
pub const Y_TICK_STEP: usize = 20;
/// Upper bound on x-axis date labels.
pub const X_TICK_COUNT: usize = 5;

/// Comparisons are capped at five series.
pub const MAX_SERIES: usize = 5;

/// Averages are rounded to the first decimal place.
///
/// 37.96 becomes 38.0
pub const DECIMAL_PRECISION: usize = 1;
