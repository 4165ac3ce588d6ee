//! Axis tick labels: y ticks every 20 on the fixed 0–100 scale, and up to
//! five dates spread along the x axis.

use chrono::NaiveDate;

use crate::{
    core::{
        constants::{BRAILLE_VERTICAL_RESOLUTION as VR, X_TICK_COUNT, Y_MAX, Y_TICK_STEP},
        timeframe::Timeframe,
    },
    render::raster::value_to_row,
};

/// Label per character row (`None` = no tick on that row).
///
/// Ticks are assigned in ascending order, so when several land on the same
/// row the highest one is what remains.
#[must_use]
pub fn y_labels(char_height: usize) -> Vec<Option<String>> {
    let mut labels = vec![None; char_height];
    if char_height == 0 {
        return labels;
    }
    let pixel_height = char_height * VR;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let top = Y_MAX as usize;
    for tick in (0..=top).step_by(Y_TICK_STEP) {
        #[allow(clippy::cast_precision_loss)]
        let px_row = value_to_row(tick as f64, pixel_height);
        let row = (px_row / VR).min(char_height - 1);
        labels[row] = Some(tick.to_string());
    }
    labels
}

/// Source indices that get an x-axis date: every index for short series,
/// otherwise [`X_TICK_COUNT`] evenly spaced ones including both ends.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn x_tick_indices(total: usize) -> Vec<usize> {
    if total < X_TICK_COUNT {
        return (0..total).collect();
    }
    (0..X_TICK_COUNT)
        .map(|i| (i as f64 * (total - 1) as f64 / (X_TICK_COUNT - 1) as f64).round() as usize)
        .collect()
}

/// Axis date text: the year alone for multi-year windows, else `Jan '24`.
#[must_use]
pub fn tick_label(date: NaiveDate, timeframe: Timeframe) -> String {
    if timeframe.is_long_range() {
        date.format("%Y").to_string()
    } else {
        date.format("%b '%y").to_string()
    }
}

/// The x-axis line, exactly `char_width` columns (empty when there are no
/// dates).
///
/// Labels are placed proportionally to their source index.  When two labels
/// collide the later one simply overwrites the earlier one's characters;
/// no spacing is attempted.
#[must_use]
pub fn x_labels(dates: &[NaiveDate], char_width: usize, timeframe: Timeframe) -> String {
    let total = dates.len();
    if total == 0 {
        return String::new();
    }

    let mut buf = vec![' '; char_width];
    for idx in x_tick_indices(total) {
        let label: Vec<char> = tick_label(dates[idx], timeframe).chars().collect();
        let pos = label_position(idx, total, char_width, label.len());
        for (i, ch) in label.into_iter().enumerate() {
            if let Some(slot) = buf.get_mut(pos + i) {
                *slot = ch;
            }
        }
    }
    buf.into_iter().collect()
}

/// Left edge of a label of `len` characters for source index `idx`,
/// clamped to `[0, width - len]`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn label_position(idx: usize, total: usize, width: usize, len: usize) -> usize {
    if total < 2 {
        return 0;
    }
    let span = width as f64 - len as f64;
    let pos = (idx as f64 / (total - 1) as f64 * span).round();
    pos.min(span).max(0.0) as usize
}
