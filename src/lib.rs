//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    color::{AnsiCode, ColorError, DEFAULT_PALETTE, Emphasis, Palette, Style, colorize},
    config::{ChartConfig, ChartConfigBuilder},
    constants::{CHART_HEIGHT, DECIMAL_PRECISION, MAX_SERIES, MIN_CHART_WIDTH},
    data::{DataPoint, Series, SeriesSummary},
    error::{ConfigError, GraphError},
    timeframe::Timeframe,
};

pub use render::{Compositor, Frame, Rasterizer, Resampler};

/// Lay out a chart for `series` without printing it.
pub fn render_chart(series: &[Series], cfg: &ChartConfig) -> Result<Frame, GraphError> {
    Compositor::new(cfg).compose(series)
}
