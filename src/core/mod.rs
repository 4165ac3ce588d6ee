//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod format;
pub mod timeframe;

// re-export frequently-used items for convenience
pub use color::{AnsiCode, ColorError, Emphasis, Palette, Style, colorize};
pub use config::{ChartConfig, ChartConfigBuilder};
pub use constants::{
    BRAILLE_HORIZONTAL_RESOLUTION, BRAILLE_VERTICAL_RESOLUTION, CHART_HEIGHT, DECIMAL_PRECISION,
    LABEL_GUTTER, MAX_SERIES, MIN_CHART_WIDTH, Y_AXIS_WIDTH,
};
pub use data::{DataPoint, Series, SeriesSummary};
pub use error::{ConfigError, GraphError};
pub use timeframe::Timeframe;
