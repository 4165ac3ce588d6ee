//! Run-time configuration object + fluent builder.

use chrono::NaiveDate;

use crate::core::{
    color::Palette, constants::CHART_HEIGHT, error::ConfigError, format::today,
    timeframe::Timeframe,
};

/// Immutable parameters handed to the renderer.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub geo: String,
    pub timeframe: Timeframe,
    pub updated: NaiveDate,
    pub char_width: usize,
    pub char_height: usize,
    pub palette: Palette,
    /// Emit ANSI escapes; off for plain-text output.
    pub styled: bool,
}

impl ChartConfig {
    #[inline]
    #[must_use]
    pub fn builder(char_width: usize) -> ChartConfigBuilder {
        ChartConfigBuilder::new(char_width)
    }

    #[inline]
    #[must_use]
    pub fn pixel_width(&self) -> usize {
        self.char_width * crate::core::constants::BRAILLE_HORIZONTAL_RESOLUTION
    }

    #[inline]
    #[must_use]
    pub fn pixel_height(&self) -> usize {
        self.char_height * crate::core::constants::BRAILLE_VERTICAL_RESOLUTION
    }
}

/// Fluent builder with zero allocation until `build`.
#[derive(Debug)]
pub struct ChartConfigBuilder {
    char_width: usize,
    char_height: usize,
    title: Option<String>,
    geo: Option<String>,
    timeframe: Timeframe,
    updated: Option<NaiveDate>,
    palette: Option<Palette>,
    styled: bool,
}

impl ChartConfigBuilder {
    pub(crate) fn new(char_width: usize) -> Self {
        Self {
            char_width,
            char_height: CHART_HEIGHT,
            title: None,
            geo: None,
            timeframe: Timeframe::default(),
            updated: None,
            palette: None,
            styled: true,
        }
    }

    #[inline]
    #[must_use]
    pub fn height(mut self, rows: usize) -> Self {
        self.char_height = rows;
        self
    }
    #[inline]
    #[must_use]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn geo(mut self, g: impl Into<String>) -> Self {
        self.geo = Some(g.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn timeframe(mut self, tf: Timeframe) -> Self {
        self.timeframe = tf;
        self
    }
    #[inline]
    #[must_use]
    pub fn updated(mut self, d: NaiveDate) -> Self {
        self.updated = Some(d);
        self
    }
    #[inline]
    #[must_use]
    pub fn palette(mut self, p: Palette) -> Self {
        self.palette = Some(p);
        self
    }
    #[inline]
    #[must_use]
    pub fn styled(mut self, on: bool) -> Self {
        self.styled = on;
        self
    }

    pub fn build(self) -> Result<ChartConfig, ConfigError> {
        if self.char_width == 0 || self.char_height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.char_width,
                height: self.char_height,
            });
        }
        let palette = self.palette.unwrap_or_default();
        if palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(ChartConfig {
            title: self.title.unwrap_or_default(),
            geo: self.geo.unwrap_or_default(),
            timeframe: self.timeframe,
            updated: self.updated.unwrap_or_else(today),
            char_width: self.char_width,
            char_height: self.char_height,
            palette,
            styled: self.styled,
        })
    }
}
