//! Resampled series to styled braille rows.
//!
//! ### Workflow
//! 1. [`Rasterizer::ownership`] walks the series from the last index to the
//!    first and records, per pixel, which series drew a *line* there and
//!    which one *filled* it.  A line pixel is never taken over by a later
//!    series; fill only lands in empty pixels.
//! 2. [`Rasterizer::pack`] folds every 2×4 pixel block into one
//!    [`CharCell`]: the OR of the dot bits of all occupied pixels plus one
//!    dominant owner (line before fill, then lowest series index).
//! 3. [`Rasterizer::rasterize`] turns the cells into [`ChartRow`]s, styling
//!    line cells bold and fill cells dim in the series' palette colour.
//!
//! Occupancy goes to whichever series reaches a pixel first, while colour
//! goes to the lowest index present, so series 0 reads as the foreground.

use std::fmt;

use tracing::debug;

use crate::core::{
    color::{AnsiCode, Emphasis, Palette, Style},
    config::ChartConfig,
    constants::{BRAILLE_HORIZONTAL_RESOLUTION as HR, BRAILLE_VERTICAL_RESOLUTION as VR, Y_MAX},
    error::GraphError,
};

/// Dot bit per sub-pixel, indexed `[sub_row][sub_col]`.
/// <https://en.wikipedia.org/wiki/Braille_Patterns>
const DOT_BITS: [[u8; HR]; VR] = [[0x01, 0x08], [0x02, 0x10], [0x04, 0x20], [0x40, 0x80]];

/// U+2800, the empty braille pattern.
const BRAILLE_BASE: u32 = 0x2800;

/// What a pixel belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Line,
    Fill,
}

/// Ownership record of one pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Owner {
    pub kind: Kind,
    pub series: usize,
}

impl Owner {
    #[inline]
    #[must_use]
    pub const fn line(series: usize) -> Self {
        Self {
            kind: Kind::Line,
            series,
        }
    }

    #[inline]
    #[must_use]
    pub const fn fill(series: usize) -> Self {
        Self {
            kind: Kind::Fill,
            series,
        }
    }

    /// Sort key for colour dominance; smaller wins.
    #[inline]
    fn rank(self) -> (bool, usize) {
        (self.kind != Kind::Line, self.series)
    }
}

/// Map a 0–100 value to a pixel row, 0 being the top.
#[inline]
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn value_to_row(v: f64, pixel_height: usize) -> usize {
    let p = (v / Y_MAX).clamp(0.0, 1.0);
    ((1.0 - p) * pixel_height.saturating_sub(1) as f64) as usize
}

// --- Pixel grid ---

/// Row-major ownership grid, one optional record per pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    cells: Vec<Option<Owner>>,
}

impl PixelGrid {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Owner> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells[row * self.width + col]
    }

    /// Draw `series` onto the grid: a line pixel per column plus fill down to
    /// the floor.  `samples` must hold exactly `width` values.
    fn plot(&mut self, series: usize, samples: &[f64]) {
        for (col, &v) in samples.iter().enumerate() {
            let top = value_to_row(v, self.height);

            let slot = &mut self.cells[top * self.width + col];
            if !matches!(slot, Some(Owner { kind: Kind::Line, .. })) {
                *slot = Some(Owner::line(series));
            }

            for row in top + 1..self.height {
                let slot = &mut self.cells[row * self.width + col];
                if slot.is_none() {
                    *slot = Some(Owner::fill(series));
                }
            }
        }
    }
}

// --- Character cells ---

/// Distinct owners found inside one 2×4 block.  At most one per sub-pixel.
#[derive(Default)]
struct CellOwners {
    entries: [Option<Owner>; HR * VR],
    len: usize,
}

impl CellOwners {
    fn insert(&mut self, owner: Owner) {
        if self.entries[..self.len].contains(&Some(owner)) {
            return;
        }
        self.entries[self.len] = Some(owner);
        self.len += 1;
    }

    fn dominant(&self) -> Option<Owner> {
        self.entries[..self.len]
            .iter()
            .flatten()
            .copied()
            .min_by_key(|o| o.rank())
    }
}

/// One terminal character worth of pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharCell {
    pub mask: u8,
    pub dominant: Option<Owner>,
}

impl CharCell {
    pub const BLANK: Self = Self {
        mask: 0,
        dominant: None,
    };

    /// Braille glyph for the mask, or a plain space for an empty cell.
    #[inline]
    #[must_use]
    pub fn glyph(&self) -> char {
        if self.dominant.is_none() {
            return ' ';
        }
        char::from_u32(BRAILLE_BASE | u32::from(self.mask)).unwrap_or(' ')
    }
}

// --- Styled output ---

/// A glyph plus its optional style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyledGlyph {
    pub glyph: char,
    pub style: Option<Style>,
}

/// One rendered character row of the chart body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChartRow {
    pub glyphs: Vec<StyledGlyph>,
}

impl ChartRow {
    /// Glyphs only, no escape sequences.
    #[must_use]
    pub fn plain(&self) -> String {
        self.glyphs.iter().map(|g| g.glyph).collect()
    }
}

impl fmt::Display for ChartRow {
    /// ANSI rendering; escape sequences are emitted only where the style
    /// changes between neighbouring glyphs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut current: Option<Style> = None;
        for g in &self.glyphs {
            if g.style != current {
                if current.is_some() {
                    write!(f, "{}", AnsiCode::reset())?;
                }
                if let Some(style) = g.style {
                    write!(f, "{style}")?;
                }
                current = g.style;
            }
            write!(f, "{}", g.glyph)?;
        }
        if current.is_some() {
            write!(f, "{}", AnsiCode::reset())?;
        }
        Ok(())
    }
}

// --- Rasterizer ---

/// Turns resampled series into braille rows at a fixed character size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rasterizer {
    char_width: usize,
    char_height: usize,
}

impl Rasterizer {
    #[must_use]
    pub fn new(char_width: usize, char_height: usize) -> Self {
        Self {
            char_width,
            char_height,
        }
    }

    #[must_use]
    pub fn from_config(cfg: &ChartConfig) -> Self {
        Self::new(cfg.char_width, cfg.char_height)
    }

    #[inline]
    #[must_use]
    pub fn pixel_width(&self) -> usize {
        self.char_width * HR
    }

    #[inline]
    #[must_use]
    pub fn pixel_height(&self) -> usize {
        self.char_height * VR
    }

    /// Resolve pixel ownership for a set of series, each already resampled
    /// to [`Self::pixel_width`] samples.
    pub fn ownership(&self, samples: &[Vec<f64>]) -> Result<PixelGrid, GraphError> {
        let (w, h) = (self.pixel_width(), self.pixel_height());
        let mut grid = PixelGrid::new(w, h);
        if w == 0 || h == 0 {
            return Ok(grid);
        }

        if let Some((index, s)) = samples.iter().enumerate().find(|(_, s)| s.len() != w) {
            return Err(GraphError::InvalidInput(format!(
                "series {index} has {} samples, expected {w}",
                s.len()
            )));
        }

        for (index, s) in samples.iter().enumerate().rev() {
            grid.plot(index, s);
        }
        Ok(grid)
    }

    /// Fold the pixel grid into character cells, row-major.
    #[must_use]
    pub fn pack(&self, grid: &PixelGrid) -> Vec<Vec<CharCell>> {
        let rows = grid.height() / VR;
        let cols = grid.width() / HR;
        let mut out = Vec::with_capacity(rows);

        for cy in 0..rows {
            let mut line = Vec::with_capacity(cols);
            for cx in 0..cols {
                let mut owners = CellOwners::default();
                let mut mask = 0u8;
                for (sr, bits) in DOT_BITS.iter().enumerate() {
                    for (sc, bit) in bits.iter().enumerate() {
                        if let Some(owner) = grid.get(cy * VR + sr, cx * HR + sc) {
                            mask |= bit;
                            owners.insert(owner);
                        }
                    }
                }
                line.push(CharCell {
                    mask,
                    dominant: owners.dominant(),
                });
            }
            out.push(line);
        }
        out
    }

    /// Full pipeline: ownership → packing → styling.
    pub fn rasterize(
        &self,
        samples: &[Vec<f64>],
        palette: &Palette,
    ) -> Result<Vec<ChartRow>, GraphError> {
        if self.char_width == 0 || self.char_height == 0 {
            return Ok(Vec::new());
        }
        debug!(
            pixel_width = self.pixel_width(),
            pixel_height = self.pixel_height(),
            series = samples.len(),
            "rasterizing"
        );

        let grid = self.ownership(samples)?;
        let rows = self
            .pack(&grid)
            .into_iter()
            .map(|cells| ChartRow {
                glyphs: cells
                    .into_iter()
                    .map(|cell| StyledGlyph {
                        glyph: cell.glyph(),
                        style: cell.dominant.map(|o| style_for(o, palette)),
                    })
                    .collect(),
            })
            .collect();
        Ok(rows)
    }
}

fn style_for(owner: Owner, palette: &Palette) -> Style {
    Style {
        color: palette.color_for(owner.series),
        emphasis: match owner.kind {
            Kind::Line => Emphasis::Bold,
            Kind::Fill => Emphasis::Dim,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(v: f64, w: usize) -> Vec<f64> {
        vec![v; w]
    }

    #[test]
    fn value_rows_clamp_and_invert() {
        assert_eq!(value_to_row(100.0, 16), 0);
        assert_eq!(value_to_row(0.0, 16), 15);
        assert_eq!(value_to_row(50.0, 16), 7);
        assert_eq!(value_to_row(250.0, 16), 0);
        assert_eq!(value_to_row(-3.0, 16), 15);
    }

    #[test]
    fn single_series_line_fill_and_blank() {
        // 50 → pixel row 7 → bottom dot row of char row 1
        let r = Rasterizer::new(3, 4);
        let cells = r.pack(&r.ownership(&[flat(50.0, 6)]).unwrap());
        assert_eq!(cells.len(), 4);
        for cell in &cells[0] {
            assert_eq!(*cell, CharCell::BLANK);
            assert_eq!(cell.glyph(), ' ');
        }
        for cell in &cells[1] {
            assert_eq!(cell.dominant, Some(Owner::line(0)));
            assert_eq!(cell.mask, 0x40 | 0x80);
            assert_eq!(cell.glyph(), '⣀');
        }
        for row in &cells[2..] {
            for cell in row {
                assert_eq!(cell.dominant, Some(Owner::fill(0)));
                assert_eq!(cell.glyph(), '⣿');
            }
        }
    }

    #[test]
    fn styles_follow_kind_and_palette() {
        let palette = Palette::from_names(&["red"]).unwrap();
        let rows = Rasterizer::new(2, 2)
            .rasterize(&[flat(60.0, 4)], &palette)
            .unwrap();
        // 60 → row floor(0.4 * 7) = 2, inside char row 0
        let top = rows[0].glyphs[0].style.unwrap();
        assert_eq!(top.emphasis, Emphasis::Bold);
        assert_eq!(top.color, AnsiCode::red());
        assert_eq!(rows[1].glyphs[0].style.unwrap().emphasis, Emphasis::Dim);
    }

    #[test]
    fn collision_keeps_first_processed_line_but_colours_lowest_index() {
        let r = Rasterizer::new(1, 4);
        let a = vec![50.0, 50.0];
        let b = vec![50.0, 60.0];
        let grid = r.ownership(&[a, b]).unwrap();

        // column 0: both land on row 7, series 1 got there first
        assert_eq!(grid.get(7, 0), Some(Owner::line(1)));
        // column 1: series 1 at row 6, series 0 replaces its fill at row 7
        assert_eq!(grid.get(6, 1), Some(Owner::line(1)));
        assert_eq!(grid.get(7, 1), Some(Owner::line(0)));
        assert_eq!(grid.get(8, 1), Some(Owner::fill(1)));

        let cells = r.pack(&grid);
        assert_eq!(cells[1][0].dominant, Some(Owner::line(0)));
        assert_eq!(cells[2][0].dominant, Some(Owner::fill(1)));
    }

    #[test]
    fn crossing_series_both_render() {
        let r = Rasterizer::new(1, 4);
        let grid = r.ownership(&[vec![0.0, 100.0], vec![100.0, 0.0]]).unwrap();
        assert_eq!(grid.get(0, 0), Some(Owner::line(1)));
        assert_eq!(grid.get(15, 0), Some(Owner::line(0)));
        assert_eq!(grid.get(0, 1), Some(Owner::line(0)));
        assert_eq!(grid.get(15, 1), Some(Owner::line(1)));

        let rows = r.rasterize(&[vec![0.0, 100.0], vec![100.0, 0.0]], &Palette::default());
        let rows = rows.unwrap();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|row| row.glyphs[0].glyph == '⣿'));
    }

    #[test]
    fn empty_set_gives_blank_rows() {
        let rows = Rasterizer::new(5, 3).rasterize(&[], &Palette::default()).unwrap();
        assert_eq!(rows.len(), 3);
        for row in &rows {
            assert_eq!(row.plain(), "     ");
            assert!(row.glyphs.iter().all(|g| g.style.is_none()));
        }
    }

    #[test]
    fn zero_dimensions_give_nothing() {
        let rows = Rasterizer::new(0, 4).rasterize(&[vec![]], &Palette::default()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn mismatched_sample_count_is_invalid_input() {
        let err = Rasterizer::new(2, 1)
            .ownership(&[flat(1.0, 4), flat(1.0, 3)])
            .unwrap_err();
        assert!(matches!(err, GraphError::InvalidInput(m) if m.contains("series 1")));
    }

    #[test]
    fn display_only_switches_style_on_change() {
        let bold = Style {
            color: AnsiCode::green(),
            emphasis: Emphasis::Bold,
        };
        let row = ChartRow {
            glyphs: vec![
                StyledGlyph {
                    glyph: '⣀',
                    style: Some(bold),
                },
                StyledGlyph {
                    glyph: '⣀',
                    style: Some(bold),
                },
                StyledGlyph {
                    glyph: ' ',
                    style: None,
                },
            ],
        };
        assert_eq!(row.to_string(), "\x1b[1m\x1b[32m⣀⣀\x1b[0m ");
        assert_eq!(row.plain(), "⣀⣀ ");
    }
}
