//! Whole-chart assembly:
//! - title rule + metadata line
//! - braille body with y-axis labels in a fixed-width column
//! - x-axis date line
//! - per-series summary footer + closing rule
//!
//! Nothing here touches the terminal until [`Frame::write_to`] is called.

use std::{
    fmt,
    io::{self, Write},
};

use tracing::debug;

use crate::{
    core::{
        color::{AnsiCode, colorize},
        config::ChartConfig,
        constants::{DECIMAL_PRECISION, LABEL_GUTTER, Y_AXIS_WIDTH},
        data::{Series, SeriesSummary},
        error::GraphError,
        format::{fmt_date, fmt_date_range, fmt_geo},
    },
    render::{
        axis::{x_labels, y_labels},
        raster::Rasterizer,
        resample::Resampler,
    },
};

/// Two spaces in front, one space behind
const TITLE_PADDING: usize = 3;
/// Horizontal rule glyph
const H: &str = "─";
/// Metadata separator
const SEP: &str = "  │  ";
const CAPTION: &str = "Interest Over Time";
const FOOTNOTE: &str = "* Interest indexed to 100 = peak popularity in window";

// --- Helpers ---

/// Write centred colored text between horizontal rules.
fn push_centered(buf: &mut String, text: &str, width: usize, color: Option<&AnsiCode>) {
    let inner = width.saturating_sub(TITLE_PADDING);
    let len = text.chars().count();
    if len == 0 || len > inner {
        buf.push_str(&H.repeat(width));
        return;
    }
    let pad_left = (inner - len) / 2;
    let pad_right = inner - len - pad_left;

    buf.push_str(&H.repeat(pad_left));
    buf.push_str("  "); // 2-char left padding
    match color {
        Some(c) => buf.push_str(&colorize(c, text)),
        None => buf.push_str(text),
    }
    buf.push(' '); // 1-char right padding
    buf.push_str(&H.repeat(pad_right));
}

/// Default title: `TRENDS  "RUST"  vs  "GO"  —  5Y TREND`.
fn default_title(cfg: &ChartConfig, series: &[Series]) -> String {
    let queries = series
        .iter()
        .map(|s| format!("\"{}\"", s.label.to_uppercase()))
        .collect::<Vec<_>>()
        .join("  vs  ");
    format!("TRENDS  {queries}  —  {}", cfg.timeframe)
}

// --- Frame ---

/// A fully laid out chart, one `String` per terminal line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub header: Vec<String>,
    /// Axis label column + gutter + braille row.
    pub body: Vec<String>,
    pub x_axis: String,
    pub footer: Vec<String>,
}

impl Frame {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.header
            .iter()
            .chain(&self.body)
            .chain(std::iter::once(&self.x_axis))
            .chain(&self.footer)
            .map(String::as_str)
    }

    /// Write the frame followed by a trailing newline.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")?;
        out.flush()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

// --- Compositor ---

/// Lays a series set out into a [`Frame`] according to one config.
pub struct Compositor<'a> {
    cfg: &'a ChartConfig,
}

impl<'a> Compositor<'a> {
    #[must_use]
    pub fn new(cfg: &'a ChartConfig) -> Self {
        Self { cfg }
    }

    /// Full line width: axis column, gutter and body.
    #[inline]
    fn line_width(&self) -> usize {
        Y_AXIS_WIDTH + LABEL_GUTTER + self.cfg.char_width
    }

    #[inline]
    fn paint(&self, code: &AnsiCode, text: &str) -> String {
        if self.cfg.styled {
            colorize(code, text)
        } else {
            text.to_owned()
        }
    }

    fn dim(&self, text: &str) -> String {
        self.paint(&AnsiCode::dim(), text)
    }

    fn bold(&self, text: &str) -> String {
        self.paint(&AnsiCode::bold(), text)
    }

    fn rule(&self, title: &str) -> String {
        let mut line = String::new();
        let title_color = AnsiCode::green();
        push_centered(
            &mut line,
            title,
            self.line_width(),
            self.cfg.styled.then_some(&title_color),
        );
        line
    }

    /// Lay out `series` (first entry drives the axis dates).
    pub fn compose(&self, series: &[Series]) -> Result<Frame, GraphError> {
        let Some(lead) = series.first() else {
            return Err(GraphError::EmptyData);
        };
        let cfg = self.cfg;
        debug!(
            series = series.len(),
            char_width = cfg.char_width,
            char_height = cfg.char_height,
            "composing chart"
        );

        // --- header ---
        let title = if cfg.title.is_empty() {
            default_title(cfg, series)
        } else {
            cfg.title.clone()
        };
        let dates = lead.dates();
        let meta = format!(
            "LAST UPDATE: {}{SEP}{}{SEP}{}",
            fmt_date(cfg.updated),
            fmt_geo(&cfg.geo),
            fmt_date_range(&dates)
        );
        let header = vec![
            self.rule(&title),
            format!("  {}", self.dim(&meta)),
            String::new(),
            format!("  {}", self.dim(CAPTION)),
            String::new(),
        ];

        // --- body ---
        let values: Vec<Vec<f64>> = series.iter().map(Series::values).collect();
        let samples = Resampler::new(cfg.pixel_width()).resample_all(&values);
        let rows = Rasterizer::from_config(cfg).rasterize(&samples, &cfg.palette)?;
        let labels = y_labels(cfg.char_height);

        let gutter = " ".repeat(LABEL_GUTTER);
        let body = rows
            .iter()
            .zip(&labels)
            .map(|(row, label)| {
                let label = format!(
                    "{:>width$}",
                    label.as_deref().unwrap_or(""),
                    width = Y_AXIS_WIDTH
                );
                let glyphs = if cfg.styled {
                    row.to_string()
                } else {
                    row.plain()
                };
                format!("{}{gutter}{glyphs}", self.dim(&label))
            })
            .collect();

        let x_line = x_labels(&dates, cfg.char_width, cfg.timeframe);
        let x_axis = format!(
            "{}{}",
            " ".repeat(Y_AXIS_WIDTH + LABEL_GUTTER),
            self.dim(&x_line)
        );

        // --- footer ---
        let mut footer = vec![String::new()];
        if let [only] = series {
            footer.push(self.single_summary(only));
        } else {
            footer.extend(series.iter().enumerate().map(|(i, s)| self.legend_line(i, s)));
        }
        footer.push(String::new());
        footer.push(format!("  {}", self.dim(FOOTNOTE)));
        footer.push(String::new());
        footer.push(self.rule(""));

        Ok(Frame {
            header,
            body,
            x_axis,
            footer,
        })
    }

    /// `Peak: 100 (Jan 03, 2024)   Current: 10   Avg: 38.0`
    fn single_summary(&self, s: &Series) -> String {
        let Some(sum) = s.summary() else {
            return format!("  {}", self.dim("No data"));
        };
        format!(
            "  Peak: {} ({})   Current: {}   Avg: {}",
            self.bold(&sum.peak_value.to_string()),
            fmt_date(sum.peak_date),
            self.bold(&sum.current_value.to_string()),
            self.bold(&fmt_avg(&sum)),
        )
    }

    /// `● rust   current: 10   peak: 100 (Jan 03, 2024)   avg: 38.0`
    fn legend_line(&self, index: usize, s: &Series) -> String {
        let bullet = self.paint(&self.cfg.palette.color_for(index), "●");
        let name = self.bold(&s.label);
        match s.summary() {
            Some(sum) => format!(
                "  {bullet} {name}   {} {}   {}",
                self.dim("current:"),
                sum.current_value,
                self.dim(&format!(
                    "peak: {} ({})   avg: {}",
                    sum.peak_value,
                    fmt_date(sum.peak_date),
                    fmt_avg(&sum)
                )),
            ),
            None => format!("  {bullet} {name}   {}", self.dim("no data")),
        }
    }
}

fn fmt_avg(sum: &SeriesSummary) -> String {
    format!("{:.*}", DECIMAL_PRECISION, sum.avg_value)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::core::{data::DataPoint, timeframe::Timeframe};

    fn daily(label: &str, values: &[i32]) -> Series {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Series::new(
            label,
            values
                .iter()
                .enumerate()
                .map(|(i, &value)| DataPoint {
                    date: start + chrono::Days::new(i as u64),
                    value,
                })
                .collect(),
        )
    }

    fn plain_cfg(width: usize, height: usize) -> ChartConfig {
        ChartConfig::builder(width)
            .height(height)
            .geo("US")
            .timeframe(Timeframe::Month)
            .updated(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap())
            .styled(false)
            .build()
            .unwrap()
    }

    #[test]
    fn centered_title_fills_width() {
        let mut s = String::new();
        push_centered(&mut s, "abc", 11, None);
        assert_eq!(s, "──  abc ───");
        assert_eq!(s.chars().count(), 11);

        let mut s = String::new();
        push_centered(&mut s, "", 4, None);
        assert_eq!(s, "────");
    }

    #[test]
    fn single_series_layout() {
        let cfg = plain_cfg(40, 4);
        let frame = Compositor::new(&cfg)
            .compose(&[daily("rust", &[10, 20, 100, 50, 10])])
            .unwrap();

        assert!(frame.header[0].contains("TRENDS  \"RUST\"  —  1M TREND"));
        assert_eq!(
            frame.header[1],
            "  LAST UPDATE: Feb 01, 2026  │  UNITED STATES  │  Jan 2024 – Jan 2024"
        );

        assert_eq!(frame.body.len(), 4);
        assert!(frame.body[0].starts_with("  100 "));
        for line in &frame.body {
            assert_eq!(line.chars().count(), Y_AXIS_WIDTH + LABEL_GUTTER + 40);
        }
        assert!(frame.x_axis.starts_with("      Jan '24"));
        assert!(frame.x_axis.ends_with("Jan '24"));
        assert!(
            frame
                .footer
                .contains(&"  Peak: 100 (Jan 03, 2024)   Current: 10   Avg: 38.0".to_owned())
        );
    }

    #[test]
    fn compare_lists_every_series() {
        let cfg = plain_cfg(60, 4);
        let frame = Compositor::new(&cfg)
            .compose(&[daily("a", &[0, 100]), daily("b", &[100, 0]), daily("c", &[])])
            .unwrap();
        assert!(frame.header[0].contains("\"A\"  vs  \"B\"  vs  \"C\""));
        assert!(frame.footer.contains(
            &"  ● a   current: 100   peak: 100 (Jan 02, 2024)   avg: 50.0".to_owned()
        ));
        assert!(frame.footer.contains(&"  ● c   no data".to_owned()));
    }

    #[test]
    fn empty_set_is_an_error() {
        let cfg = plain_cfg(10, 4);
        assert!(matches!(
            Compositor::new(&cfg).compose(&[]),
            Err(GraphError::EmptyData)
        ));
    }

    #[test]
    fn styled_output_carries_escapes() {
        let mut cfg = plain_cfg(10, 4);
        cfg.styled = true;
        let frame = Compositor::new(&cfg).compose(&[daily("x", &[50])]).unwrap();
        assert!(frame.body.iter().any(|l| l.contains("\x1b[1m\x1b[32m")));
        let text = frame.to_string();
        assert_eq!(text.lines().count(), frame.lines().count());
    }
}
