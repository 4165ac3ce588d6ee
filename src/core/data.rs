//! Series model, summary figures and the buffered CSV loader.
//!
//! CSV layout: a header `date,<label>[,<label>…]` followed by one row per
//! calendar day, `YYYY-MM-DD,value[,value…]`.  Each value column becomes one
//! [`Series`].  Empty cells leave that day out of the column's series.

use std::io::{BufRead, BufReader, Read};

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use super::constants::DECIMAL_PRECISION;

const DATE_FORMAT: &str = "%Y-%m-%d";

// --- Public Row Structs ---

/// One observation: a calendar day and its 0–100 interest value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DataPoint {
    pub date: NaiveDate,
    pub value: i32,
}

/// One query's interest over time, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Series {
    pub label: String,
    pub points: Vec<DataPoint>,
}

impl Series {
    pub fn new(label: impl Into<String>, points: Vec<DataPoint>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Raw values as floats, ready for resampling.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| f64::from(p.value)).collect()
    }

    #[must_use]
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// Footer figures, computed from the raw points before resampling.
    #[must_use]
    pub fn summary(&self) -> Option<SeriesSummary> {
        SeriesSummary::from_points(&self.points)
    }
}

/// Peak, latest and mean value of one series.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub peak_value: i32,
    pub peak_date: NaiveDate,
    pub current_value: i32,
    pub avg_value: f64,
}

impl SeriesSummary {
    /// `None` for an empty series.  Ties for the peak go to the earliest date.
    /// The mean keeps `DECIMAL_PRECISION` places, halves rounding to even.
    #[must_use]
    pub fn from_points(points: &[DataPoint]) -> Option<Self> {
        let first = points.first()?;
        let last = points.last()?;

        let mut peak = first;
        let mut sum = 0i64;
        for p in points {
            if p.value > peak.value {
                peak = p;
            }
            sum += i64::from(p.value);
        }

        #[allow(clippy::cast_precision_loss)]
        let mean = sum as f64 / points.len() as f64;
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let scale = 10f64.powi(DECIMAL_PRECISION as i32);
        Some(Self {
            peak_value: peak.value,
            peak_date: peak.date,
            current_value: last.value,
            avg_value: (mean * scale).round_ties_even() / scale,
        })
    }
}

// --- Error Handling ---
#[derive(Debug, Error)]
#[error("line {line}: {kind}")]
pub struct ParseCsvError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error("I/O error: {0}")]
    Io(std::io::Error),
    #[error("expected a `date,<label>…` header or data row")]
    MissingHeader,
    #[error("expected {expected} columns, got {got}")]
    BadColumnCount { expected: usize, got: usize },
    #[error("invalid date '{text}' (want YYYY-MM-DD)")]
    BadDate { text: String },
    #[error("invalid value '{text}' in column `{column}`")]
    BadValue { column: String, text: String },
    #[error("date {text} is not after the previous row")]
    UnorderedDate { text: String },
}

impl ParseCsvError {
    fn at(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}

// --- Helpers ---
#[inline]
fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

/// Parse one cell.  Values are rounded to the nearest integer; range
/// clamping is left to the renderer.
#[inline]
fn parse_value(text: &str, line: usize, column: &str) -> Result<i32, ParseCsvError> {
    let bad = || {
        ParseCsvError::at(
            line,
            ParseErrorKind::BadValue {
                column: column.to_owned(),
                text: text.to_owned(),
            },
        )
    };
    let val = lexical_core::parse::<f64>(text.as_bytes()).map_err(|_| bad())?;
    if !val.is_finite() {
        return Err(bad());
    }
    #[allow(clippy::cast_possible_truncation)]
    Ok(val.round() as i32)
}

// --- Fast CSV ingest ---
const BUF_CAP: usize = 1 << 16; // 64 KiB

pub fn read_csv_fast<R: Read>(src: R) -> Result<Vec<Series>, ParseCsvError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut series: Vec<Series> = Vec::new();
    let mut prev_date: Option<NaiveDate> = None;
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr
            .read_until(b'\n', &mut buf)
            .map_err(|e| ParseCsvError::at(line_no, ParseErrorKind::Io(e)))?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        let text = String::from_utf8_lossy(&buf);
        let line = text.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let cols: Vec<&str> = line.split(',').map(str::trim).collect();

        // first row: header, or data with generated labels
        if series.is_empty() {
            if cols.len() < 2 {
                return Err(ParseCsvError::at(line_no, ParseErrorKind::MissingHeader));
            }
            if parse_date(cols[0]).is_none() {
                series = cols[1..].iter().map(|l| Series::new(*l, Vec::new())).collect();
                continue;
            }
            series = (1..cols.len())
                .map(|i| Series::new(format!("series {i}"), Vec::new()))
                .collect();
        }

        if cols.len() != series.len() + 1 {
            return Err(ParseCsvError::at(
                line_no,
                ParseErrorKind::BadColumnCount {
                    expected: series.len() + 1,
                    got: cols.len(),
                },
            ));
        }

        let date = parse_date(cols[0]).ok_or_else(|| {
            ParseCsvError::at(
                line_no,
                ParseErrorKind::BadDate {
                    text: cols[0].to_owned(),
                },
            )
        })?;
        if prev_date.is_some_and(|prev| date <= prev) {
            return Err(ParseCsvError::at(
                line_no,
                ParseErrorKind::UnorderedDate {
                    text: cols[0].to_owned(),
                },
            ));
        }
        prev_date = Some(date);

        for (s, cell) in series.iter_mut().zip(&cols[1..]) {
            if cell.is_empty() {
                continue;
            }
            let value = parse_value(cell, line_no, &s.label)?;
            s.points.push(DataPoint { date, value });
        }
    }

    if series.is_empty() {
        return Err(ParseCsvError::at(line_no, ParseErrorKind::MissingHeader));
    }
    Ok(series)
}

pub fn read_csv_from_path(path: &str) -> Result<Vec<Series>, ParseCsvError> {
    if path == "-" {
        read_csv_fast(std::io::stdin())
    } else {
        use std::fs::File;
        read_csv_fast(
            File::open(path).map_err(|e| ParseCsvError::at(0, ParseErrorKind::Io(e)))?,
        )
    }
}
