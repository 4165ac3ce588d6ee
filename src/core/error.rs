//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

use crate::core::{color::ColorError, data::ParseCsvError};

/// Precise configuration faults.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("chart must be at least 1×1 characters, got {width}×{height}")]
    ZeroDimension { width: usize, height: usize },
    #[error("palette needs at least one colour")]
    EmptyPalette,
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] ParseCsvError),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    /// A caller broke a rendering contract (e.g. mismatched sample counts).
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("data set is empty")]
    EmptyData,
}
