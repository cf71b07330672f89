//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

/// Precise configuration faults.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    EmptyFill,
    UnknownStyle(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyFill => write!(f, "bar chart character is empty"),
            ConfigError::UnknownStyle(s) => write!(f, "unknown chart style {s:?}"),
        }
    }
}
impl Error for ConfigError {}

/// Faults raised while compositing pixels into glyphs.
#[derive(Debug, PartialEq, Eq)]
pub enum RenderError {
    /// Canvas produced a different number of lines than the chart needs.
    RowMismatch { expected: usize, got: usize },
    InvalidPalette { glyphs: usize, cell_pixels: usize },
    ZeroCell,
    /// Cell grid whose pixel count does not fit in memory addressing.
    TooLarge { columns: usize, rows: usize },
    /// Canvas dimensions are not a whole number of cells.
    Misaligned {
        width: usize,
        height: usize,
        cell_width: usize,
        cell_height: usize,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::RowMismatch { expected, got } => write!(
                f,
                "something went wrong, rendered {got} lines, expected {expected}"
            ),
            RenderError::InvalidPalette {
                glyphs,
                cell_pixels,
            } => write!(
                f,
                "palette of {glyphs} glyphs does not fit a {cell_pixels}-pixel cell (need 2 or {})",
                cell_pixels + 1
            ),
            RenderError::ZeroCell => write!(f, "pixel cell must be at least 1×1"),
            RenderError::TooLarge { columns, rows } => {
                write!(f, "canvas of {columns}×{rows} cells is too large")
            }
            RenderError::Misaligned {
                width,
                height,
                cell_width,
                cell_height,
            } => write!(
                f,
                "canvas {width}×{height} is not a multiple of the {cell_width}×{cell_height} cell"
            ),
        }
    }
}
impl Error for RenderError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum PlotError {
    Io(io::Error),
    Config(ConfigError),
    Render(RenderError),
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::Io(e) => write!(f, "I/O error: {e}"),
            PlotError::Config(e) => write!(f, "{e}"),
            PlotError::Render(e) => write!(f, "{e}"),
        }
    }
}
impl Error for PlotError {}

// automatic conversions
impl From<io::Error> for PlotError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ConfigError> for PlotError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
impl From<RenderError> for PlotError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}
