//! Closed set of chart styles with pure parse / display.

use std::{fmt, str::FromStr};

use crate::core::{
    constants::{BLOCK_CELL_HEIGHT, BLOCK_CELL_WIDTH},
    error::ConfigError,
};

/// Which renderer draws the bars.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ChartStyle {
    /// One fill glyph per bar unit.
    #[default]
    Simple,
    /// Sideways bars with sub-character length.
    HorizontalSubchar,
    /// Upward bars, one column per input line.
    VerticalSubchar,
}

impl ChartStyle {
    pub const ALL: [ChartStyle; 3] = [
        ChartStyle::Simple,
        ChartStyle::HorizontalSubchar,
        ChartStyle::VerticalSubchar,
    ];

    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ChartStyle::Simple => "bar-simple",
            ChartStyle::HorizontalSubchar => "bar-horizontal-1px",
            ChartStyle::VerticalSubchar => "bar-vertical-1px",
        }
    }

    /// Device pixels per output character, `(width, height)`.
    #[inline]
    #[must_use]
    pub const fn cell_size(self) -> (usize, usize) {
        match self {
            ChartStyle::Simple => (1, 1),
            ChartStyle::HorizontalSubchar | ChartStyle::VerticalSubchar => {
                (BLOCK_CELL_WIDTH, BLOCK_CELL_HEIGHT)
            }
        }
    }

    /// Whether the fill glyph from the command line is drawn.
    #[inline]
    #[must_use]
    pub const fn uses_fill(self) -> bool {
        matches!(self, ChartStyle::Simple)
    }
}

impl fmt::Display for ChartStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| ConfigError::UnknownStyle(s.to_owned()))
    }
}
