//! Run-time configuration object + fluent builder.

use crate::core::{constants::DEFAULT_FILL, error::ConfigError, style::ChartStyle};

/// Immutable parameters handed to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 1-based field number, 0 means auto-detect.
    pub column: usize,
    pub style: ChartStyle,
    /// Only the first `char` of the `-c` argument survives.
    pub fill: char,
    /// Chart width in characters, 0 means derive from the terminal.
    pub width: usize,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            column: 0,
            style: ChartStyle::default(),
            fill: DEFAULT_FILL,
            width: 0,
        }
    }
}

/// Fluent builder with zero allocation until `build`.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    column: usize,
    style: Option<ChartStyle>,
    fill: Option<String>,
    width: usize,
}

impl ConfigBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn column(mut self, n: usize) -> Self {
        self.column = n;
        self
    }
    #[inline]
    #[must_use]
    pub fn style(mut self, s: ChartStyle) -> Self {
        self.style = Some(s);
        self
    }
    #[inline]
    #[must_use]
    pub fn fill(mut self, c: impl Into<String>) -> Self {
        self.fill = Some(c.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn width(mut self, w: usize) -> Self {
        self.width = w;
        self
    }

    /// Parse the style by name, keeping the builder chain intact.
    pub fn style_name(self, name: &str) -> Result<Self, ConfigError> {
        Ok(self.style(name.parse()?))
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let style = self.style.unwrap_or_default();
        let first = self.fill.as_deref().map(|s| s.chars().next());
        let fill = match first {
            None => DEFAULT_FILL,
            Some(Some(c)) => c,
            Some(None) if style.uses_fill() => return Err(ConfigError::EmptyFill),
            Some(None) => DEFAULT_FILL,
        };
        Ok(Config {
            column: self.column,
            style,
            fill,
            width: self.width,
        })
    }
}
