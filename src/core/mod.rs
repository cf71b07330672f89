//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod style;

// re-export frequently-used items for convenience
pub use bounds::{Scale, chart_width, terminal_width};
pub use config::{Config, ConfigBuilder};
pub use constants::{DEFAULT_FILL, SEPARATOR, VERTICAL_CHART_HEIGHT};
pub use data::{Row, detect_column, display_width, extract_rows, read_lines};
pub use error::{ConfigError, PlotError, RenderError};
pub use style::ChartStyle;
