//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    bounds::{Scale, chart_width, terminal_width},
    config::{Config, ConfigBuilder},
    constants::{DEFAULT_FILL, MAX_CHART_WIDTH, VERTICAL_CHART_HEIGHT},
    data::{Row, detect_column, extract_rows, read_lines},
    error::{ConfigError, PlotError, RenderError},
    style::ChartStyle,
};

pub use render::{BarRenderer, Chart, GlyphPalette, PixelCanvas, PixelMode, assemble};

/// Run the whole pipeline over already-read `lines`.
///
/// Pure apart from logging: the terminal width is passed in, so the output
/// depends only on `(lines, cfg, term_width)`.
pub fn plot_lines(
    lines: Vec<String>,
    cfg: &Config,
    term_width: usize,
) -> Result<Vec<String>, PlotError> {
    let rows = extract_rows(lines, cfg.column);
    let scale = Scale::of(&rows);
    let width = chart_width(cfg.width, term_width, scale.max_width);
    tracing::debug!(
        rows = rows.len(),
        max_value = scale.max_value,
        max_width = scale.max_width,
        width,
        style = %cfg.style,
        "scaled input"
    );

    let chart = BarRenderer::new(cfg.style, cfg.fill).render(&rows, &scale, width)?;
    Ok(assemble(&rows, &scale, &chart))
}
