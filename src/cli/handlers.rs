use std::{
    io::{Write, stdin, stdout},
    time::Instant,
};

use crate::{
    core::{
        bounds::terminal_width,
        config::{Config, ConfigBuilder},
        data::read_lines,
        error::PlotError,
        style::ChartStyle,
    },
    plot_lines,
};

use super::parse::Cli;

/// Validate flags into a `Config`; bad style or empty fill fail here.
pub fn config(cli: &Cli) -> Result<Config, PlotError> {
    let cfg = Config::builder()
        .column(cli.column)
        .width(cli.width)
        .fill(cli.fill.as_str())
        .style_name(&cli.style)
        .and_then(ConfigBuilder::build)?;
    Ok(cfg)
}

pub fn plot(cli: &Cli) -> Result<(), PlotError> {
    let cfg = config(cli)?;

    let t_ingest = Instant::now();
    let lines = read_lines(stdin().lock())?;
    let dur_ingest = t_ingest.elapsed();

    let t_render = Instant::now();
    let out = plot_lines(lines, &cfg, terminal_width())?;
    let dur_render = t_render.elapsed();
    tracing::debug!(
        lines = out.len(),
        ingest = ?dur_ingest,
        render = ?dur_render,
        "chart ready"
    );

    let mut w = stdout().lock();
    for line in &out {
        writeln!(w, "{line}")?;
    }
    w.flush()?;
    Ok(())
}

/// Print every style name, marking the default.
pub fn styles() {
    for style in ChartStyle::ALL {
        if style == ChartStyle::default() {
            println!("{style} (default)");
        } else {
            println!("{style}");
        }
    }
}
