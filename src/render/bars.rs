//! The three bar renderers.
//!
//! Every renderer allocates its own canvas, draws one bar per row and hands
//! the composited lines back. Horizontal styles produce one line per input
//! row; the vertical style transposes, producing a fixed number of slices
//! that each cut across every row.

use crate::{
    core::{
        bounds::Scale, constants::VERTICAL_CHART_HEIGHT, data::Row, error::RenderError,
        style::ChartStyle,
    },
    render::{canvas::PixelCanvas, palette::PixelMode},
};

/// Rendered chart, tagged by orientation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Chart {
    /// One bar segment per input row, in input order.
    PerRow(Vec<String>),
    /// `VERTICAL_CHART_HEIGHT` lines, top first, one column per input row.
    Slices(Vec<String>),
}

impl Chart {
    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[String] {
        match self {
            Chart::PerRow(l) | Chart::Slices(l) => l,
        }
    }
}

pub struct BarRenderer {
    style: ChartStyle,
    fill: char,
}

impl BarRenderer {
    #[inline]
    #[must_use]
    pub fn new(style: ChartStyle, fill: char) -> Self {
        Self { style, fill }
    }

    /// Draw `rows` against `scale`; `width` is in output characters and is
    /// ignored by the vertical style.
    pub fn render(&self, rows: &[Row], scale: &Scale, width: usize) -> Result<Chart, RenderError> {
        match self.style {
            ChartStyle::Simple => {
                let mode = PixelMode::simple(self.fill)?;
                horizontal(rows, scale, width, &mode).map(Chart::PerRow)
            }
            ChartStyle::HorizontalSubchar => {
                let mode = PixelMode::horizontal_blocks()?;
                horizontal(rows, scale, width, &mode).map(Chart::PerRow)
            }
            ChartStyle::VerticalSubchar => vertical(rows, scale).map(Chart::Slices),
        }
    }
}

/// Bars grow rightwards; a row's bar spans every device row of its cell.
fn horizontal(
    rows: &[Row],
    scale: &Scale,
    width: usize,
    mode: &PixelMode,
) -> Result<Vec<String>, RenderError> {
    let mut canvas = PixelCanvas::for_cells(width, rows.len(), mode)?;
    let span = canvas.width();
    let ch = mode.cell_height();

    for (i, row) in rows.iter().enumerate() {
        let len = scale.scaled(row.value, span);
        for y in i * ch..(i + 1) * ch {
            canvas.horizontal_run(y, 0, len);
        }
    }

    let lines = canvas.render_to_glyphs(mode)?;
    verify_rows(rows.len(), lines)
}

/// Bars grow upward from the bottom edge, one character column per row.
fn vertical(rows: &[Row], scale: &Scale) -> Result<Vec<String>, RenderError> {
    let mode = PixelMode::vertical_blocks()?;
    let mut canvas = PixelCanvas::for_cells(rows.len(), VERTICAL_CHART_HEIGHT, &mode)?;
    let span = canvas.height();
    let cw = mode.cell_width();
    let bottom = span.saturating_sub(1);

    for (i, row) in rows.iter().enumerate() {
        let height = scale.scaled(row.value, span);
        for x in i * cw..(i + 1) * cw {
            canvas.vertical_stroke(x, bottom, height);
        }
    }

    let lines = canvas.render_to_glyphs(&mode)?;
    verify_rows(VERTICAL_CHART_HEIGHT, lines)
}

#[inline]
fn verify_rows(expected: usize, lines: Vec<String>) -> Result<Vec<String>, RenderError> {
    if lines.len() == expected {
        Ok(lines)
    } else {
        Err(RenderError::RowMismatch {
            expected,
            got: lines.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rows(values: &[f64]) -> Vec<Row> {
        values
            .iter()
            .map(|&value| Row {
                text: String::new(),
                width: 0,
                value,
            })
            .collect()
    }

    fn render(style: ChartStyle, values: &[f64], width: usize) -> Chart {
        let rows = rows(values);
        let scale = Scale::of(&rows);
        BarRenderer::new(style, '#').render(&rows, &scale, width).unwrap()
    }

    fn filled(line: &str) -> usize {
        line.chars().filter(|&c| c != ' ').count()
    }

    #[test]
    fn simple_bars_scale_to_width() {
        let chart = render(ChartStyle::Simple, &[5.0, 10.0], 10);
        assert_eq!(
            chart,
            Chart::PerRow(vec!["#####     ".into(), "##########".into()])
        );
    }

    #[test]
    fn simple_bars_use_the_fill_glyph() {
        let rows = rows(&[1.0]);
        let chart = BarRenderer::new(ChartStyle::Simple, '■')
            .render(&rows, &Scale::of(&rows), 3)
            .unwrap();
        assert_eq!(chart.lines(), ["■■■"]);
    }

    #[test]
    fn horizontal_bars_resolve_half_cells() {
        // device lengths 10 and 5 on a 5-character chart
        let chart = render(ChartStyle::HorizontalSubchar, &[8.0, 4.0], 5);
        assert_eq!(
            chart,
            Chart::PerRow(vec!["█████".into(), "██▌  ".into()])
        );
    }

    #[test]
    fn vertical_slices_have_fixed_count() {
        for n in [0, 1, 3, 40] {
            let values: Vec<f64> = (0..n).map(f64::from).collect();
            let chart = render(ChartStyle::VerticalSubchar, &values, 7);
            let Chart::Slices(lines) = chart else {
                panic!("vertical style must produce slices");
            };
            assert_eq!(lines.len(), VERTICAL_CHART_HEIGHT);
            for line in &lines {
                assert_eq!(line.chars().count(), usize::try_from(n).unwrap());
            }
        }
    }

    #[test]
    fn vertical_bars_grow_from_the_bottom() {
        let chart = render(ChartStyle::VerticalSubchar, &[10.0, 5.0, 0.0], 0);
        let lines = chart.lines();
        assert_eq!(lines[0], "█  ");
        assert_eq!(lines[4], "█  ");
        assert_eq!(lines[5], "██ ");
        assert_eq!(lines[9], "██ ");
    }

    #[test]
    fn vertical_partial_cell_uses_density_glyph() {
        // 1/30 of the height lights one device row of the bottom cell
        let chart = render(ChartStyle::VerticalSubchar, &[30.0, 1.0], 0);
        assert_eq!(chart.lines()[9], "█▃");
        assert_eq!(chart.lines()[8], "█ ");
    }

    #[test]
    fn zero_scale_renders_empty_bars() {
        for style in ChartStyle::ALL {
            let chart = render(style, &[0.0, -2.0, 0.0], 8);
            assert!(chart.lines().iter().all(|l| filled(l) == 0), "{style}");
        }
    }

    #[test]
    fn unbounded_width_is_an_error_not_a_panic() {
        let rows = rows(&[1.0]);
        let err = BarRenderer::new(ChartStyle::HorizontalSubchar, '#')
            .render(&rows, &Scale::of(&rows), usize::MAX)
            .unwrap_err();
        assert!(matches!(err, RenderError::TooLarge { .. }));
    }

    #[test]
    fn mismatch_is_reported() {
        assert_eq!(
            verify_rows(3, vec![String::new()]),
            Err(RenderError::RowMismatch {
                expected: 3,
                got: 1
            })
        );
    }

    proptest! {
        #[test]
        fn bar_length_is_monotonic_in_value(
            others in prop::collection::vec(0.0f64..1000.0, 1..8),
            a in 0.0f64..1000.0,
            b in 0.0f64..1000.0,
            width in 1usize..60,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            // fix the scale so only the probed row changes
            let scale = Scale { max_value: 1000.0, max_width: 0 };
            for style in [ChartStyle::Simple, ChartStyle::HorizontalSubchar] {
                let r = BarRenderer::new(style, '#');
                let mut rs = rows(&others);
                rs.push(rows(&[lo])[0].clone());
                let low = r.render(&rs, &scale, width).unwrap();
                rs.last_mut().unwrap().value = hi;
                let high = r.render(&rs, &scale, width).unwrap();
                let n = rs.len() - 1;
                prop_assert!(filled(&low.lines()[n]) <= filled(&high.lines()[n]));
                prop_assert_eq!(&low.lines()[..n], &high.lines()[..n]);
            }
        }

        #[test]
        fn explicit_width_fixes_segment_length(
            values in prop::collection::vec(-10.0f64..1000.0, 0..12),
            width in 0usize..80,
        ) {
            for style in [ChartStyle::Simple, ChartStyle::HorizontalSubchar] {
                let chart = render(style, &values, width);
                prop_assert_eq!(chart.lines().len(), values.len());
                for line in chart.lines() {
                    prop_assert_eq!(line.chars().count(), width);
                }
            }
        }
    }
}
