//! Geometry helpers: global scale + terminal size plumbing.

use terminal_size::{Width, terminal_size};

use crate::core::{
    constants::{
        DEFAULT_TERM_WIDTH, MAX_CHART_WIDTH, MAX_TERM_WIDTH, MIN_CHART_WIDTH, WIDTH_RESERVE,
    },
    data::Row,
};

/// Global maxima every bar is normalised against.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Scale {
    /// Largest value, or 0 when no value is positive.
    pub max_value: f64,
    pub max_width: usize,
}

impl Scale {
    /// Single pass over `rows`; empty input yields `0 / 0`.
    #[must_use]
    pub fn of(rows: &[Row]) -> Self {
        rows.iter().fold(Self::default(), |acc, row| Self {
            max_value: if row.value > acc.max_value {
                row.value
            } else {
                acc.max_value
            },
            max_width: acc.max_width.max(row.width),
        })
    }

    /// Length of `value` on a `span`-pixel axis, floored and clipped to `span`.
    ///
    /// * A zero scale yields 0 for every value.
    /// * Negative or non-finite values yield 0.
    #[inline]
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn scaled(&self, value: f64, span: usize) -> usize {
        if self.max_value <= 0.0 || !value.is_finite() || value <= 0.0 {
            return 0;
        }
        let len = (value / self.max_value * span as f64).floor();
        // `as` saturates, the min catches rounding past the edge
        (len as usize).min(span)
    }
}

/// Current terminal width, 80 when unknown, never above 150.
///
/// The only function in the crate that looks at the environment.
#[inline]
#[must_use]
pub fn terminal_width() -> usize {
    match terminal_size() {
        Some((Width(w), _)) if w > 0 => usize::from(w).min(MAX_TERM_WIDTH),
        _ => DEFAULT_TERM_WIDTH,
    }
}

/// Chart width in characters: explicit request, else what the labels leave over.
///
/// Explicit requests are capped at `MAX_CHART_WIDTH`.
#[inline]
#[must_use]
pub fn chart_width(requested: usize, term_width: usize, label_width: usize) -> usize {
    if requested > 0 {
        return requested.min(MAX_CHART_WIDTH);
    }
    term_width
        .saturating_sub(label_width + WIDTH_RESERVE)
        .max(MIN_CHART_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(value: f64, width: usize) -> Row {
        Row {
            text: String::new(),
            width,
            value,
        }
    }

    #[test]
    fn empty_rows_give_zero_scale() {
        assert_eq!(Scale::of(&[]), Scale::default());
    }

    #[test]
    fn scale_ignores_negative_maxima() {
        let s = Scale::of(&[row(-3.0, 4), row(-1.0, 9)]);
        assert_eq!(s.max_value, 0.0);
        assert_eq!(s.max_width, 9);
        let s = Scale::of(&[row(2.0, 1), row(7.5, 3), row(1.0, 2)]);
        assert_eq!(s.max_value, 7.5);
        assert_eq!(s.max_width, 3);
    }

    #[test]
    fn zero_scale_never_divides() {
        let s = Scale::default();
        assert_eq!(s.scaled(5.0, 10), 0);
        assert_eq!(s.scaled(0.0, 10), 0);
    }

    #[test]
    fn scaled_floors_and_clips() {
        let s = Scale {
            max_value: 3.0,
            max_width: 0,
        };
        assert_eq!(s.scaled(1.0, 10), 3);
        assert_eq!(s.scaled(3.0, 10), 10);
        assert_eq!(s.scaled(-1.0, 10), 0);
        assert_eq!(s.scaled(f64::NAN, 10), 0);
        // a value above the scale can only come from a caller mixing scales
        assert_eq!(s.scaled(30.0, 10), 10);
    }

    #[test]
    fn chart_width_prefers_explicit_request() {
        assert_eq!(chart_width(33, 80, 70), 33);
        assert_eq!(chart_width(0, 80, 20), 52);
        assert_eq!(chart_width(0, 80, 75), MIN_CHART_WIDTH);
    }

    #[test]
    fn oversized_request_is_capped() {
        assert_eq!(chart_width(usize::MAX, 80, 5), MAX_CHART_WIDTH);
        assert_eq!(chart_width(MAX_CHART_WIDTH, 80, 5), MAX_CHART_WIDTH);
        assert_eq!(chart_width(MAX_CHART_WIDTH + 1, 80, 5), MAX_CHART_WIDTH);
    }

    #[test]
    fn terminal_width_is_in_band() {
        let w = terminal_width();
        assert!(w > 0 && w <= MAX_TERM_WIDTH);
    }
}
