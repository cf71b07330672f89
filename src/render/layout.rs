//! Final assembly: padded label, separator, bar.

use crate::{
    core::{
        bounds::Scale,
        constants::SEPARATOR,
        data::{Row, display_width},
    },
    render::bars::Chart,
};

/// Pad `text` with spaces to `width` terminal columns.
#[inline]
#[must_use]
pub fn pad_label(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(text));
    let mut out = String::with_capacity(text.len() + pad);
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', pad));
    out
}

/// Join labels and bars; vertical slices pass through without labels.
///
/// Trailing background cells are trimmed from every emitted line.
#[must_use]
pub fn assemble(rows: &[Row], scale: &Scale, chart: &Chart) -> Vec<String> {
    match chart {
        Chart::PerRow(bars) => rows
            .iter()
            .zip(bars)
            .map(|(row, bar)| {
                let mut line = pad_label(&row.text, scale.max_width);
                line.push_str(SEPARATOR);
                line.push_str(bar.trim_end_matches(' '));
                line
            })
            .collect(),
        Chart::Slices(lines) => lines
            .iter()
            .map(|l| l.trim_end_matches(' ').to_owned())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn labels_pad_to_common_display_width() {
        assert_eq!(pad_label("ab", 4), "ab  ");
        assert_eq!(pad_label("日本", 6), "日本  ");
        assert_eq!(pad_label("longer", 3), "longer");
    }

    #[test]
    fn rows_join_label_separator_and_bar() {
        let rows = vec![
            Row::extract("a 1".into(), 2),
            Row::extract("日本 2".into(), 2),
        ];
        let scale = Scale::of(&rows);
        let chart = Chart::PerRow(vec!["#   ".into(), "####".into()]);
        assert_eq!(
            assemble(&rows, &scale, &chart),
            ["a 1   \t#", "日本 2\t####"]
        );
    }

    #[test]
    fn slices_skip_labels() {
        let chart = Chart::Slices(vec!["█ █ ".into(), "    ".into()]);
        assert_eq!(assemble(&[], &Scale::default(), &chart), ["█ █", ""]);
    }

    proptest! {
        #[test]
        fn padded_labels_share_one_width(labels in prop::collection::vec("[a-z日本語é ]{0,12}", 1..10)) {
            let widest = labels.iter().map(|l| display_width(l)).max().unwrap_or(0);
            for l in &labels {
                prop_assert_eq!(display_width(&pad_label(l, widest)), widest);
            }
        }
    }
}
