//! Line ingest + per-line metrics: numeric value and rendered width.

use std::io::{self, BufRead, BufReader, Read};

use unicode_width::UnicodeWidthStr;

// --- Public Row Struct ---
/// One input line with the numbers the renderers need.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub text: String,
    /// Terminal columns the text occupies.
    pub width: usize,
    /// 0 when the field is missing or not a finite number.
    pub value: f64,
}

impl Row {
    /// Measure `text` and read its `column`-th field (1-based).
    #[must_use]
    pub fn extract(text: String, column: usize) -> Self {
        let width = display_width(&text);
        let value = column
            .checked_sub(1)
            .and_then(|idx| text.split_whitespace().nth(idx))
            .and_then(parse_field)
            .unwrap_or_else(|| {
                tracing::trace!(line = %text, column, "no numeric value");
                0.0
            });
        Self { text, width, value }
    }
}

// --- Helpers ---

/// Rendered width in terminal columns: wide glyphs count 2, combining marks 0.
#[inline]
#[must_use]
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Replace U+2212 MINUS SIGN with an ASCII hyphen, borrowing when absent.
#[inline]
fn normalize_unicode_minus(field: &str) -> std::borrow::Cow<'_, str> {
    if field.contains('\u{2212}') {
        field.replace('\u{2212}', "-").into()
    } else {
        field.into()
    }
}

/// Finite float or nothing.
#[inline]
#[must_use]
pub fn parse_field(field: &str) -> Option<f64> {
    let field = normalize_unicode_minus(field);
    lexical_core::parse::<f64>(field.as_bytes())
        .ok()
        .filter(|v| v.is_finite())
}

/// Pick the 1-based column whose fields parse as numbers most often.
///
/// Ties go to the lowest column. No rows, or rows without fields, give 1.
#[must_use]
pub fn detect_column<S: AsRef<str>>(lines: &[S]) -> usize {
    let mut hits: Vec<usize> = Vec::new();
    for line in lines {
        for (idx, field) in line.as_ref().split_whitespace().enumerate() {
            if idx >= hits.len() {
                hits.resize(idx + 1, 0);
            }
            if parse_field(field).is_some() {
                hits[idx] += 1;
            }
        }
    }

    let mut order: Vec<usize> = (0..hits.len()).collect();
    // stable: equal counts keep ascending column order
    order.sort_by(|&a, &b| hits[b].cmp(&hits[a]));
    order.first().map_or(1, |&idx| idx + 1)
}

/// Turn raw lines into rows, auto-detecting the column when `column == 0`.
#[must_use]
pub fn extract_rows(lines: Vec<String>, column: usize) -> Vec<Row> {
    let column = if column == 0 {
        let detected = detect_column(lines.as_slice());
        tracing::debug!(column = detected, "auto-detected value column");
        detected
    } else {
        column
    };
    lines
        .into_iter()
        .map(|line| Row::extract(line, column))
        .collect()
}

// --- Line ingest ---
const BUF_CAP: usize = 1 << 20; // 1 MiB

/// Read every line of `src`; trailing `\n` / `\r\n` stripped, bad UTF-8 replaced.
pub fn read_lines<R: Read>(src: R) -> io::Result<Vec<String>> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut lines = Vec::new();

    loop {
        buf.clear();
        if rdr.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }
    Ok(lines)
}
