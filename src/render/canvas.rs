//! Bit-packed device-pixel canvas, composited into text one cell at a time.
//!
//! ### Layout
//! Each device row owns `words_per_row` consecutive `u64` words; pixel `x`
//! of row `y` is bit `x % 64` of word `y * words_per_row + x / 64`.
//! Padding bits past `width` are never set, so a masked `count_ones` over a
//! cell's columns is the lit count for that slice of the block.
//!
//! Drawing clips silently: runs and strokes that leave the canvas are cut at
//! the edge, never rejected.

use crate::{core::error::RenderError, render::palette::PixelMode};

const WORD_BITS: usize = u64::BITS as usize;

/// Bits `start..end` of one word (`end <= 64`, `start < end`).
#[inline]
const fn span_mask(start: usize, end: usize) -> u64 {
    let len = end - start;
    if len == WORD_BITS {
        u64::MAX
    } else {
        ((1u64 << len) - 1) << start
    }
}

#[derive(Clone, Debug)]
pub struct PixelCanvas {
    width: usize,
    height: usize,
    words_per_row: usize,
    bits: Vec<u64>,
}

impl PixelCanvas {
    /// Empty canvas of `width × height` device pixels.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        let words_per_row = width.div_ceil(WORD_BITS);
        Self {
            width,
            height,
            words_per_row,
            bits: vec![0; words_per_row * height],
        }
    }

    /// Canvas sized for `columns × rows` output characters of the given mode.
    pub fn for_cells(columns: usize, rows: usize, mode: &PixelMode) -> Result<Self, RenderError> {
        let too_large = || RenderError::TooLarge { columns, rows };
        let width = columns
            .checked_mul(mode.cell_width())
            .ok_or_else(too_large)?;
        let height = rows
            .checked_mul(mode.cell_height())
            .ok_or_else(too_large)?;
        width
            .div_ceil(WORD_BITS)
            .checked_mul(height)
            .ok_or_else(too_large)?;
        Ok(Self::new(width, height))
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    #[must_use]
    pub fn is_on(&self, x: usize, y: usize) -> bool {
        x < self.width
            && y < self.height
            && (self.bits[y * self.words_per_row + x / WORD_BITS] >> (x % WORD_BITS)) & 1 == 1
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize) {
        if x < self.width && y < self.height {
            self.bits[y * self.words_per_row + x / WORD_BITS] |= 1 << (x % WORD_BITS);
        }
    }

    /// Light `len` pixels of device row `row`, starting at column `from`.
    pub fn horizontal_run(&mut self, row: usize, from: usize, len: usize) {
        if row >= self.height {
            return;
        }
        let start = from.min(self.width);
        let end = from.saturating_add(len).min(self.width);
        let base = row * self.words_per_row;

        let mut x = start;
        while x < end {
            let bit = x % WORD_BITS;
            let take = (WORD_BITS - bit).min(end - x);
            self.bits[base + x / WORD_BITS] |= span_mask(bit, bit + take);
            x += take;
        }
    }

    /// Light `height` pixels of device column `col`, from row `from` upward.
    ///
    /// Row 0 is the top of the canvas, so "upward" walks towards smaller
    /// row indices.
    pub fn vertical_stroke(&mut self, col: usize, from: usize, height: usize) {
        if col >= self.width || height == 0 || self.height == 0 {
            return;
        }
        let top = from.saturating_sub(height - 1);
        let bottom = from.min(self.height - 1);
        for y in top..=bottom {
            self.set(col, y);
        }
    }

    /// Lit pixels of row `y` within columns `start..end`.
    #[inline]
    fn count_run(&self, y: usize, start: usize, end: usize) -> usize {
        let base = y * self.words_per_row;
        let mut lit = 0;
        let mut x = start;
        while x < end {
            let bit = x % WORD_BITS;
            let take = (WORD_BITS - bit).min(end - x);
            lit += (self.bits[base + x / WORD_BITS] & span_mask(bit, bit + take)).count_ones();
            x += take;
        }
        lit as usize
    }

    /// Composite every cell block into one glyph.
    ///
    /// Returns `height / cell_height` lines of exactly `width / cell_width`
    /// glyphs each; background glyphs are kept so callers can trim.
    pub fn render_to_glyphs(&self, mode: &PixelMode) -> Result<Vec<String>, RenderError> {
        let (cw, ch) = (mode.cell_width(), mode.cell_height());
        if self.width % cw != 0 || self.height % ch != 0 {
            return Err(RenderError::Misaligned {
                width: self.width,
                height: self.height,
                cell_width: cw,
                cell_height: ch,
            });
        }
        let (columns, rows) = (self.width / cw, self.height / ch);
        let palette = mode.palette();

        let lines = (0..rows)
            .map(|row| {
                let top = row * ch;
                (0..columns)
                    .map(|col| {
                        let left = col * cw;
                        let lit = (top..top + ch)
                            .map(|y| self.count_run(y, left, left + cw))
                            .sum();
                        palette.glyph(lit)
                    })
                    .collect::<String>()
            })
            .collect();
        Ok(lines)
    }
}
