//! Glyph palettes and the pixel modes that pair them with a cell size.
//!
//! A palette maps the number of lit device pixels in one cell block to the
//! character printed for that block.
//!
//! * **Binary** palettes hold exactly two glyphs, background and foreground;
//!   any lit pixel selects the foreground.
//! * **Density** palettes hold `cell_pixels + 1` glyphs indexed directly by
//!   the lit count, so a block can show partial fill.

use crate::core::{
    constants::{BLOCK_CELL_HEIGHT, BLOCK_CELL_WIDTH},
    error::RenderError,
};

/// Left-aligned fill, 0..=6 of a 2×3 block lit.
pub const HORIZONTAL_BLOCKS: [char; 7] = [' ', '▏', '▎', '▌', '▋', '▊', '█'];
/// Bottom-aligned fill, 0..=6 of a 2×3 block lit.
pub const VERTICAL_BLOCKS: [char; 7] = [' ', '▁', '▃', '▄', '▅', '▇', '█'];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphPalette {
    glyphs: Vec<char>,
}

impl GlyphPalette {
    #[inline]
    #[must_use]
    pub fn binary(background: char, foreground: char) -> Self {
        Self {
            glyphs: vec![background, foreground],
        }
    }

    #[inline]
    #[must_use]
    pub fn density(glyphs: &[char]) -> Self {
        Self {
            glyphs: glyphs.to_vec(),
        }
    }

    #[inline]
    #[must_use]
    pub fn background(&self) -> char {
        self.glyphs.first().copied().unwrap_or(' ')
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph for a block with `lit` pixels on.
    #[inline]
    #[must_use]
    pub fn glyph(&self, lit: usize) -> char {
        match self.glyphs.as_slice() {
            [] | [_] => self.background(),
            _ if lit == 0 => self.background(),
            [_, fg] => *fg,
            all => all[lit.min(all.len() - 1)],
        }
    }
}

/// Cell block size plus the palette that renders it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelMode {
    cell_width: usize,
    cell_height: usize,
    palette: GlyphPalette,
}

impl PixelMode {
    /// Validate that `palette` can express every lit count of the cell.
    pub fn new(
        cell_width: usize,
        cell_height: usize,
        palette: GlyphPalette,
    ) -> Result<Self, RenderError> {
        if cell_width == 0 || cell_height == 0 {
            return Err(RenderError::ZeroCell);
        }
        let cell_pixels = cell_width * cell_height;
        if palette.len() != 2 && palette.len() != cell_pixels + 1 {
            return Err(RenderError::InvalidPalette {
                glyphs: palette.len(),
                cell_pixels,
            });
        }
        Ok(Self {
            cell_width,
            cell_height,
            palette,
        })
    }

    /// 1×1 cells, background space and `fill` foreground.
    pub fn simple(fill: char) -> Result<Self, RenderError> {
        Self::new(1, 1, GlyphPalette::binary(' ', fill))
    }

    pub fn horizontal_blocks() -> Result<Self, RenderError> {
        Self::new(
            BLOCK_CELL_WIDTH,
            BLOCK_CELL_HEIGHT,
            GlyphPalette::density(&HORIZONTAL_BLOCKS),
        )
    }

    pub fn vertical_blocks() -> Result<Self, RenderError> {
        Self::new(
            BLOCK_CELL_WIDTH,
            BLOCK_CELL_HEIGHT,
            GlyphPalette::density(&VERTICAL_BLOCKS),
        )
    }

    #[inline]
    #[must_use]
    pub fn cell_width(&self) -> usize {
        self.cell_width
    }
    #[inline]
    #[must_use]
    pub fn cell_height(&self) -> usize {
        self.cell_height
    }
    #[inline]
    #[must_use]
    pub fn palette(&self) -> &GlyphPalette {
        &self.palette
    }
}
