//! A collection of constants.

/// Used when the terminal width cannot be queried
pub const DEFAULT_TERM_WIDTH: usize = 80;
/// Wider terminals are treated as this wide
pub const MAX_TERM_WIDTH: usize = 150;
/// Auto-sized charts never shrink below 10 characters
pub const MIN_CHART_WIDTH: usize = 10;
/// Explicit `-w` requests are capped here to bound the canvas
pub const MAX_CHART_WIDTH: usize = 4096;
/// Columns kept free for the separator and a right margin
pub const WIDTH_RESERVE: usize = 8;

/// Vertical charts are always 10 character rows tall
pub const VERTICAL_CHART_HEIGHT: usize = 10;

/// Block glyph cells pack 2 horizontal and 3 vertical device pixels
pub const BLOCK_CELL_WIDTH: usize = 2;
/// Block glyph cells pack 2 horizontal and 3 vertical device pixels
pub const BLOCK_CELL_HEIGHT: usize = 3;

/// Fill glyph for the simple style when `-c` is not given
pub const DEFAULT_FILL: char = '■';
/// Placed between the padded label and its bar
pub const SEPARATOR: &str = "\t";
