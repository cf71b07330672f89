pub mod bars;
pub mod canvas;
pub mod layout;
pub mod palette;

pub use bars::{BarRenderer, Chart};
pub use canvas::PixelCanvas;
pub use layout::{assemble, pad_label};
pub use palette::{GlyphPalette, PixelMode};
