//! Terminal output
//!
//! - `color` - depth palette and the `ColorEmitter` that brackets lines with ANSI codes

mod color;

pub use color::{ColorEmitter, PALETTE, RESET, palette_color, start_code};
