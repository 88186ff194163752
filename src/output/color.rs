//! Colored line emission over any byte sink

use std::io::Write;

use termcolor::Color;

use crate::error::{Error, Result};

/// Depth palette: white, purple, yellow. Depth `d` uses slot `d % 3`.
pub const PALETTE: [Color; 3] = [Color::White, Color::Magenta, Color::Yellow];

pub const RESET: &str = "\x1b[0m";

const LINE_TERMINATOR: &str = "\n";

/// Palette color for a depth. The root is depth 0.
pub fn palette_color(depth: usize) -> Color {
    PALETTE[depth % PALETTE.len()]
}

/// ANSI start sequence for `color`, in the `ESC[0;3Nm` form for the basic eight.
pub fn start_code(color: Color) -> Option<String> {
    let code = match color {
        Color::Black => "\x1b[0;30m".to_string(),
        Color::Red => "\x1b[0;31m".to_string(),
        Color::Green => "\x1b[0;32m".to_string(),
        Color::Yellow => "\x1b[0;33m".to_string(),
        Color::Blue => "\x1b[0;34m".to_string(),
        Color::Magenta => "\x1b[0;35m".to_string(),
        Color::Cyan => "\x1b[0;36m".to_string(),
        Color::White => "\x1b[0;37m".to_string(),
        Color::Ansi256(n) => format!("\x1b[38;5;{}m", n),
        Color::Rgb(r, g, b) => format!("\x1b[38;2;{};{};{}m", r, g, b),
        _ => return None,
    };
    Some(code)
}

/// Wraps a sink and brackets output with the current color and a reset.
///
/// The color persists across calls until changed.
pub struct ColorEmitter<W: Write> {
    sink: W,
    color: Option<Color>,
}

impl<W: Write> ColorEmitter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink, color: None }
    }

    /// Set the color for subsequent output. `None` means plain text.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Write `text` as color-start, text, reset.
    ///
    /// Empty text writes nothing at all; absent text is an `InvalidArgument`.
    pub fn print<'a>(&mut self, text: impl Into<Option<&'a str>>) -> Result<()> {
        self.emit(text.into(), "")
    }

    /// Write `text` as color-start, text, newline, reset.
    ///
    /// The reset trails the newline.
    pub fn println<'a>(&mut self, text: impl Into<Option<&'a str>>) -> Result<()> {
        self.emit(text.into(), LINE_TERMINATOR)
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn emit(&mut self, text: Option<&str>, terminator: &str) -> Result<()> {
        let text = text.ok_or_else(|| Error::invalid_argument("Text to print is missing."))?;
        if text.is_empty() {
            return Ok(());
        }

        let out = match self.color.and_then(start_code) {
            Some(start) => format!("{}{}{}{}", start, text, terminator, RESET),
            None => format!("{}{}", text, terminator),
        };
        self.sink.write_all(out.as_bytes())?;
        Ok(())
    }
}
