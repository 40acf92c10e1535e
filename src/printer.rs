//! Rainbow console printer.
//!
//! Every line written goes out in the next colour of the palette, wrapping
//! back to red after violet. The colour counter is presentation state only and
//! has nothing to do with the board.

use std::io::{self, Write};

use crate::constants::{RAINBOW, RESET};

/// Writes lines to `out`, each in the next rainbow colour.
pub struct ColorPrinter<W: Write> {
    out: W,
    index: usize,
    color: bool,
}

impl<W: Write> ColorPrinter<W> {
    /// Create a printer that colours its output.
    pub fn new(out: W) -> Self {
        Self {
            out,
            index: 0,
            color: true,
        }
    }

    /// Create a printer that writes lines without escape sequences.
    pub fn plain(out: W) -> Self {
        Self {
            out,
            index: 0,
            color: false,
        }
    }

    /// Write `message` followed by a newline, then advance the colour.
    pub fn print_colored(&mut self, message: &str) -> io::Result<()> {
        if self.color {
            let color = RAINBOW[self.index];
            writeln!(self.out, "{color}{message}{RESET}")?;
        } else {
            writeln!(self.out, "{message}")?;
        }
        self.out.flush()?;
        self.index = (self.index + 1) % RAINBOW.len();
        Ok(())
    }

    /// Restart the cycle from red.
    pub fn reset_colors(&mut self) {
        self.index = 0;
    }

    /// Index of the colour the next line will use.
    pub fn color_index(&self) -> usize {
        self.index
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
