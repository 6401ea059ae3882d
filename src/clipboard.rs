//! Copy to the system clipboard through the terminal.
//!
//! Uses the OSC 52 escape sequence, which most modern terminals (and tmux
//! with `set-clipboard on`) forward to the host clipboard, including over
//! SSH. Copying is fire-and-forget: the caller never learns whether the
//! terminal honoured it.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::io::{self, Write};

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> io::Result<()>;
}

/// Writes OSC 52 sequences to the wrapped writer (stdout in the app)
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl Osc52Clipboard<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn copy(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", osc52_sequence(text))?;
        self.out.flush()
    }
}

pub fn osc52_sequence(text: &str) -> String {
    format!("\u{1b}]52;c;{}\u{7}", STANDARD.encode(text.as_bytes()))
}
