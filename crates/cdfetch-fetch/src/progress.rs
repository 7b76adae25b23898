//! Transfer progress observation.
//!
//! The download copy loop reports each chunk to a [`ProgressObserver`] after
//! writing it to disk. [`ProgressCounter`] is the standard observer: it keeps
//! a running byte total and redraws a single status line in place.

use indicatif::HumanBytes;
use std::io::{self, Write};

/// Width of the blank run used to clear the previous status line.
const CLEAR_WIDTH: usize = 50;

/// Receives every chunk moved by a transfer.
pub trait ProgressObserver {
    /// Called once per chunk, after the chunk has been written to disk.
    ///
    /// Returns the chunk length unchanged.
    fn observe(&mut self, chunk: &[u8]) -> usize;

    /// Called once when the transfer stops, whether it succeeded or failed.
    fn finish(&mut self) {}
}

/// Discards all progress.
impl ProgressObserver for () {
    fn observe(&mut self, chunk: &[u8]) -> usize {
        chunk.len()
    }
}

impl<T: ProgressObserver + ?Sized> ProgressObserver for &mut T {
    fn observe(&mut self, chunk: &[u8]) -> usize {
        (**self).observe(chunk)
    }

    fn finish(&mut self) {
        (**self).finish();
    }
}

/// Counts transferred bytes and renders a human-readable progress line.
///
/// Output errors are ignored: the status line is advisory and must never
/// fail or stall a transfer.
#[derive(Debug)]
pub struct ProgressCounter<W: Write = io::Stdout> {
    total: u64,
    out: W,
    rendered: bool,
}

impl ProgressCounter<io::Stdout> {
    /// Creates a counter that renders to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl ProgressCounter<io::Sink> {
    /// Creates a counter that tracks the total without rendering anything.
    #[must_use]
    pub fn silent() -> Self {
        Self::new(io::sink())
    }
}

impl<W: Write> ProgressCounter<W> {
    /// Creates a counter that renders to `out`.
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self {
            total: 0,
            out,
            rendered: false,
        }
    }

    /// Returns the cumulative number of bytes observed.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Returns a reference to the output surface.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consumes the counter, returning the output surface.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Redraws the status line with the current total.
    ///
    /// The previous line is blanked with a carriage return and padding, then
    /// rewritten, so repeated calls never append new lines.
    pub fn render_progress(&mut self) {
        let _ = write!(self.out, "\r{}", " ".repeat(CLEAR_WIDTH));
        let _ = write!(
            self.out,
            "\rDownloading... {} complete",
            HumanBytes(self.total)
        );
        let _ = self.out.flush();
        self.rendered = true;
    }
}

impl<W: Write> ProgressObserver for ProgressCounter<W> {
    fn observe(&mut self, chunk: &[u8]) -> usize {
        let n = chunk.len();
        self.total += n as u64;
        self.render_progress();
        n
    }

    /// Terminates the status line so later output starts on a fresh line.
    ///
    /// Nothing is written if no progress was ever rendered.
    fn finish(&mut self) {
        if self.rendered {
            let _ = writeln!(self.out);
            let _ = self.out.flush();
            self.rendered = false;
        }
    }
}
