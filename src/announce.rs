//! Sinks for switch announcements.

use std::io::{self, Write};
use tracing::warn;

/// Receives the message produced by each input switch.
///
/// Announcing cannot fail from the caller's point of view; sinks that do
/// I/O handle their own errors.
pub trait Announcer {
    fn announce(&mut self, message: &str);
}

/// Writes each announcement as a line on standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct Console;

impl Announcer for Console {
    fn announce(&mut self, message: &str) {
        write_line(io::stdout().lock(), message);
    }
}

/// Write one announcement line, logging and dropping any I/O error.
fn write_line<W: Write>(mut out: W, message: &str) {
    if let Err(error) = writeln!(out, "{message}").and_then(|()| out.flush()) {
        warn!(%error, line = message, "failed to write announcement");
    }
}

/// Collects announcements in memory.
impl Announcer for Vec<String> {
    fn announce(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

impl<A: Announcer + ?Sized> Announcer for &mut A {
    fn announce(&mut self, message: &str) {
        (**self).announce(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn write_line_swallows_write_errors() {
        write_line(ClosedPipe, "Switching input to Optical...");
    }

    #[test]
    fn write_line_terminates_each_message() {
        let mut out = Vec::new();
        write_line(&mut out, "Switching input to RCA...");
        write_line(&mut out, "Switching input to USB...");
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Switching input to RCA...\nSwitching input to USB...\n"
        );
    }

    #[test]
    fn vec_collects_in_order() {
        let mut lines: Vec<String> = Vec::new();
        lines.announce("first");
        lines.announce("second");
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn mutable_reference_forwards() {
        let mut lines: Vec<String> = Vec::new();
        {
            let mut borrowed = &mut lines;
            <&mut Vec<String> as Announcer>::announce(&mut borrowed, "through a reference");
        }
        assert_eq!(lines, vec!["through a reference"]);
    }
}
