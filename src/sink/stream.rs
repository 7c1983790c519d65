//! Sinks backed by the process output streams.

use std::io::{self, Write};

use super::LogSink;

/// Writes to standard output. The log collector reads this stream as INFO.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

/// Writes to standard error. The log collector reads this stream as ERROR.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

/// Write `line` plus a trailing newline in one call, then flush.
pub fn write_line<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    writeln!(out, "{line}")?;
    out.flush()
}

impl LogSink for StdoutSink {
    fn write(&self, line: &str) -> io::Result<()> {
        // Holding the lock keeps concurrent lines from interleaving.
        write_line(&mut io::stdout().lock(), line)
    }
}

impl LogSink for StderrSink {
    fn write(&self, line: &str) -> io::Result<()> {
        write_line(&mut io::stderr().lock(), line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_line_appends_newline() {
        let mut out = Vec::new();

        write_line(&mut out, "INFO: home page visited at 2026-10-16T09:30:00Z").unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "INFO: home page visited at 2026-10-16T09:30:00Z\n"
        );
    }

    #[test]
    fn test_each_write_is_one_line() {
        let mut out = Vec::new();

        write_line(&mut out, r#"{"severity":"WARNING"}"#).unwrap();
        write_line(&mut out, "ERROR: second").unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, [r#"{"severity":"WARNING"}"#, "ERROR: second"]);
        assert!(text.ends_with('\n'));
    }
}
