//! Structured JSON-lines logger
//!
//! The store is a library, not a service: logging stays synchronous and
//! unbuffered so a loader crash cannot swallow the line that explains it.

use std::fmt;
use std::io::{self, Write};

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Debug-level detail
    Trace,
    /// Normal operations
    Info,
    /// Suspicious but non-fatal conditions
    Warn,
    /// Operation failures
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Writes one JSON object per event.
pub struct Logger;

impl Logger {
    /// Logs an event to stdout. Field keys are emitted in the order given;
    /// callers keep that order stable.
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let _ = Self::write_line(severity, event, fields, &mut io::stdout());
    }

    /// Logs an event to stderr, for failures.
    pub fn log_stderr(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let _ = Self::write_line(severity, event, fields, &mut io::stderr());
    }

    fn write_line<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) -> io::Result<()> {
        let mut line = String::with_capacity(128);
        line.push_str("{\"event\":\"");
        escape_into(event, &mut line);
        line.push_str("\",\"severity\":\"");
        line.push_str(severity.as_str());
        line.push('"');
        for (key, value) in fields {
            line.push_str(",\"");
            escape_into(key, &mut line);
            line.push_str("\":\"");
            escape_into(value, &mut line);
            line.push('"');
        }
        line.push_str("}\n");
        writer.write_all(line.as_bytes())
    }
}

fn escape_into(raw: &str, out: &mut String) {
    for ch in raw.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut buffer = Vec::new();
        Logger::write_line(severity, event, fields, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_line_is_valid_json() {
        let line = render(Severity::Info, "snapshot_loaded", &[("records", "42")]);
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["event"], "snapshot_loaded");
        assert_eq!(parsed["severity"], "INFO");
        assert_eq!(parsed["records"], "42");
    }

    #[test]
    fn test_values_are_escaped() {
        let line = render(Severity::Error, "load_failed", &[("path", "a\"b\\c")]);
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["path"], "a\"b\\c");
    }

    #[test]
    fn test_one_event_per_line() {
        let line = render(Severity::Warn, "odd", &[("detail", "line1\nline2")]);
        assert_eq!(line.matches('\n').count(), 1);
        assert!(line.ends_with('\n'));
    }
}
