//! Structured JSON logger
//!
//! One event per line, emitted synchronously. TRACE, INFO and WARN go to
//! stdout; ERROR goes to stderr. The fixed `event` and `severity` keys come
//! first, then caller fields in the order given, so output is deterministic
//! for a given call sequence.

use std::fmt;
use std::io::{self, Write};

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Per-record diagnostics (skipped documents)
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues (ignored configuration entries)
    Warn = 2,
    /// Operation failures
    Error = 3,
}

impl Severity {
    /// Returns the string representation
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

/// A structured logger that outputs one JSON object per event.
pub struct Logger;

impl Logger {
    /// Log at TRACE level
    pub fn trace(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Trace, event, fields, &mut io::stdout());
    }

    /// Log at INFO level
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Info, event, fields, &mut io::stdout());
    }

    /// Log at WARN level
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Warn, event, fields, &mut io::stdout());
    }

    /// Log at ERROR level
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Error, event, fields, &mut io::stderr());
    }

    fn emit<W: Write>(severity: Severity, event: &str, fields: &[(&str, &str)], writer: &mut W) {
        let mut line = String::with_capacity(128);

        line.push_str("{\"event\":\"");
        Self::escape_into(&mut line, event);
        line.push_str("\",\"severity\":\"");
        line.push_str(severity.as_str());
        line.push('"');

        for (key, value) in fields {
            line.push_str(",\"");
            Self::escape_into(&mut line, key);
            line.push_str("\":\"");
            Self::escape_into(&mut line, value);
            line.push('"');
        }

        line.push_str("}\n");

        // One write, one flush: a log line is never interleaved or deferred.
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }

    fn escape_into(out: &mut String, s: &str) {
        for c in s.chars() {
            match c {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c if c.is_control() => {
                    out.push_str(&format!("\\u{:04x}", c as u32));
                }
                c => out.push(c),
            }
        }
    }
}

/// Capture a log line to a string for testing
#[cfg(test)]
pub fn capture(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut buffer = Vec::new();
    Logger::emit(severity, event, fields, &mut buffer);
    String::from_utf8(buffer).unwrap()
}
