// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log record type.
//!
//! A [`LogRecord`] is one formatted line waiting to be written: a sequence of markup parts and
//! the terminator to write after it.  Records are built by the
//! formatter, handed to a [`Console`](crate::Console), and dropped.
//!
//! # Example
//!
//! ```rust
//! use printwise::LogRecord;
//!
//! let mut record = LogRecord::new();
//! record.log("[b]Processing[/] request ");
//! record.log_owned(format!("#{}", 42));
//! assert_eq!(record.to_string(), "Processing request #42");
//! ```

use crate::console::Console;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogRecord {
    parts: Vec<String>,
    end: String,
}

impl LogRecord {
    /// An empty record ending in a newline.
    pub fn new() -> Self {
        Self {
            parts: Vec::new(),
            end: "\n".to_string(),
        }
    }

    /**
    Append markup to the record.
    */
    pub fn log(&mut self, markup: &str) {
        self.parts.push(markup.to_string());
    }

    /**
    Append markup to the record, taking ownership of it.
    */
    pub fn log_owned(&mut self, markup: String) {
        self.parts.push(markup);
    }

    pub fn set_end(&mut self, end: impl Into<String>) {
        self.end = end.into();
    }

    /// The record as markup, without its terminator.
    pub fn markup(&self) -> String {
        self.parts.concat()
    }

    /// Writes the record to `console`.
    pub fn write_to(&self, console: &Console) {
        console.print(&self.markup(), &self.end);
    }
}

impl Default for LogRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// The plain text of the record, markup removed.
impl Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::markup::strip(&self.markup()))
    }
}
/*
Boilerplate notes for LogRecord:

IMPLEMENTED:
- Debug/Clone/PartialEq/Eq/Hash: Derived - records are plain data
- Default: same as new, empty parts and a newline terminator
- Display: plain text, which is what tests and sinks without color want

NOT IMPLEMENTED:
- Copy: owns heap data
- Ord/PartialOrd: No meaningful ordering for log records
*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorChoice, InMemorySink};
    use std::sync::Arc;

    #[test]
    fn parts_concatenate() {
        let mut record = LogRecord::new();
        record.log("[b]a[/]");
        record.log_owned(" b".to_string());
        assert_eq!(record.markup(), "[b]a[/] b");
        assert_eq!(record.to_string(), "a b");
        assert_eq!(LogRecord::default(), LogRecord::new());
    }

    #[test]
    fn write_to_console() {
        let sink = Arc::new(InMemorySink::new());
        let console = Console::new(sink.clone()).with_color(ColorChoice::Never);
        let mut record = LogRecord::new();
        record.log("[cyan]x[/]");
        record.set_end(";");
        record.write_to(&console);
        assert_eq!(sink.drain_logs(), "x;");
    }
}
