// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Sink
//!
//! A sink that keeps everything written to it, for tests and for programs that want to look at
//! their own output.
//!
//! ```rust
//! use printwise::{ColorChoice, Console, InMemorySink, Printer};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(InMemorySink::new());
//! let mut printer = Printer::default();
//! *printer.console_mut() = Console::new(sink.clone()).with_color(ColorChoice::Never);
//!
//! printer.info("hello");
//! let logs = sink.drain_logs();
//! assert!(logs.contains("INFO"));
//! assert!(logs.contains("hello"));
//! ```

use crate::sink::Sink;
use parking_lot::Mutex;

/// Captures every write in memory.
///
/// Writes are stored exactly as the console produced them, terminators included.
#[derive(Debug, Default)]
pub struct InMemorySink {
    writes: Mutex<Vec<String>>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Default: empty buffer
// - Clone: NOT implemented - share it through Arc instead
// - PartialEq/Eq/Hash: NOT implemented - comparing mutex contents is not meaningful
// - Send/Sync: automatic through Mutex

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far as one string, clearing the buffer.
    pub fn drain_logs(&self) -> String {
        let mut writes = self.writes.lock();
        let result = writes.concat();
        writes.clear();
        result
    }

    /// Drains the buffer and splits it into lines.
    pub fn drain_lines(&self) -> Vec<String> {
        self.drain_logs().lines().map(str::to_string).collect()
    }

    /// Number of separate writes received since the last drain.
    pub fn write_count(&self) -> usize {
        self.writes.lock().len()
    }

    /// Flushes the buffer to stderr, clearing it.
    pub fn drain_to_console(&self) {
        let mut writes = self.writes.lock();
        for write in writes.iter() {
            eprint!("{}", write);
        }
        writes.clear();
    }
}

impl Sink for InMemorySink {
    fn write_text(&self, text: &str) {
        self.writes.lock().push(text.to_string());
    }
}
