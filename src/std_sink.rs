// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::sink::Sink;
use std::io::{IsTerminal, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stream {
    #[default]
    Stdout,
    Stderr,
}

/**
A sink that writes to stdout or stderr.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StdSink {
    stream: Stream,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Copy: the struct is a single fieldless enum
// - PartialEq/Eq/Hash: two sinks are equal when they write to the same stream
// - Default: stdout, where printed output normally goes
// - Display: NOT implemented - no meaningful string representation

impl StdSink {
    pub const fn stdout() -> Self {
        Self {
            stream: Stream::Stdout,
        }
    }

    pub const fn stderr() -> Self {
        Self {
            stream: Stream::Stderr,
        }
    }

    pub const fn stream(&self) -> Stream {
        self.stream
    }
}

impl Sink for StdSink {
    fn write_text(&self, text: &str) {
        // The lock is held for the whole line so threads can't interleave inside it.
        match self.stream {
            Stream::Stdout => {
                let mut lock = std::io::stdout().lock();
                let _ = lock.write_all(text.as_bytes());
                let _ = lock.flush();
            }
            Stream::Stderr => {
                let mut lock = std::io::stderr().lock();
                let _ = lock.write_all(text.as_bytes());
            }
        }
    }

    fn is_terminal(&self) -> bool {
        match self.stream {
            Stream::Stdout => std::io::stdout().is_terminal(),
            Stream::Stderr => std::io::stderr().is_terminal(),
        }
    }

    fn prepare_to_die(&self) {
        if self.stream == Stream::Stdout {
            let _ = std::io::stdout().flush();
        }
    }
}
