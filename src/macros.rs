// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logging macros, and the crate's own diagnostics.
//!
//! The macros are thin wrappers over [`Printer::log`](crate::Printer::log).  What they add over
//! the methods is the name of the calling function, which the compiler's caller location lacks.
//!
//! ```rust
//! use printwise::{ColorChoice, Console, InMemorySink, Printer, PrinterConfig};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(InMemorySink::new());
//! let console = Console::new(sink.clone()).with_color(ColorChoice::Never);
//! let printer = Printer::with_console(console, PrinterConfig::new()).unwrap();
//!
//! fn load(printer: &Printer) {
//!     printwise::info!(printer, "loaded", 3, "shards");
//! }
//! load(&printer);
//! let logs = sink.drain_logs();
//! assert!(logs.contains(" - load | loaded 3 shards"));
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

/// Controls whether the crate writes its own diagnostics to stderr.
///
/// The crate's domain starts enabled when built with the `printwise_internal` feature, and can
/// be flipped at runtime with [`set_internal_logging`](crate::set_internal_logging).
pub struct LoggingDomain {
    is_internal: AtomicBool,
}

impl LoggingDomain {
    #[inline]
    pub const fn new(enabled: bool) -> Self {
        Self {
            is_internal: AtomicBool::new(enabled),
        }
    }

    #[inline]
    pub fn is_internal(&self) -> bool {
        self.is_internal.load(Ordering::Relaxed)
    }

    pub fn set_internal(&self, enabled: bool) {
        self.is_internal.store(enabled, Ordering::Relaxed);
    }
}

// ============================================================================
// Boilerplate trait implementations for LoggingDomain
// ============================================================================

impl std::fmt::Debug for LoggingDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggingDomain")
            .field("is_internal", &self.is_internal())
            .finish()
    }
}

impl Default for LoggingDomain {
    fn default() -> Self {
        Self::new(false)
    }
}

impl From<bool> for LoggingDomain {
    fn from(enabled: bool) -> Self {
        Self::new(enabled)
    }
}

/// Writes a crate-internal diagnostic to stderr when the crate's domain is internal.
macro_rules! debug_internal {
    ($($arg:tt)*) => {
        if $crate::INTERNAL_DOMAIN.is_internal() {
            ::std::eprintln!("printwise: {}", ::std::format_args!($($arg)*));
        }
    };
}
pub(crate) use debug_internal;

/**
Logs values at a level, recording the calling function.

```
# use printwise::{Level, Printer};
# let printer = Printer::default();
printwise::log!(printer, Level::Success, "wrote", 12, "files");
```
*/
#[macro_export]
macro_rules! log {
    ($printer:expr, $level:expr, $($value:expr),+ $(,)?) => {
        $printer.log(
            $level,
            &[$(&$value as &dyn ::std::fmt::Display),+],
            &$crate::LogOptions::new().function($crate::function_name!()),
        )
    };
}

/// Plain output through a printer, no annotations.
#[macro_export]
macro_rules! plain {
    ($printer:expr, $($value:expr),+ $(,)?) => {
        $crate::log!($printer, $crate::Level::Print, $($value),+)
    };
}

#[macro_export]
macro_rules! debug {
    ($printer:expr, $($value:expr),+ $(,)?) => {
        $crate::log!($printer, $crate::Level::Debug, $($value),+)
    };
}

#[macro_export]
macro_rules! info {
    ($printer:expr, $($value:expr),+ $(,)?) => {
        $crate::log!($printer, $crate::Level::Info, $($value),+)
    };
}

#[macro_export]
macro_rules! success {
    ($printer:expr, $($value:expr),+ $(,)?) => {
        $crate::log!($printer, $crate::Level::Success, $($value),+)
    };
}

#[macro_export]
macro_rules! warning {
    ($printer:expr, $($value:expr),+ $(,)?) => {
        $crate::log!($printer, $crate::Level::Warning, $($value),+)
    };
}

#[macro_export]
macro_rules! error {
    ($printer:expr, $($value:expr),+ $(,)?) => {
        $crate::log!($printer, $crate::Level::Error, $($value),+)
    };
}
