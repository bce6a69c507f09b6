// SPDX-License-Identifier: MIT OR Apache-2.0

//! An optional process-wide [Printer].
//!
//! Nothing in the crate uses the global printer on its own.  A program that wants one shared
//! printer instead of passing one around opts in by calling these functions; the first call
//! creates a [Printer::default] unless [set_global_printer] got there first.
//!
//! # Examples
//!
//! ```
//! use printwise::global_printer::{global_printer, global_printer_mut};
//! use printwise::{Level, PrinterConfig};
//!
//! global_printer_mut()
//!     .configure(PrinterConfig::new().threshold(Level::Info).rank(0))
//!     .unwrap();
//! global_printer().info("visible everywhere");
//! printwise::success!(global_printer(), "done");
//! ```
//!
//! # Locking
//!
//! The printer sits behind a `parking_lot::RwLock`.  Logging takes the read lock, so any number
//! of threads may log at once.  Don't hold the guard from [global_printer_mut] while logging
//! through [global_printer] on the same thread.

use crate::printer::Printer;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::OnceLock;

static GLOBAL_PRINTER: OnceLock<RwLock<Printer>> = OnceLock::new();

fn slot() -> &'static RwLock<Printer> {
    GLOBAL_PRINTER.get_or_init(|| RwLock::new(Printer::default()))
}

/// Read access for logging.
pub fn global_printer() -> RwLockReadGuard<'static, Printer> {
    slot().read()
}

/// Write access for configuration.
pub fn global_printer_mut() -> RwLockWriteGuard<'static, Printer> {
    slot().write()
}

/// Replaces the global printer, returning the previous one.
pub fn set_global_printer(printer: Printer) -> Printer {
    std::mem::replace(&mut *slot().write(), printer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorChoice, Console, InMemorySink, Level, Mode, PrinterConfig};
    use std::sync::{Arc, Mutex};

    static TEST_PRINTER_GUARD: Mutex<()> = Mutex::new(());

    fn install_capture() -> Arc<InMemorySink> {
        let sink = Arc::new(InMemorySink::new());
        let console = Console::new(sink.clone()).with_color(ColorChoice::Never);
        set_global_printer(Printer::with_console(console, PrinterConfig::new()).unwrap());
        sink
    }

    #[test]
    fn set_and_use() {
        let _guard = TEST_PRINTER_GUARD.lock().unwrap();
        let sink = install_capture();
        global_printer().print("through the global");
        assert_eq!(sink.drain_logs(), "through the global\n");

        let previous = set_global_printer(Printer::default());
        assert_eq!(previous.mode(), Mode::Interactive);
    }

    #[test]
    fn configure_in_place() {
        let _guard = TEST_PRINTER_GUARD.lock().unwrap();
        let sink = install_capture();
        global_printer_mut()
            .configure(PrinterConfig::new().threshold(Level::Error))
            .unwrap();
        global_printer().warning("dropped");
        assert_eq!(sink.drain_logs(), "");
        assert_eq!(global_printer().threshold(), Level::Error);
    }

    #[test]
    fn logging_from_threads() {
        let _guard = TEST_PRINTER_GUARD.lock().unwrap();
        let sink = install_capture();
        let handles: Vec<_> = (0..4)
            .map(|i| std::thread::spawn(move || global_printer().print(i)))
            .collect();
        for handle in handles {
            assert!(handle.join().expect("thread should complete"));
        }
        assert_eq!(sink.drain_lines().len(), 4);
    }
}
