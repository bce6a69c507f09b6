// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reporting failures between two rules instead of a bare error dump.
//!
//! [GracefulErrors] guards a block.  When the block fails with an error it handles, the error is
//! printed in a bordered section:
//!
//! ```text
//! ───────── ↓ Caught ParseIntError: invalid digit found in string | src/main.rs:9 ↓ ─────────
//! Error: invalid digit found in string
//! ───────── ↑ Caught ParseIntError: invalid digit found in string | src/main.rs:9 ↑ ─────────
//! ```
//!
//! then the callback runs, and the process either exits with status 1 or carries on after the
//! block.  Errors it does not handle come back unchanged.
//!
//! ```
//! use printwise::GracefulErrors;
//!
//! let parsed = GracefulErrors::new()
//!     .exit(false)
//!     .run(|| "12x".parse::<i32>());
//! assert_eq!(parsed, Ok(None));
//! ```

use crate::console::Console;
use crate::markup::escape;
use crate::origin::Origin;
use crate::printer::Printer;
use parking_lot::Mutex;
use std::any::Any;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::cell::{Cell, RefCell};
use std::error::Error;
use std::fmt::Display;
use std::panic::{AssertUnwindSafe, PanicHookInfo};
use std::sync::Arc;

/// What a guarded block failed with, as passed to the callback.
#[derive(Debug, Clone, Copy)]
pub enum Caught<'e> {
    Error(&'e (dyn Error + 'static)),
    Panic(&'e str),
}

impl Display for Caught<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Caught::Error(error) => write!(f, "{}", error),
            Caught::Panic(message) => write!(f, "panic: {}", message),
        }
    }
}

type Handled = fn(&(dyn Error + 'static)) -> bool;

fn handles<E: Error + 'static>(error: &(dyn Error + 'static)) -> bool {
    error.is::<E>()
}

pub struct GracefulErrors<'a> {
    handled: Vec<Handled>,
    on_error: Option<Box<dyn FnMut(Caught<'_>) + 'a>>,
    exit: bool,
    extra_message: String,
    catch_panics: bool,
    console: Console,
}

impl Default for GracefulErrors<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GracefulErrors<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GracefulErrors")
            .field("handled", &self.handled.len())
            .field("exit", &self.exit)
            .field("extra_message", &self.extra_message)
            .field("catch_panics", &self.catch_panics)
            .finish_non_exhaustive()
    }
}

impl<'a> GracefulErrors<'a> {
    /// Handles every error and exits on failure, reporting to stdout.
    pub fn new() -> Self {
        Self {
            handled: Vec::new(),
            on_error: None,
            exit: true,
            extra_message: String::new(),
            catch_panics: false,
            console: Console::stdout(),
        }
    }

    /// Reports through the same console as `printer`.
    pub fn for_printer(printer: &Printer) -> Self {
        Self::new().console(printer.console().clone())
    }

    /**
    Handles errors of type `E`.

    Once any type is named, only the named types are handled.  With none named, all are.
    */
    pub fn handle<E: Error + 'static>(mut self) -> Self {
        self.handled.push(handles::<E>);
        self
    }

    /// Called after the report is printed.
    pub fn on_error(mut self, callback: impl FnMut(Caught<'_>) + 'a) -> Self {
        self.on_error = Some(Box::new(callback));
        self
    }

    /// Whether to end the process with status 1 after a handled failure.
    pub fn exit(mut self, exit: bool) -> Self {
        self.exit = exit;
        self
    }

    /// Extra text for the rule titles, such as the rank.
    pub fn extra_message(mut self, message: impl Into<String>) -> Self {
        self.extra_message = message.into();
        self
    }

    /**
    Also report panics in the block.

    Panics are only handled when no explicit error types were named; otherwise they continue
    unwinding.  A handled panic is reported at the place it happened and the panic hook stays
    quiet about it.
    */
    pub fn catch_panics(mut self, catch: bool) -> Self {
        self.catch_panics = catch;
        self
    }

    pub fn console(mut self, console: Console) -> Self {
        self.console = console;
        self
    }

    fn is_handled(&self, error: &(dyn Error + 'static)) -> bool {
        self.handled.is_empty() || self.handled.iter().any(|handled| handled(error))
    }

    /**
    Runs `f`.

    `Ok(Some(value))` when it succeeds, `Ok(None)` when a handled failure was reported and the
    process keeps going, `Err` with the untouched error when it isn't handled.
    */
    #[track_caller]
    pub fn run<T, E>(mut self, f: impl FnOnce() -> Result<T, E>) -> Result<Option<T>, E>
    where
        E: Error + 'static,
    {
        let site = Origin::caller();
        let result = match self.call(f, &site) {
            Some(result) => result,
            None => return Ok(None),
        };
        match result {
            Ok(value) => Ok(Some(value)),
            Err(error) if self.is_handled(&error) => {
                self.fail(Caught::Error(&error), Some(short_type_name::<E>()), &site);
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }

    /// [GracefulErrors::run] for blocks returning boxed errors.
    #[track_caller]
    pub fn run_boxed<T>(
        mut self,
        f: impl FnOnce() -> Result<T, Box<dyn Error + Send + Sync>>,
    ) -> Result<Option<T>, Box<dyn Error + Send + Sync>> {
        let site = Origin::caller();
        let result = match self.call(f, &site) {
            Some(result) => result,
            None => return Ok(None),
        };
        match result {
            Ok(value) => Ok(Some(value)),
            Err(error) => {
                let inner: &(dyn Error + 'static) = &*error;
                if self.is_handled(inner) {
                    self.fail(Caught::Error(inner), None, &site);
                    Ok(None)
                } else {
                    Err(error)
                }
            }
        }
    }

    /**
    Calls `f`, catching panics if asked.  `None` means a panic was reported.

    A narrowed handled set never catches panics, so they reach the panic hook as usual.
    */
    fn call<R>(&mut self, f: impl FnOnce() -> R, site: &Origin) -> Option<R> {
        if !self.catch_panics || !self.handled.is_empty() {
            return Some(f());
        }
        // a site left by a panic that `f` caught itself is not ours
        take_panic_site();
        let outcome = {
            let _quiet = QuietPanics::enter();
            std::panic::catch_unwind(AssertUnwindSafe(f))
        };
        match outcome {
            Ok(result) => Some(result),
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                let origin = take_panic_site().unwrap_or_else(|| site.clone());
                self.fail(Caught::Panic(&message), Some("panic"), &origin);
                None
            }
        }
    }

    fn fail(&mut self, caught: Caught<'_>, type_name: Option<&str>, origin: &Origin) {
        self.report(caught, type_name, origin);
        if let Some(callback) = self.on_error.as_mut() {
            callback(caught);
        }
        if self.exit {
            self.console.sink().prepare_to_die();
            std::process::exit(1);
        }
    }

    fn report(&self, caught: Caught<'_>, type_name: Option<&str>, origin: &Origin) {
        let (color, prefix) = if self.exit {
            ("red", "")
        } else {
            ("green", "Caught ")
        };
        // only the first line fits in a rule
        let headline = match (caught, type_name) {
            (Caught::Panic(message), _) => {
                format!("[b]panic[/]: {}", escape(first_line(message)))
            }
            (Caught::Error(error), Some(name)) => format!(
                "[b]{}[/]: {}",
                escape(name),
                escape(first_line(&error.to_string()))
            ),
            (Caught::Error(error), None) => escape(first_line(&error.to_string())),
        };
        let extra = if self.extra_message.is_empty() {
            String::new()
        } else {
            format!("| {} ", escape(&self.extra_message))
        };
        let origin = origin.markup();
        let title = |arrow: &str| {
            format!("[b]{arrow}[/] {prefix}{headline} | {origin} {extra}[b]{arrow}[/]")
        };

        self.console.rule(&title("↓"), color);
        self.console.print(&escape(&report_body(caught)), "\n");
        self.console.rule(&title("↑"), color);
    }
}

/**
The text between the rules.

The error, its `source()` chain down to the innermost cause, and a backtrace when the standard
library is set up to capture one (`RUST_BACKTRACE` or `RUST_LIB_BACKTRACE`).
*/
fn report_body(caught: Caught<'_>) -> String {
    let mut body = match caught {
        Caught::Panic(message) => format!("panicked: {}", message),
        Caught::Error(error) => {
            let mut body = format!("Error: {}", error);
            let chain = source_chain(error);
            if let Some(innermost) = chain.last() {
                body.push_str("\n\nCaused by:");
                for (i, cause) in chain.iter().enumerate() {
                    body.push_str(&format!("\n    {}: {}", i, cause));
                }
                body.push_str(&format!("\n\nOrigin: {}", innermost));
            }
            body
        }
    };
    let backtrace = Backtrace::capture();
    if backtrace.status() == BacktraceStatus::Captured {
        body.push_str(&format!("\n\nBacktrace:\n{}", backtrace));
    }
    body
}

/// The causes of `error`, outermost first, ending with the innermost.
pub fn source_chain(error: &(dyn Error + 'static)) -> Vec<String> {
    let mut chain = Vec::new();
    let mut current = error.source();
    while let Some(cause) = current {
        chain.push(cause.to_string());
        current = cause.source();
    }
    chain
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Hooks saved while any thread is inside a guarded block.
struct SavedHook {
    guarded_blocks: usize,
    previous: Option<Arc<PanicHook>>,
}

static SAVED_HOOK: Mutex<SavedHook> = Mutex::new(SavedHook {
    guarded_blocks: 0,
    previous: None,
});

thread_local! {
    static GUARDED_DEPTH: Cell<usize> = const { Cell::new(0) };
    static PANIC_SITE: RefCell<Option<Origin>> = const { RefCell::new(None) };
}

/**
Silences the panic hook for the current thread while it runs a guarded block.

The first guard installs a hook that records where a guarded thread panicked and stays quiet.
Panics on other threads still go to the hook that was there before.  The last guard puts that
hook back.
*/
struct QuietPanics;

impl QuietPanics {
    fn enter() -> Self {
        let mut saved = SAVED_HOOK.lock();
        if saved.guarded_blocks == 0 {
            let previous: Arc<PanicHook> = Arc::new(std::panic::take_hook());
            let fallback = previous.clone();
            std::panic::set_hook(Box::new(move |info| {
                if GUARDED_DEPTH.with(Cell::get) > 0 {
                    let site = info.location().map(Origin::from_location);
                    PANIC_SITE.with(|slot| *slot.borrow_mut() = site);
                } else {
                    fallback(info);
                }
            }));
            saved.previous = Some(previous);
        }
        saved.guarded_blocks += 1;
        GUARDED_DEPTH.with(|depth| depth.set(depth.get() + 1));
        QuietPanics
    }
}

impl Drop for QuietPanics {
    fn drop(&mut self) {
        GUARDED_DEPTH.with(|depth| depth.set(depth.get() - 1));
        let mut saved = SAVED_HOOK.lock();
        saved.guarded_blocks -= 1;
        if saved.guarded_blocks == 0 {
            if let Some(previous) = saved.previous.take() {
                // drops the quiet hook and with it the other handle on `previous`
                drop(std::panic::take_hook());
                match Arc::try_unwrap(previous) {
                    Ok(hook) => std::panic::set_hook(hook),
                    Err(shared) => std::panic::set_hook(Box::new(move |info| shared(info))),
                }
            }
        }
    }
}

fn take_panic_site() -> Option<Origin> {
    PANIC_SITE.with(|slot| slot.borrow_mut().take())
}

fn short_type_name<E>() -> &'static str {
    let full = std::any::type_name::<E>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}
