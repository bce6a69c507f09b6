//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# printwise

printwise is `println!` with levels, for scripts and small distributed jobs.

# The problem

A training script or a batch job wants output that says *when*, *where* and *how bad*, shows
which worker said it, and doesn't smear a progress bar across the terminal.  It does not want
a logging framework with subscribers, filters and sinks to configure first.

# The facade

A [Printer] has one method per level:

| Level   | Default annotations           | Namespaced mode |
|---------|-------------------------------|-----------------|
| print   | none                          | dropped         |
| debug   | time, origin, rank            | dropped         |
| info    | time, level, origin, rank     | shown           |
| success | time, level, origin, rank     | shown           |
| warning | time, level, origin, rank     | shown           |
| error   | time, level, origin, rank     | shown           |

```rust
use printwise::{Level, Printer, PrinterConfig};

let mut printer = Printer::new(PrinterConfig::new().threshold(Level::Info)).unwrap();
printer.set_rank(0);
printer.info("starting");
printwise::success!(printer, "loaded", 12, "shards");
```

prints something like

```text
2026-10-16 09:30:12 | INFO    | src/main.rs:5 | Rank 0 | starting
2026-10-16 09:30:12 | SUCCESS | src/main.rs:6 - main | Rank 0 | loaded 12 shards
```

# Modes

* interactive: the annotated lines above.
* namespaced: `mypkg - WARNING: message` for output that another tool reads.
* silent: nothing.

A library can let its users choose with [ModeSetting::FromEnvironment], which reads
`<NAMESPACE>_LOG_MODE`.

# Ranks

Set a rank on the printer (or per call) and it is shown on every line.  With `rank0_only`, every
rank except 0 is quiet.

# Markup

Messages may carry console markup like `[b red]this[/]`; see [markup].  Pass
[LogOptions::escape] to print user text literally.

# Progress bars

Attach a bar with [Console::set_progress] and every line is written with the bar's redraw
paused.  The `indicatif` feature implements [RedrawPause] for indicatif's bars.

# Errors

[GracefulErrors] runs a block and prints any failure between two rules, then either exits or
carries on.
*/

mod console;
mod error;
mod format;
pub mod global_printer;
mod graceful;
mod inmemory_sink;
mod level;
mod log_record;
mod macros;
pub mod markup;
#[doc(hidden)]
pub mod origin;
mod printer;
mod progress;
mod sink;
mod std_sink;

pub(crate) use macros::debug_internal;

pub use console::{ColorChoice, Console};
pub use error::{ConfigError, Error, Result};
pub use format::{DividerPlacement, FormatOptions, Layout, Toggles, emit_line, format_line, timestamp};
pub use graceful::{Caught, GracefulErrors, source_chain};
pub use inmemory_sink::InMemorySink;
pub use level::{Level, level_named};
pub use log_record::LogRecord;
pub use macros::LoggingDomain;
pub use origin::Origin;
pub use printer::{LogOptions, Mode, ModeSetting, Printer, PrinterConfig, mode_variable, resolve_mode};
pub use progress::{NoRedraw, RedrawPause};
pub use sink::Sink;
pub use std_sink::{StdSink, Stream};

pub(crate) static INTERNAL_DOMAIN: LoggingDomain =
    LoggingDomain::new(cfg!(feature = "printwise_internal"));

/// Turns the crate's own stderr diagnostics on or off.
pub fn set_internal_logging(enabled: bool) {
    INTERNAL_DOMAIN.set_internal(enabled);
}
