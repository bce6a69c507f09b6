// SPDX-License-Identifier: MIT OR Apache-2.0

//! The [Printer] facade.
//!
//! A printer holds the configuration every call shares (mode, threshold, rank, namespace) and
//! offers one entry point per level.
//!
//! ```rust
//! use printwise::{Level, Mode, Printer, PrinterConfig};
//!
//! let mut printer = Printer::new(
//!     PrinterConfig::new()
//!         .mode(Mode::Interactive)
//!         .threshold(Level::Info),
//! )
//! .unwrap();
//! printer.debug("dropped, below the threshold");
//! printer.info("shown with time, label and origin");
//!
//! printer.set_rank(3);
//! printer.warning("prefixed with Rank 3");
//! ```
//!
//! # Modes
//!
//! * [Mode::Interactive] is for people: timestamps, colored labels, file and line.
//! * [Mode::Namespaced] is for output another tool reads: `svc - WARNING: message`, nothing at
//!   or below debug.
//! * [Mode::Silent] prints nothing.
//!
//! [ModeSetting::FromEnvironment] picks one of those from `<NAMESPACE>_LOG_MODE`.

use crate::console::Console;
use crate::error::{ConfigError, Error, Result};
use crate::format::{self, FormatOptions, Layout, Toggles};
use crate::origin::Origin;
use crate::{Level, markup};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Interactive,
    Namespaced,
    Silent,
}

impl Mode {
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Interactive => "interactive",
            Mode::Namespaced => "namespaced",
            Mode::Silent => "silent",
        }
    }
}

/// `dev` and `package` are accepted as older spellings of interactive and namespaced.
impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "interactive" | "dev" => Ok(Mode::Interactive),
            "namespaced" | "package" => Ok(Mode::Namespaced),
            "silent" => Ok(Mode::Silent),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A mode, or the instruction to read one from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeSetting {
    Mode(Mode),
    FromEnvironment,
}

impl From<Mode> for ModeSetting {
    fn from(mode: Mode) -> Self {
        ModeSetting::Mode(mode)
    }
}

impl FromStr for ModeSetting {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "from_environment" | "from_env" | "env" => Ok(ModeSetting::FromEnvironment),
            _ => s.parse().map(ModeSetting::Mode),
        }
    }
}

/// Name of the variable [ModeSetting::FromEnvironment] reads for a namespace.
pub fn mode_variable(namespace: &str) -> String {
    format!("{}_LOG_MODE", namespace.to_uppercase())
}

/**
Resolves a mode setting, looking variables up through `lookup`.

An unset variable means [Mode::Namespaced].
*/
pub fn resolve_mode(
    setting: ModeSetting,
    namespace: Option<&str>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Mode> {
    match setting {
        ModeSetting::Mode(mode) => Ok(mode),
        ModeSetting::FromEnvironment => {
            let namespace = namespace.ok_or(ConfigError::MissingPackageName)?;
            let variable = mode_variable(namespace);
            let mode = match lookup(&variable) {
                None => Mode::Namespaced,
                Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvMode {
                    variable: variable.clone(),
                    value,
                })?,
            };
            crate::debug_internal!("resolved mode {} from {}", mode, variable);
            Ok(mode)
        }
    }
}

fn env_lookup(variable: &str) -> Option<String> {
    std::env::var(variable).ok()
}

/**
Printer configuration.

Every field is optional.  [Printer::configure] changes only the fields that are `Some`, so
`Some(0)` for the rank and `Some("")` for the namespace are real values.
*/
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrinterConfig {
    pub mode: Option<ModeSetting>,
    pub threshold: Option<Level>,
    pub namespace: Option<String>,
    pub rank: Option<u32>,
    pub rank0_only: Option<bool>,
}

impl PrinterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: impl Into<ModeSetting>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    pub fn threshold(mut self, threshold: Level) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn rank(mut self, rank: u32) -> Self {
        self.rank = Some(rank);
        self
    }

    pub fn rank0_only(mut self, rank0_only: bool) -> Self {
        self.rank0_only = Some(rank0_only);
        self
    }
}

/**
Per-call overrides for [Printer::log].

Anything left `None` falls back to the printer (rank, `rank0_only`) or the level
([Level::default_toggles]).
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
    pub rank: Option<u32>,
    pub rank0_only: Option<bool>,
    pub sep: String,
    pub end: String,
    pub escape: bool,
    pub toggles: Option<Toggles>,
    /// Replaces the call-site location.
    pub origin: Option<Origin>,
    /// Added to the call-site location when `origin` is not given.
    pub function: Option<&'static str>,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            rank: None,
            rank0_only: None,
            sep: " ".to_string(),
            end: "\n".to_string(),
            escape: false,
            toggles: None,
            origin: None,
            function: None,
        }
    }
}

impl LogOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rank(mut self, rank: u32) -> Self {
        self.rank = Some(rank);
        self
    }

    pub fn rank0_only(mut self, rank0_only: bool) -> Self {
        self.rank0_only = Some(rank0_only);
        self
    }

    pub fn sep(mut self, sep: impl Into<String>) -> Self {
        self.sep = sep.into();
        self
    }

    pub fn end(mut self, end: impl Into<String>) -> Self {
        self.end = end.into();
        self
    }

    pub fn escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    pub fn toggles(mut self, toggles: Toggles) -> Self {
        self.toggles = Some(toggles);
        self
    }

    pub fn origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn function(mut self, function: &'static str) -> Self {
        self.function = Some(function);
        self
    }
}

#[derive(Debug, Clone)]
pub struct Printer {
    mode: Mode,
    threshold: Level,
    namespace: Option<String>,
    rank: Option<u32>,
    rank0_only: bool,
    console: Console,
    layout: Layout,
}

impl Default for Printer {
    fn default() -> Self {
        Self {
            mode: Mode::Interactive,
            threshold: Level::Print,
            namespace: None,
            rank: None,
            rank0_only: false,
            console: Console::stdout(),
            layout: Layout::default(),
        }
    }
}

impl Printer {
    /// A printer writing to stdout, configured by `config` on top of the defaults.
    pub fn new(config: PrinterConfig) -> Result<Self> {
        let mut printer = Self::default();
        printer.configure(config)?;
        Ok(printer)
    }

    /// Like [Printer::new] but writing to `console`.
    pub fn with_console(console: Console, config: PrinterConfig) -> Result<Self> {
        let mut printer = Self {
            console,
            ..Self::default()
        };
        printer.configure(config)?;
        Ok(printer)
    }

    /**
    Applies the fields of `config` that are set.

    A namespace in the same config is used when resolving [ModeSetting::FromEnvironment].
    On error nothing changes.
    */
    pub fn configure(&mut self, config: PrinterConfig) -> Result<()> {
        self.configure_with(config, env_lookup)
    }

    fn configure_with(
        &mut self,
        config: PrinterConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<()> {
        let namespace = config.namespace.as_deref().or(self.namespace.as_deref());
        let mode = config
            .mode
            .map(|setting| resolve_mode(setting, namespace, lookup))
            .transpose()?;

        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(threshold) = config.threshold {
            self.threshold = threshold;
        }
        if let Some(namespace) = config.namespace {
            self.namespace = Some(namespace);
        }
        if let Some(rank) = config.rank {
            self.rank = Some(rank);
        }
        if let Some(rank0_only) = config.rank0_only {
            self.rank0_only = rank0_only;
        }
        Ok(())
    }

    /// Sets or clears the default rank.
    pub fn set_rank(&mut self, rank: impl Into<Option<u32>>) {
        self.rank = rank.into();
    }

    pub fn set_mode(&mut self, mode: impl Into<ModeSetting>) -> Result<()> {
        self.set_mode_with(mode.into(), env_lookup)
    }

    fn set_mode_with(
        &mut self,
        mode: ModeSetting,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<()> {
        self.mode = resolve_mode(mode, self.namespace.as_deref(), lookup)?;
        Ok(())
    }

    /// Parses a mode name such as `"silent"` or `"from_environment"` and sets it.
    pub fn set_mode_named(&mut self, name: &str) -> Result<()> {
        let setting: ModeSetting = name.parse().map_err(Error::from)?;
        self.set_mode(setting)
    }

    pub fn set_threshold(&mut self, threshold: Level) {
        self.threshold = threshold;
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn threshold(&self) -> Level {
        self.threshold
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn rank(&self) -> Option<u32> {
        self.rank
    }

    pub fn rank0_only(&self) -> bool {
        self.rank0_only
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut Console {
        &mut self.console
    }

    pub fn layout_mut(&mut self) -> &mut Layout {
        &mut self.layout
    }

    /// Whether a call at `level` would get past the mode and threshold checks.
    pub fn enabled(&self, level: Level) -> bool {
        match self.mode {
            Mode::Silent => false,
            _ if level.severity() < self.threshold.severity() => false,
            Mode::Namespaced => level.severity() > Level::Debug.severity(),
            Mode::Interactive => true,
        }
    }

    /**
    Logs `values` at `level`.

    Returns whether a line was written.
    */
    #[track_caller]
    pub fn log(&self, level: Level, values: &[&dyn Display], options: &LogOptions) -> bool {
        if !self.enabled(level) {
            return false;
        }
        let rank = options.rank.or(self.rank);
        let rank0_only = options.rank0_only.unwrap_or(self.rank0_only);

        match self.mode {
            Mode::Interactive => {
                // not a closure: track_caller does not reach into closures
                let origin = match (&options.origin, options.function) {
                    (Some(origin), _) => origin.clone(),
                    (None, Some(function)) => Origin::caller().with_function(function),
                    (None, None) => Origin::caller(),
                };
                let format_options = FormatOptions {
                    sep: options.sep.clone(),
                    end: options.end.clone(),
                    escape: options.escape,
                    toggles: options.toggles.unwrap_or(level.default_toggles()),
                    layout: self.layout.clone(),
                };
                format::emit_line(
                    &self.console,
                    values,
                    level,
                    rank,
                    rank0_only,
                    &format_options,
                    Some(&origin),
                )
            }
            Mode::Namespaced => self.namespaced_line(level, values, rank, rank0_only, options),
            Mode::Silent => false,
        }
    }

    fn namespaced_line(
        &self,
        level: Level,
        values: &[&dyn Display],
        rank: Option<u32>,
        rank0_only: bool,
        options: &LogOptions,
    ) -> bool {
        if format::suppressed_by_rank(rank, rank0_only) {
            return false;
        }
        let color = level.color();
        let mut line = String::new();
        if let Some(namespace) = &self.namespace {
            line.push_str(&format!(
                "[b {color}]{}[/] [dim cyan]-[/] ",
                markup::escape(namespace)
            ));
        }
        line.push_str(&format!("[b {color}]{}[/][dim cyan]:[/] ", level.label()));
        line.push_str(&format::join_values(values, &options.sep, options.escape));
        self.console.print(&line, &options.end);
        true
    }

    #[track_caller]
    pub fn print(&self, message: impl Display) -> bool {
        self.log(Level::Print, &[&message], &LogOptions::default())
    }

    #[track_caller]
    pub fn debug(&self, message: impl Display) -> bool {
        self.log(Level::Debug, &[&message], &LogOptions::default())
    }

    #[track_caller]
    pub fn info(&self, message: impl Display) -> bool {
        self.log(Level::Info, &[&message], &LogOptions::default())
    }

    #[track_caller]
    pub fn success(&self, message: impl Display) -> bool {
        self.log(Level::Success, &[&message], &LogOptions::default())
    }

    #[track_caller]
    pub fn warning(&self, message: impl Display) -> bool {
        self.log(Level::Warning, &[&message], &LogOptions::default())
    }

    #[track_caller]
    pub fn error(&self, message: impl Display) -> bool {
        self.log(Level::Error, &[&message], &LogOptions::default())
    }

    /// [Printer::print] with several values and per-call options.
    #[track_caller]
    pub fn print_with(&self, values: &[&dyn Display], options: &LogOptions) -> bool {
        self.log(Level::Print, values, options)
    }

    #[track_caller]
    pub fn debug_with(&self, values: &[&dyn Display], options: &LogOptions) -> bool {
        self.log(Level::Debug, values, options)
    }

    #[track_caller]
    pub fn info_with(&self, values: &[&dyn Display], options: &LogOptions) -> bool {
        self.log(Level::Info, values, options)
    }

    #[track_caller]
    pub fn success_with(&self, values: &[&dyn Display], options: &LogOptions) -> bool {
        self.log(Level::Success, values, options)
    }

    #[track_caller]
    pub fn warning_with(&self, values: &[&dyn Display], options: &LogOptions) -> bool {
        self.log(Level::Warning, values, options)
    }

    #[track_caller]
    pub fn error_with(&self, values: &[&dyn Display], options: &LogOptions) -> bool {
        self.log(Level::Error, values, options)
    }
}

/*
Boilerplate notes.

Clone: a printer is configuration plus a shared sink, so a clone writes to the same place.
PartialEq: not implemented, consoles hold trait objects.
Default: interactive, everything shown, stdout.
*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorChoice, InMemorySink};
    use std::collections::HashMap;
    use std::sync::Arc;

    fn capture(config: PrinterConfig) -> (Arc<InMemorySink>, Printer) {
        let sink = Arc::new(InMemorySink::new());
        let console = Console::new(sink.clone()).with_color(ColorChoice::Never);
        let printer = Printer::with_console(console, config).unwrap();
        (sink, printer)
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn threshold_drops_lower_levels() {
        let (sink, printer) = capture(PrinterConfig::new().threshold(Level::Warning));
        for level in Level::ALL {
            let written = printer.log(level, &[&"m"], &LogOptions::default());
            assert_eq!(written, level >= Level::Warning, "{level:?}");
        }
        assert_eq!(sink.drain_lines().len(), 2);
    }

    #[test]
    fn silent_prints_nothing() {
        let (sink, printer) = capture(PrinterConfig::new().mode(Mode::Silent));
        assert!(!printer.error("x"));
        assert_eq!(sink.drain_logs(), "");
    }

    #[test]
    fn interactive_origin_is_the_call_site() {
        let (sink, printer) = capture(PrinterConfig::new());
        let line = line!() + 1;
        printer.info("here");
        let out = sink.drain_logs();
        assert!(out.contains(&format!("printer.rs:{line} |")), "{out}");
        assert!(out.contains("INFO    |"));
    }

    #[test]
    fn level_defaults_and_overrides() {
        let (sink, printer) = capture(PrinterConfig::new());
        printer.print("bare");
        assert_eq!(sink.drain_logs(), "bare\n");

        printer.debug("dbg");
        let out = sink.drain_logs();
        assert!(!out.contains("DEBUG"));
        assert!(out.contains("printer.rs:"));

        printer.log(
            Level::Error,
            &[&"a", &"b"],
            &LogOptions::new()
                .toggles(Toggles::NONE)
                .sep("-")
                .end("!"),
        );
        assert_eq!(sink.drain_logs(), "a-b!");
    }

    #[test]
    fn per_level_calls_with_options() {
        let (sink, printer) = capture(PrinterConfig::new().rank(1));
        let options = LogOptions::new()
            .toggles(Toggles::NONE.rank(true))
            .sep(", ")
            .end(";\n");
        assert!(printer.print_with(&[&"a", &2], &options));
        assert!(printer.warning_with(&[&"b", &3.5], &options.clone().rank(0)));
        assert!(!printer.error_with(&[&"c"], &options.clone().rank0_only(true)));
        assert_eq!(sink.drain_logs(), "Rank 1 | a, 2;\nRank 0 | b, 3.5;\n");

        let line = line!() + 1;
        printer.debug_with(&[&"d"], &LogOptions::new());
        assert!(sink.drain_logs().contains(&format!("printer.rs:{line} |")));
        printer.info_with(&[&"[b]e[/]"], &LogOptions::new().escape(true));
        assert!(sink.drain_logs().contains("INFO    |"));
        printer.success_with(&[&"f"], &LogOptions::new().toggles(Toggles::NONE));
        assert_eq!(sink.drain_logs(), "f\n");
    }

    #[test]
    fn explicit_origin_and_function() {
        let (sink, printer) = capture(PrinterConfig::new());
        let toggles = Toggles::NONE.origin(true);
        printer.log(
            Level::Info,
            &[&"m"],
            &LogOptions::new()
                .toggles(toggles)
                .origin(Origin::new("lib.rs", 7).with_function("go")),
        );
        assert_eq!(sink.drain_logs(), "lib.rs:7 - go | m\n");

        printer.log(
            Level::Info,
            &[&"m"],
            &LogOptions::new().toggles(toggles).function("run"),
        );
        assert!(sink.drain_logs().contains(" - run | m"));
    }

    #[test]
    fn rank_fallback_and_override() {
        let (sink, mut printer) = capture(PrinterConfig::new().rank(2));
        let rank_only = LogOptions::new().toggles(Toggles::NONE.rank(true));
        printer.log(Level::Info, &[&"m"], &rank_only);
        assert_eq!(sink.drain_logs(), "Rank 2 | m\n");

        printer.log(Level::Info, &[&"m"], &rank_only.clone().rank(0));
        assert_eq!(sink.drain_logs(), "Rank 0 | m\n");

        printer.set_rank(None);
        printer.log(Level::Info, &[&"m"], &rank_only);
        assert_eq!(sink.drain_logs(), "m\n");
    }

    #[test]
    fn rank0_only_suppresses_other_ranks_in_every_mode() {
        for mode in [Mode::Interactive, Mode::Namespaced] {
            let (sink, printer) = capture(
                PrinterConfig::new()
                    .mode(mode)
                    .namespace("svc")
                    .rank(2)
                    .rank0_only(true),
            );
            for level in Level::ALL {
                assert!(!printer.log(level, &[&"fail"], &LogOptions::default()));
            }
            assert!(printer.log(Level::Error, &[&"ok"], &LogOptions::new().rank(0)));
            assert!(sink.drain_logs().contains("ok"));
        }
    }

    #[test]
    fn namespaced_format() {
        let (sink, printer) = capture(PrinterConfig::new().mode(Mode::Namespaced).namespace("svc"));
        assert!(!printer.debug("hidden"));
        assert!(!printer.print("hidden"));
        assert!(printer.warning("oops"));
        assert!(printer.info("fine"));
        assert_eq!(sink.drain_logs(), "svc - WARNING: oops\nsvc - INFO: fine\n");
    }

    #[test]
    fn namespaced_without_namespace() {
        let (sink, printer) = capture(PrinterConfig::new().mode(Mode::Namespaced));
        printer.error("x");
        assert_eq!(sink.drain_logs(), "ERROR: x\n");
    }

    #[test]
    fn configure_only_touches_given_fields() {
        let (_, mut printer) = capture(
            PrinterConfig::new()
                .mode(Mode::Namespaced)
                .threshold(Level::Info)
                .namespace("pkg")
                .rank(4)
                .rank0_only(true),
        );
        printer.configure(PrinterConfig::default()).unwrap();
        assert_eq!(printer.mode(), Mode::Namespaced);
        assert_eq!(printer.threshold(), Level::Info);
        assert_eq!(printer.namespace(), Some("pkg"));
        assert_eq!(printer.rank(), Some(4));
        assert!(printer.rank0_only());

        printer
            .configure(PrinterConfig::new().rank(0).namespace("").rank0_only(false))
            .unwrap();
        assert_eq!(printer.rank(), Some(0));
        assert_eq!(printer.namespace(), Some(""));
        assert!(!printer.rank0_only());
        assert_eq!(printer.mode(), Mode::Namespaced);
    }

    #[test]
    fn mode_from_environment() {
        let (_, mut printer) = capture(PrinterConfig::new().namespace("mypkg"));
        printer
            .set_mode_with(
                ModeSetting::FromEnvironment,
                env(&[("MYPKG_LOG_MODE", "silent")]),
            )
            .unwrap();
        assert_eq!(printer.mode(), Mode::Silent);

        printer
            .set_mode_with(ModeSetting::FromEnvironment, env(&[]))
            .unwrap();
        assert_eq!(printer.mode(), Mode::Namespaced);

        printer
            .set_mode_with(ModeSetting::FromEnvironment, env(&[("MYPKG_LOG_MODE", "dev")]))
            .unwrap();
        assert_eq!(printer.mode(), Mode::Interactive);
    }

    #[test]
    fn mode_from_environment_errors() {
        let (_, mut printer) = capture(PrinterConfig::new());
        let err = printer
            .set_mode_with(ModeSetting::FromEnvironment, env(&[]))
            .unwrap_err();
        assert_eq!(err, Error::Configuration(ConfigError::MissingPackageName));

        printer.configure(PrinterConfig::new().namespace("p")).unwrap();
        let err = printer
            .set_mode_with(ModeSetting::FromEnvironment, env(&[("P_LOG_MODE", "loud")]))
            .unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(printer.mode(), Mode::Interactive);
    }

    #[test]
    fn failed_configure_changes_nothing() {
        let (_, mut printer) = capture(PrinterConfig::new());
        let err = printer
            .configure_with(
                PrinterConfig::new()
                    .mode(ModeSetting::FromEnvironment)
                    .namespace("q")
                    .rank(9),
                env(&[("Q_LOG_MODE", "nope")]),
            )
            .unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(printer.rank(), None);
        assert_eq!(printer.namespace(), None);

        // the namespace in the same config is used for the lookup
        printer
            .configure_with(
                PrinterConfig::new()
                    .mode(ModeSetting::FromEnvironment)
                    .namespace("q"),
                env(&[("Q_LOG_MODE", "silent")]),
            )
            .unwrap();
        assert_eq!(printer.mode(), Mode::Silent);
    }

    #[test]
    fn mode_names() {
        assert_eq!("package".parse::<Mode>().unwrap(), Mode::Namespaced);
        assert_eq!(
            "from_environment".parse::<ModeSetting>().unwrap(),
            ModeSetting::FromEnvironment
        );
        assert!("loud".parse::<Mode>().is_err());
        assert_eq!(mode_variable("my-pkg"), "MY-PKG_LOG_MODE");

        let (_, mut printer) = capture(PrinterConfig::new());
        printer.set_mode_named("silent").unwrap();
        assert_eq!(printer.mode(), Mode::Silent);
        assert!(printer.set_mode_named("loud").is_err());
    }

    #[test]
    fn escape_through_printer() {
        let (sink, printer) = capture(PrinterConfig::new());
        printer.log(
            Level::Info,
            &[&"[b]x[/]"],
            &LogOptions::new().toggles(Toggles::NONE).escape(true),
        );
        assert_eq!(sink.drain_logs(), "[b]x[/]\n");
    }
}
