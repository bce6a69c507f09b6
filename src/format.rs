// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turning values into one annotated line.
//!
//! A line is an optional prefix followed by the message:
//!
//! ```text
//! 2026-10-16 09:30:12 | INFO    | src/main.rs:14 - main | Rank 1 | loading shard 3
//! ```
//!
//! The prefix segments always appear in this order: timestamp, level, origin, rank.  Which of
//! them appear is controlled by [Toggles]; how they are separated by [Layout].

use crate::Level;
use crate::console::Console;
use crate::log_record::LogRecord;
use crate::markup;
use crate::origin::Origin;
use std::fmt::Display;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const LABEL_WIDTH: usize = 7;

/// Which prefix segments to include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Toggles {
    pub time: bool,
    pub level: bool,
    pub origin: bool,
    pub rank: bool,
}

impl Toggles {
    pub const ALL: Toggles = Toggles {
        time: true,
        level: true,
        origin: true,
        rank: true,
    };
    pub const NONE: Toggles = Toggles {
        time: false,
        level: false,
        origin: false,
        rank: false,
    };

    pub const fn time(mut self, on: bool) -> Self {
        self.time = on;
        self
    }

    pub const fn level(mut self, on: bool) -> Self {
        self.level = on;
        self
    }

    pub const fn origin(mut self, on: bool) -> Self {
        self.origin = on;
        self
    }

    pub const fn rank(mut self, on: bool) -> Self {
        self.rank = on;
        self
    }
}

impl Default for Toggles {
    fn default() -> Self {
        Toggles::ALL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DividerPlacement {
    /// `a | b | message`
    #[default]
    AfterEach,
    /// `a | b message`
    Between,
}

/// How prefix segments are separated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Layout {
    pub divider: String,
    pub placement: DividerPlacement,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            divider: "|".to_string(),
            placement: DividerPlacement::AfterEach,
        }
    }
}

impl Layout {
    fn join(&self, segments: &[String]) -> String {
        let divider = format!("[dim cyan]{}[/]", markup::escape(&self.divider));
        match self.placement {
            DividerPlacement::AfterEach => segments
                .iter()
                .map(|segment| format!("{segment} {divider}"))
                .collect::<Vec<_>>()
                .join(" "),
            DividerPlacement::Between => segments.join(&format!(" {divider} ")),
        }
    }
}

/// Everything about a line that isn't the values, the level or the rank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormatOptions {
    pub sep: String,
    pub end: String,
    /// Show markup characters in the values literally.
    pub escape: bool,
    pub toggles: Toggles,
    pub layout: Layout,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            sep: " ".to_string(),
            end: "\n".to_string(),
            escape: false,
            toggles: Toggles::ALL,
            layout: Layout::default(),
        }
    }
}

/// The current local time as `YYYY-MM-DD HH:MM:SS`.
pub fn timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Joins values with `sep`, escaping them if asked.
pub fn join_values(values: &[&dyn Display], sep: &str, escape: bool) -> String {
    let message = values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(sep);
    if escape {
        markup::escape(&message)
    } else {
        message
    }
}

/// Whether a `rank0_only` restriction drops this rank.
pub fn suppressed_by_rank(rank: Option<u32>, rank0_only: bool) -> bool {
    rank0_only && rank != Some(0)
}

/**
Formats one line.

Returns `None` when `rank0_only` is set and this isn't rank 0; the caller should write nothing.

The level segment is never shown for [Level::Print].  The rank segment needs a known rank and is
left out under `rank0_only`, where it would always read `Rank 0`.  An origin segment without an
`origin` is left out.
*/
pub fn format_line(
    values: &[&dyn Display],
    level: Level,
    rank: Option<u32>,
    rank0_only: bool,
    options: &FormatOptions,
    origin: Option<&Origin>,
    timestamp: &str,
) -> Option<LogRecord> {
    if suppressed_by_rank(rank, rank0_only) {
        return None;
    }
    let toggles = options.toggles;
    let color = level.color();

    let mut segments = Vec::new();
    if toggles.time {
        segments.push(format!("[dim cyan]{timestamp}[/]"));
    }
    if toggles.level && level != Level::Print {
        segments.push(format!(
            "[b {color}]{:<width$}[/]",
            level.label(),
            width = LABEL_WIDTH
        ));
    }
    if toggles.origin {
        if let Some(origin) = origin {
            segments.push(origin.markup());
        }
    }
    if toggles.rank && !rank0_only {
        if let Some(rank) = rank {
            segments.push(format!("[b {color}]Rank {rank}[/]"));
        }
    }

    let message = join_values(values, &options.sep, options.escape);
    let mut record = LogRecord::new();
    if !segments.is_empty() {
        record.log_owned(options.layout.join(&segments).trim().to_string());
        record.log(" ");
    }
    record.log_owned(message);
    record.set_end(options.end.clone());
    Some(record)
}

/**
Formats a line and writes it to `console`.

Returns whether anything was written.
*/
pub fn emit_line(
    console: &Console,
    values: &[&dyn Display],
    level: Level,
    rank: Option<u32>,
    rank0_only: bool,
    options: &FormatOptions,
    origin: Option<&Origin>,
) -> bool {
    match format_line(values, level, rank, rank0_only, options, origin, &timestamp()) {
        Some(record) => {
            record.write_to(console);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorChoice, InMemorySink};
    use std::sync::Arc;

    const TS: &str = "2026-10-16 09:30:12";

    fn line(
        values: &[&dyn Display],
        level: Level,
        rank: Option<u32>,
        options: &FormatOptions,
    ) -> String {
        let origin = Origin::new("src/main.rs", 14).with_function("main");
        format_line(values, level, rank, false, options, Some(&origin), TS)
            .expect("not suppressed")
            .to_string()
    }

    #[test]
    fn full_prefix() {
        let out = line(&[&"loading", &3], Level::Info, Some(1), &FormatOptions::default());
        assert_eq!(
            out,
            "2026-10-16 09:30:12 | INFO    | src/main.rs:14 - main | Rank 1 | loading 3"
        );
    }

    #[test]
    fn divider_between() {
        let options = FormatOptions {
            layout: Layout {
                divider: "::".to_string(),
                placement: DividerPlacement::Between,
            },
            toggles: Toggles::ALL.origin(false),
            ..FormatOptions::default()
        };
        let out = line(&[&"x"], Level::Error, Some(0), &options);
        assert_eq!(out, "2026-10-16 09:30:12 :: ERROR   :: Rank 0 x");
    }

    #[test]
    fn no_prefix() {
        let options = FormatOptions {
            toggles: Toggles::NONE,
            sep: ", ".to_string(),
            ..FormatOptions::default()
        };
        assert_eq!(line(&[&"a", &"b"], Level::Info, Some(3), &options), "a, b");
    }

    #[test]
    fn print_level_never_shows_label() {
        let options = FormatOptions {
            toggles: Toggles::NONE.level(true),
            ..FormatOptions::default()
        };
        assert_eq!(line(&[&"plain"], Level::Print, None, &options), "plain");
    }

    #[test]
    fn rank0_only() {
        let options = FormatOptions::default();
        assert!(format_line(&[&"x"], Level::Error, Some(2), true, &options, None, TS).is_none());
        assert!(format_line(&[&"x"], Level::Error, None, true, &options, None, TS).is_none());
        let shown = format_line(&[&"x"], Level::Error, Some(0), true, &options, None, TS)
            .unwrap()
            .to_string();
        assert!(!shown.contains("Rank"));
        assert!(shown.ends_with("ERROR   | x"));
    }

    #[test]
    fn missing_segments_degrade() {
        let record = format_line(
            &[&"m"],
            Level::Warning,
            None,
            false,
            &FormatOptions::default(),
            None,
            TS,
        )
        .unwrap();
        assert_eq!(record.to_string(), "2026-10-16 09:30:12 | WARNING | m");
    }

    #[test]
    fn escape_shows_markup_literally() {
        let options = FormatOptions {
            toggles: Toggles::NONE,
            escape: true,
            ..FormatOptions::default()
        };
        assert_eq!(
            line(&[&"[red]literal[/]"], Level::Info, None, &options),
            "[red]literal[/]"
        );
        let options = FormatOptions {
            escape: false,
            ..options
        };
        assert_eq!(line(&[&"[red]styled[/]"], Level::Info, None, &options), "styled");
    }

    #[test]
    fn timestamp_shape() {
        let ts = timestamp();
        assert_eq!(ts.len(), TS.len());
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
        assert_eq!(&ts[13..14], ":");
    }

    #[test]
    fn emit_writes_with_end() {
        let sink = Arc::new(InMemorySink::new());
        let console = Console::new(sink.clone()).with_color(ColorChoice::Never);
        let options = FormatOptions {
            toggles: Toggles::NONE,
            end: "".to_string(),
            ..FormatOptions::default()
        };
        assert!(emit_line(&console, &[&"a"], Level::Info, None, false, &options, None));
        assert!(!emit_line(&console, &[&"b"], Level::Info, Some(1), true, &options, None));
        assert_eq!(sink.drain_logs(), "a");
    }
}
