// SPDX-License-Identifier: MIT OR Apache-2.0

//! The rendering end of the crate.
//!
//! A [Console] takes markup, renders it for its [Sink], and writes it with any attached
//! progress bar paused.  It knows nothing about levels or ranks.

use crate::markup;
use crate::progress::{NoRedraw, RedrawPause};
use crate::sink::Sink;
use crate::std_sink::StdSink;
use std::sync::Arc;

const DEFAULT_WIDTH: usize = 80;
const RULE_CHAR: char = '─';
const ELLIPSIS: char = '…';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorChoice {
    /// Color when the sink is a terminal and `NO_COLOR` is unset or empty.
    #[default]
    Auto,
    /// Color regardless of the sink and the environment.
    Always,
    Never,
}

#[derive(Debug, Clone)]
pub struct Console {
    sink: Arc<dyn Sink>,
    color: ColorChoice,
    width: Option<usize>,
    progress: Arc<dyn RedrawPause>,
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Console {
    pub fn new(sink: Arc<dyn Sink>) -> Self {
        Self {
            sink,
            color: ColorChoice::Auto,
            width: None,
            progress: Arc::new(NoRedraw),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Arc::new(StdSink::stdout()))
    }

    pub fn stderr() -> Self {
        Self::new(Arc::new(StdSink::stderr()))
    }

    pub fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Fixes the width used for rules instead of reading `COLUMNS`.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Attaches a progress bar; every later write pauses its redraw.
    pub fn set_progress(&mut self, progress: Arc<dyn RedrawPause>) {
        self.progress = progress;
    }

    pub fn clear_progress(&mut self) {
        self.progress = Arc::new(NoRedraw);
    }

    pub fn sink(&self) -> &Arc<dyn Sink> {
        &self.sink
    }

    pub fn color_enabled(&self) -> bool {
        match self.color {
            ColorChoice::Auto => self.sink.is_terminal() && !no_color_requested(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }

    pub fn width(&self) -> usize {
        self.width
            .or_else(|| {
                std::env::var("COLUMNS")
                    .ok()
                    .and_then(|columns| columns.trim().parse().ok())
            })
            .filter(|width| *width > 0)
            .unwrap_or(DEFAULT_WIDTH)
    }

    /// Renders `markup` and writes it followed by `end`.
    pub fn print(&self, markup: &str, end: &str) {
        let mut text = markup::render(markup, self.color_enabled());
        text.push_str(end);
        self.write_paused(&text);
    }

    /**
    Writes a horizontal rule across the console width with `title` centered in it.

    `style` is a markup style such as `"red"` applied to the line characters.  A title too wide
    for the console is cut short with `…` so there is always at least one rule character on
    each side.
    */
    pub fn rule(&self, title: &str, style: &str) {
        let width = self.width();
        let max_title = width.saturating_sub(4);
        let plain = markup::strip(title);
        let title_width = plain.chars().count();
        let (title, title_width) = if title_width <= max_title {
            (title.to_string(), title_width)
        } else if max_title == 0 {
            (String::new(), 0)
        } else {
            let mut cut: String = plain.chars().take(max_title - 1).collect();
            cut.push(ELLIPSIS);
            (markup::escape(&cut), max_title)
        };
        let line = if title_width == 0 {
            format!("[{style}]{}[/]", rule_chars(width))
        } else {
            let left = (width - title_width - 2) / 2;
            let right = width - title_width - 2 - left;
            format!(
                "[{style}]{}[/] {title} [{style}]{}[/]",
                rule_chars(left),
                rule_chars(right)
            )
        };
        self.print(&line, "\n");
    }

    fn write_paused(&self, text: &str) {
        let sink = &self.sink;
        self.progress.suspend(&mut || sink.write_text(text));
    }
}

fn no_color_requested() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty())
}

fn rule_chars(count: usize) -> String {
    std::iter::repeat_n(RULE_CHAR, count).collect()
}
