// SPDX-License-Identifier: MIT OR Apache-2.0

//! Console markup.
//!
//! Styled text is written inline with bracketed tags, for example
//! `[b red]failed[/] after [cyan]3[/] tries`.  A tag holds space-separated style words
//! (`b`/`bold`, `dim`, `i`/`italic`, `u`/`underline`) and at most one color name.  `[/]`
//! closes the most recently opened tag and anything still open at the end of the text is
//! closed implicitly.
//!
//! Brackets that do not form a known tag are printed as-is, so `[1, 2]` needs no escaping.
//! User text that might contain a real tag should go through [escape] first.

use colored::Color;
use std::borrow::Cow;

const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Style {
    color: Option<Color>,
    bold: bool,
    dim: bool,
    italic: bool,
    underline: bool,
}

impl Style {
    /// `None` when any word is not a style we know.
    fn parse(tag: &str) -> Option<Style> {
        let mut style = Style::default();
        let mut words = tag.split_whitespace().peekable();
        words.peek()?;
        for word in words {
            match word {
                "b" | "bold" => style.bold = true,
                "dim" => style.dim = true,
                "i" | "italic" => style.italic = true,
                "u" | "underline" => style.underline = true,
                other => style.color = named_color(other)?,
            }
        }
        Some(style)
    }

    fn merge(self, inner: Style) -> Style {
        Style {
            color: inner.color.or(self.color),
            bold: self.bold || inner.bold,
            dim: self.dim || inner.dim,
            italic: self.italic || inner.italic,
            underline: self.underline || inner.underline,
        }
    }

    /// Wraps `text` in SGR codes.  Whether to color at all is the caller's decision.
    fn paint(self, text: &str) -> String {
        let mut codes: Vec<Cow<'static, str>> = Vec::new();
        if self.bold {
            codes.push("1".into());
        }
        if self.dim {
            codes.push("2".into());
        }
        if self.italic {
            codes.push("3".into());
        }
        if self.underline {
            codes.push("4".into());
        }
        if let Some(color) = self.color {
            codes.push(color.to_fg_str());
        }
        if codes.is_empty() {
            return text.to_string();
        }
        format!("\x1b[{}m{}{}", codes.join(";"), text, RESET)
    }
}

/// `Some(None)` for `default`, which is a known name that leaves the color alone.
fn named_color(name: &str) -> Option<Option<Color>> {
    let color = match name {
        "default" => return Some(None),
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "bright_black" => Color::BrightBlack,
        "bright_red" => Color::BrightRed,
        "bright_green" => Color::BrightGreen,
        "bright_yellow" => Color::BrightYellow,
        "bright_blue" => Color::BrightBlue,
        "bright_magenta" => Color::BrightMagenta,
        "bright_cyan" => Color::BrightCyan,
        "bright_white" => Color::BrightWhite,
        // xterm-256 names
        "grey30" => Color::TrueColor { r: 78, g: 78, b: 78 },
        "light_sky_blue3" => Color::TrueColor { r: 135, g: 175, b: 215 },
        "dark_green" => Color::TrueColor { r: 0, g: 95, b: 0 },
        "dark_orange3" => Color::TrueColor { r: 175, g: 95, b: 0 },
        _ => return None,
    };
    Some(Some(color))
}

#[derive(Debug, PartialEq)]
enum Token {
    Text(String),
    Open(Style),
    Close,
}

fn tokenize(markup: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut text = String::new();
    let mut rest = markup;

    while let Some(c) = rest.chars().next() {
        match c {
            '\\' => {
                let run = rest.len() - rest.trim_start_matches('\\').len();
                let after = &rest[run..];
                if after.starts_with('[') {
                    text.extend(std::iter::repeat_n('\\', run / 2));
                    if run % 2 == 1 {
                        text.push('[');
                        rest = &after[1..];
                    } else {
                        rest = after;
                    }
                } else {
                    text.push_str(&rest[..run]);
                    rest = after;
                }
            }
            '[' => {
                let tag = rest[1..]
                    .find(']')
                    .map(|end| &rest[1..1 + end])
                    .filter(|tag| !tag.contains('['));
                let token = tag.and_then(|tag| {
                    if tag.starts_with('/') {
                        Some((Token::Close, tag.len()))
                    } else {
                        Style::parse(tag).map(|style| (Token::Open(style), tag.len()))
                    }
                });
                match token {
                    Some((token, len)) => {
                        if !text.is_empty() {
                            tokens.push(Token::Text(std::mem::take(&mut text)));
                        }
                        tokens.push(token);
                        rest = &rest[len + 2..];
                    }
                    None => {
                        text.push('[');
                        rest = &rest[1..];
                    }
                }
            }
            _ => {
                text.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    if !text.is_empty() {
        tokens.push(Token::Text(text));
    }
    tokens
}

/**
Renders markup into terminal text.

With `color` off every tag is dropped and only the text remains.
*/
pub fn render(markup: &str, color: bool) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut open: Vec<Style> = Vec::new();
    for token in tokenize(markup) {
        match token {
            Token::Text(text) if color => {
                let style = open
                    .iter()
                    .fold(Style::default(), |outer, inner| outer.merge(*inner));
                out.push_str(&style.paint(&text));
            }
            Token::Text(text) => out.push_str(&text),
            Token::Open(style) => open.push(style),
            Token::Close => {
                open.pop();
            }
        }
    }
    out
}

/// The text of `markup` without any styling.
pub fn strip(markup: &str) -> String {
    render(markup, false)
}

/**
Escapes `text` so that [render] shows it literally.

Every `[` gets a backslash, and backslashes directly in front of a `[` are doubled so they
survive too.
*/
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut backslashes = 0;
    for c in text.chars() {
        match c {
            '\\' => backslashes += 1,
            '[' => {
                out.extend(std::iter::repeat_n('\\', backslashes * 2 + 1));
                out.push('[');
                backslashes = 0;
            }
            _ => {
                out.extend(std::iter::repeat_n('\\', backslashes));
                out.push(c);
                backslashes = 0;
            }
        }
    }
    out.extend(std::iter::repeat_n('\\', backslashes));
    out
}
