// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::error::Error;
use crate::format::Toggles;
use std::fmt::Display;
use std::str::FromStr;

/// The fixed set of levels, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Plain output, no annotations by default
    #[default]
    Print,
    /// Developer detail, dropped in namespaced mode
    Debug,
    Info,
    /// Something finished well
    Success,
    Warning,
    Error,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Print,
        Level::Debug,
        Level::Info,
        Level::Success,
        Level::Warning,
        Level::Error,
    ];

    /// Markup color name used for the label and rank segments.
    pub const fn color(self) -> &'static str {
        match self {
            Level::Print => "default",
            Level::Debug => "grey30",
            Level::Info => "light_sky_blue3",
            Level::Success => "dark_green",
            Level::Warning => "dark_orange3",
            Level::Error => "red",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Level::Print => "PRINT",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Success => "SUCCESS",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        }
    }

    pub const fn severity(self) -> i8 {
        match self {
            Level::Print => -1,
            Level::Debug => 0,
            Level::Info => 1,
            Level::Success => 2,
            Level::Warning => 3,
            Level::Error => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Level::Print => "print",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Success => "success",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }

    /**
    Which annotations the convenience operation for this level turns on.

    `print` is bare output.  `debug` skips the label since the origin already says where it came from.
    */
    pub const fn default_toggles(self) -> Toggles {
        match self {
            Level::Print => Toggles::NONE,
            Level::Debug => Toggles {
                time: true,
                level: false,
                origin: true,
                rank: true,
            },
            _ => Toggles::ALL,
        }
    }
}

/// Looks up a level by name, the way configuration files and environment variables spell it.
pub fn level_named(name: &str) -> Result<Level, Error> {
    name.parse()
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownLevel(s.to_string()))
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/*
Boilerplate notes.

Copy/Eq/Ord/Hash are all cheap and meaningful for a fieldless enum; Ord agrees with severity.
Default is Print, the lowest level, so a default threshold lets everything through.
Display is the label since that is what ends up on screen.
*/
