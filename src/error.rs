// SPDX-License-Identifier: MIT OR Apache-2.0
//! Errors returned by level lookups and printer configuration.
//!
//! Logging calls themselves never fail.  A missing rank or namespace just drops
//! the segment it would have produced.

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown log level `{0}`")]
    UnknownLevel(String),
    #[error(transparent)]
    Configuration(#[from] ConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("mode can only be read from the environment once a package name is set")]
    MissingPackageName,
    #[error("`{variable}` is set to `{value}`, expected one of interactive, namespaced, silent")]
    InvalidEnvMode { variable: String, value: String },
    #[error("unknown mode `{0}`")]
    UnknownMode(String),
}

impl Error {
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }
}
