// SPDX-License-Identifier: MPL-2.0
//! Errors of the settings and localization layers.
//!
//! The notification subsystem itself never fails; these only surface when
//! loading or saving configuration and translations.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Locale Error: {0}")]
    Locale(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<unic_langid::LanguageIdentifierError> for Error {
    fn from(err: unic_langid::LanguageIdentifierError) -> Self {
        Error::Locale(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
