use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while creating, loading or validating the settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the settings file (missing, unreadable).
    #[error("Failed to read settings file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// The settings file is not a well-formed TOML document.
    #[error("Failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// A recognized option holds a value that cannot be coerced to its type.
    #[error("Settings file {path} has an option of the wrong type: {source}")]
    InvalidType {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Required section or option is missing.
    #[error("Settings file {path} is missing `{field}`")]
    MissingField { path: PathBuf, field: &'static str },
    /// Option failed validation.
    #[error("Settings file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
    /// Failed to write the default settings document.
    #[error("Failed to write default settings file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConfigError {
    /// Wrap a `config::ConfigError` raised while building the document.
    ///
    /// Syntax errors are reported as [`ConfigError::Parse`]; everything else
    /// (missing file, I/O) is a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        match source {
            ConfigLoaderError::FileParse { .. } => Self::Parse { path, source },
            source => Self::FileRead { path, source },
        }
    }

    /// Wrap a `config::ConfigError` raised while deserializing typed sections.
    pub fn from_type_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::InvalidType { path, source }
    }
}

/// Failures of the launch-and-retry controller.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The external binary could not be started at all.
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Every launch attempt exited unsuccessfully.
    #[error("scrcpy still failing after {attempts} attempt(s) (last exit={last_exit_code:?})")]
    RetriesExhausted {
        attempts: u32,
        last_exit_code: Option<i32>,
    },
}
