use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

use super::{require, to_count};

pub const DEFAULT_MAX_RETRIES_ON_ERROR: u32 = 15;
pub const DEFAULT_TIME_BETWEEN_RETRIES_SECS: u32 = 5;

/// Retry policy knobs for the launcher itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptSection {
    pub max_retries_on_error: u32,
    pub time_between_retries_secs: u32,
}

impl Default for ScriptSection {
    fn default() -> Self {
        Self {
            max_retries_on_error: DEFAULT_MAX_RETRIES_ON_ERROR,
            time_between_retries_secs: DEFAULT_TIME_BETWEEN_RETRIES_SECS,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RawScriptSection {
    pub max_retries_on_error: Option<i64>,
    pub time_between_retries: Option<i64>,
}

pub fn parse_script_section(
    raw: Option<RawScriptSection>,
    path: &Path,
) -> Result<ScriptSection, ConfigError> {
    let raw = require(raw, path, "auto-scrcpy-script")?;

    let max_retries_on_error = to_count(
        require(
            raw.max_retries_on_error,
            path,
            "auto-scrcpy-script.max-retries-on-error",
        )?,
        path,
        "auto-scrcpy-script.max-retries-on-error",
    )?;
    let time_between_retries_secs = to_count(
        require(
            raw.time_between_retries,
            path,
            "auto-scrcpy-script.time-between-retries",
        )?,
        path,
        "auto-scrcpy-script.time-between-retries",
    )?;

    Ok(ScriptSection {
        max_retries_on_error,
        time_between_retries_secs,
    })
}
