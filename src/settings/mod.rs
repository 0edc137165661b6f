//! Create, load and validate the launcher settings file.
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::error;

use crate::lib::{
    errors::ConfigError,
    fs::{write_file_if_absent, WriteIfAbsentStatus},
};

pub mod audio;
pub mod defaults;
pub mod device;
pub mod script;
pub mod telemetry;
pub mod video;

pub use audio::{
    parse_audio_section, AudioSection, RawAudioSection, DEFAULT_AUDIO_BIT_RATE,
    DEFAULT_AUDIO_CODEC,
};
pub use defaults::DEFAULT_SETTINGS_DOCUMENT;
pub use device::{parse_device_section, DeviceSection, RawDeviceSection};
pub use script::{
    parse_script_section, RawScriptSection, ScriptSection, DEFAULT_MAX_RETRIES_ON_ERROR,
    DEFAULT_TIME_BETWEEN_RETRIES_SECS,
};
pub use video::{
    parse_video_section, RawVideoSection, VideoSection, DEFAULT_MAX_FPS, DEFAULT_MAX_SIZE,
    DEFAULT_VIDEO_BIT_RATE, DEFAULT_VIDEO_CODEC,
};

pub const SETTINGS_ENV_KEY: &str = "AUTO_SCRCPY_SETTINGS";
pub const DEFAULT_SETTINGS_PATH: &str = "settings.toml";

/// Whether [`ensure_settings_file`] found a file or had to write one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFileStatus {
    Existing,
    Created,
}

/// Parsed but not yet validated settings file.
#[derive(Debug)]
pub struct SettingsDocument {
    document: config::Config,
    pub source_path: PathBuf,
}

/// Typed, validated launcher options. Built once per run and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LauncherOptions {
    pub script: ScriptSection,
    pub device: DeviceSection,
    pub video: VideoSection,
    pub audio: AudioSection,
}

#[derive(Debug, Deserialize)]
struct RawSettingsDocument {
    #[serde(rename = "auto-scrcpy-script")]
    script: Option<RawScriptSection>,
    device: Option<RawDeviceSection>,
    video: Option<RawVideoSection>,
    audio: Option<RawAudioSection>,
}

/// Write the default settings document if nothing exists at `path`.
pub fn ensure_settings_file(path: &Path) -> Result<SettingsFileStatus, ConfigError> {
    let status = write_file_if_absent(path, DEFAULT_SETTINGS_DOCUMENT).map_err(|source| {
        ConfigError::Write {
            path: path.to_path_buf(),
            source,
        }
    })?;

    match status {
        WriteIfAbsentStatus::Existing => Ok(SettingsFileStatus::Existing),
        WriteIfAbsentStatus::Created => {
            telemetry::log_created(path);
            Ok(SettingsFileStatus::Created)
        }
    }
}

/// Read and parse the settings file at `path`.
pub fn load_settings(path: PathBuf) -> Result<SettingsDocument, ConfigError> {
    let source = config::File::from(path.as_path()).format(config::FileFormat::Toml);
    let document = config::Config::builder()
        .add_source(source)
        .build()
        .map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "auto_scrcpy::settings",
                path = %path.display(),
                reason = %error,
                "Failed to read settings file"
            );
            error
        })?;

    Ok(SettingsDocument {
        document,
        source_path: path,
    })
}

impl LauncherOptions {
    /// Load, coerce and validate the settings file at `path`.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        let document = load_settings(path.clone())?;
        let options = Self::from_document(document).map_err(|err| {
            error!(
                target: "auto_scrcpy::settings",
                path = %path.display(),
                reason = %err,
                "Failed to validate settings file"
            );
            err
        })?;

        telemetry::log_loaded(&path, &options);
        Ok(options)
    }

    /// Extract every recognized option from a parsed document.
    pub fn from_document(document: SettingsDocument) -> Result<Self, ConfigError> {
        let path = document.source_path;
        let raw: RawSettingsDocument = document
            .document
            .try_deserialize()
            .map_err(|err| ConfigError::from_type_error(path.clone(), err))?;

        Ok(Self {
            script: parse_script_section(raw.script, &path)?,
            device: parse_device_section(raw.device, &path)?,
            video: parse_video_section(raw.video, &path)?,
            audio: parse_audio_section(raw.audio, &path)?,
        })
    }
}

pub(crate) fn require<T>(
    value: Option<T>,
    path: &Path,
    field: &'static str,
) -> Result<T, ConfigError> {
    value.ok_or_else(|| ConfigError::MissingField {
        path: path.to_path_buf(),
        field,
    })
}

pub(crate) fn require_text(
    value: Option<String>,
    path: &Path,
    field: &'static str,
) -> Result<String, ConfigError> {
    let value = require(value, path, field)?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field,
            message: "Value cannot be empty".into(),
        });
    }
    Ok(trimmed.to_string())
}

pub(crate) fn to_count(value: i64, path: &Path, field: &'static str) -> Result<u32, ConfigError> {
    u32::try_from(value).map_err(|_| ConfigError::InvalidField {
        path: path.to_path_buf(),
        field,
        message: format!("Specify a whole number between 0 and {}", u32::MAX),
    })
}
