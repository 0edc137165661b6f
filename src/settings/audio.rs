use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

use super::{require, require_text};

pub const DEFAULT_AUDIO_CODEC: &str = "opus";
pub const DEFAULT_AUDIO_BIT_RATE: &str = "128k";

/// Audio stream settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSection {
    pub enabled: bool,
    pub codec: String,
    pub bit_rate: String,
}

impl Default for AudioSection {
    fn default() -> Self {
        Self {
            enabled: true,
            codec: DEFAULT_AUDIO_CODEC.to_string(),
            bit_rate: DEFAULT_AUDIO_BIT_RATE.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RawAudioSection {
    pub enabled: Option<bool>,
    pub codec: Option<String>,
    pub bit_rate: Option<String>,
}

pub fn parse_audio_section(
    raw: Option<RawAudioSection>,
    path: &Path,
) -> Result<AudioSection, ConfigError> {
    let raw = require(raw, path, "audio")?;
    Ok(AudioSection {
        enabled: require(raw.enabled, path, "audio.enabled")?,
        codec: require_text(raw.codec, path, "audio.codec")?,
        bit_rate: require_text(raw.bit_rate, path, "audio.bit-rate")?,
    })
}
