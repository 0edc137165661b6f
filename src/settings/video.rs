use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

use super::{require, require_text};

pub const DEFAULT_VIDEO_CODEC: &str = "h264";
pub const DEFAULT_VIDEO_BIT_RATE: &str = "8m";
pub const DEFAULT_MAX_FPS: &str = "60";
pub const DEFAULT_MAX_SIZE: &str = "1280";

/// Video stream settings.
///
/// Values are forwarded to scrcpy verbatim, so they stay strings (`8m`,
/// `1280`) rather than being parsed into numbers here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSection {
    pub enabled: bool,
    pub codec: String,
    pub bit_rate: String,
    pub max_fps: String,
    pub max_size: String,
}

impl Default for VideoSection {
    fn default() -> Self {
        Self {
            enabled: true,
            codec: DEFAULT_VIDEO_CODEC.to_string(),
            bit_rate: DEFAULT_VIDEO_BIT_RATE.to_string(),
            max_fps: DEFAULT_MAX_FPS.to_string(),
            max_size: DEFAULT_MAX_SIZE.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RawVideoSection {
    pub enabled: Option<bool>,
    pub codec: Option<String>,
    pub bit_rate: Option<String>,
    pub max_fps: Option<String>,
    pub max_size: Option<String>,
}

pub fn parse_video_section(
    raw: Option<RawVideoSection>,
    path: &Path,
) -> Result<VideoSection, ConfigError> {
    let raw = require(raw, path, "video")?;
    Ok(VideoSection {
        enabled: require(raw.enabled, path, "video.enabled")?,
        codec: require_text(raw.codec, path, "video.codec")?,
        bit_rate: require_text(raw.bit_rate, path, "video.bit-rate")?,
        max_fps: require_text(raw.max_fps, path, "video.max-fps")?,
        max_size: require_text(raw.max_size, path, "video.max-size")?,
    })
}
