use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

use super::require;

/// Device-side behaviour while mirroring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSection {
    pub stay_awake: bool,
    pub turn_screen_off_on_start: bool,
    pub show_touches: bool,
}

impl Default for DeviceSection {
    fn default() -> Self {
        Self {
            stay_awake: true,
            turn_screen_off_on_start: false,
            show_touches: false,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RawDeviceSection {
    pub stay_awake: Option<bool>,
    pub turn_screen_off_on_start: Option<bool>,
    pub show_touches: Option<bool>,
}

pub fn parse_device_section(
    raw: Option<RawDeviceSection>,
    path: &Path,
) -> Result<DeviceSection, ConfigError> {
    let raw = require(raw, path, "device")?;
    Ok(DeviceSection {
        stay_awake: require(raw.stay_awake, path, "device.stay-awake")?,
        turn_screen_off_on_start: require(
            raw.turn_screen_off_on_start,
            path,
            "device.turn-screen-off-on-start",
        )?,
        show_touches: require(raw.show_touches, path, "device.show-touches")?,
    })
}
