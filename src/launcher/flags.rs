//! Translate launcher options into scrcpy command-line flags.

use std::{fmt, path::Path};

use crate::settings::LauncherOptions;

/// Ordered scrcpy flags derived from [`LauncherOptions`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagList(Vec<String>);

impl FlagList {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, flag: &str) -> bool {
        self.iter().any(|token| token == flag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push_if(&mut self, condition: bool, flag: &str) {
        if condition {
            self.0.push(flag.to_string());
        }
    }

    fn push_valued(&mut self, name: &str, value: &str) {
        self.0.push(format!("--{name}={value}"));
    }
}

impl fmt::Display for FlagList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// Build the scrcpy flag list in its fixed order.
///
/// Presence flags appear only when their condition holds; the five valued
/// flags are always emitted.
pub fn build_flags(options: &LauncherOptions) -> FlagList {
    let mut flags = FlagList::default();

    flags.push_if(options.device.stay_awake, "--stay-awake");
    flags.push_if(options.device.turn_screen_off_on_start, "--turn-screen-off");
    flags.push_if(options.device.show_touches, "--show-touches");

    flags.push_if(!options.video.enabled, "--no-video");
    flags.push_valued("video-codec", &options.video.codec);
    flags.push_valued("video-bit-rate", &options.video.bit_rate);
    flags.push_valued("max-fps", &options.video.max_fps);
    flags.push_valued("max-size", &options.video.max_size);

    flags.push_if(!options.audio.enabled, "--no-audio");
    flags.push_valued("audio-codec", &options.audio.codec);
    flags.push_valued("audio-bit-rate", &options.audio.bit_rate);

    flags
}

/// Normalize flags into the argument tokens actually handed to scrcpy:
/// whitespace-separated, lower-cased.
pub fn normalize_parameters(flags: &FlagList) -> Vec<String> {
    flags
        .iter()
        .flat_map(str::split_whitespace)
        .map(str::to_lowercase)
        .collect()
}

/// Render the full command line: binary path followed by the flags, with
/// whitespace runs collapsed to a single space, trimmed and lower-cased.
pub fn compose_command(binary_path: &Path, flags: &FlagList) -> String {
    let raw = format!("{} {}", binary_path.display(), flags);
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
