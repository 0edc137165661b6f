use std::path::Path;

use tracing::{debug, info, warn};

use super::{LauncherOptions, SETTINGS_ENV_KEY};

pub fn log_source(path: &Path, source: &str) {
    if source == "default" {
        debug!(
            target: "auto_scrcpy::settings",
            path = %path.display(),
            env = SETTINGS_ENV_KEY,
            "No settings override given; using settings.toml in the working directory"
        );
    } else {
        info!(
            target: "auto_scrcpy::settings",
            path = %path.display(),
            source = source,
            "Using overridden settings path"
        );
    }
}

pub fn log_created(path: &Path) {
    warn!(
        target: "auto_scrcpy::settings",
        path = %path.display(),
        "Settings file was missing; wrote the default document"
    );
}

pub fn log_loaded(path: &Path, options: &LauncherOptions) {
    info!(
        target: "auto_scrcpy::settings",
        path = %path.display(),
        max_retries_on_error = options.script.max_retries_on_error,
        time_between_retries_secs = options.script.time_between_retries_secs,
        video_enabled = options.video.enabled,
        video_codec = %options.video.codec,
        audio_enabled = options.audio.enabled,
        audio_codec = %options.audio.codec,
        "Settings file loaded successfully"
    );
}
