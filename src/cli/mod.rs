//! CLI entrypoint module structure.
use anyhow::Result;
use serde_json::json;

use crate::{
    launcher::{LaunchCommand, RetryPolicy},
    settings::LauncherOptions,
};

pub mod args;
pub mod profile;

pub use args::LaunchProfileArgs;
pub use profile::{
    resolve_binary_path, resolve_settings_path, LaunchProfile, PathSource, DEFAULT_BINARY_PATH,
};

/// Format the `--dry-run` JSON payload describing what would be launched.
pub fn dry_run_payload(
    profile: &LaunchProfile,
    options: &LauncherOptions,
    command: &LaunchCommand,
) -> Result<String> {
    let policy = RetryPolicy::from(&options.script);
    let payload = json!({
        "status": "planned",
        "settings_path": profile.settings_path.to_string_lossy(),
        "settings_source": profile.settings_source.as_str(),
        "binary_path": command.program().to_string_lossy(),
        "binary_source": profile.binary_source.as_str(),
        "parameters": command.parameters(),
        "command": command.rendered(),
        "max_retries": policy.max_retries,
        "time_between_retries_secs": policy.interval_secs,
        "message": "dry-run: scrcpy was not launched"
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}
