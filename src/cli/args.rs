//! CLI argument definitions and `LaunchProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::{resolve_binary_path, resolve_settings_path, LaunchProfile};

/// Command-line arguments. All optional: with none, behaviour is driven
/// entirely by the settings file.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Launch scrcpy from a settings file and relaunch it until the device connects",
    long_about = None,
    after_help = "Hint: run once without a settings file to generate a documented settings.toml."
)]
pub struct LaunchProfileArgs {
    /// Path to settings.toml (overrides AUTO_SCRCPY_SETTINGS).
    #[arg(long = "settings", value_name = "PATH")]
    pub settings_override: Option<PathBuf>,
    /// Path to the scrcpy executable (overrides AUTO_SCRCPY_BINARY).
    #[arg(long = "scrcpy", value_name = "PATH")]
    pub binary_override: Option<PathBuf>,
    /// Print the resolved command as JSON without launching scrcpy.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

impl LaunchProfileArgs {
    /// Build a `LaunchProfile` from CLI args and environment variables.
    pub fn build(self) -> Result<LaunchProfile> {
        let (settings_path, settings_source) = resolve_settings_path(self.settings_override)?;
        let (binary_path, binary_source) = resolve_binary_path(self.binary_override)?;

        Ok(LaunchProfile {
            settings_path,
            settings_source,
            binary_path,
            binary_source,
            dry_run: self.dry_run,
        })
    }
}
