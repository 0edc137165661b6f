//! LaunchProfile and settings/binary path resolution.
use std::{env, ffi::OsString, path::PathBuf};

use anyhow::{Context, Result};

use crate::settings::{DEFAULT_SETTINGS_PATH, SETTINGS_ENV_KEY};

const BINARY_ENV_KEY: &str = "AUTO_SCRCPY_BINARY";

#[cfg(windows)]
pub const DEFAULT_BINARY_PATH: &str = "dependencies/scrcpy-win64-v2.7/scrcpy.exe";
#[cfg(not(windows))]
pub const DEFAULT_BINARY_PATH: &str = "dependencies/scrcpy/scrcpy";

/// Where a resolved path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    Cli,
    Env,
    Default,
}

impl PathSource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            PathSource::Cli => "cli",
            PathSource::Env => "env",
            PathSource::Default => "default",
        }
    }
}

/// Resolved launch profile.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub settings_path: PathBuf,
    pub settings_source: PathSource,
    pub binary_path: PathBuf,
    pub binary_source: PathSource,
    pub dry_run: bool,
}

/// Resolve the settings path in the order: CLI override → env var → default.
pub fn resolve_settings_path(override_path: Option<PathBuf>) -> Result<(PathBuf, PathSource)> {
    let (path, source) = resolve_path_from(
        override_path,
        env::var_os(SETTINGS_ENV_KEY),
        DEFAULT_SETTINGS_PATH,
    );
    Ok((absolutize(path)?, source))
}

/// Resolve the scrcpy binary in the order: CLI override → env var → bundled default.
pub fn resolve_binary_path(override_path: Option<PathBuf>) -> Result<(PathBuf, PathSource)> {
    let (path, source) = resolve_path_from(
        override_path,
        env::var_os(BINARY_ENV_KEY),
        DEFAULT_BINARY_PATH,
    );
    Ok((absolutize(path)?, source))
}

/// Pick a path from explicit values (testable helper).
fn resolve_path_from(
    override_path: Option<PathBuf>,
    env_value: Option<OsString>,
    default: &str,
) -> (PathBuf, PathSource) {
    if let Some(path) = override_path.filter(|p| !p.as_os_str().is_empty()) {
        return (path, PathSource::Cli);
    }

    if let Some(value) = env_value.filter(|v| !v.to_string_lossy().trim().is_empty()) {
        return (PathBuf::from(value), PathSource::Env);
    }

    (PathBuf::from(default), PathSource::Default)
}

fn absolutize(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path);
    }

    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(cwd.join(path))
}
