use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use auto_scrcpy::settings::DEFAULT_SETTINGS_DOCUMENT;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_auto-scrcpy");

pub fn fixture(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

/// Write the default settings document with a custom retry policy.
pub fn write_settings(dir: &Path, max_retries: u32, interval_secs: u32) -> PathBuf {
    let path = dir.join("settings.toml");
    let document = DEFAULT_SETTINGS_DOCUMENT
        .replace(
            "max-retries-on-error = 15",
            &format!("max-retries-on-error = {max_retries}"),
        )
        .replace(
            "time-between-retries = 5",
            &format!("time-between-retries = {interval_secs}"),
        );
    fs::write(&path, document).expect("can write settings file");
    path
}

/// Run the launcher binary with explicit settings and scrcpy paths.
pub fn run_launcher(settings: &Path, scrcpy: &Path, extra_args: &[&str]) -> Output {
    Command::new(BINARY_PATH)
        .arg("--settings")
        .arg(settings)
        .arg("--scrcpy")
        .arg(scrcpy)
        .args(extra_args)
        .env_remove("AUTO_SCRCPY_SETTINGS")
        .env_remove("AUTO_SCRCPY_BINARY")
        .env("RUST_LOG", "warn")
        .output()
        .expect("launcher process should start")
}

/// Stand-in for scrcpy that records its arguments and exits with scripted codes.
///
/// Invocation N exits with `exit_codes[N - 1]`, later invocations with
/// `fallback`. Arguments are appended to `invocations.log` next to the script.
#[cfg(unix)]
pub fn write_fake_scrcpy(dir: &Path, exit_codes: &[i32], fallback: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let mut cases = String::new();
    for (index, code) in exit_codes.iter().enumerate() {
        cases.push_str(&format!("  {}) exit {code} ;;\n", index + 1));
    }
    let script = format!(
        "#!/bin/sh\n\
         log=\"$(dirname \"$0\")/invocations.log\"\n\
         echo \"$@\" >> \"$log\"\n\
         count=$(wc -l < \"$log\" | tr -d ' ')\n\
         case \"$count\" in\n\
         {cases}  *) exit {fallback} ;;\n\
         esac\n"
    );

    let path = dir.join("fake-scrcpy");
    fs::write(&path, script).expect("can write fake scrcpy");
    let mut perms = fs::metadata(&path).expect("fake scrcpy metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("can mark fake scrcpy executable");
    path
}

pub fn invocations(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("invocations.log"))
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}
