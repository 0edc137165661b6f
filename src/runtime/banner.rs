use std::path::Path;

use crate::launcher::LaunchCommand;

/// Lines shown after a default settings file has been written.
pub fn build_settings_created_notice(settings_path: &Path) -> String {
    let name = file_name(settings_path);
    [
        String::new(),
        format!("[WARN] The {name} file did not exist; it has been created with the default settings"),
        format!("[WARN] Settings path: {}", settings_path.display()),
        format!("[WARN] To change the settings, edit the {name} file"),
        "[WARN] Restart auto-scrcpy after changing the settings".to_string(),
    ]
    .join("\n")
}

/// Credits, resolved command and usage tips printed before the first launch.
pub fn build_launch_banner(command: &LaunchCommand, settings_path: &Path) -> String {
    let name = file_name(settings_path);
    let parameters = command.parameters().join(" ");
    let binary_name = command
        .program()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| command.program().display().to_string());

    [
        String::new(),
        "[CREDIT] scrcpy is developed by https://github.com/Genymobile".to_string(),
        String::new(),
        format!("[INFO] scrcpy binary: {}", command.program().display()),
        format!("[INFO] Parameters: {parameters}"),
        format!("[INFO] Command: {binary_name} {parameters}"),
        String::new(),
        format!("[TIP] To change the settings, edit the {name} file"),
        "[TIP] To enter fullscreen mode, press Alt + F in the scrcpy window".to_string(),
    ]
    .join("\n")
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
