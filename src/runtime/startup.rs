use std::{
    io::{self, IsTerminal, Write},
    process::ExitCode,
};

use anyhow::Error;

use crate::{
    cli::{dry_run_payload, LaunchProfile},
    launcher::{
        build_flags, run_with_retry, ConsoleReporter, LaunchCommand, ProcessLauncher, RetryPolicy,
    },
    lib::{
        errors::LaunchError,
        telemetry::{emit_launch_plan, LaunchPlanTelemetry},
    },
    settings::{self, ensure_settings_file, LauncherOptions, SettingsFileStatus},
};

use super::{build_launch_banner, build_settings_created_notice};

/// Exit code when scrcpy could not be started at all.
pub const EXIT_SPAWN_FAILED: u8 = 2;
/// Exit code when every launch attempt failed.
pub const EXIT_RETRIES_EXHAUSTED: u8 = 3;

/// Bundles a runtime error message with an exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self::new(format!("{err:?}"), ExitCode::FAILURE)
    }

    pub fn from_launch_error(err: LaunchError) -> Self {
        let code = match err {
            LaunchError::Spawn { .. } => EXIT_SPAWN_FAILED,
            LaunchError::RetriesExhausted { .. } => EXIT_RETRIES_EXHAUSTED,
        };
        Self::new(format!("[ERROR] {err}"), ExitCode::from(code))
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

/// Ensure settings exist, load them, then launch scrcpy under the retry policy.
///
/// Writing a default settings file ends the run successfully so the operator
/// can review it before the first launch.
pub async fn run_launcher(profile: LaunchProfile) -> Result<(), RuntimeExit> {
    settings::telemetry::log_source(&profile.settings_path, profile.settings_source.as_str());

    let status = ensure_settings_file(&profile.settings_path).map_err(RuntimeExit::from_error)?;
    if status == SettingsFileStatus::Created {
        println!("{}", build_settings_created_notice(&profile.settings_path));
        wait_for_acknowledgement();
        return Ok(());
    }

    let options = LauncherOptions::load_from_path(profile.settings_path.clone())
        .map_err(RuntimeExit::from_error)?;
    let command = LaunchCommand::new(&profile.binary_path, &build_flags(&options));
    let policy = RetryPolicy::from(&options.script);

    emit_launch_plan(&LaunchPlanTelemetry {
        settings_path: profile.settings_path.to_string_lossy().as_ref(),
        settings_source: profile.settings_source.as_str(),
        binary_path: profile.binary_path.to_string_lossy().as_ref(),
        parameters: command.parameters(),
        max_retries: policy.max_retries,
        time_between_retries_secs: policy.interval_secs,
    });

    if profile.dry_run {
        let payload =
            dry_run_payload(&profile, &options, &command).map_err(RuntimeExit::from_error)?;
        println!("{payload}");
        return Ok(());
    }

    println!("{}", build_launch_banner(&command, &profile.settings_path));

    let mut reporter = ConsoleReporter::stdout();
    let outcome = run_with_retry(&mut ProcessLauncher, &command, policy, &mut reporter)
        .await
        .map_err(RuntimeExit::from_launch_error)?;
    let attempts = outcome.into_result().map_err(RuntimeExit::from_launch_error)?;

    tracing::info!(
        target: "auto_scrcpy::runtime",
        attempts,
        "scrcpy session ended"
    );
    println!("\n[END] scrcpy has been closed!");
    Ok(())
}

/// Keep the console window open until the operator presses Enter.
fn wait_for_acknowledgement() {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return;
    }

    print!("[WARN] Press Enter to exit...");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = stdin.read_line(&mut line);
}
