use std::{
    future::Future,
    path::{Path, PathBuf},
    process::Stdio,
};

use tokio::process::Command;
use tracing::debug;

use crate::lib::errors::LaunchError;

use super::flags::{compose_command, normalize_parameters, FlagList};

/// A fully resolved scrcpy invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    program: PathBuf,
    parameters: Vec<String>,
    rendered: String,
}

impl LaunchCommand {
    pub fn new(program: &Path, flags: &FlagList) -> Self {
        Self {
            program: program.to_path_buf(),
            parameters: normalize_parameters(flags),
            rendered: compose_command(program, flags),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// Normalized command line, suitable for display and logging.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}

/// Exit status of one scrcpy run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchStatus {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl LaunchStatus {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs a [`LaunchCommand`] to completion.
pub trait Launcher {
    fn launch(
        &mut self,
        command: &LaunchCommand,
    ) -> impl Future<Output = Result<LaunchStatus, LaunchError>>;
}

/// Launches the real scrcpy process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    async fn launch(&mut self, command: &LaunchCommand) -> Result<LaunchStatus, LaunchError> {
        execute(command).await
    }
}

/// Spawn scrcpy with stdout and stderr discarded and wait for it to exit.
///
/// The program path is used as given; only the parameters are normalized.
pub async fn execute(command: &LaunchCommand) -> Result<LaunchStatus, LaunchError> {
    debug!(
        target: "auto_scrcpy::launcher",
        program = %command.program.display(),
        parameters = ?command.parameters,
        "Spawning scrcpy"
    );

    let status = Command::new(&command.program)
        .args(&command.parameters)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map_err(|source| LaunchError::Spawn {
            program: command.program.clone(),
            source,
        })?;

    Ok(LaunchStatus {
        exit_code: status.code(),
    })
}
