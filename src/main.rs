//! Entry point for auto-scrcpy.
use std::process::ExitCode;

use auto_scrcpy::{
    cli::LaunchProfileArgs,
    lib::telemetry,
    runtime::{self, RuntimeExit},
};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<(), RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let profile = LaunchProfileArgs::parse()
        .build()
        .map_err(RuntimeExit::from_error)?;
    runtime::run_launcher(profile).await
}
