//! Launcher startup: settings bootstrap, banner output and the retry run.
mod banner;
mod startup;

pub use banner::{build_launch_banner, build_settings_created_notice};
pub use startup::{run_launcher, RuntimeExit, EXIT_RETRIES_EXHAUSTED, EXIT_SPAWN_FAILED};
