//! Flag translation, scrcpy execution and the retry loop.

pub mod executor;
pub mod flags;
pub mod retry;
pub mod status;

pub use executor::{execute, LaunchCommand, LaunchStatus, Launcher, ProcessLauncher};
pub use flags::{build_flags, compose_command, normalize_parameters, FlagList};
pub use retry::{run_with_retry, RetryOutcome, RetryPolicy, RetryState};
pub use status::{render_countdown, ConsoleReporter, CountdownStatus, RetryEvent, StatusReporter};
