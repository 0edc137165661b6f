//! Launch-and-retry controller.

use std::time::Duration;

use tokio::time;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    lib::{errors::LaunchError, telemetry::AttemptSpan},
    settings::ScriptSection,
};

use super::{
    executor::{LaunchCommand, Launcher},
    status::{CountdownStatus, RetryEvent, StatusReporter},
};

const COUNTDOWN_TICK: Duration = Duration::from_secs(1);

/// Fixed retry policy: a bounded number of relaunches with a constant wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub interval_secs: u32,
}

impl From<&ScriptSection> for RetryPolicy {
    fn from(script: &ScriptSection) -> Self {
        Self {
            max_retries: script.max_retries_on_error,
            interval_secs: script.time_between_retries_secs,
        }
    }
}

/// Mutable loop state, owned by [`run_with_retry`] for the duration of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryState {
    pub attempts_made: u32,
    pub retries_remaining: u32,
    pub seconds_remaining: u32,
}

impl RetryState {
    fn new(policy: &RetryPolicy) -> Self {
        Self {
            attempts_made: 0,
            retries_remaining: policy.max_retries,
            seconds_remaining: 0,
        }
    }

    fn countdown(&self) -> CountdownStatus {
        CountdownStatus {
            attempt: self.attempts_made + 1,
            retries_left: self.retries_remaining,
            seconds_left: self.seconds_remaining,
        }
    }
}

/// Terminal state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryOutcome {
    Succeeded {
        attempts: u32,
    },
    Exhausted {
        attempts: u32,
        last_exit_code: Option<i32>,
    },
}

impl RetryOutcome {
    pub fn attempts(&self) -> u32 {
        match self {
            RetryOutcome::Succeeded { attempts } | RetryOutcome::Exhausted { attempts, .. } => {
                *attempts
            }
        }
    }

    /// Turn exhaustion into [`LaunchError::RetriesExhausted`].
    pub fn into_result(self) -> Result<u32, LaunchError> {
        match self {
            RetryOutcome::Succeeded { attempts } => Ok(attempts),
            RetryOutcome::Exhausted {
                attempts,
                last_exit_code,
            } => Err(LaunchError::RetriesExhausted {
                attempts,
                last_exit_code,
            }),
        }
    }
}

/// Run `command` until it exits with code zero or the retry budget is spent.
///
/// The launcher is invoked at most `max_retries + 1` times. Between attempts
/// the controller waits `interval_secs` one-second ticks, reporting a
/// [`RetryEvent::Countdown`] at the start of each tick. A failure to spawn the
/// binary aborts immediately; it is not retried.
pub async fn run_with_retry<L, R>(
    launcher: &mut L,
    command: &LaunchCommand,
    policy: RetryPolicy,
    reporter: &mut R,
) -> Result<RetryOutcome, LaunchError>
where
    L: Launcher,
    R: StatusReporter + ?Sized,
{
    let session_id = Uuid::new_v4();
    let mut state = RetryState::new(&policy);

    info!(
        target: "auto_scrcpy::launcher",
        %session_id,
        command = command.rendered(),
        max_retries = policy.max_retries,
        interval_secs = policy.interval_secs,
        "Starting scrcpy launch loop"
    );

    loop {
        let attempt = state.attempts_made + 1;
        reporter.report(&RetryEvent::Launching { attempt });

        let span = AttemptSpan::start(session_id, attempt);
        let status = launcher.launch(command).await?;
        span.finish(status.exit_code);
        state.attempts_made = attempt;
        reporter.report(&RetryEvent::Exited {
            attempt,
            exit_code: status.exit_code,
        });

        if status.success() {
            let outcome = RetryOutcome::Succeeded { attempts: attempt };
            reporter.report(&RetryEvent::Succeeded { attempts: attempt });
            return Ok(outcome);
        }

        if state.retries_remaining == 0 {
            warn!(
                target: "auto_scrcpy::launcher",
                %session_id,
                attempts = attempt,
                last_exit_code = status.exit_code,
                "Retry budget exhausted"
            );
            reporter.report(&RetryEvent::Exhausted {
                attempts: attempt,
                last_exit_code: status.exit_code,
            });
            return Ok(RetryOutcome::Exhausted {
                attempts: attempt,
                last_exit_code: status.exit_code,
            });
        }

        state.retries_remaining -= 1;
        state.seconds_remaining = policy.interval_secs;
        while state.seconds_remaining > 0 {
            reporter.report(&RetryEvent::Countdown(state.countdown()));
            time::sleep(COUNTDOWN_TICK).await;
            state.seconds_remaining -= 1;
        }
    }
}
