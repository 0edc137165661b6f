//! Telemetry initialization and launch attempt span helpers.

use std::time::Instant;

use anyhow::Result;
use serde::Serialize;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Initialize `tracing` and format developer logs.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper recording the start and end of one scrcpy launch.
pub struct AttemptSpan {
    span: Span,
    started_at: Instant,
    session_id: Uuid,
    attempt: u32,
}

impl AttemptSpan {
    /// Start a span for `attempt` within the launcher session.
    pub fn start(session_id: Uuid, attempt: u32) -> Self {
        let span = info_span!(
            target: "auto_scrcpy::launcher",
            "scrcpy_attempt",
            %session_id,
            attempt
        );
        Self {
            span,
            started_at: Instant::now(),
            session_id,
            attempt,
        }
    }

    /// Close the span while recording the exit code and elapsed time.
    pub fn finish(self, exit_code: Option<i32>) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        let status = if exit_code == Some(0) {
            "succeeded"
        } else {
            "failed"
        };
        info!(
            target: "auto_scrcpy::launcher",
            session_id = %self.session_id,
            attempt = self.attempt,
            status = status,
            exit_code = exit_code,
            elapsed_ms = elapsed_ms,
            "scrcpy exited"
        );
    }
}

/// Payload describing the resolved launch plan.
#[derive(Debug, Serialize)]
pub struct LaunchPlanTelemetry<'a> {
    pub settings_path: &'a str,
    pub settings_source: &'a str,
    pub binary_path: &'a str,
    pub parameters: &'a [String],
    pub max_retries: u32,
    pub time_between_retries_secs: u32,
}

/// Emit the launch plan to `tracing`.
pub fn emit_launch_plan(telemetry: &LaunchPlanTelemetry<'_>) {
    info!(
        target: "auto_scrcpy::runtime",
        settings_path = telemetry.settings_path,
        settings_source = telemetry.settings_source,
        binary_path = telemetry.binary_path,
        parameters = ?telemetry.parameters,
        max_retries = telemetry.max_retries,
        time_between_retries_secs = telemetry.time_between_retries_secs,
        "Resolved scrcpy launch plan"
    );
}
