//! Status events emitted by the retry controller and their console rendering.

use std::io::{self, Stdout, Write};

/// Snapshot of the retry countdown, emitted once per second of waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownStatus {
    /// Number of the attempt that will run when the countdown ends.
    pub attempt: u32,
    pub retries_left: u32,
    pub seconds_left: u32,
}

/// Progress events of one launcher run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryEvent {
    Launching { attempt: u32 },
    Exited { attempt: u32, exit_code: Option<i32> },
    Countdown(CountdownStatus),
    Succeeded { attempts: u32 },
    Exhausted { attempts: u32, last_exit_code: Option<i32> },
}

/// Receives [`RetryEvent`]s. The controller never renders anything itself.
pub trait StatusReporter {
    fn report(&mut self, event: &RetryEvent);
}

impl<F> StatusReporter for F
where
    F: FnMut(&RetryEvent),
{
    fn report(&mut self, event: &RetryEvent) {
        self(event)
    }
}

/// Render the single-line countdown shown while waiting for a retry.
pub fn render_countdown(status: &CountdownStatus) -> String {
    format!(
        "[ERROR] Trying to connect to the device... [Attempt: {}] [Retries left: {:02}] [Time left: {:02}s]",
        status.attempt, status.retries_left, status.seconds_left
    )
}

/// Writes events to a terminal, rewriting the countdown line in place.
pub struct ConsoleReporter<W: Write = Stdout> {
    out: W,
    line_open: bool,
}

impl ConsoleReporter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            line_open: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, event: &RetryEvent) -> io::Result<()> {
        match event {
            RetryEvent::Launching { attempt: 1 } => {
                writeln!(self.out, "\n[RUNNING] Starting scrcpy...")?;
            }
            RetryEvent::Launching { .. } | RetryEvent::Exited { .. } => {}
            RetryEvent::Countdown(status) => {
                write!(self.out, "\r{}", render_countdown(status))?;
                self.line_open = true;
            }
            RetryEvent::Succeeded { .. } | RetryEvent::Exhausted { .. } => {
                if self.line_open {
                    writeln!(self.out)?;
                    self.line_open = false;
                }
            }
        }
        self.out.flush()
    }
}

impl<W: Write> StatusReporter for ConsoleReporter<W> {
    fn report(&mut self, event: &RetryEvent) {
        // A closed stdout must not abort the retry loop.
        let _ = self.render(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_line_is_zero_padded() {
        let line = render_countdown(&CountdownStatus {
            attempt: 3,
            retries_left: 7,
            seconds_left: 4,
        });
        assert_eq!(
            line,
            "[ERROR] Trying to connect to the device... [Attempt: 3] [Retries left: 07] [Time left: 04s]"
        );
    }

    #[test]
    fn console_rewrites_countdown_on_one_line() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        let status = |seconds_left| CountdownStatus {
            attempt: 2,
            retries_left: 1,
            seconds_left,
        };

        reporter.report(&RetryEvent::Launching { attempt: 1 });
        reporter.report(&RetryEvent::Exited {
            attempt: 1,
            exit_code: Some(1),
        });
        reporter.report(&RetryEvent::Countdown(status(2)));
        reporter.report(&RetryEvent::Countdown(status(1)));
        reporter.report(&RetryEvent::Launching { attempt: 2 });
        reporter.report(&RetryEvent::Succeeded { attempts: 2 });

        let output = String::from_utf8(reporter.into_inner()).expect("output is utf-8");
        assert_eq!(output.matches("[RUNNING]").count(), 1, "output: {output:?}");
        assert_eq!(output.matches('\r').count(), 2, "output: {output:?}");
        assert!(output.ends_with("[Time left: 01s]\n"), "output: {output:?}");
    }

    #[test]
    fn closures_act_as_reporters() {
        let mut seen = Vec::new();
        {
            let mut reporter = |event: &RetryEvent| seen.push(*event);
            reporter.report(&RetryEvent::Succeeded { attempts: 1 });
        }
        assert_eq!(seen, vec![RetryEvent::Succeeded { attempts: 1 }]);
    }
}
