use tempfile::tempdir;

use crate::common::{run_launcher, write_settings};

const DEFAULT_PARAMETERS: &str = "--stay-awake --video-codec=h264 --video-bit-rate=8m \
                                  --max-fps=60 --max-size=1280 --audio-codec=opus \
                                  --audio-bit-rate=128k";

#[test]
fn missing_binary_is_reported_as_spawn_failure() {
    let temp = tempdir().expect("can create temporary directory");
    let settings = write_settings(temp.path(), 3, 0);

    let output = run_launcher(&settings, &temp.path().join("absent-scrcpy"), &[]);

    assert_eq!(output.status.code(), Some(2), "output: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to start"), "stderr: {stderr}");
}

#[cfg(unix)]
mod unix {
    use super::*;
    use crate::common::{invocations, write_fake_scrcpy};

    #[test]
    fn relaunches_until_scrcpy_succeeds() {
        let temp = tempdir().expect("can create temporary directory");
        let settings = write_settings(temp.path(), 2, 0);
        let scrcpy = write_fake_scrcpy(temp.path(), &[1, 1, 0], 0);

        let output = run_launcher(&settings, &scrcpy, &[]);

        assert!(output.status.success(), "output: {output:?}");
        let calls = invocations(temp.path());
        assert_eq!(calls.len(), 3, "calls: {calls:?}");
        assert!(calls.iter().all(|args| args == DEFAULT_PARAMETERS), "calls: {calls:?}");
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("[END] scrcpy has been closed!"), "stdout: {stdout}");
    }

    #[test]
    fn first_success_launches_once() {
        let temp = tempdir().expect("can create temporary directory");
        let settings = write_settings(temp.path(), 15, 5);
        let scrcpy = write_fake_scrcpy(temp.path(), &[], 0);

        let output = run_launcher(&settings, &scrcpy, &[]);

        assert!(output.status.success(), "output: {output:?}");
        assert_eq!(invocations(temp.path()).len(), 1);
    }

    #[test]
    fn exhausted_budget_exits_non_zero() {
        let temp = tempdir().expect("can create temporary directory");
        let settings = write_settings(temp.path(), 1, 0);
        let scrcpy = write_fake_scrcpy(temp.path(), &[], 1);

        let output = run_launcher(&settings, &scrcpy, &[]);

        assert_eq!(output.status.code(), Some(3), "output: {output:?}");
        assert_eq!(invocations(temp.path()).len(), 2);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("[ERROR]"), "stderr: {stderr}");
    }

    #[test]
    fn one_second_interval_shows_countdown() {
        let temp = tempdir().expect("can create temporary directory");
        let settings = write_settings(temp.path(), 1, 1);
        let scrcpy = write_fake_scrcpy(temp.path(), &[1], 0);

        let output = run_launcher(&settings, &scrcpy, &[]);

        assert!(output.status.success(), "output: {output:?}");
        assert_eq!(invocations(temp.path()).len(), 2);
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(
            stdout.contains("[Attempt: 2] [Retries left: 00] [Time left: 01s]"),
            "stdout: {stdout}"
        );
    }
}
