/// Settings document written on first run.
///
/// Every recognized option appears with its default and an inline comment so
/// the operator can edit the file without further documentation. Keep the
/// values in sync with the `Default` impls of the section types.
pub const DEFAULT_SETTINGS_DOCUMENT: &str = r#"[auto-scrcpy-script]
max-retries-on-error = 15  # relaunch attempts after a failed start [0, 1, 2, 3, *] (default: 15)
time-between-retries = 5  # seconds to wait between relaunch attempts [0, 1, 2, 3, *] (default: 5)

[device]
stay-awake = true  # keep the device awake while mirroring [true/false] (default: true)
turn-screen-off-on-start = false  # turn the device screen off on start [true/false] (default: false)
show-touches = false  # show physical touches [true/false] (default: false)

[video]
enabled = true  # false to disable video mirroring (default: true)
codec = "h264"  # [h264 = lower latency, h265 = may provide better quality, av1 = encoders are rare on current Android devices] (default: h264)
bit-rate = "8m"  # video bit rate, m suffix for megabits (default: 8m)
max-fps = "60"  # max video fps [5, 10, 15, 20, 25, 30, 60, *] (default: 60)
max-size = "1280"  # max video size [1280 = 1280x720, 1920 = 1920x1080, 2560 = 2560x1440, 3840 = 3840x2160, *] (default: 1280)

[audio]
enabled = true  # false to disable audio forwarding (default: true)
codec = "opus"  # audio codec [opus, aac, raw] (default: opus)
bit-rate = "128k"  # audio bit rate, k suffix for kilobits (default: 128k)
"#;
