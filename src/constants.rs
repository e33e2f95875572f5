//! Application-wide constants.
//!
//! Centralizes intervals and well-known file names for maintainability.

use std::time::Duration;

/// Terminal event polling timeout - balances responsiveness with CPU usage.
pub const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Interval between timer ticks. One second across the whole app; phase
/// boundaries and the status file make no sub-second promises.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Config file name inside the per-user config directory.
pub const CONFIG_FILE: &str = "config.json";

/// Log file name inside the per-user config directory.
pub const LOG_FILE: &str = "pitclock.log";

/// Status record written to the home directory for the external status bar.
pub const STATUS_FILE: &str = ".pitclock_status.json";

/// Trigger marker names in the home directory, one per timer profile.
/// Creating one toggles the matching timer; the file is deleted on consumption.
pub const TRIGGER_FILES: [&str; 2] = [".pitclock_toggle1", ".pitclock_toggle2"];
