//! Best-effort phase-transition alerts.
//!
//! A system sound plus a desktop notification, shelled out to host OS
//! utilities. Every call is fire-and-forget: failures are swallowed so a
//! missing utility can never stall or corrupt the timer.

use std::process::Stdio;

use tokio::process::Command;

use crate::timer::Phase;

/// Plays the transition sound and posts a notification for a newly entered
/// phase. `temp` is the phase's configured temperature; completion carries
/// no temperature.
pub async fn play_alert(phase: Phase, temp: u32) {
    play_beep().await;
    send_notification(phase, temp).await;
}

async fn send_notification(phase: Phase, temp: u32) {
    let body = if phase == Phase::Completed {
        "All phases finished!".to_string()
    } else {
        format!("{temp}°")
    };
    notify(phase.title(), &body).await;
}

#[cfg(target_os = "linux")]
async fn play_beep() {
    // paplay ships with PulseAudio; fall back to a raw speaker-test tone.
    let played = run_silent(
        "paplay",
        &["/usr/share/sounds/freedesktop/stereo/complete.oga"],
    )
    .await;
    if !played {
        run_silent("speaker-test", &["-t", "sine", "-f", "1000", "-l", "1"]).await;
    }
}

#[cfg(target_os = "macos")]
async fn play_beep() {
    run_silent("afplay", &["/System/Library/Sounds/Glass.aiff"]).await;
}

#[cfg(target_os = "windows")]
async fn play_beep() {
    run_silent("rundll32", &["user32.dll,MessageBeep"]).await;
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
async fn play_beep() {}

#[cfg(target_os = "linux")]
async fn notify(title: &str, body: &str) {
    run_silent("notify-send", &["-u", "normal", "-t", "5000", title, body]).await;
}

#[cfg(target_os = "macos")]
async fn notify(title: &str, body: &str) {
    let script = format!(r#"display notification "{body}" with title "{title}""#);
    run_silent("osascript", &["-e", &script]).await;
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
async fn notify(_title: &str, _body: &str) {}

/// Runs a command with all stdio discarded, reporting success only.
#[allow(dead_code)] // unused on platforms where both alert paths are no-ops
async fn run_silent(program: &str, args: &[&str]) -> bool {
    match Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
    {
        Ok(status) => status.success(),
        Err(err) => {
            tracing::debug!(program, %err, "alert command failed");
            false
        }
    }
}
