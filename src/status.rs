//! Externally published timer status.
//!
//! Every tick rewrites one small JSON record for consumption by an external
//! status-bar process. This process is the only writer.

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::timer::{format_elapsed, Phase, TimerState};

/// CSS-style class consumed by the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusClass {
    Green,
    Yellow,
    Red,
    White,
}

/// One status-file record: `{"text": "M:SS", "class": "green"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub text: String,
    pub class: StatusClass,
}

impl StatusRecord {
    /// Builds the record for the current timer state. Idle and completed
    /// timers publish the `0:00`/white placeholder.
    pub fn for_timer(timer: &TimerState) -> Self {
        if timer.is_idle_display() {
            return Self {
                text: "0:00".to_string(),
                class: StatusClass::White,
            };
        }
        let class = match timer.current_phase {
            Phase::Phase1 => StatusClass::Green,
            Phase::Phase2 => StatusClass::Yellow,
            Phase::Phase3 => StatusClass::Red,
            Phase::NotStarted | Phase::Completed => StatusClass::White,
        };
        Self {
            text: format_elapsed(timer.elapsed),
            class,
        }
    }
}

/// Overwrites the status file with one serialized record.
pub fn publish(path: &Path, record: &StatusRecord) -> Result<()> {
    let data = serde_json::to_string(record)?;
    fs::write(path, data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProfileId;
    use std::time::{Duration, Instant};

    #[test]
    fn test_idle_record_is_white_zero() {
        let timer = TimerState::new(ProfileId::One);
        let record = StatusRecord::for_timer(&timer);
        assert_eq!(record.text, "0:00");
        assert_eq!(record.class, StatusClass::White);
    }

    #[test]
    fn test_running_record_carries_phase_class() {
        let mut timer = TimerState::new(ProfileId::One);
        timer.start(ProfileId::One, Instant::now());
        timer.elapsed = Duration::from_secs(75);
        timer.current_phase = Phase::Phase2;
        let record = StatusRecord::for_timer(&timer);
        assert_eq!(record.text, "1:15");
        assert_eq!(record.class, StatusClass::Yellow);
    }

    #[test]
    fn test_completed_record_resets_to_placeholder() {
        let mut timer = TimerState::new(ProfileId::One);
        timer.current_phase = Phase::Completed;
        timer.elapsed = Duration::from_secs(600);
        let record = StatusRecord::for_timer(&timer);
        assert_eq!(record.text, "0:00");
        assert_eq!(record.class, StatusClass::White);
    }

    #[test]
    fn test_wire_format() {
        let record = StatusRecord {
            text: "2:05".to_string(),
            class: StatusClass::Red,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"text":"2:05","class":"red"}"#);
    }

    #[test]
    fn test_publish_overwrites_file() {
        let path = std::env::temp_dir().join(format!("pitclock-status-{}.json", std::process::id()));
        let timer = TimerState::new(ProfileId::One);
        publish(&path, &StatusRecord::for_timer(&timer)).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, r#"{"text":"0:00","class":"white"}"#);
        let _ = fs::remove_file(&path);
    }
}
