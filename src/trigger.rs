//! Filesystem trigger markers standing in for a physical button.
//!
//! An external process creates a marker file to toggle a timer; each poll
//! cycle consumes at most one marker. Level-triggered: a marker re-created
//! between polls counts as a fresh press, and anything created and deleted
//! within one cycle coalesces into a single trigger.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ProfileId;
use crate::constants::TRIGGER_FILES;

/// Marker path for one profile inside the marker directory (the user's
/// home directory in production).
pub fn marker_path(dir: &Path, profile: ProfileId) -> PathBuf {
    dir.join(TRIGGER_FILES[profile.index()])
}

/// Checks for trigger markers, consuming the first one found in profile
/// order. Filesystem errors mean "no trigger this cycle"; the poll must
/// never stop the loop.
pub fn poll_once(dir: &Path) -> Option<ProfileId> {
    for profile in ProfileId::ALL {
        let marker = marker_path(dir, profile);
        if marker.exists() {
            if let Err(err) = fs::remove_file(&marker) {
                tracing::debug!(marker = %marker.display(), %err, "failed to remove trigger marker");
            }
            return Some(profile);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_marker_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pitclock-trigger-{}-{}", std::process::id(), name));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_no_marker_no_trigger() {
        let dir = temp_marker_dir("none");
        assert_eq!(poll_once(&dir), None);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_marker_is_consumed() {
        let dir = temp_marker_dir("consume");
        fs::write(marker_path(&dir, ProfileId::Two), "").unwrap();
        assert_eq!(poll_once(&dir), Some(ProfileId::Two));
        assert!(!marker_path(&dir, ProfileId::Two).exists());
        assert_eq!(poll_once(&dir), None);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_one_trigger_per_cycle_in_profile_order() {
        let dir = temp_marker_dir("order");
        fs::write(marker_path(&dir, ProfileId::One), "").unwrap();
        fs::write(marker_path(&dir, ProfileId::Two), "").unwrap();
        assert_eq!(poll_once(&dir), Some(ProfileId::One));
        assert_eq!(poll_once(&dir), Some(ProfileId::Two));
        assert_eq!(poll_once(&dir), None);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_directory_is_no_trigger() {
        let dir = std::env::temp_dir().join("pitclock-trigger-does-not-exist");
        assert_eq!(poll_once(&dir), None);
    }
}
