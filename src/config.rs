//! Timer profile configuration and its on-disk JSON persistence.
//!
//! Two independently configured profiles share one config file. The file is
//! loaded once at startup (created with defaults on first run) and rewritten
//! whenever the editor commits a field.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::CONFIG_FILE;
use crate::timer::Phase;

/// Identifies one of the two independently configured timer profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileId {
    One,
    Two,
}

impl ProfileId {
    /// Both profiles, in scan/display order.
    pub const ALL: [ProfileId; 2] = [ProfileId::One, ProfileId::Two];

    /// Slot index into per-profile arrays.
    pub fn index(self) -> usize {
        match self {
            ProfileId::One => 0,
            ProfileId::Two => 1,
        }
    }

    /// The other profile.
    pub fn other(self) -> ProfileId {
        match self {
            ProfileId::One => ProfileId::Two,
            ProfileId::Two => ProfileId::One,
        }
    }

    /// Display name shown in the UI.
    pub fn label(self) -> &'static str {
        match self {
            ProfileId::One => "Timer 1",
            ProfileId::Two => "Timer 2",
        }
    }
}

/// Durations and temperatures for one cook cycle's three phases.
///
/// Durations are whole minutes; a zero-minute phase is legal and is skipped.
/// Values are only ever written through validated editor commits, so both
/// durations and temperatures stay non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerProfile {
    pub phase1_duration: u32,
    pub phase2_duration: u32,
    pub phase3_duration: u32,
    pub phase1_temp: u32,
    pub phase2_temp: u32,
    pub phase3_temp: u32,
}

impl Default for TimerProfile {
    fn default() -> Self {
        Self {
            phase1_duration: 4,
            phase2_duration: 4,
            phase3_duration: 2,
            phase1_temp: 350,
            phase2_temp: 375,
            phase3_temp: 400,
        }
    }
}

impl TimerProfile {
    /// The three phase durations as wall-clock durations.
    pub fn durations(&self) -> [Duration; 3] {
        [
            Duration::from_secs(u64::from(self.phase1_duration) * 60),
            Duration::from_secs(u64::from(self.phase2_duration) * 60),
            Duration::from_secs(u64::from(self.phase3_duration) * 60),
        ]
    }

    /// Configured temperature for a phase. The bracketing states carry no
    /// temperature and report zero.
    pub fn temp_for(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Phase1 => self.phase1_temp,
            Phase::Phase2 => self.phase2_temp,
            Phase::Phase3 => self.phase3_temp,
            Phase::NotStarted | Phase::Completed => 0,
        }
    }
}

/// Application configuration: one profile per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub timer: [TimerProfile; 2],
}

impl Config {
    pub fn profile(&self, id: ProfileId) -> &TimerProfile {
        &self.timer[id.index()]
    }

    pub fn profile_mut(&mut self, id: ProfileId) -> &mut TimerProfile {
        &mut self.timer[id.index()]
    }
}

/// On-disk representation. The six per-profile keys are duplicated with
/// `timer1_`/`timer2_` prefixes under a single "timer" object.
#[derive(Serialize, Deserialize)]
struct ConfigFile {
    timer: TimerTable,
}

#[derive(Serialize, Deserialize)]
struct TimerTable {
    timer1_phase1_duration_minutes: u32,
    timer1_phase2_duration_minutes: u32,
    timer1_phase3_duration_minutes: u32,
    timer1_phase1_temp: u32,
    timer1_phase2_temp: u32,
    timer1_phase3_temp: u32,
    timer2_phase1_duration_minutes: u32,
    timer2_phase2_duration_minutes: u32,
    timer2_phase3_duration_minutes: u32,
    timer2_phase1_temp: u32,
    timer2_phase2_temp: u32,
    timer2_phase3_temp: u32,
}

impl From<Config> for ConfigFile {
    fn from(config: Config) -> Self {
        let [t1, t2] = config.timer;
        ConfigFile {
            timer: TimerTable {
                timer1_phase1_duration_minutes: t1.phase1_duration,
                timer1_phase2_duration_minutes: t1.phase2_duration,
                timer1_phase3_duration_minutes: t1.phase3_duration,
                timer1_phase1_temp: t1.phase1_temp,
                timer1_phase2_temp: t1.phase2_temp,
                timer1_phase3_temp: t1.phase3_temp,
                timer2_phase1_duration_minutes: t2.phase1_duration,
                timer2_phase2_duration_minutes: t2.phase2_duration,
                timer2_phase3_duration_minutes: t2.phase3_duration,
                timer2_phase1_temp: t2.phase1_temp,
                timer2_phase2_temp: t2.phase2_temp,
                timer2_phase3_temp: t2.phase3_temp,
            },
        }
    }
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Self {
        let t = file.timer;
        Config {
            timer: [
                TimerProfile {
                    phase1_duration: t.timer1_phase1_duration_minutes,
                    phase2_duration: t.timer1_phase2_duration_minutes,
                    phase3_duration: t.timer1_phase3_duration_minutes,
                    phase1_temp: t.timer1_phase1_temp,
                    phase2_temp: t.timer1_phase2_temp,
                    phase3_temp: t.timer1_phase3_temp,
                },
                TimerProfile {
                    phase1_duration: t.timer2_phase1_duration_minutes,
                    phase2_duration: t.timer2_phase2_duration_minutes,
                    phase3_duration: t.timer2_phase3_duration_minutes,
                    phase1_temp: t.timer2_phase1_temp,
                    phase2_temp: t.timer2_phase2_temp,
                    phase3_temp: t.timer2_phase3_temp,
                },
            ],
        }
    }
}

/// Handle to the config file on disk.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store backed by an explicit file path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the default per-user location.
    pub fn default_location() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "pitclock")
            .context("could not determine config directory")?;
        Ok(Self::at(dirs.config_dir().join(CONFIG_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the configuration, writing the defaults on first run.
    pub fn load_or_create(&self) -> Result<Config> {
        if !self.path.exists() {
            let config = Config::default();
            self.save(&config)?;
            return Ok(config);
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let file: ConfigFile = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;
        Ok(file.into())
    }

    /// Overwrites the config file with the given configuration.
    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(&ConfigFile::from(*config))?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> ConfigStore {
        let dir = std::env::temp_dir().join(format!("pitclock-config-{}-{}", std::process::id(), name));
        ConfigStore::at(dir.join(CONFIG_FILE))
    }

    #[test]
    fn test_default_profile_values() {
        let profile = TimerProfile::default();
        assert_eq!(profile.phase1_duration, 4);
        assert_eq!(profile.phase2_duration, 4);
        assert_eq!(profile.phase3_duration, 2);
        assert_eq!(profile.phase1_temp, 350);
        assert_eq!(profile.phase2_temp, 375);
        assert_eq!(profile.phase3_temp, 400);
    }

    #[test]
    fn test_profile_accessors() {
        let mut config = Config::default();
        config.profile_mut(ProfileId::Two).phase1_duration = 9;
        assert_eq!(config.profile(ProfileId::Two).phase1_duration, 9);
        assert_eq!(config.profile(ProfileId::One).phase1_duration, 4);
    }

    #[test]
    fn test_profile_id_other() {
        assert_eq!(ProfileId::One.other(), ProfileId::Two);
        assert_eq!(ProfileId::Two.other(), ProfileId::One);
    }

    #[test]
    fn test_wire_keys_are_prefixed() {
        let value = serde_json::to_value(ConfigFile::from(Config::default())).unwrap();
        let table = &value["timer"];
        assert_eq!(table["timer1_phase1_duration_minutes"], 4);
        assert_eq!(table["timer2_phase3_temp"], 400);
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let store = temp_store("create");
        let _ = fs::remove_file(store.path());
        let config = store.load_or_create().unwrap();
        assert_eq!(config, Config::default());
        assert!(store.path().exists());
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = temp_store("roundtrip");
        let mut config = Config::default();
        config.profile_mut(ProfileId::One).phase2_temp = 225;
        config.profile_mut(ProfileId::Two).phase3_duration = 0;
        store.save(&config).unwrap();
        assert_eq!(store.load_or_create().unwrap(), config);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn test_temp_for_bracketing_states() {
        let profile = TimerProfile::default();
        assert_eq!(profile.temp_for(Phase::NotStarted), 0);
        assert_eq!(profile.temp_for(Phase::Completed), 0);
        assert_eq!(profile.temp_for(Phase::Phase2), 375);
    }
}
