//! Phase derivation and the running-timer state machine.
//!
//! `derive_phase` is the single source of truth for which phase an elapsed
//! time falls into; `TimerState` wraps it with start/stop bookkeeping and
//! transition detection for at-most-once alerting.

use std::time::{Duration, Instant};

use crate::config::{ProfileId, TimerProfile};

/// One of the ordered cook stages plus the bracketing idle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Phase1,
    Phase2,
    Phase3,
    Completed,
}

impl Phase {
    /// Human-readable name used in notifications.
    pub fn title(self) -> &'static str {
        match self {
            Phase::NotStarted => "Not started",
            Phase::Phase1 => "Phase 1",
            Phase::Phase2 => "Phase 2",
            Phase::Phase3 => "Phase 3",
            Phase::Completed => "Timer Complete",
        }
    }
}

/// Derives the phase for an elapsed time against three phase durations.
///
/// Lower bounds are closed: an elapsed time exactly at a cumulative
/// threshold belongs to the next phase, so zero-length phases are skipped.
/// Total over all non-negative inputs.
pub fn derive_phase(elapsed: Duration, d1: Duration, d2: Duration, d3: Duration) -> Phase {
    if elapsed >= d1 + d2 + d3 {
        Phase::Completed
    } else if elapsed >= d1 + d2 {
        Phase::Phase3
    } else if elapsed >= d1 {
        Phase::Phase2
    } else {
        Phase::Phase1
    }
}

/// Formats an elapsed duration as `M:SS`, minutes unpadded.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Live timer state.
///
/// `current_phase` is always re-derived from `elapsed` and the active
/// profile's durations; only stop/reset forces it back to `NotStarted`.
/// `previous_phase` exists solely to detect transitions for alerting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    pub running: bool,
    pub started_at: Option<Instant>,
    pub elapsed: Duration,
    pub active_profile: ProfileId,
    pub current_phase: Phase,
    pub previous_phase: Phase,
}

impl TimerState {
    pub fn new(active_profile: ProfileId) -> Self {
        Self {
            running: false,
            started_at: None,
            elapsed: Duration::ZERO,
            active_profile,
            current_phase: Phase::NotStarted,
            previous_phase: Phase::NotStarted,
        }
    }

    /// Starts a fresh cook cycle on the given profile.
    pub fn start(&mut self, profile: ProfileId, now: Instant) {
        self.running = true;
        self.started_at = Some(now);
        self.elapsed = Duration::ZERO;
        self.active_profile = profile;
        self.current_phase = Phase::Phase1;
        self.previous_phase = Phase::NotStarted;
    }

    /// Stops and resets to the idle state. Idempotent.
    pub fn stop(&mut self) {
        self.running = false;
        self.started_at = None;
        self.elapsed = Duration::ZERO;
        self.current_phase = Phase::NotStarted;
        self.previous_phase = Phase::NotStarted;
    }

    /// Advances the timer to `now` against the given profile's durations.
    ///
    /// Returns the phase to alert for when this tick entered a new phase.
    /// Reaching `Completed` auto-stops the timer but keeps the completed
    /// display state until the next start. A host clock stepped backwards
    /// saturates `elapsed` at zero; the transient decrease is accepted.
    pub fn tick(&mut self, now: Instant, profile: &TimerProfile) -> Option<Phase> {
        if !self.running {
            return None;
        }
        let started_at = self.started_at?;
        self.elapsed = now.saturating_duration_since(started_at);

        let [d1, d2, d3] = profile.durations();
        self.current_phase = derive_phase(self.elapsed, d1, d2, d3);
        if self.current_phase == Phase::Completed {
            self.running = false;
            self.started_at = None;
        }

        let entered_new_phase = self.current_phase != self.previous_phase
            && self.current_phase != Phase::NotStarted;
        self.previous_phase = self.current_phase;
        entered_new_phase.then_some(self.current_phase)
    }

    /// True when the outside world should see the idle placeholder
    /// (`0:00`/white) instead of a running timer.
    pub fn is_idle_display(&self) -> bool {
        (!self.running && self.current_phase == Phase::NotStarted)
            || self.current_phase == Phase::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: Duration = Duration::from_secs(60);

    fn minutes(n: u64) -> Duration {
        Duration::from_secs(n * 60)
    }

    fn profile(d1: u32, d2: u32, d3: u32) -> TimerProfile {
        TimerProfile {
            phase1_duration: d1,
            phase2_duration: d2,
            phase3_duration: d3,
            ..TimerProfile::default()
        }
    }

    #[test]
    fn test_derive_phase_ordering() {
        assert_eq!(derive_phase(Duration::ZERO, MIN, MIN, MIN), Phase::Phase1);
        assert_eq!(derive_phase(minutes(1), MIN, MIN, MIN), Phase::Phase2);
        assert_eq!(derive_phase(minutes(2), MIN, MIN, MIN), Phase::Phase3);
        assert_eq!(derive_phase(minutes(3), MIN, MIN, MIN), Phase::Completed);
        assert_eq!(derive_phase(minutes(30), MIN, MIN, MIN), Phase::Completed);
    }

    #[test]
    fn test_derive_phase_closed_lower_bound() {
        // Exactly at a cumulative threshold belongs to the next phase.
        assert_eq!(derive_phase(MIN, MIN, MIN, MIN), Phase::Phase2);
        assert_eq!(
            derive_phase(minutes(59), minutes(59), MIN, MIN),
            Phase::Phase2
        );
    }

    #[test]
    fn test_derive_phase_zero_durations_skip() {
        let zero = Duration::ZERO;
        assert_eq!(derive_phase(zero, zero, zero, zero), Phase::Completed);
        assert_eq!(derive_phase(zero, zero, MIN, MIN), Phase::Phase2);
        assert_eq!(derive_phase(zero, MIN, zero, MIN), Phase::Phase1);
        assert_eq!(derive_phase(MIN, MIN, zero, MIN), Phase::Phase3);
    }

    #[test]
    fn test_derive_phase_monotonic_in_elapsed() {
        let order = |p: Phase| match p {
            Phase::NotStarted => 0,
            Phase::Phase1 => 1,
            Phase::Phase2 => 2,
            Phase::Phase3 => 3,
            Phase::Completed => 4,
        };
        let mut last = 0;
        for secs in 0..600 {
            let phase = derive_phase(Duration::from_secs(secs), MIN, minutes(2), MIN);
            assert!(order(phase) >= last);
            last = order(phase);
        }
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::ZERO), "0:00");
        assert_eq!(format_elapsed(Duration::from_secs(59)), "0:59");
        assert_eq!(format_elapsed(Duration::from_secs(60)), "1:00");
        assert_eq!(format_elapsed(Duration::from_secs(754)), "12:34");
    }

    #[test]
    fn test_start_resets_state() {
        let mut timer = TimerState::new(ProfileId::One);
        let now = Instant::now();
        timer.start(ProfileId::Two, now);
        assert!(timer.running);
        assert_eq!(timer.started_at, Some(now));
        assert_eq!(timer.active_profile, ProfileId::Two);
        assert_eq!(timer.current_phase, Phase::Phase1);
        assert_eq!(timer.previous_phase, Phase::NotStarted);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut timer = TimerState::new(ProfileId::One);
        timer.start(ProfileId::One, Instant::now());
        timer.stop();
        let stopped = timer;
        timer.stop();
        assert_eq!(timer, stopped);
        assert_eq!(timer.current_phase, Phase::NotStarted);
        assert!(!timer.running);
    }

    #[test]
    fn test_tick_does_nothing_while_idle() {
        let mut timer = TimerState::new(ProfileId::One);
        assert_eq!(timer.tick(Instant::now(), &profile(1, 1, 1)), None);
        assert_eq!(timer.current_phase, Phase::NotStarted);
    }

    #[test]
    fn test_first_tick_alerts_phase1_entry() {
        let mut timer = TimerState::new(ProfileId::One);
        let start = Instant::now();
        timer.start(ProfileId::One, start);
        let alert = timer.tick(start + Duration::from_secs(1), &profile(1, 1, 1));
        assert_eq!(alert, Some(Phase::Phase1));
    }

    #[test]
    fn test_tick_alerts_once_per_phase_entry() {
        let p = profile(1, 1, 1);
        let mut timer = TimerState::new(ProfileId::One);
        let start = Instant::now();
        timer.start(ProfileId::One, start);

        timer.tick(start + Duration::from_secs(1), &p);
        // Still Phase1: no second alert.
        assert_eq!(timer.tick(start + Duration::from_secs(59), &p), None);
        assert_eq!(timer.current_phase, Phase::Phase1);

        assert_eq!(timer.tick(start + minutes(1), &p), Some(Phase::Phase2));
        assert_eq!(timer.tick(start + Duration::from_secs(61), &p), None);
    }

    #[test]
    fn test_tick_crossing_two_boundaries_alerts_newest_phase_only() {
        let p = profile(1, 1, 1);
        let mut timer = TimerState::new(ProfileId::One);
        let start = Instant::now();
        timer.start(ProfileId::One, start);
        timer.tick(start + Duration::from_secs(1), &p);

        // One slow tick jumps straight from Phase1 into Phase3.
        assert_eq!(timer.tick(start + minutes(2), &p), Some(Phase::Phase3));
        assert_eq!(timer.previous_phase, Phase::Phase3);
    }

    #[test]
    fn test_completion_auto_stops_but_keeps_display_state() {
        let p = profile(1, 1, 1);
        let mut timer = TimerState::new(ProfileId::One);
        let start = Instant::now();
        timer.start(ProfileId::One, start);

        assert_eq!(timer.tick(start + minutes(3), &p), Some(Phase::Completed));
        assert!(!timer.running);
        assert_eq!(timer.current_phase, Phase::Completed);
        assert!(timer.is_idle_display());
        // Further ticks are inert until the next start.
        assert_eq!(timer.tick(start + minutes(4), &p), None);
    }

    #[test]
    fn test_zero_total_duration_completes_on_first_tick() {
        let p = profile(0, 0, 0);
        let mut timer = TimerState::new(ProfileId::One);
        let start = Instant::now();
        timer.start(ProfileId::One, start);
        assert_eq!(timer.tick(start + Duration::from_secs(1), &p), Some(Phase::Completed));
        assert!(!timer.running);
    }
}
