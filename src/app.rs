//! Application state and the message-dispatch state machine.
//!
//! Every external event arrives as one `Msg`. `App::update` consumes the
//! prior state and returns the next state plus the commands to run; all side
//! effects hide behind `Cmd` and are interpreted by the runner in `main`, so
//! the transition logic stays unit-testable without touching real I/O.

use std::time::Instant;

use crate::config::{Config, ProfileId};
use crate::editor::{field_value, set_field_value, EditorState};
use crate::event::KeyAction;
use crate::status::StatusRecord;
use crate::timer::{Phase, TimerState};

/// Messages consumed by the dispatch loop, one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// Periodic timer tick carrying the scheduler's reading of "now".
    Tick(Instant),
    /// A translated key press.
    Key(KeyAction),
    /// Terminal resize. The screen is redrawn after every message, so this
    /// carries no state.
    Resize(u16, u16),
    /// A consumed trigger marker for the given profile.
    Trigger(ProfileId),
    /// The alert task finished, successfully or not.
    AlertDone,
}

/// Side effects scheduled by a state transition, interpreted outside the
/// pure update function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Arm the next tick.
    ScheduleTick,
    /// Arm the next trigger-marker poll.
    SchedulePoll,
    /// Sound and notify for a newly entered phase.
    PlayAlert { phase: Phase, temp: u32 },
    /// Rewrite the external status file.
    PublishStatus(StatusRecord),
    /// Persist the configuration.
    SaveConfig(Config),
    /// Leave the dispatch loop.
    Quit,
}

/// Which screen owns key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Clock,
    Config,
}

/// The whole application model, threaded through the dispatch loop.
#[derive(Debug, Clone)]
pub struct App {
    pub config: Config,
    pub timer: TimerState,
    pub editor: EditorState,
    pub mode: Mode,
    /// Profile that enter/space (and an untagged start) will launch.
    pub default_profile: ProfileId,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            timer: TimerState::new(ProfileId::One),
            editor: EditorState::new(),
            mode: Mode::Clock,
            default_profile: ProfileId::One,
        }
    }

    /// Commands that arm the recurring background work at startup.
    pub fn init_cmds() -> Vec<Cmd> {
        vec![Cmd::ScheduleTick, Cmd::SchedulePoll]
    }

    /// Applies one message, returning the next state and its effects.
    pub fn update(mut self, msg: Msg) -> (Self, Vec<Cmd>) {
        let cmds = match msg {
            Msg::Tick(now) => self.handle_tick(now),
            Msg::Key(key) => match self.mode {
                Mode::Clock => self.handle_clock_key(key),
                Mode::Config => self.handle_config_key(key),
            },
            Msg::Trigger(profile) => self.handle_trigger(profile),
            Msg::Resize(..) | Msg::AlertDone => Vec::new(),
        };
        (self, cmds)
    }

    /// One tick: advance the timer, republish the status record, and re-arm
    /// the tick and trigger-poll tasks. Fires at most one alert per newly
    /// entered phase.
    fn handle_tick(&mut self, now: Instant) -> Vec<Cmd> {
        let profile = *self.config.profile(self.timer.active_profile);
        let entered = self.timer.tick(now, &profile);

        let mut cmds = vec![Cmd::PublishStatus(StatusRecord::for_timer(&self.timer))];
        if let Some(phase) = entered {
            cmds.push(Cmd::PlayAlert {
                phase,
                temp: profile.temp_for(phase),
            });
        }
        cmds.push(Cmd::ScheduleTick);
        cmds.push(Cmd::SchedulePoll);
        cmds
    }

    /// An external button press toggles the tagged profile's timer.
    fn handle_trigger(&mut self, profile: ProfileId) -> Vec<Cmd> {
        self.toggle_timer(profile);
        vec![Cmd::SchedulePoll]
    }

    fn handle_clock_key(&mut self, key: KeyAction) -> Vec<Cmd> {
        match key {
            KeyAction::Quit | KeyAction::Char('q') => return vec![Cmd::Quit],
            KeyAction::Char('?') => {
                if !self.timer.running {
                    self.mode = Mode::Config;
                    self.editor.reset();
                }
            }
            KeyAction::Enter | KeyAction::Char(' ') => self.toggle_timer(self.default_profile),
            KeyAction::Char('1') => self.start_if_idle(ProfileId::One),
            KeyAction::Char('2') => self.start_if_idle(ProfileId::Two),
            KeyAction::Char('r') => {
                if self.timer.running {
                    self.timer.active_profile = self.timer.active_profile.other();
                }
            }
            KeyAction::Char('d') => {
                if !self.timer.running {
                    self.default_profile = self.default_profile.other();
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_config_key(&mut self, key: KeyAction) -> Vec<Cmd> {
        if self.editor.editing {
            self.handle_edit_key(key)
        } else {
            self.handle_browse_key(key)
        }
    }

    fn handle_browse_key(&mut self, key: KeyAction) -> Vec<Cmd> {
        match key {
            KeyAction::Quit => return vec![Cmd::Quit],
            KeyAction::Esc | KeyAction::Char('q') | KeyAction::Char('?') => {
                self.mode = Mode::Clock;
            }
            KeyAction::Up | KeyAction::Char('k') => self.editor.move_up(),
            KeyAction::Down | KeyAction::Char('j') => self.editor.move_down(),
            KeyAction::Left
            | KeyAction::Right
            | KeyAction::Char('h')
            | KeyAction::Char('l') => self.editor.flip_page(),
            KeyAction::Enter | KeyAction::Char(' ') => {
                let current = field_value(
                    self.config.profile(self.editor.page),
                    self.editor.selected_field(),
                );
                self.editor.begin_edit(current);
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_edit_key(&mut self, key: KeyAction) -> Vec<Cmd> {
        match key {
            KeyAction::Quit => vec![Cmd::Quit],
            KeyAction::Enter | KeyAction::Esc => self.commit_edit(),
            KeyAction::Backspace => {
                self.editor.backspace();
                Vec::new()
            }
            // Navigating away commits first, then moves.
            KeyAction::Up | KeyAction::Char('k') => {
                let cmds = self.commit_edit();
                self.editor.move_up();
                cmds
            }
            KeyAction::Down | KeyAction::Char('j') => {
                let cmds = self.commit_edit();
                self.editor.move_down();
                cmds
            }
            KeyAction::Char(c) => {
                self.editor.push_char(c);
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    /// Commits the pending edit into the selected field and persists the
    /// whole config. A rolled-back edit still persists (no-op write).
    fn commit_edit(&mut self) -> Vec<Cmd> {
        let value = self.editor.finish_edit();
        let field = self.editor.selected_field();
        set_field_value(self.config.profile_mut(self.editor.page), field, value);
        vec![Cmd::SaveConfig(self.config)]
    }

    fn toggle_timer(&mut self, profile: ProfileId) {
        if self.timer.running {
            self.timer.stop();
        } else {
            self.timer.start(profile, Instant::now());
        }
    }

    fn start_if_idle(&mut self, profile: ProfileId) {
        if !self.timer.running {
            self.timer.start(profile, Instant::now());
        }
    }
}
