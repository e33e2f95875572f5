//! Keyboard event handling.
//!
//! Translates crossterm events into application key actions and pumps them
//! into the dispatch loop from a dedicated blocking task. Translation is
//! mode-free: digits, `q`, and friends arrive as `Char` and the state
//! machine decides what they mean for the active screen.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc::UnboundedSender;

use crate::app::Msg;
use crate::constants::INPUT_POLL_TIMEOUT;

/// A key press reduced to what the state machine cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Unconditional quit (ctrl+c). A plain `q` is mode-dependent and
    /// arrives as `Char('q')`.
    Quit,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Esc,
    Backspace,
    Char(char),
}

/// Converts a crossterm key event to a key action.
pub(crate) fn key_to_action(key: KeyEvent) -> Option<KeyAction> {
    // Check for Ctrl+C first (quit)
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(KeyAction::Quit);
    }

    match key.code {
        KeyCode::Up => Some(KeyAction::Up),
        KeyCode::Down => Some(KeyAction::Down),
        KeyCode::Left => Some(KeyAction::Left),
        KeyCode::Right => Some(KeyAction::Right),
        KeyCode::Enter => Some(KeyAction::Enter),
        KeyCode::Esc => Some(KeyAction::Esc),
        KeyCode::Backspace => Some(KeyAction::Backspace),
        KeyCode::Char(c) => Some(KeyAction::Char(c)),
        _ => None,
    }
}

/// Reads terminal events until shutdown, forwarding key presses and resizes
/// into the dispatch loop. The poll timeout bounds how long the task takes
/// to observe shutdown.
pub fn spawn_input_pump(tx: UnboundedSender<Msg>, shutdown: Arc<AtomicBool>) {
    tokio::task::spawn_blocking(move || {
        while !shutdown.load(Ordering::Relaxed) {
            match event::poll(INPUT_POLL_TIMEOUT) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        if let Some(action) = key_to_action(key) {
                            if tx.send(Msg::Key(action)).is_err() {
                                break;
                            }
                        }
                    }
                    Ok(Event::Resize(width, height)) => {
                        if tx.send(Msg::Resize(width, height)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(err) => tracing::warn!(%err, "failed to read terminal event"),
                },
                Ok(false) => {}
                Err(err) => tracing::warn!(%err, "failed to poll terminal events"),
            }
        }
    });
}
