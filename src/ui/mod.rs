//! UI rendering module.
//!
//! All terminal rendering lives here, one submodule per screen. Rendering
//! only reads the application state; it never mutates it.

mod clock;
mod colors;
mod config;
mod digits;

use ratatui::Frame;

use crate::app::{App, Mode};

/// Main draw function - dispatches to the active screen's renderer.
pub fn draw(frame: &mut Frame, app: &App) {
    match app.mode {
        Mode::Clock => clock::draw(frame, app),
        Mode::Config => config::draw(frame, app),
    }
}
