//! Color definitions for the UI.

use ratatui::style::Color;

use crate::timer::Phase;

/// Wall clock digits and Phase 1.
pub const GREEN: Color = Color::LightGreen;
/// Date line and Phase 2.
pub const YELLOW: Color = Color::LightYellow;
/// Phase 3.
pub const RED: Color = Color::LightRed;
/// Idle text and unselected fields.
pub const WHITE: Color = Color::White;
/// Field being edited.
pub const CYAN: Color = Color::LightCyan;
/// Key hints.
pub const MUTED: Color = Color::DarkGray;

/// Accent color for a timer phase.
pub fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Phase1 => GREEN,
        Phase::Phase2 => YELLOW,
        Phase::Phase3 => RED,
        Phase::NotStarted | Phase::Completed => WHITE,
    }
}
