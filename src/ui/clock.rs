//! Clock screen: date, large wall clock, and the cook-timer line.

use chrono::Local;
use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::timer::{format_elapsed, Phase};

use super::colors;
use super::digits;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let now = Local::now();
    let clock_rows = digits::render_large(&now.format("%H:%M:%S").to_string());

    // Date, spacer, clock, spacer, timer line, spacer, hints.
    let content_height = digits::GLYPH_HEIGHT + 6;
    let top_padding = (area.height as usize).saturating_sub(content_height) / 2;

    let mut lines: Vec<Line> = Vec::with_capacity(top_padding + content_height);
    lines.extend(std::iter::repeat_with(Line::default).take(top_padding));

    lines.push(Line::from(Span::styled(
        now.format("%Y-%m-%d").to_string(),
        Style::default().fg(colors::YELLOW),
    )));
    lines.push(Line::default());
    for row in clock_rows {
        lines.push(Line::from(Span::styled(
            row,
            Style::default().fg(colors::GREEN),
        )));
    }
    lines.push(Line::default());
    lines.push(timer_line(app));
    lines.push(Line::default());
    lines.push(hint_line(app));

    let screen = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(screen, area);
}

/// The cook-timer line under the clock, colored by phase.
fn timer_line(app: &App) -> Line<'static> {
    let timer = &app.timer;

    if !timer.running && timer.current_phase == Phase::NotStarted {
        let text = format!(
            "Press Enter or Space to start {}, '?' for config",
            app.default_profile.label()
        );
        return Line::from(Span::styled(text, Style::default().fg(colors::WHITE)));
    }

    if timer.current_phase == Phase::Completed {
        return Line::from(Span::styled(
            "Timer completed! Press Enter or Space to restart",
            Style::default().fg(colors::WHITE),
        ));
    }

    let profile = app.config.profile(timer.active_profile);
    let text = format!(
        "{}: {}  Temp: {}°",
        timer.active_profile.label(),
        format_elapsed(timer.elapsed),
        profile.temp_for(timer.current_phase)
    );
    Line::from(Span::styled(
        text,
        Style::default().fg(colors::phase_color(timer.current_phase)),
    ))
}

/// Muted key hints for the clock screen.
fn hint_line(app: &App) -> Line<'static> {
    let text = if app.timer.running {
        "Enter/Space: stop | r: swap profile | q: quit".to_string()
    } else {
        format!(
            "1/2: start timer | d: default ({}) | q: quit",
            app.default_profile.label()
        )
    };
    Line::from(Span::styled(text, Style::default().fg(colors::MUTED)))
}
