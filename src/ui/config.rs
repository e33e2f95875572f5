//! Config editor screen.

use ratatui::{
    layout::Alignment,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::editor::{field_value, Field};

use super::colors;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let editor = &app.editor;
    let profile = app.config.profile(editor.page);

    // Title, page indicator, spacer, fields, spacer, hints.
    let content_height = Field::ALL.len() + 5;
    let top_padding = (area.height as usize).saturating_sub(content_height) / 2;

    let mut lines: Vec<Line> = Vec::with_capacity(top_padding + content_height);
    lines.extend(std::iter::repeat_with(Line::default).take(top_padding));

    lines.push(Line::from(Span::styled(
        "Configuration",
        Style::default().fg(colors::YELLOW).bold(),
    )));
    lines.push(Line::from(Span::styled(
        format!("◀ {} ▶", editor.page.label()),
        Style::default().fg(colors::WHITE),
    )));
    lines.push(Line::default());

    for (i, field) in Field::ALL.iter().enumerate() {
        lines.push(field_line(app, i, *field, profile));
    }

    lines.push(Line::default());
    let hint = if editor.editing {
        "Type value | Enter: Save | ↑/↓: Save and move"
    } else {
        "↑/↓: Navigate | ◀/▶: Switch timer | Enter: Edit | Esc/q/?: Exit"
    };
    lines.push(Line::from(Span::styled(
        hint,
        Style::default().fg(colors::MUTED),
    )));

    let screen = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(screen, area);
}

fn field_line(
    app: &App,
    index: usize,
    field: Field,
    profile: &crate::config::TimerProfile,
) -> Line<'static> {
    let editor = &app.editor;
    let selected = index == editor.selected;

    if selected && editor.editing {
        // Show the live buffer with a placeholder cursor while empty.
        let shown = if editor.input_buffer.is_empty() {
            "_"
        } else {
            editor.input_buffer.as_str()
        };
        let text = format!("▶ {}: {}{}", field.label(), shown, field.unit());
        return Line::from(Span::styled(
            text,
            Style::default().fg(colors::CYAN).bold(),
        ));
    }

    let text = format!(
        "{} {}: {}{}",
        if selected { "▶" } else { " " },
        field.label(),
        field_value(profile, field),
        field.unit()
    );
    let style = if selected {
        Style::default().fg(colors::GREEN).bold()
    } else {
        Style::default().fg(colors::WHITE)
    };
    Line::from(Span::styled(text, style))
}
