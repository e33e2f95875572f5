//! Large block glyphs for the wall clock.

/// Glyph height in terminal rows.
pub const GLYPH_HEIGHT: usize = 5;

/// The five rows of one clock glyph. Unknown characters render as a blank
/// cell.
fn glyph(c: char) -> [&'static str; GLYPH_HEIGHT] {
    match c {
        '0' => [" ██████ ", " ██  ██ ", " ██  ██ ", " ██  ██ ", " ██████ "],
        '1' => [" ████   ", "   ██   ", "   ██   ", "   ██   ", " ██████ "],
        '2' => [" ██████ ", "     ██ ", " ██████ ", " ██     ", " ██████ "],
        '3' => [" ██████ ", "     ██ ", " ██████ ", "     ██ ", " ██████ "],
        '4' => [" ██   ██ ", " ██   ██ ", " ███████ ", "      ██ ", "      ██ "],
        '5' => [" ███████ ", " ██      ", " ███████ ", "      ██ ", " ███████ "],
        '6' => [" ███████ ", " ██      ", " ███████ ", " ██   ██ ", " ███████ "],
        '7' => [" ███████ ", "      ██ ", "      ██ ", "      ██ ", "      ██ "],
        '8' => [" ███████ ", " ██   ██ ", " ███████ ", " ██   ██ ", " ███████ "],
        '9' => [" ███████ ", " ██   ██ ", " ███████ ", "      ██ ", " ███████ "],
        ':' => ["      ", "  ██  ", "      ", "  ██  ", "      "],
        _ => ["     ", "     ", "     ", "     ", "     "],
    }
}

/// Renders text as large glyph rows, one string per terminal row.
pub fn render_large(text: &str) -> [String; GLYPH_HEIGHT] {
    let mut rows: [String; GLYPH_HEIGHT] = Default::default();
    for c in text.chars() {
        for (row, line) in rows.iter_mut().zip(glyph(c)) {
            row.push_str(line);
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_have_equal_width() {
        let rows = render_large("12:45");
        let width = rows[0].chars().count();
        for row in &rows {
            assert_eq!(row.chars().count(), width);
        }
    }

    #[test]
    fn test_unknown_character_renders_blank() {
        let rows = render_large("x");
        for row in &rows {
            assert!(row.chars().all(|c| c == ' '));
        }
    }
}
