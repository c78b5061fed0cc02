use crate::ui::model::{Model, DEFAULT_WIDTH, RESERVED_LINES};
use lipgloss::Style;

// Normalize every line to `total_width` and force exactly `rows` lines.
fn normalize_and_pad(lines: Vec<String>, total_width: usize, rows: usize) -> Vec<String> {
    let line_style = Style::new().width(total_width as i32);
    let mut normalized: Vec<String> = lines.into_iter().map(|l| line_style.render(&l)).collect();
    if normalized.len() > rows {
        normalized.truncate(rows);
    } else {
        while normalized.len() < rows {
            normalized.push(line_style.render(""));
        }
    }
    normalized
}

/// Full frame: field block on top, dropdown overlay below it, padding, and
/// the modeline as the last line.
pub fn render_full(m: &Model) -> String {
    let total_width = if m.screen_width > 0 {
        m.screen_width
    } else {
        DEFAULT_WIDTH
    };
    let main_rows = if m.screen_height > RESERVED_LINES {
        m.screen_height - RESERVED_LINES
    } else {
        1
    };

    let mut lines = m.render_field_block();
    lines.extend(normalize_and_pad(
        m.render_dropdown_lines(),
        total_width,
        main_rows,
    ));
    let modeline_first = crate::ui::render::modeline::render_modeline_padded(m)
        .lines()
        .next()
        .unwrap_or("")
        .to_string();
    lines.push(modeline_first);
    lines.join("\n")
}
