use crate::ui::model::{Model, DEFAULT_WIDTH, FIELD_BLOCK_LINES};
use crate::ui::render::styles::{STYLE_CURSOR, STYLE_FIELD_BOX, STYLE_PROMPT};

/// Render the text field as a bordered block of exactly FIELD_BLOCK_LINES
/// lines, with the cursor shown as a reversed cell.
pub fn render_field_block(m: &Model) -> Vec<String> {
    let chars = m.field.chars();
    let cursor = m.field.cursor();

    let before: String = chars[..cursor].iter().collect();
    let at: String = chars
        .get(cursor)
        .map(|c| c.to_string())
        .unwrap_or_else(|| " ".to_string());
    let after: String = if cursor < chars.len() {
        chars[cursor + 1..].iter().collect()
    } else {
        String::new()
    };

    let line = format!(
        "> {}{}{}",
        STYLE_PROMPT.render(&before),
        STYLE_CURSOR.render(&at),
        STYLE_PROMPT.render(&after)
    );

    let box_width = if m.screen_width >= 2 {
        m.screen_width - 2
    } else {
        DEFAULT_WIDTH
    };
    let w_i32: i32 = box_width.try_into().unwrap_or(i32::MAX);
    let block = STYLE_FIELD_BOX.clone().width(w_i32).render(&line);
    let mut out: Vec<String> = block.lines().map(|s| s.to_string()).collect();
    // the block must occupy exactly FIELD_BLOCK_LINES lines
    out.truncate(FIELD_BLOCK_LINES);
    while out.len() < FIELD_BLOCK_LINES {
        out.push(String::new());
    }
    out
}
