use crate::rank::Suggestion;
use crate::ui::model::{DropRow, Dropdown, Model};
use crate::ui::render::styles::{
    render_swatch, STYLE_COUNT, STYLE_DROPDOWN_BOX, STYLE_HEADER, STYLE_HIGHLIGHT, STYLE_ITEM,
    STYLE_NO_RESULTS,
};

fn header_line(name: &str, count: u64) -> String {
    // headers are uppercased for display only; lookups stay lowercase
    let mut text = name.to_uppercase();
    if count > 0 {
        text.push_str(&format!(" ({count})"));
    }
    STYLE_HEADER.render(&text)
}

fn item_line(s: &Suggestion, is_highlighted: bool) -> String {
    let label_style = if is_highlighted {
        &*STYLE_HIGHLIGHT
    } else {
        &*STYLE_ITEM
    };
    let mut pieces: Vec<String> = Vec::new();
    if let Suggestion::Color { text, .. } = s {
        if let Some(swatch) = render_swatch(text) {
            pieces.push(swatch);
            pieces.push(" ".to_string());
        }
    }
    pieces.push(label_style.render(s.text()));
    if s.count() > 0 {
        pieces.push(STYLE_COUNT.render(&format!("  {}", s.count())));
    }
    pieces.join("")
}

/// Render the dropdown overlay as indented, boxed lines, or nothing when
/// closed. Only the scroll window of rows is shown.
pub fn render_dropdown_lines(m: &Model) -> Vec<String> {
    let rows = m.dropdown_rows();
    if rows.is_empty() {
        return Vec::new();
    }
    let (items, highlighted): (&[Suggestion], Option<usize>) = match &m.dropdown {
        Dropdown::Open {
            items, highlighted, ..
        } => (items.as_slice(), Some(*highlighted)),
        _ => (&[], None),
    };
    let scroll = match &m.dropdown {
        Dropdown::Open { scroll, .. } => *scroll,
        _ => 0,
    };

    let vis = m.visible_rows();
    let end = (scroll + vis).min(rows.len());
    let mut body: Vec<String> = Vec::with_capacity(end.saturating_sub(scroll));
    for row in &rows[scroll..end] {
        let line = match row {
            DropRow::Header { name, count } => header_line(name, *count),
            DropRow::Item(i) => match items.get(*i) {
                Some(s) => item_line(s, highlighted == Some(*i)),
                None => continue,
            },
            DropRow::NoResults => STYLE_NO_RESULTS.render("No matching options found"),
        };
        body.push(line);
    }

    let boxed = STYLE_DROPDOWN_BOX.render(&body.join("\n"));
    let indent = " ".repeat(m.anchor_col());
    boxed.lines().map(|l| format!("{indent}{l}")).collect()
}
