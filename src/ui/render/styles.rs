use lipgloss::{rounded_border, Color, Style};
use once_cell::sync::Lazy;

// Styles kept local to render module. These are the whole styling contract
// with the terminal: highlight, category header, no-results placeholder,
// color swatch, and count badge.
pub static STYLE_PROMPT: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from_rgb(0, 238, 238))
        .bold(true)
});
pub static STYLE_CURSOR: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .background(Color::from_rgb(200, 200, 200))
        .foreground(Color::from_rgb(0, 0, 0))
});
pub static STYLE_FIELD_BOX: Lazy<Style> =
    Lazy::new(|| Style::new().border(rounded_border()).padding(0, 1, 0, 1));
pub static STYLE_DROPDOWN_BOX: Lazy<Style> =
    Lazy::new(|| Style::new().border(rounded_border()));
pub static STYLE_HEADER: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from_rgb(160, 160, 160))
        .bold(true)
});
pub static STYLE_HIGHLIGHT: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .background(Color::from_rgb(0, 95, 215))
        .foreground(Color::from_rgb(255, 255, 255))
});
pub static STYLE_ITEM: Lazy<Style> =
    Lazy::new(|| Style::new().foreground(Color::from_rgb(200, 200, 200)));
pub static STYLE_COUNT: Lazy<Style> = Lazy::new(|| Style::new().faint(true));
pub static STYLE_NO_RESULTS: Lazy<Style> = Lazy::new(|| Style::new().faint(true));
pub static STYLE_MODELINE: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .background(Color::from_rgb(95, 95, 95))
        .foreground(Color::from_rgb(255, 255, 255))
        .padding(0, 1, 0, 1)
});

/// RGB for the color names the swatch renderer understands. Option texts
/// that are not plain color names ("warm colors", "ombre") simply get no
/// swatch, mirroring how an unknown CSS color paints nothing.
pub fn swatch_rgb(name: &str) -> Option<(u8, u8, u8)> {
    let rgb = match name.to_lowercase().as_str() {
        "red" => (255, 0, 0),
        "blue" => (0, 0, 255),
        "green" => (0, 128, 0),
        "yellow" => (255, 255, 0),
        "purple" => (128, 0, 128),
        "orange" => (255, 165, 0),
        "pink" => (255, 192, 203),
        "brown" => (165, 42, 42),
        "gray" => (128, 128, 128),
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "cyan" => (0, 255, 255),
        "magenta" => (255, 0, 255),
        "turquoise" => (64, 224, 208),
        "lavender" => (230, 230, 250),
        "gold" => (255, 215, 0),
        "silver" => (192, 192, 192),
        "bronze" => (205, 127, 50),
        _ => return None,
    };
    Some(rgb)
}

/// Swatch cell for a color option, when its text names a known color.
pub fn render_swatch(name: &str) -> Option<String> {
    swatch_rgb(name).map(|(r, g, b)| {
        Style::new()
            .foreground(Color::from_rgb(r, g, b))
            .render("■")
    })
}
