use crate::ui::model::{Dropdown, Model, DEFAULT_WIDTH};
use crate::ui::render::styles::STYLE_MODELINE;
use lipgloss::Color;

pub fn render_modeline(m: &Model, inner_max: usize, mode: &str) -> String {
    // prepare inner styles without padding so spacing is under our control
    let inner_style = STYLE_MODELINE.clone().padding(0, 0, 0, 0);
    let key_style = STYLE_MODELINE
        .clone()
        .foreground(Color::from_rgb(238, 0, 238))
        .bold(true)
        .padding(0, 0, 0, 0);
    let desc_style = STYLE_MODELINE.clone().padding(0, 0, 0, 0);
    let count_style = STYLE_MODELINE.clone().faint(true).padding(0, 0, 0, 0);

    // key/description pairs depend on whether the dropdown is open
    let pairs_def: Vec<(&str, &str)> = if m.is_open() {
        vec![("↹", "next"), ("⏎", "pick"), ("⎋", "close")]
    } else {
        vec![("#", "suggest"), ("⏎", "done"), ("⎋", "quit")]
    };

    // Build rendered pairs and their plain widths in one pass
    let pairs: Vec<(String, usize)> = pairs_def
        .iter()
        .map(|(k, d)| {
            let plain_len = d.chars().count() + 1 + k.chars().count();
            let rendered = format!(
                "{}{}{}",
                desc_style.render(d),
                inner_style.render(":"),
                key_style.render(k)
            );
            (rendered, plain_len)
        })
        .collect();

    let pair_sep_rendered = inner_style.render("  ");
    let pair_sep_width = 2usize;

    // right side: item count while open
    let (count_plain, count_rendered) = match &m.dropdown {
        Dropdown::Open { items, .. } => {
            let s = format!("{} items", items.len());
            (s.clone(), count_style.render(&s))
        }
        Dropdown::OpenEmpty => {
            let s = "0 items".to_string();
            (s.clone(), count_style.render(&s))
        }
        Dropdown::Closed => (String::new(), String::new()),
    };
    let count_width = count_plain.chars().count();

    // mode and separator widths (mode has padding of 2 chars in modeStyle)
    let mode_w = mode.chars().count() + 2;
    let sep_w = " | ".chars().count();
    let avail = if inner_max > mode_w + sep_w {
        inner_max - mode_w - sep_w
    } else {
        0
    };

    // drop rightmost pairs until left + count fits into avail
    let mut pairs_count = pairs.len();
    let mut left_width = pairs.iter().map(|(_, w)| *w).sum::<usize>()
        + pair_sep_width * pairs.len().saturating_sub(1);
    while pairs_count > 0 && left_width + count_width > avail {
        pairs_count -= 1;
        left_width = if pairs_count > 0 {
            pairs
                .iter()
                .take(pairs_count)
                .map(|(_, w)| *w)
                .sum::<usize>()
                + pair_sep_width * (pairs_count - 1)
        } else {
            0
        };
    }
    let left_joined_rendered = pairs
        .iter()
        .take(pairs_count)
        .map(|(r, _)| r.clone())
        .collect::<Vec<_>>()
        .join(&pair_sep_rendered);

    // filler between hints and the count (subtract 2 to keep spacing consistent)
    let pad = if avail > left_width + count_width + 2 {
        avail - left_width - count_width - 2
    } else {
        0
    };
    let filler = if pad > 0 {
        STYLE_MODELINE.clone().width(pad as i32).render("")
    } else {
        String::new()
    };

    let footer_inner = format!("{left_joined_rendered}{filler}{count_rendered}");

    let mode_style = STYLE_MODELINE
        .clone()
        .background(Color::from_rgb(101, 101, 101))
        .padding(0, 1, 0, 1)
        .bold(true);
    let mode_styled = mode_style.render(mode);

    // Far-left indicator for the feature switch: '#' when the suggester is
    // armed, '·' when it is off.
    let indicator_char = if m.enabled { "#" } else { "·" };
    let indicator_style = STYLE_MODELINE.clone().faint(true).padding(0, 1, 0, 1);
    let indicator_styled = indicator_style.render(indicator_char);

    let sep_styled = inner_style.render(" | ");
    let trailing_pad = STYLE_MODELINE.render(" ");

    format!("{indicator_styled}{mode_styled}{sep_styled}{footer_inner}{trailing_pad}")
}

pub fn render_modeline_padded(m: &Model) -> String {
    let total_width = if m.screen_width > 0 {
        m.screen_width
    } else {
        DEFAULT_WIDTH
    };
    let inner_max = if total_width > 0 {
        total_width.saturating_sub(2) - 1
    } else {
        DEFAULT_WIDTH
    };
    let mode = m.mode();
    let modeline = render_modeline(m, inner_max, &mode);
    let modeline_single = modeline.replace('\n', " ");
    STYLE_MODELINE
        .clone()
        .width(total_width as i32)
        .render(&modeline_single)
}
