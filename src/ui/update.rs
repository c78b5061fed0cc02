use crate::catalog::Catalog;
use crate::ui::model::Model;
use crate::ui::Msg;

pub fn handle_update(m: &mut Model, msg: Msg) {
    match msg {
        Msg::WindowSize { width, height } => handle_window_size(m, width, height),
        Msg::Rune(r) => handle_rune(m, r),
        Msg::KeyBackspace => {
            if m.field.backspace() {
                m.refresh_suggestions();
            }
        }
        Msg::KeyDelete => {
            if m.field.delete() {
                m.refresh_suggestions();
            }
        }
        // caret-only moves never recompute the token
        Msg::KeyLeft => m.field.move_left(),
        Msg::KeyRight => m.field.move_right(),
        Msg::KeyHome => m.field.move_home(),
        Msg::KeyEnd => m.field.move_end(),
        Msg::KeyDown | Msg::KeyTab => handle_advance(m),
        Msg::KeyUp | Msg::KeyShiftTab => handle_retreat(m),
        Msg::KeyEnter => handle_enter(m),
        Msg::KeyEsc => handle_esc(m),
        Msg::CatalogReplaced(map) => {
            // wholesale swap; an open dropdown stays stale until the next
            // input event
            m.catalog = Catalog::new(map);
        }
        Msg::CountsReplaced(counts) => m.counts = counts,
        Msg::EnabledChanged(enabled) => m.enabled = enabled,
    }
}

fn handle_window_size(m: &mut Model, width: usize, height: usize) {
    m.screen_width = width;
    m.screen_height = height;
    // reposition/re-layout only; the dropdown state machine is untouched
    m.ensure_highlight_visible();
}

fn handle_rune(m: &mut Model, r: char) {
    if r.is_control() {
        return;
    }
    m.field.insert_char(r);
    m.refresh_suggestions();
}

fn handle_advance(m: &mut Model) {
    if m.enabled && m.is_open() {
        m.highlight_next();
    }
    // closed: the key passes through untouched (nothing to do for Tab in a
    // single-field view)
}

fn handle_retreat(m: &mut Model) {
    if m.enabled && m.is_open() {
        m.highlight_prev();
    }
}

fn handle_enter(m: &mut Model) {
    if m.enabled && m.is_open() {
        if m.highlighted_index().is_some() {
            m.select_highlighted();
        }
        // OpenEmpty: nothing highlighted, nothing to commit
        return;
    }
    // closed: submit the composed prompt
    m.submitted = Some(m.field.value());
}

fn handle_esc(m: &mut Model) {
    if m.enabled && m.is_open() {
        m.close_dropdown();
    }
    // closed: quit is decided by the runner, not here
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::rank::UsageCounts;
    use crate::ui::model::{initial_model, Dropdown, RESERVED_LINES};
    use indexmap::IndexMap;

    fn test_catalog() -> Catalog {
        let mut m = IndexMap::new();
        m.insert(
            "color".to_string(),
            vec!["red".to_string(), "blue".to_string(), "green".to_string()],
        );
        m.insert("mood".to_string(), vec!["calm".to_string()]);
        Catalog::new(m)
    }

    fn model() -> Model {
        let mut m = initial_model(test_catalog(), UsageCounts::new(), true);
        m.screen_height = 24;
        m
    }

    fn type_str(m: &mut Model, s: &str) {
        for c in s.chars() {
            m.update(Msg::Rune(c));
        }
    }

    fn highlighted(m: &Model) -> usize {
        m.highlighted_index().expect("dropdown should be open")
    }

    #[test]
    fn down_and_tab_advance_circularly() {
        let mut m = model();
        type_str(&mut m, "color"); // 3 leaf items
        assert_eq!(highlighted(&m), 0);
        m.update(Msg::KeyDown);
        assert_eq!(highlighted(&m), 1);
        m.update(Msg::KeyTab);
        assert_eq!(highlighted(&m), 2);
        // wrap from last to first
        m.update(Msg::KeyDown);
        assert_eq!(highlighted(&m), 0);
    }

    #[test]
    fn up_and_shift_tab_retreat_circularly() {
        let mut m = model();
        type_str(&mut m, "color");
        // wrap from first to last
        m.update(Msg::KeyUp);
        assert_eq!(highlighted(&m), 2);
        m.update(Msg::KeyShiftTab);
        assert_eq!(highlighted(&m), 1);
    }

    #[test]
    fn esc_closes_without_touching_the_field() {
        let mut m = model();
        type_str(&mut m, "a #");
        assert!(m.is_open());
        m.update(Msg::KeyEsc);
        assert_eq!(m.dropdown, Dropdown::Closed);
        assert_eq!(m.field.value(), "a #");
    }

    #[test]
    fn enter_with_dropdown_closed_submits_the_prompt() {
        let mut m = model();
        type_str(&mut m, "hello world");
        m.update(Msg::KeyEnter);
        assert_eq!(m.submitted.as_deref(), Some("hello world"));
    }

    #[test]
    fn enter_while_open_commits_instead_of_submitting() {
        let mut m = model();
        type_str(&mut m, "mood");
        m.update(Msg::KeyEnter); // picks "calm"
        assert_eq!(m.field.value(), "calm");
        assert!(m.submitted.is_none());
        assert_eq!(m.counts.get("calm").copied(), Some(1));
    }

    #[test]
    fn enter_on_empty_dropdown_is_inert() {
        let mut m = model();
        let mut map = IndexMap::new();
        map.insert("empty".to_string(), Vec::new());
        m.update(Msg::CatalogReplaced(map));
        type_str(&mut m, "empty");
        assert_eq!(m.dropdown, Dropdown::OpenEmpty);
        m.update(Msg::KeyEnter);
        assert_eq!(m.dropdown, Dropdown::OpenEmpty);
        assert!(m.submitted.is_none());
    }

    #[test]
    fn navigation_is_inert_while_disabled() {
        let mut m = model();
        type_str(&mut m, "color");
        m.update(Msg::EnabledChanged(false));
        let before = highlighted(&m);
        m.update(Msg::KeyDown);
        assert_eq!(highlighted(&m), before);
        // and enter falls through to submit, the field-level behavior
        m.update(Msg::KeyEnter);
        assert_eq!(m.submitted.as_deref(), Some("color"));
    }

    #[test]
    fn backspace_recomputes_token() {
        let mut m = model();
        type_str(&mut m, "#colx");
        assert_eq!(m.dropdown, Dropdown::Closed);
        m.update(Msg::KeyBackspace); // back to "#col"
        assert!(m.is_open());
    }

    #[test]
    fn backspace_at_start_changes_nothing() {
        let mut m = model();
        m.update(Msg::KeyBackspace);
        assert_eq!(m.field.value(), "");
        assert_eq!(m.dropdown, Dropdown::Closed);
    }

    #[test]
    fn caret_moves_do_not_recompute() {
        let mut m = model();
        type_str(&mut m, "#col");
        assert!(m.is_open());
        m.update(Msg::KeyLeft);
        m.update(Msg::KeyHome);
        assert!(m.is_open(), "caret-only moves leave the dropdown alone");
        assert_eq!(m.field.cursor(), 0);
    }

    #[test]
    fn control_runes_are_ignored() {
        let mut m = model();
        m.update(Msg::Rune('\u{1b}'));
        assert_eq!(m.field.value(), "");
    }

    #[test]
    fn resize_repositions_without_state_change() {
        let mut m = model();
        type_str(&mut m, "color");
        m.update(Msg::KeyDown);
        let before = m.dropdown.clone();
        m.update(Msg::WindowSize {
            width: 120,
            height: 40,
        });
        assert_eq!(m.dropdown, before);
        assert_eq!(m.screen_width, 120);
    }

    #[test]
    fn resize_shrink_clamps_scroll() {
        let mut m = model();
        let mut map = IndexMap::new();
        map.insert(
            "mood".to_string(),
            (0..10).map(|i| format!("opt{i}")).collect(),
        );
        m.update(Msg::CatalogReplaced(map));
        type_str(&mut m, "mood");
        for _ in 0..9 {
            m.update(Msg::KeyDown);
        }
        m.update(Msg::WindowSize {
            width: 80,
            height: RESERVED_LINES + 2,
        });
        if let Dropdown::Open { scroll, .. } = &m.dropdown {
            assert!(*scroll + 2 >= 10, "highlight stays inside the window");
        } else {
            panic!("dropdown should stay open across resize");
        }
    }

    #[test]
    fn counts_replacement_applies_wholesale() {
        let mut m = model();
        m.counts.insert("red".to_string(), 9);
        let mut fresh = UsageCounts::new();
        fresh.insert("blue".to_string(), 1);
        m.update(Msg::CountsReplaced(fresh));
        assert!(m.counts.get("red").is_none());
        assert_eq!(m.counts.get("blue").copied(), Some(1));
    }

    #[test]
    fn increment_ordering_is_commutative() {
        let mut a = model();
        type_str(&mut a, "mood");
        a.update(Msg::KeyEnter);
        type_str(&mut a, " mood");
        a.update(Msg::KeyEnter);
        assert_eq!(a.counts.get("calm").copied(), Some(2));

        // interleave an unrelated selection; "calm" still ends at +2
        let mut b = model();
        type_str(&mut b, "mood");
        b.update(Msg::KeyEnter);
        type_str(&mut b, " color");
        b.update(Msg::KeyEnter); // whichever color option is first
        type_str(&mut b, " mood");
        b.update(Msg::KeyEnter);
        assert_eq!(b.counts.get("calm").copied(), Some(2));
    }
}
