/// The character that starts an autocomplete session.
pub const TRIGGER_CHAR: char = '#';

/// Token under the cursor in a single text field's current value.
///
/// Offsets are char indices into the field text. `start` includes the
/// trigger character when one anchors the token; `word` never does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorToken {
    pub word: String,
    pub start: usize,
    pub end: usize,
    pub is_trigger: bool,
    pub has_word: bool,
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Locate the token at `cursor` (a char offset into `text`).
///
/// A trigger character immediately before the cursor wins outright and
/// yields an empty-word trigger token anchored at that character. Otherwise
/// the scan walks backward over word characters, stopping early at a
/// trigger (which is then included in the span), and forward from the
/// cursor to find the token end.
pub fn locate(text: &str, cursor: usize, trigger: char) -> CursorToken {
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());

    if cursor > 0 && chars[cursor - 1] == trigger {
        return CursorToken {
            word: String::new(),
            start: cursor - 1,
            end: cursor,
            is_trigger: true,
            has_word: false,
        };
    }

    let mut start = cursor;
    while start > 0 {
        let c = chars[start - 1];
        if c == trigger {
            start -= 1;
            break;
        }
        if !is_word_char(c) {
            break;
        }
        start -= 1;
    }

    let mut end = cursor;
    while end < chars.len() && is_word_char(chars[end]) {
        end += 1;
    }

    let has_trigger = chars.get(start) == Some(&trigger);
    let word_start = if has_trigger { start + 1 } else { start };
    let word: String = chars[word_start..end].iter().collect();
    let has_word = !word.is_empty();

    CursorToken {
        word,
        start,
        end,
        is_trigger: has_trigger,
        has_word,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(text: &str, cursor: usize) -> CursorToken {
        locate(text, cursor, TRIGGER_CHAR)
    }

    #[test]
    fn bare_trigger_before_cursor_yields_empty_trigger_token() {
        let t = loc("a #", 3);
        assert!(t.is_trigger);
        assert!(!t.has_word);
        assert_eq!(t.word, "");
        assert_eq!((t.start, t.end), (2, 3));
        assert_eq!(t.end, t.start + 1);
    }

    #[test]
    fn trigger_immediately_before_cursor_wins_even_mid_word() {
        // cursor sits right after '#' with word chars ahead of it
        let t = loc("#col", 1);
        assert!(t.is_trigger);
        assert!(!t.has_word);
        assert_eq!((t.start, t.end), (0, 1));
    }

    #[test]
    fn trigger_word_scenario_a_hash_col() {
        let t = loc("a #col", 6);
        assert_eq!(t.word, "col");
        assert_eq!((t.start, t.end), (2, 6));
        assert!(t.is_trigger);
        assert!(t.has_word);
    }

    #[test]
    fn bare_word_without_trigger() {
        let t = loc("some color", 10);
        assert_eq!(t.word, "color");
        assert_eq!((t.start, t.end), (5, 10));
        assert!(!t.is_trigger);
        assert!(t.has_word);
    }

    #[test]
    fn cursor_in_middle_of_word_extends_both_ways() {
        let t = loc("a #style b", 5);
        assert_eq!(t.word, "style");
        assert_eq!((t.start, t.end), (2, 8));
        assert!(t.is_trigger);
    }

    #[test]
    fn cursor_at_text_start_finds_nothing() {
        let t = loc("word", 0);
        assert_eq!(t.word, "word");
        assert_eq!(t.start, 0);
        assert!(!t.is_trigger);
    }

    #[test]
    fn no_adjacent_word_chars_yields_empty_non_trigger() {
        let t = loc("a  b", 2);
        assert_eq!(t.word, "");
        assert!(!t.has_word);
        assert!(!t.is_trigger);
        assert_eq!(t.start, t.end);
    }

    #[test]
    fn hyphen_and_underscore_count_as_word_chars() {
        let t = loc("x #art_deco-ish", 15);
        assert_eq!(t.word, "art_deco-ish");
        assert!(t.is_trigger);
    }

    #[test]
    fn backward_scan_stops_at_non_word_char() {
        let t = loc("red, blue", 9);
        assert_eq!(t.word, "blue");
        assert_eq!(t.start, 5);
    }

    #[test]
    fn cursor_past_end_is_clamped() {
        let t = loc("ab", 10);
        assert_eq!(t.word, "ab");
        assert_eq!((t.start, t.end), (0, 2));
    }

    #[test]
    fn trigger_word_length_matches_typed_chars() {
        for (text, n) in [("#s", 1), ("#st", 2), ("#sty", 3)] {
            let t = loc(text, text.chars().count());
            assert!(t.is_trigger);
            assert_eq!(t.has_word, n > 0);
            assert_eq!(t.word.chars().count(), n);
        }
    }

    #[test]
    fn multibyte_text_uses_char_offsets() {
        // "é" is one char; offsets must not count bytes
        let t = loc("é #col", 6);
        assert_eq!(t.word, "col");
        assert_eq!((t.start, t.end), (2, 6));
    }
}
