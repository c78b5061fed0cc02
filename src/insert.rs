use crate::field::TextField;
use crate::token::CursorToken;

/// Commit a selected suggestion into the field.
///
/// The replacement span starts at the trigger character found at or before
/// `token.start`, falling back to `token.start` when none exists (the token
/// may have been computed without a fresh trigger, e.g. when the user
/// retypes over an inserted value), and runs to `token.end`. Returns the
/// new cursor position: trigger position + inserted length.
pub fn insert_selection(
    field: &mut TextField,
    token: &CursorToken,
    selected: &str,
    trigger: char,
) -> usize {
    let chars = field.chars();
    let search_from = token.start.min(chars.len().saturating_sub(1));
    let trigger_pos = (0..=search_from)
        .rev()
        .find(|&i| chars.get(i) == Some(&trigger))
        .unwrap_or(token.start);
    field.splice(trigger_pos, token.end, selected)
}
