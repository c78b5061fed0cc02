use std::collections::HashMap;

/// Persisted popularity counts per option text. Grows as options are used;
/// never pruned.
pub type UsageCounts = HashMap<String, u64>;

/// A single dropdown entry. Category entries re-open the dropdown with the
/// category's options; leaf entries insert their text. `Color` is a leaf
/// whose text doubles as a swatch value for the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    Category { name: String, count: u64 },
    Leaf { text: String, count: u64 },
    Color { text: String, count: u64 },
}

impl Suggestion {
    pub fn text(&self) -> &str {
        match self {
            Suggestion::Category { name, .. } => name,
            Suggestion::Leaf { text, .. } | Suggestion::Color { text, .. } => text,
        }
    }

    pub fn count(&self) -> u64 {
        match self {
            Suggestion::Category { count, .. }
            | Suggestion::Leaf { count, .. }
            | Suggestion::Color { count, .. } => *count,
        }
    }

    /// Category name carried by top-level entries; leaves have none.
    pub fn category(&self) -> Option<&str> {
        match self {
            Suggestion::Category { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn is_category(&self) -> bool {
        matches!(self, Suggestion::Category { .. })
    }
}

fn count_for(counts: &UsageCounts, text: &str) -> u64 {
    counts.get(text).copied().unwrap_or(0)
}

// De-duplicate by display text (first occurrence wins), then stable-sort by
// descending count so equal-count items keep catalog order.
fn rank(mut items: Vec<Suggestion>) -> Vec<Suggestion> {
    let mut seen: Vec<String> = Vec::new();
    items.retain(|it| {
        if seen.iter().any(|s| s == it.text()) {
            false
        } else {
            seen.push(it.text().to_string());
            true
        }
    });
    items.sort_by(|a, b| b.count().cmp(&a.count()));
    items
}

/// Rank category names (catalog order in, usage order out).
pub fn rank_categories<'a, I>(names: I, counts: &UsageCounts) -> Vec<Suggestion>
where
    I: IntoIterator<Item = &'a str>,
{
    rank(
        names
            .into_iter()
            .map(|n| Suggestion::Category {
                name: n.to_string(),
                count: count_for(counts, n),
            })
            .collect(),
    )
}

/// Rank a category's leaf options. Options of the `color` category carry
/// their text as a swatch value for the renderer; ranking is unchanged.
pub fn rank_options(category: &str, options: &[String], counts: &UsageCounts) -> Vec<Suggestion> {
    let is_color = category.eq_ignore_ascii_case("color");
    rank(
        options
            .iter()
            .map(|o| {
                let count = count_for(counts, o);
                if is_color {
                    Suggestion::Color {
                        text: o.clone(),
                        count,
                    }
                } else {
                    Suggestion::Leaf {
                        text: o.clone(),
                        count,
                    }
                }
            })
            .collect(),
    )
}
