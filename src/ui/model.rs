use crate::catalog::Catalog;
use crate::field::TextField;
use crate::insert::insert_selection;
use crate::rank::{rank_categories, rank_options, Suggestion, UsageCounts};
use crate::store::Store;
use crate::token::{locate, CursorToken, TRIGGER_CHAR};

// small constants reused by rendering code
pub const FIELD_BLOCK_LINES: usize = 3;
pub const MODELINE_LINES: usize = 1;
pub const RESERVED_LINES: usize = FIELD_BLOCK_LINES + MODELINE_LINES;
pub const DEFAULT_WIDTH: usize = 80;
pub const DROPDOWN_MAX_ROWS: usize = 8;

/// Presentation state of the single dropdown.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Dropdown {
    #[default]
    Closed,
    /// Open with nothing to offer; renders the no-results placeholder.
    OpenEmpty,
    /// `highlighted` is always a valid index into `items`; `scroll` is the
    /// first visible display row.
    Open {
        items: Vec<Suggestion>,
        highlighted: usize,
        scroll: usize,
    },
}

/// One display row of the open dropdown. Headers are not selectable, so
/// highlight indices address items, not rows.
#[derive(Clone, Debug, PartialEq)]
pub enum DropRow {
    Header { name: String, count: u64 },
    Item(usize),
    NoResults,
}

#[derive(Clone, Default)]
pub struct Model {
    pub enabled: bool,
    pub field: TextField,
    pub catalog: Catalog,
    pub counts: UsageCounts,
    pub dropdown: Dropdown,
    /// Category whose options are currently listed, if any. Display only.
    pub context: Option<String>,
    pub screen_width: usize,
    pub screen_height: usize,
    /// Set when the user submits the composed prompt (Enter, dropdown closed).
    pub submitted: Option<String>,
    /// Persistence handle; absent in unit tests.
    pub store: Option<Store>,
}

pub fn initial_model(catalog: Catalog, counts: UsageCounts, enabled: bool) -> Model {
    Model {
        enabled,
        catalog,
        counts,
        screen_width: DEFAULT_WIDTH,
        ..Model::default()
    }
}

impl Model {
    // wrapper update that delegates to the update module
    pub fn update(&mut self, msg: crate::ui::Msg) {
        crate::ui::update::handle_update(self, msg);
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.dropdown, Dropdown::Closed)
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        match &self.dropdown {
            Dropdown::Open { highlighted, .. } => Some(*highlighted),
            _ => None,
        }
    }

    pub fn mode(&self) -> String {
        if !self.enabled {
            return "off".to_string();
        }
        if self.is_open() {
            if let Some(ctx) = &self.context {
                return ctx.clone();
            }
        }
        "quill".to_string()
    }

    pub fn token(&self) -> CursorToken {
        locate(&self.field.value(), self.field.cursor(), TRIGGER_CHAR)
    }

    /// Recompute the dropdown from the token under the cursor. Runs after
    /// every text mutation; never on caret-only moves.
    pub fn refresh_suggestions(&mut self) {
        if !self.enabled {
            self.close_dropdown();
            return;
        }
        let token = self.token();
        if token.is_trigger && !token.has_word {
            // browse all categories
            let items = rank_categories(self.catalog.category_names(), &self.counts);
            self.context = None;
            self.open_with(items);
        } else if token.is_trigger {
            let items = {
                let matches = self.catalog.matching(&token.word);
                rank_categories(matches.iter().copied(), &self.counts)
            };
            if items.is_empty() {
                self.close_dropdown();
            } else {
                self.context = None;
                self.open_with(items);
            }
        } else if token.has_word && self.catalog.contains(&token.word) {
            // exact keyword match, no trigger
            let cat = token.word.to_lowercase();
            let items = rank_options(&cat, self.catalog.options(&cat), &self.counts);
            self.context = Some(cat);
            self.open_with(items);
        } else {
            self.close_dropdown();
        }
    }

    /// First item pre-highlighted; an empty list opens the placeholder.
    pub fn open_with(&mut self, items: Vec<Suggestion>) {
        if items.is_empty() {
            self.dropdown = Dropdown::OpenEmpty;
        } else {
            self.dropdown = Dropdown::Open {
                items,
                highlighted: 0,
                scroll: 0,
            };
        }
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown = Dropdown::Closed;
        self.context = None;
    }

    pub fn highlight_next(&mut self) {
        if let Dropdown::Open {
            items, highlighted, ..
        } = &mut self.dropdown
        {
            *highlighted = if *highlighted + 1 >= items.len() {
                0
            } else {
                *highlighted + 1
            };
        }
        self.ensure_highlight_visible();
    }

    pub fn highlight_prev(&mut self) {
        if let Dropdown::Open {
            items, highlighted, ..
        } = &mut self.dropdown
        {
            *highlighted = if *highlighted == 0 {
                items.len() - 1
            } else {
                *highlighted - 1
            };
        }
        self.ensure_highlight_visible();
    }

    /// Commit the highlighted entry. Categories re-open the dropdown with
    /// their ranked options; leaves splice into the field, bump the usage
    /// counter, persist it, close, and re-run the token pipeline.
    pub fn select_highlighted(&mut self) {
        let item = match &self.dropdown {
            Dropdown::Open {
                items, highlighted, ..
            } => match items.get(*highlighted) {
                Some(it) => it.clone(),
                None => return,
            },
            _ => return,
        };

        match item {
            Suggestion::Category { name, .. } => {
                let items = rank_options(&name, self.catalog.options(&name), &self.counts);
                self.context = Some(name);
                self.open_with(items);
            }
            Suggestion::Leaf { text, .. } | Suggestion::Color { text, .. } => {
                let token = self.token();
                insert_selection(&mut self.field, &token, &text, TRIGGER_CHAR);
                *self.counts.entry(text.clone()).or_insert(0) += 1;
                if let Some(store) = &self.store {
                    store.record_selection(&text);
                }
                self.close_dropdown();
                // synthetic input notification: the pipeline observes the
                // programmatic change like any other edit
                self.refresh_suggestions();
            }
        }
    }

    /// Display rows for the open dropdown: a header precedes the first item
    /// of each category run, carrying that item's count.
    pub fn dropdown_rows(&self) -> Vec<DropRow> {
        match &self.dropdown {
            Dropdown::Closed => Vec::new(),
            Dropdown::OpenEmpty => vec![DropRow::NoResults],
            Dropdown::Open { items, .. } => {
                let mut rows = Vec::with_capacity(items.len());
                let mut current: Option<&str> = None;
                for (i, it) in items.iter().enumerate() {
                    if let Some(cat) = it.category() {
                        if current != Some(cat) {
                            current = Some(cat);
                            rows.push(DropRow::Header {
                                name: cat.to_string(),
                                count: it.count(),
                            });
                        }
                    }
                    rows.push(DropRow::Item(i));
                }
                rows
            }
        }
    }

    /// Rows the dropdown can show at once given the current screen.
    pub fn visible_rows(&self) -> usize {
        let by_screen = self.screen_height.saturating_sub(RESERVED_LINES);
        DROPDOWN_MAX_ROWS.min(by_screen.max(1)).max(1)
    }

    // Keep the highlighted item's row inside the scroll window.
    pub fn ensure_highlight_visible(&mut self) {
        let rows = self.dropdown_rows();
        let vis = self.visible_rows();
        if let Dropdown::Open {
            highlighted, scroll, ..
        } = &mut self.dropdown
        {
            let row = match rows
                .iter()
                .position(|r| matches!(r, DropRow::Item(i) if i == highlighted))
            {
                Some(r) => r,
                None => return,
            };
            if row < *scroll {
                *scroll = row;
            } else if row >= *scroll + vis {
                *scroll = row + 1 - vis;
            }
            // clamp in case the window shrank
            let max_scroll = rows.len().saturating_sub(vis);
            if *scroll > max_scroll {
                *scroll = max_scroll;
            }
        }
    }

    /// Column the dropdown overlay is anchored at: the field box interior,
    /// recomputed from the current layout.
    pub fn anchor_col(&self) -> usize {
        if self.screen_width > 4 {
            2
        } else {
            0
        }
    }

    // Render helper wrappers that forward to the render module to keep this file focused on state.
    pub fn render_field_block(&self) -> Vec<String> {
        crate::ui::render::render_field_block(self)
    }
    pub fn render_dropdown_lines(&self) -> Vec<String> {
        crate::ui::render::render_dropdown_lines(self)
    }
    pub fn render_full(&self) -> String {
        crate::ui::render::render_full(self)
    }
}
