// UI module root: split implementation into focused submodules under `ui/`

pub mod model;
pub mod render;
pub mod run;
pub mod update;

// Re-export commonly used symbols so call sites can use `crate::ui::Model` etc.
pub use model::{initial_model, Dropdown, Model};
pub use render::render_full;
pub use run::run;
pub use update::handle_update;

use crate::rank::UsageCounts;
use indexmap::IndexMap;

// Messages used by the update logic
#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    WindowSize { width: usize, height: usize },
    Rune(char),
    KeyBackspace,
    KeyDelete,
    KeyLeft,
    KeyRight,
    KeyHome,
    KeyEnd,
    KeyUp,
    KeyDown,
    KeyTab,
    KeyShiftTab,
    KeyEnter,
    KeyEsc,
    // store change notifications, applied as wholesale replacement
    CatalogReplaced(IndexMap<String, Vec<String>>),
    CountsReplaced(UsageCounts),
    EnabledChanged(bool),
}
