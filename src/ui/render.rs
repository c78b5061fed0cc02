// Render module split into focused submodules to reduce file size.

pub mod field;
pub mod full;
pub mod list;
pub mod modeline;
pub mod styles;

pub use field::render_field_block;
pub use full::render_full;
pub use list::render_dropdown_lines;
pub use modeline::{render_modeline, render_modeline_padded};
