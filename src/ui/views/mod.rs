//! Application views (screens and overlays).

mod help;
mod selected;

pub use help::{HelpAction, HelpView};
pub use selected::render_selected_panel;
