//! User interface components and views.
//!
//! This module contains all TUI rendering logic: the artwork table, the
//! bulk-select dialog, the selected rows panel and overlays.

mod components;
pub mod theme;
mod views;

pub use components::{
    context_hint_spans, ArtworkTable, BulkSelectAction, BulkSelectDialog, LoadingIndicator,
    NotificationManager, TableAction,
};
pub use theme::{init_theme, load_theme};
pub use views::{render_selected_panel, HelpAction, HelpView};
