//! Reusable UI components.

mod help_bar;
mod input;
mod loading;
mod modal;
mod notification;
mod table;

pub use help_bar::context_hint_spans;
pub use loading::LoadingIndicator;
pub use modal::{centered_rect, BulkSelectAction, BulkSelectDialog};
pub use notification::NotificationManager;
pub use table::{ArtworkTable, TableAction};
