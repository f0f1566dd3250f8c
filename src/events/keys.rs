//! Key binding definitions.
//!
//! Bindings are data so the help overlay and the status bar hints render
//! from one source.

/// Where a binding applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyContext {
    /// Always available.
    Global,
    /// The artwork table.
    Table,
    /// The bulk-select dialog.
    BulkSelect,
    /// The help overlay.
    Help,
}

impl KeyContext {
    /// Heading shown in the help overlay.
    pub fn display(&self) -> &'static str {
        match self {
            KeyContext::Global => "Global",
            KeyContext::Table => "Artworks",
            KeyContext::BulkSelect => "Select Rows Dialog",
            KeyContext::Help => "Help",
        }
    }
}

/// A documented key binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    /// The key, as shown to the user.
    pub key: String,
    /// What it does.
    pub description: String,
    /// Where it applies.
    pub context: KeyContext,
}

impl Keybinding {
    fn new(key: &str, description: &str, context: KeyContext) -> Self {
        Self {
            key: key.to_string(),
            description: description.to_string(),
            context,
        }
    }
}

/// All documented bindings, in display order.
pub fn get_keybindings() -> Vec<Keybinding> {
    use KeyContext::*;

    vec![
        Keybinding::new("q / Ctrl+c", "Quit", Global),
        Keybinding::new("?", "Toggle help", Global),
        Keybinding::new("j / ↓", "Move down", Table),
        Keybinding::new("k / ↑", "Move up", Table),
        Keybinding::new("Space", "Toggle row selection", Table),
        Keybinding::new("a", "Toggle all rows on this page", Table),
        Keybinding::new("l / → / n", "Next page", Table),
        Keybinding::new("h / ← / p", "Previous page", Table),
        Keybinding::new("g", "First page", Table),
        Keybinding::new("G", "Last page", Table),
        Keybinding::new("s", "Define rows to select", Table),
        Keybinding::new("r", "Reload current page", Table),
        Keybinding::new("0-9", "Edit row count", BulkSelect),
        Keybinding::new("↑ / ↓", "Increase / decrease row count", BulkSelect),
        Keybinding::new("Enter", "Apply", BulkSelect),
        Keybinding::new("Esc", "Cancel", BulkSelect),
        Keybinding::new("j / k", "Scroll", Help),
        Keybinding::new("? / q / Esc", "Close help", Help),
    ]
}

/// Bindings grouped by context, in display order.
pub fn get_keybindings_grouped() -> Vec<(KeyContext, Vec<Keybinding>)> {
    let mut groups: Vec<(KeyContext, Vec<Keybinding>)> = Vec::new();
    for binding in get_keybindings() {
        match groups.iter_mut().find(|(ctx, _)| *ctx == binding.context) {
            Some((_, bindings)) => bindings.push(binding),
            None => groups.push((binding.context, vec![binding])),
        }
    }
    groups
}

/// One-line hints for the status bar.
pub fn get_context_hints(context: KeyContext) -> &'static str {
    match context {
        KeyContext::Global | KeyContext::Table => {
            "[Space] toggle  [a] page  [←/→] page  [s] select rows  [r] reload  [?] help  [q] quit"
        }
        KeyContext::BulkSelect => "[0-9] count  [↑/↓] adjust  [Enter] apply  [Esc] cancel",
        KeyContext::Help => "[j/k] scroll  [Esc] close",
    }
}
