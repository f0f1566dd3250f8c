//! Theme and styling configuration.
//!
//! The active theme is installed once at startup with [`init_theme`] and read
//! everywhere else through [`theme`].

use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};

static THEME: OnceLock<Theme> = OnceLock::new();

/// Color theme for the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Titles, focused borders and the header.
    pub accent: Color,
    /// Checked rows and positive feedback.
    pub success: Color,
    /// Section headings and warnings.
    pub warning: Color,
    /// Fetch failures.
    pub error: Color,
    /// Secondary text and idle borders.
    pub dim: Color,
    /// Background of the cursor row.
    pub highlight_bg: Color,
}

impl Theme {
    /// Dark terminal theme.
    pub fn dark() -> Self {
        Self {
            fg: Color::White,
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            dim: Color::DarkGray,
            highlight_bg: Color::DarkGray,
        }
    }

    /// Light terminal theme.
    pub fn light() -> Self {
        Self {
            fg: Color::Black,
            accent: Color::Blue,
            success: Color::Green,
            warning: Color::Magenta,
            error: Color::Red,
            dim: Color::Gray,
            highlight_bg: Color::Gray,
        }
    }

    /// Look up a theme by its configuration name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }

    /// Style for the cursor row.
    pub fn highlight(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Install the theme. Later calls are ignored.
pub fn init_theme(theme: Theme) {
    let _ = THEME.set(theme);
}

/// Resolve a configured theme name and install it, falling back to dark.
pub fn load_theme(name: &str) {
    let theme = Theme::by_name(name).unwrap_or_else(|| {
        tracing::warn!(theme = %name, "Unknown theme, using dark");
        Theme::dark()
    });
    init_theme(theme);
}

/// The active theme.
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::dark)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert_eq!(Theme::by_name("dark"), Some(Theme::dark()));
        assert_eq!(Theme::by_name("light"), Some(Theme::light()));
        assert_eq!(Theme::by_name("neon"), None);
    }

    #[test]
    fn test_theme_always_available() {
        // Whatever was installed first, reading never panics.
        let t = theme();
        assert_ne!(t.accent, Color::Reset);
    }
}
