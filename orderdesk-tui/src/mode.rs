/// Application modes (vim-inspired)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppMode {
    /// Navigate menu and forms
    Normal,

    /// Command input (vim : mode)
    Command,
}

impl AppMode {
    /// Get display name for status bar
    pub fn display_name(&self) -> &'static str {
        match self {
            AppMode::Normal => "NORMAL",
            AppMode::Command => "COMMAND",
        }
    }

    /// Get color for status bar
    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            AppMode::Normal => Color::Cyan,
            AppMode::Command => Color::Yellow,
        }
    }
}

/// Which pane has focus
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pane {
    /// Left pane (open/save, type selector, add)
    Menu,

    /// Right pane (item forms)
    Order,
}

impl Pane {
    /// Toggle between panes
    pub fn toggle(&self) -> Self {
        match self {
            Pane::Menu => Pane::Order,
            Pane::Order => Pane::Menu,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Pane::Menu => "[MENU]",
            Pane::Order => "[ORDER]",
        }
    }
}
