use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// Width of the left menu, in columns
pub const MENU_WIDTH: u16 = 26;

/// Layout manager for the TUI
pub struct Layout;

impl Layout {
    /// Create the main layout with status bar, content area, and command bar
    ///
    /// Returns: (status_area, content_area, command_area)
    pub fn main(area: Rect) -> (Rect, Rect, Rect) {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Status bar
                Constraint::Min(0),    // Content area
                Constraint::Length(1), // Command bar
            ])
            .split(area);

        (chunks[0], chunks[1], chunks[2])
    }

    /// Split content area into the fixed-width menu and the order panel
    ///
    /// Returns: (menu_area, order_area)
    pub fn panes(area: Rect) -> (Rect, Rect) {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(MENU_WIDTH), // Menu (left)
                Constraint::Min(0),             // Order panel (right)
            ])
            .split(area);

        (chunks[0], chunks[1])
    }

    /// Split a form's inner area into rows of two cells
    pub fn grid(area: Rect, rows: usize) -> Vec<(Rect, Rect)> {
        let row_areas = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(2); rows])
            .split(area);

        row_areas
            .iter()
            .map(|row| {
                let cells = RatatuiLayout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(*row);
                (cells[0], cells[1])
            })
            .collect()
    }
}
