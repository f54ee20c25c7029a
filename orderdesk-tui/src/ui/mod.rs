pub mod command_bar;
pub mod layout;
pub mod menu_panel;
pub mod order_panel;
pub mod status_bar;

use ratatui::Frame;

use crate::app::App;

pub use order_panel::OrderView;

/// Main UI renderer
pub struct UI {
    pub order_view: OrderView,
}

impl UI {
    /// Create a new UI
    pub fn new() -> Self {
        Self {
            order_view: OrderView::new(),
        }
    }

    /// Render the entire UI
    pub fn render(&mut self, f: &mut Frame, app: &App) {
        // Get main layout areas
        let (status_area, content_area, command_area) = layout::Layout::main(f.area());

        status_bar::render(f, status_area, app);
        command_bar::render(f, command_area, app);

        // Split content into menu and order panes
        let (menu_area, order_area) = layout::Layout::panes(content_area);

        menu_panel::render(f, menu_area, app);
        self.order_view.render(f, order_area, app);
    }
}

impl Default for UI {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderdesk_core::ItemKind;
    use ratatui::{backend::TestBackend, Terminal};
    use std::path::PathBuf;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_empty_order() {
        let app = App::new(PathBuf::from("order.yml"));
        let mut ui = UI::new();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|f| ui.render(f, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("No items yet"));
        assert!(text.contains("[ Open ]"));
        assert!(text.contains("headlight"));
        assert!(text.contains("NORMAL"));
    }

    #[test]
    fn test_render_forms() {
        let mut app = App::new(PathBuf::from("order.yml"));
        app.add(ItemKind::Door);
        app.add(ItemKind::Engine);
        let mut ui = UI::new();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|f| ui.render(f, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Order (2)"));
        assert!(text.contains("[ Remove ]"));
        assert!(text.contains("< front >"));
        assert!(text.contains("Diesel"));
        assert!(text.contains("- 1 +"));
    }

    #[test]
    fn test_render_keeps_selection_visible() {
        let mut app = App::new(PathBuf::from("order.yml"));
        for _ in 0..8 {
            app.add(ItemKind::Headlight);
        }
        app.add(ItemKind::Engine);
        let mut ui = UI::new();
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();

        terminal.draw(|f| ui.render(f, &app)).unwrap();

        assert!(ui.order_view.offset > 0);
        assert!(screen_text(&terminal).contains("Engine"));
    }
}
