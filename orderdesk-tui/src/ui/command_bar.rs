use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::mode::{AppMode, Pane};

/// Render the command bar (bottom bar)
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.mode {
        AppMode::Command => Line::from(vec![
            Span::styled(":", Style::default().fg(Color::Yellow)),
            Span::raw(&app.command_input),
            Span::styled("_", Style::default().fg(Color::Green)), // Cursor
        ]),

        AppMode::Normal => match app.status {
            Some(ref msg) if msg.is_error => {
                Line::from(Span::styled(msg.text.as_str(), Style::default().fg(Color::Red)))
            }
            Some(ref msg) => Line::from(msg.text.as_str()),
            None => {
                let hints = match app.focused_pane {
                    Pane::Menu => "j/k: type | Enter: add | o: open | s: save | Tab: forms | :: command | q: quit",
                    Pane::Order => "j/k: item | h/l: field | +/-: change | Space: press | x: remove | Tab: menu",
                };
                Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)))
            }
        },
    };

    f.render_widget(Paragraph::new(content), area);
}
