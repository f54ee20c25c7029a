use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use orderdesk_core::ItemKind;

use crate::app::App;
use crate::mode::Pane;

fn button(label: &str) -> Span<'static> {
    Span::styled(
        format!("[ {} ]", label),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )
}

/// Render the left menu: Open/Save, the type selector and Add
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focused_pane == Pane::Menu;
    let border_color = if focused {
        app.mode.color()
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Menu ")
        .border_style(Style::default().fg(border_color));

    let mut lines = vec![
        Line::from(vec![button("Open"), Span::raw(" "), button("Save")]),
        Line::from(""),
        Line::from(Span::styled("Item type", Style::default().fg(Color::DarkGray))),
    ];

    for (idx, kind) in ItemKind::ALL.iter().enumerate() {
        let line = if idx == app.selector {
            let style = if focused {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            Line::from(Span::styled(format!("> {}", kind), style))
        } else {
            Line::from(format!("  {}", kind))
        };
        lines.push(line);
    }

    lines.push(Line::from(""));
    lines.push(Line::from(button("Add")));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
