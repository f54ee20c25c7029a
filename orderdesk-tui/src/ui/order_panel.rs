use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use orderdesk_core::{FieldWidget, FormId, ItemForm};

use crate::app::App;
use crate::mode::Pane;
use crate::ui::layout::Layout;

/// Rows of the two-column grid: header (label + Remove) then the fields
fn grid_rows(form: &ItemForm) -> usize {
    (form.fields().len() + 2).div_ceil(2)
}

/// Height of a rendered form, borders included
pub fn form_height(form: &ItemForm) -> u16 {
    2 + 2 * grid_rows(form) as u16
}

fn control_text(field: &FieldWidget) -> String {
    match field {
        FieldWidget::Choice {
            options, selected, ..
        } => format!("< {} >", options[*selected]),
        FieldWidget::Integer { value, .. } => format!("- {} +", value),
        FieldWidget::Flag { label, checked } => {
            format!("({}) {}", if *checked { "•" } else { " " }, label)
        }
    }
}

/// Scrollable list of item forms
pub struct OrderView {
    /// Index of the first visible form
    pub offset: usize,
}

impl OrderView {
    pub fn new() -> Self {
        Self { offset: 0 }
    }

    /// Move the offset so `selected` is fully visible when it fits
    pub fn scroll_to(&mut self, selected: usize, heights: &[u16], viewport: u16) {
        if heights.is_empty() {
            self.offset = 0;
            return;
        }
        let selected = selected.min(heights.len() - 1);
        if selected < self.offset {
            self.offset = selected;
        }
        while self.offset < selected
            && heights[self.offset..=selected].iter().sum::<u16>() > viewport
        {
            self.offset += 1;
        }
    }

    /// Render the order panel
    pub fn render(&mut self, f: &mut Frame, area: Rect, app: &App) {
        let focused = app.focused_pane == Pane::Order;
        let border_color = if focused {
            app.mode.color()
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Order ({}) ", app.panel.len()))
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        f.render_widget(block, area);

        if app.panel.is_empty() {
            self.offset = 0;
            let empty_msg = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No items yet",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Pick a type on the left and press Enter, or press 'o' to open a saved order",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .alignment(Alignment::Center);
            f.render_widget(empty_msg, inner);
            return;
        }

        let heights: Vec<u16> = app.panel.forms().map(|(_, form)| form_height(form)).collect();
        self.scroll_to(app.selected_form, &heights, inner.height);

        // Leave the last column for the scrollbar
        let content = Rect {
            width: inner.width.saturating_sub(1),
            ..inner
        };

        let mut y = content.y;
        for (idx, (id, form)) in app.panel.forms().enumerate().skip(self.offset) {
            let remaining = content.bottom().saturating_sub(y);
            if remaining == 0 {
                break;
            }
            let height = heights[idx].min(remaining);
            let cursor = (focused && idx == app.selected_form).then_some(app.field_cursor);
            let selected = idx == app.selected_form;
            render_form(
                f,
                Rect::new(content.x, y, content.width, height),
                id,
                form,
                selected,
                cursor,
            );
            y += height;
        }

        let mut scrollbar_state = ScrollbarState::new(app.panel.len()).position(self.offset);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            inner,
            &mut scrollbar_state,
        );
    }
}

impl Default for OrderView {
    fn default() -> Self {
        Self::new()
    }
}

/// Render one form as a bordered two-column grid
fn render_form(
    f: &mut Frame,
    area: Rect,
    id: FormId,
    form: &ItemForm,
    selected: bool,
    cursor: Option<usize>,
) {
    let border_style = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", id))
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut cells: Vec<Vec<Line>> = vec![
        vec![Line::from(Span::styled(
            form.kind().display_name(),
            Style::default().add_modifier(Modifier::BOLD),
        ))],
        vec![Line::from(""), Line::from("[ Remove ]")],
    ];
    for field in form.fields() {
        cells.push(vec![
            Line::from(Span::styled(field.label(), Style::default().fg(Color::DarkGray))),
            Line::from(control_text(field)),
        ]);
    }

    let grid = Layout::grid(inner, grid_rows(form));
    for (idx, lines) in cells.into_iter().enumerate() {
        let Some((left, right)) = grid.get(idx / 2) else {
            break;
        };
        let cell_area = if idx % 2 == 0 { *left } else { *right };

        // Cursor 0 sits on Remove (cell 1), cursor i on field i - 1 (cell i + 1)
        let focused = idx >= 1 && cursor == Some(idx - 1);
        let style = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };

        f.render_widget(Paragraph::new(lines).style(style), cell_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderdesk_core::ItemKind;

    #[test]
    fn test_form_heights() {
        let headlight = ItemForm::create(ItemKind::Headlight, None).unwrap();
        let door = ItemForm::create(ItemKind::Door, None).unwrap();
        let engine = ItemForm::create(ItemKind::Engine, None).unwrap();

        assert_eq!(form_height(&headlight), 6);
        assert_eq!(form_height(&door), 8);
        assert_eq!(form_height(&engine), 10);
    }

    #[test]
    fn test_scroll_to() {
        let heights = [8, 8, 8, 8, 8];
        let mut view = OrderView::new();

        view.scroll_to(1, &heights, 20);
        assert_eq!(view.offset, 0);

        view.scroll_to(4, &heights, 20);
        assert_eq!(view.offset, 3);

        view.scroll_to(2, &heights, 20);
        assert_eq!(view.offset, 2);

        // A form taller than the viewport is shown from its top
        view.scroll_to(4, &heights, 4);
        assert_eq!(view.offset, 4);

        view.scroll_to(0, &[], 20);
        assert_eq!(view.offset, 0);
    }
}
