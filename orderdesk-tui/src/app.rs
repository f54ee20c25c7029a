use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

use orderdesk_core::persist;
use orderdesk_core::{FieldWidget, ItemKind, OrderError, OrderPanel};

use crate::mode::{AppMode, Pane};

/// Message shown in the command bar
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Main application state
pub struct App {
    /// Current mode
    pub mode: AppMode,

    /// Which pane has focus
    pub focused_pane: Pane,

    /// Index into `ItemKind::ALL` of the type selector
    pub selector: usize,

    /// Displayed item forms
    pub panel: OrderPanel,

    /// Index of the selected form in the panel
    pub selected_form: usize,

    /// Cursor inside the selected form: 0 is the Remove button, i > 0 is field i - 1
    pub field_cursor: usize,

    /// Command input buffer
    pub command_input: String,

    /// Status message (shown in command bar)
    pub status: Option<StatusMessage>,

    /// Should quit?
    pub should_quit: bool,

    /// File used by Open and Save
    pub order_file: PathBuf,
}

impl App {
    /// Create a new App
    pub fn new(order_file: PathBuf) -> Self {
        Self {
            mode: AppMode::Normal,
            focused_pane: Pane::Menu,
            selector: 0,
            panel: OrderPanel::new(),
            selected_form: 0,
            field_cursor: 0,
            command_input: String::new(),
            status: None,
            should_quit: false,
            order_file,
        }
    }

    /// Item type currently shown in the selector
    pub fn selected_kind(&self) -> ItemKind {
        ItemKind::ALL[self.selector]
    }

    fn info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: false,
        });
    }

    fn fail(&mut self, action: &str, err: &OrderError) {
        warn!(action, error = %err, "action failed");
        self.status = Some(StatusMessage {
            text: format!("{} failed: {}", action, err),
            is_error: true,
        });
    }

    /// Append a default form of `kind` and select it
    pub fn add(&mut self, kind: ItemKind) {
        match self.panel.add(kind) {
            Ok(id) => {
                self.selected_form = self.panel.len() - 1;
                self.field_cursor = 0;
                self.info(format!("Added {} {}", kind, id));
            }
            Err(err) => self.fail("Add", &err),
        }
    }

    /// Write the current order to the order file
    pub fn save(&mut self) {
        let order = self.panel.snapshot();
        match persist::save(&self.order_file, &order) {
            Ok(()) => self.info(format!(
                "Saved {} item(s) to {}",
                order.len(),
                self.order_file.display()
            )),
            Err(err) => self.fail("Save", &err),
        }
    }

    /// Replace the panel with the contents of the order file
    pub fn open(&mut self) {
        let result = persist::load(&self.order_file).and_then(|order| self.panel.repopulate(&order));
        match result {
            Ok(()) => {
                self.selected_form = 0;
                self.field_cursor = 0;
                self.info(format!(
                    "Loaded {} item(s) from {}",
                    self.panel.len(),
                    self.order_file.display()
                ));
            }
            Err(err) if err.is_not_found() => {
                warn!(path = %self.order_file.display(), "no saved order to open");
                self.status = Some(StatusMessage {
                    text: format!("Open failed: no saved order at {}", self.order_file.display()),
                    is_error: true,
                });
            }
            Err(err) => self.fail("Open", &err),
        }
    }

    /// Remove the selected form
    pub fn remove_selected(&mut self) {
        let Some((id, form)) = self.panel.get(self.selected_form) else {
            return;
        };
        let kind = form.kind();
        if self.panel.remove(id).is_some() {
            self.selected_form = self.selected_form.min(self.panel.len().saturating_sub(1));
            self.field_cursor = 0;
            self.info(format!("Removed {} {}", kind, id));
        }
    }

    /// Step the field under the cursor
    pub fn adjust(&mut self, delta: i64) {
        let cursor = self.field_cursor;
        if cursor == 0 {
            return;
        }
        if let Some(form) = self.panel.get_mut(self.selected_form) {
            form.adjust(cursor - 1, delta);
        }
    }

    /// Press whatever is under the cursor
    pub fn activate(&mut self) {
        if self.field_cursor == 0 {
            self.remove_selected();
            return;
        }
        let index = self.field_cursor - 1;
        let Some(form) = self.panel.get_mut(self.selected_form) else {
            return;
        };
        let Some(is_flag) = form.fields().get(index).map(FieldWidget::is_flag) else {
            return;
        };
        if is_flag {
            form.select_flag(index);
        } else {
            form.adjust(index, 1);
        }
    }

    fn move_selector(&mut self, delta: isize) {
        let last = ItemKind::ALL.len() - 1;
        self.selector = self.selector.saturating_add_signed(delta).min(last);
    }

    fn move_form(&mut self, delta: isize) {
        if self.panel.is_empty() {
            return;
        }
        let last = self.panel.len() - 1;
        self.selected_form = self.selected_form.saturating_add_signed(delta).min(last);
        self.field_cursor = 0;
    }

    fn move_field(&mut self, delta: isize) {
        let Some((_, form)) = self.panel.get(self.selected_form) else {
            return;
        };
        let last = form.fields().len();
        self.field_cursor = self.field_cursor.saturating_add_signed(delta).min(last);
    }

    /// Handle keyboard input
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match self.mode {
            AppMode::Normal => self.handle_normal_mode(key),
            AppMode::Command => self.handle_command_mode(key),
        }
    }

    /// Handle normal mode keys
    fn handle_normal_mode(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') => self.save(),
                KeyCode::Char('o') => self.open(),
                KeyCode::Char('c') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char(':') => {
                self.mode = AppMode::Command;
                self.command_input.clear();
            }
            KeyCode::Tab | KeyCode::BackTab => self.focused_pane = self.focused_pane.toggle(),
            KeyCode::Char('s') => self.save(),
            KeyCode::Char('o') => self.open(),
            KeyCode::Char('a') => self.add(self.selected_kind()),
            _ => match self.focused_pane {
                Pane::Menu => self.handle_menu_key(key),
                Pane::Order => self.handle_order_key(key),
            },
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selector(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selector(1),
            KeyCode::Enter => self.add(self.selected_kind()),
            _ => {}
        }
    }

    fn handle_order_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_form(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_form(1),
            KeyCode::Left | KeyCode::Char('h') => self.move_field(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_field(1),
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust(1),
            KeyCode::Char('-') => self.adjust(-1),
            KeyCode::Char(' ') | KeyCode::Enter => self.activate(),
            KeyCode::Char('x') | KeyCode::Delete => self.remove_selected(),
            _ => {}
        }
    }

    /// Handle command mode keys
    fn handle_command_mode(&mut self, key: KeyEvent) {
        match key.code {
            // Cancel command
            KeyCode::Esc => {
                self.mode = AppMode::Normal;
                self.command_input.clear();
            }

            // Execute command
            KeyCode::Enter => {
                self.execute_command();
                self.mode = AppMode::Normal;
                self.command_input.clear();
            }

            KeyCode::Backspace => {
                self.command_input.pop();
            }

            KeyCode::Char(c) => {
                self.command_input.push(c);
            }

            _ => {}
        }
    }

    /// Execute a command
    fn execute_command(&mut self) {
        let input = self.command_input.trim().to_string();
        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "q" | "quit" => self.should_quit = true,
            "w" | "save" => self.save(),
            "e" | "open" | "load" => self.open(),
            "rm" | "remove" => self.remove_selected(),
            "add" => match parts.next() {
                None => self.add(self.selected_kind()),
                Some(name) => match name.parse::<ItemKind>() {
                    Ok(kind) => self.add(kind),
                    Err(err) => self.fail("Add", &err),
                },
            },
            "" => {}
            _ => self.info(format!("Unknown command: {}", cmd)),
        }
    }

    /// Poll for events with timeout
    pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}
