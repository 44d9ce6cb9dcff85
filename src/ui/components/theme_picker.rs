//! Theme picker component.
//!
//! This module provides a popup dialog for switching the background theme.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use crate::ui::theme::{option, BackgroundTheme};

/// Action returned from the theme picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePickerAction {
    /// User selected a theme.
    Select(BackgroundTheme),
    /// User cancelled the selection.
    Cancel,
}

/// A popup component for selecting the background theme.
#[derive(Debug)]
pub struct ThemePicker {
    /// Currently selected index into [`BackgroundTheme::ALL`].
    selected: usize,
    /// Whether the picker is visible.
    visible: bool,
    /// The currently active theme, highlighted in the list.
    current: BackgroundTheme,
    /// List state for ratatui.
    list_state: ListState,
}

impl Default for ThemePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemePicker {
    /// Create a new theme picker.
    pub fn new() -> Self {
        Self {
            selected: 0,
            visible: false,
            current: BackgroundTheme::default(),
            list_state: ListState::default(),
        }
    }

    /// Show the picker with the given theme pre-selected.
    pub fn show(&mut self, current: BackgroundTheme) {
        self.current = current;
        self.selected = BackgroundTheme::ALL
            .iter()
            .position(|t| *t == current)
            .unwrap_or(0);
        self.list_state.select(Some(self.selected));
        self.visible = true;
    }

    /// Hide the picker.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Check if the picker is visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Get the currently highlighted theme.
    pub fn selected_theme(&self) -> BackgroundTheme {
        BackgroundTheme::ALL[self.selected]
    }

    /// Move selection down.
    fn move_down(&mut self) {
        if self.selected < BackgroundTheme::ALL.len() - 1 {
            self.selected += 1;
            self.list_state.select(Some(self.selected));
        }
    }

    /// Move selection up.
    fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.list_state.select(Some(self.selected));
        }
    }

    /// Handle keyboard input.
    ///
    /// Returns an optional action when the user makes a selection or cancels.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<ThemePickerAction> {
        match (key.code, key.modifiers) {
            // Navigation with j/k or arrow keys
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
                self.move_down();
                None
            }
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => {
                self.move_up();
                None
            }
            // Selection
            (KeyCode::Enter, KeyModifiers::NONE) => {
                self.visible = false;
                Some(ThemePickerAction::Select(self.selected_theme()))
            }
            // Cancel with q or Esc
            (KeyCode::Esc, _) | (KeyCode::Char('q'), KeyModifiers::NONE) => {
                self.visible = false;
                Some(ThemePickerAction::Cancel)
            }
            _ => None,
        }
    }

    /// Render the theme picker.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        if !self.visible {
            return;
        }

        let dialog_width = 52u16.min(area.width.saturating_sub(4));
        let max_visible_items = 12u16;
        let item_count = BackgroundTheme::ALL.len() as u16;
        // Height: title (1) + border (2) + items + hint (1) + margin (1)
        let dialog_height =
            (item_count.min(max_visible_items) + 5).min(area.height.saturating_sub(4));

        let dialog_area = centered_rect(area, dialog_width, dialog_height);

        // Clear the dialog area
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(Span::styled(
                " Background Theme ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner_area = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        // Split inner area for list and hint
        let list_height = inner_area.height.saturating_sub(1);
        let list_area = Rect {
            x: inner_area.x,
            y: inner_area.y,
            width: inner_area.width,
            height: list_height,
        };
        let hint_area = Rect {
            x: inner_area.x,
            y: inner_area.y + list_height,
            width: inner_area.width,
            height: 1,
        };

        let items: Vec<ListItem> = BackgroundTheme::ALL
            .iter()
            .map(|theme| {
                let opt = option(*theme);
                let is_current = *theme == self.current;
                let display = if is_current {
                    format!("{:<14} {} (current)", opt.name, opt.description)
                } else {
                    format!("{:<14} {}", opt.name, opt.description)
                };
                let style = if is_current {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(opt.accent)
                };
                ListItem::new(Span::styled(display, style))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(Color::White)
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, list_area, &mut self.list_state);

        let hint = ratatui::widgets::Paragraph::new(Span::styled(
            "j/k:navigate  Enter:select  q/Esc:cancel",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(hint, hint_area);
    }
}

/// Calculate a centered rectangle within the given area.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
