//! Advanced search panel for the member list.
//!
//! Four independent fields: member-number substring, name substring, and a
//! from/to bound on the policy renewal date. The panel owns its text inputs
//! and exposes the combined `SearchQuery`; filtering itself happens in the
//! store's filter engine.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::store::SearchQuery;
use crate::ui::components::TextInput;
use crate::ui::theme::StyleTokens;

/// The search fields, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum SearchField {
    #[default]
    MemberId,
    Name,
    FromDate,
    ToDate,
}

impl SearchField {
    const ORDER: [SearchField; 4] = [
        SearchField::MemberId,
        SearchField::Name,
        SearchField::FromDate,
        SearchField::ToDate,
    ];

    fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// The advanced search panel.
#[derive(Debug, Default)]
pub struct SearchPanel {
    /// Whether the panel is expanded and accepting input.
    visible: bool,
    /// Which field currently has focus.
    focused: SearchField,
    member_id: TextInput,
    name: TextInput,
    from_date: TextInput,
    to_date: TextInput,
}

impl SearchPanel {
    /// Create a collapsed panel with placeholder hints.
    pub fn new() -> Self {
        Self {
            visible: false,
            focused: SearchField::MemberId,
            member_id: TextInput::with_placeholder("Memb ID"),
            name: TextInput::with_placeholder("Member Name"),
            from_date: TextInput::with_placeholder("YYYY-MM-DD"),
            to_date: TextInput::with_placeholder("YYYY-MM-DD"),
        }
    }

    /// Toggle panel visibility. Hiding keeps the entered query.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        if self.visible {
            self.focused = SearchField::MemberId;
        }
    }

    /// Whether the panel is expanded.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Collapse the panel.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// The combined query across all four fields.
    pub fn query(&self) -> SearchQuery {
        SearchQuery {
            member_id: self.member_id.value().to_string(),
            name: self.name.value().to_string(),
            from_date: self.from_date.value().to_string(),
            to_date: self.to_date.value().to_string(),
        }
    }

    /// Whether any field has content.
    pub fn has_query(&self) -> bool {
        !self.query().is_empty()
    }

    /// Clear every field.
    pub fn clear(&mut self) {
        self.member_id.clear();
        self.name.clear();
        self.from_date.clear();
        self.to_date.clear();
    }

    /// Handle keyboard input while the panel is expanded.
    ///
    /// Returns true if the key was consumed.
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        if !self.visible {
            return false;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => {
                self.hide();
                true
            }
            (KeyCode::Tab, KeyModifiers::NONE) => {
                self.focused = self.focused.next();
                true
            }
            (KeyCode::BackTab, _) | (KeyCode::Tab, KeyModifiers::SHIFT) => {
                self.focused = self.focused.prev();
                true
            }
            // Enter collapses the panel; the query stays applied.
            (KeyCode::Enter, KeyModifiers::NONE) => {
                self.hide();
                true
            }
            _ => {
                self.focused_input_mut().handle_input(key);
                true
            }
        }
    }

    fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focused {
            SearchField::MemberId => &mut self.member_id,
            SearchField::Name => &mut self.name,
            SearchField::FromDate => &mut self.from_date,
            SearchField::ToDate => &mut self.to_date,
        }
    }

    /// The height the panel needs when expanded.
    pub fn height(&self) -> u16 {
        if self.visible {
            4
        } else {
            0
        }
    }

    /// Render the expanded panel: four inputs side by side plus a hint row.
    pub fn render(&self, frame: &mut Frame, area: Rect, tokens: &StyleTokens) {
        if !self.visible || area.height < 4 {
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(rows[0]);

        self.member_id.render_with_label(
            frame,
            cols[0],
            "Memb ID",
            self.focused == SearchField::MemberId,
            tokens,
        );
        self.name.render_with_label(
            frame,
            cols[1],
            "Member Name",
            self.focused == SearchField::Name,
            tokens,
        );
        self.from_date.render_with_label(
            frame,
            cols[2],
            "From Date",
            self.focused == SearchField::FromDate,
            tokens,
        );
        self.to_date.render_with_label(
            frame,
            cols[3],
            "To Date",
            self.focused == SearchField::ToDate,
            tokens,
        );

        let hint = Line::from(vec![Span::styled(
            " Tab next field · Enter apply · Esc close ",
            Style::default().fg(tokens.text_dim),
        )]);
        frame.render_widget(Paragraph::new(hint), rows[1]);
    }
}
