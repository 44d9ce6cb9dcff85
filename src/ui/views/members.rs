//! Members view: the searchable table/grid of member records.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::config::ViewMode;
use crate::store::{Member, SearchQuery};
use crate::ui::components::{render_member_grid, render_member_table, SearchPanel};
use crate::ui::theme::StyleTokens;

/// Actions returned from the members view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembersAction {
    /// Open the detail screen for the member with this id.
    OpenDetail(u32),
    /// Open the edit form for the member with this id.
    Edit(u32),
    /// Open the read-only form for the member with this id.
    View(u32),
    /// Open the creation form.
    CreateNew,
    /// Switch between table and grid presentation.
    ToggleViewMode,
}

/// The members list view with its search panel and cursor.
pub struct MembersView {
    /// Index of the selected row within the filtered list.
    selected: usize,
    /// Collapsible search panel.
    search: SearchPanel,
}

impl Default for MembersView {
    fn default() -> Self {
        Self::new()
    }
}

impl MembersView {
    /// Create a new members view.
    pub fn new() -> Self {
        Self {
            selected: 0,
            search: SearchPanel::new(),
        }
    }

    /// The current search query, as entered in the panel.
    pub fn query(&self) -> SearchQuery {
        self.search.query()
    }

    /// Whether the search panel is expanded and capturing keys.
    pub fn is_search_open(&self) -> bool {
        self.search.is_visible()
    }

    /// Index of the selected row within the filtered list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Clamp the cursor after the filtered list changed size.
    pub fn clamp_selection(&mut self, filtered_len: usize) {
        if filtered_len == 0 {
            self.selected = 0;
        } else if self.selected >= filtered_len {
            self.selected = filtered_len - 1;
        }
    }

    /// Handle keyboard input.
    ///
    /// `filtered_ids` is the id list the cursor moves over. Returns an
    /// action for the parent, or `None` when the key was consumed here
    /// or not recognized.
    pub fn handle_input(&mut self, key: KeyEvent, filtered_ids: &[u32]) -> Option<MembersAction> {
        // The search panel owns input while one of its fields is focused.
        if self.search.handle_input(key) {
            self.clamp_selection(filtered_ids.len());
            return None;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
                if !filtered_ids.is_empty() && self.selected < filtered_ids.len() - 1 {
                    self.selected += 1;
                }
                None
            }
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => {
                self.selected = 0;
                None
            }
            (KeyCode::Char('G'), _) | (KeyCode::End, _) => {
                self.selected = filtered_ids.len().saturating_sub(1);
                None
            }
            (KeyCode::Char('s'), KeyModifiers::NONE) | (KeyCode::Char('/'), KeyModifiers::NONE) => {
                self.search.toggle();
                None
            }
            (KeyCode::Char('c'), KeyModifiers::NONE) if self.search.has_query() => {
                self.search.clear();
                None
            }
            (KeyCode::Char('n'), KeyModifiers::NONE) => Some(MembersAction::CreateNew),
            (KeyCode::Char('v'), KeyModifiers::NONE) => Some(MembersAction::ToggleViewMode),
            (KeyCode::Char('e'), KeyModifiers::NONE) => self
                .selected_id(filtered_ids)
                .map(MembersAction::Edit),
            (KeyCode::Char('o'), KeyModifiers::NONE) => self
                .selected_id(filtered_ids)
                .map(MembersAction::View),
            (KeyCode::Enter, KeyModifiers::NONE) => self
                .selected_id(filtered_ids)
                .map(MembersAction::OpenDetail),
            _ => None,
        }
    }

    fn selected_id(&self, filtered_ids: &[u32]) -> Option<u32> {
        filtered_ids.get(self.selected).copied()
    }

    /// Render the view: search panel, member list, status bar.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        members: &[&Member],
        total: usize,
        view_mode: ViewMode,
        tokens: &StyleTokens,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(self.search.height()),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        if self.search.is_visible() {
            self.search.render(frame, chunks[0], tokens);
        }

        if members.is_empty() {
            let message = if self.search.has_query() {
                "No members match the current search"
            } else {
                "No members yet. Press n to add one."
            };
            let empty = Paragraph::new(Span::styled(
                message,
                Style::default().fg(tokens.text_dim),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(empty, chunks[1]);
        } else {
            match view_mode {
                ViewMode::Table => {
                    render_member_table(frame, chunks[1], members, self.selected, tokens)
                }
                ViewMode::Grid => {
                    render_member_grid(frame, chunks[1], members, self.selected, tokens)
                }
            }
        }

        self.render_status_bar(frame, chunks[2], members.len(), total, view_mode, tokens);
    }

    fn render_status_bar(
        &self,
        frame: &mut Frame,
        area: Rect,
        shown: usize,
        total: usize,
        view_mode: ViewMode,
        tokens: &StyleTokens,
    ) {
        let counts = if self.search.has_query() {
            format!(" {shown}/{total} members ")
        } else {
            format!(" {total} members ")
        };

        let line = Line::from(vec![
            Span::styled(
                counts,
                Style::default()
                    .fg(tokens.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("[{}] ", view_mode.display()),
                Style::default().fg(tokens.text_dim),
            ),
            Span::styled(
                "j/k:move  Enter:detail  n:new  e:edit  o:view  s:search  v:layout",
                Style::default().fg(tokens.text_dim),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_clamps_to_filtered_list() {
        let mut view = MembersView::new();
        let ids = vec![1, 2, 3];

        assert_eq!(view.handle_input(key(KeyCode::Char('j')), &ids), None);
        assert_eq!(view.handle_input(key(KeyCode::Char('j')), &ids), None);
        assert_eq!(view.selected(), 2);

        // Already at the bottom.
        view.handle_input(key(KeyCode::Char('j')), &ids);
        assert_eq!(view.selected(), 2);

        view.handle_input(key(KeyCode::Char('g')), &ids);
        assert_eq!(view.selected(), 0);

        view.handle_input(key(KeyCode::Char('k')), &ids);
        assert_eq!(view.selected(), 0);
    }

    #[test]
    fn test_jump_to_end() {
        let mut view = MembersView::new();
        let ids = vec![10, 20, 30, 40];
        view.handle_input(key(KeyCode::Char('G')), &ids);
        assert_eq!(view.selected(), 3);
    }

    #[test]
    fn test_enter_opens_detail_for_selected_id() {
        let mut view = MembersView::new();
        let ids = vec![10, 20, 30];
        view.handle_input(key(KeyCode::Char('j')), &ids);

        let action = view.handle_input(key(KeyCode::Enter), &ids);
        assert_eq!(action, Some(MembersAction::OpenDetail(20)));
    }

    #[test]
    fn test_enter_on_empty_list_does_nothing() {
        let mut view = MembersView::new();
        assert_eq!(view.handle_input(key(KeyCode::Enter), &[]), None);
        assert_eq!(view.handle_input(key(KeyCode::Char('e')), &[]), None);
    }

    #[test]
    fn test_edit_and_view_carry_selected_id() {
        let mut view = MembersView::new();
        let ids = vec![7, 8];

        assert_eq!(
            view.handle_input(key(KeyCode::Char('e')), &ids),
            Some(MembersAction::Edit(7))
        );
        assert_eq!(
            view.handle_input(key(KeyCode::Char('o')), &ids),
            Some(MembersAction::View(7))
        );
    }

    #[test]
    fn test_create_new() {
        let mut view = MembersView::new();
        assert_eq!(
            view.handle_input(key(KeyCode::Char('n')), &[]),
            Some(MembersAction::CreateNew)
        );
    }

    #[test]
    fn test_search_panel_consumes_input_while_open() {
        let mut view = MembersView::new();
        let ids = vec![1, 2];
        view.handle_input(key(KeyCode::Char('s')), &ids);

        // 'n' now types into the focused field instead of opening the form.
        let action = view.handle_input(key(KeyCode::Char('n')), &ids);
        assert_eq!(action, None);
        assert_eq!(view.query().member_id, "n");
    }

    #[test]
    fn test_clamp_selection_after_filter_shrinks() {
        let mut view = MembersView::new();
        let ids = vec![1, 2, 3, 4];
        view.handle_input(key(KeyCode::Char('G')), &ids);
        assert_eq!(view.selected(), 3);

        view.clamp_selection(2);
        assert_eq!(view.selected(), 1);

        view.clamp_selection(0);
        assert_eq!(view.selected(), 0);
    }
}
