//! Main application state and event loop.
//!
//! This module implements The Elm Architecture (TEA) pattern for predictable
//! state management in the TUI application. Every state change flows through
//! [`App::update`]; rendering is a function of the resulting state.

use tracing::{debug, info, trace, warn};

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config::{Config, ViewMode};
use crate::error::AppError;
use crate::events::Event;
use crate::store::{FilterEngine, MemberStore, SearchQuery};
use crate::ui::components::{NotificationManager, ThemePicker, ThemePickerAction};
use crate::ui::theme::{BackgroundTheme, StyleTokens};
use crate::ui::views::{
    render_dashboard, render_profile, DetailAction, DetailView, FormAction, MemberFormView,
    MembersAction, MembersView,
};

/// The screen currently shown in the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// The searchable member list.
    #[default]
    Members,
    /// Aggregate statistics.
    Dashboard,
    /// The signed-in agent's profile.
    Profile,
    /// Full record of a single member.
    MemberDetail,
    /// Key binding reference.
    Help,
}

/// Which modal dialog is open, and over which record.
///
/// At most one modal exists at a time; opening one replaces the previous
/// state entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    /// No dialog.
    #[default]
    Closed,
    /// The creation form is open.
    CreatingNew,
    /// The edit form is open for this member id.
    Editing(u32),
    /// The read-only form is open for this member id.
    ViewingReadOnly(u32),
}

/// The main application struct that holds all state.
///
/// This implements the Model part of The Elm Architecture (TEA).
pub struct App {
    /// All member records.
    store: MemberStore,
    /// Memoized search over the store.
    filter: FilterEngine,
    /// The applied search query.
    query: SearchQuery,
    /// The screen being shown.
    screen: Screen,
    /// The screen to return to when leaving Help.
    previous_screen: Screen,
    /// Which modal is open.
    modal_state: ModalState,
    /// The active background theme.
    theme: BackgroundTheme,
    /// Style tokens derived from the theme. Recomputed only when the
    /// theme changes, never as a side effect of rendering.
    tokens: StyleTokens,
    /// Table or grid presentation of the member list.
    view_mode: ViewMode,
    /// The member list view.
    members_view: MembersView,
    /// The member detail view.
    detail_view: DetailView,
    /// The modal create/edit/view form.
    form: MemberFormView,
    /// Theme selection popup.
    theme_picker: ThemePicker,
    /// Toast notifications.
    notifications: NotificationManager,
    /// Application configuration.
    config: Config,
    /// Whether the application should quit.
    should_quit: bool,
}

impl App {
    /// Create a new application instance with seed data and the config
    /// loaded from disk.
    pub fn new() -> Self {
        Self::with_config(Config::load_or_default())
    }

    /// Create a new application instance with the given configuration.
    ///
    /// This is useful for testing and for custom initialization.
    pub fn with_config(config: Config) -> Self {
        debug!("Creating application instance");

        let theme = config.settings.background_theme();
        let view_mode = config.settings.view_mode;

        Self {
            store: MemberStore::with_seed_data(),
            filter: FilterEngine::new(),
            query: SearchQuery::default(),
            screen: Screen::Members,
            previous_screen: Screen::Members,
            modal_state: ModalState::Closed,
            theme,
            tokens: StyleTokens::for_theme(theme),
            view_mode,
            members_view: MembersView::new(),
            detail_view: DetailView::new(),
            form: MemberFormView::new(),
            theme_picker: ThemePicker::new(),
            notifications: NotificationManager::new(),
            config,
            should_quit: false,
        }
    }

    /// Returns whether the application should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The screen being shown.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Which modal is open.
    pub fn modal_state(&self) -> ModalState {
        self.modal_state
    }

    /// The active background theme.
    pub fn theme(&self) -> BackgroundTheme {
        self.theme
    }

    /// The member store.
    pub fn store(&self) -> &MemberStore {
        &self.store
    }

    /// The current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Switch the background theme and recompute the derived style tokens.
    ///
    /// Token recomputation happens here and only here, so a theme value
    /// and its tokens can never drift apart.
    pub fn set_theme(&mut self, theme: BackgroundTheme) {
        info!(theme = theme.name(), "Switching theme");
        self.theme = theme;
        self.tokens = StyleTokens::for_theme(theme);
        self.config.settings.theme = theme.name().to_string();
    }

    /// Update the application state based on an event.
    ///
    /// This implements the Update part of The Elm Architecture (TEA).
    /// All state changes flow through this method for predictable behavior.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Quit => {
                info!("Quit event received");
                self.should_quit = true;
            }
            Event::Key(key_event) => {
                trace!(key = ?key_event.code, modifiers = ?key_event.modifiers, "Key event");
                self.handle_key_event(key_event);
            }
            Event::Resize(width, height) => {
                trace!(width, height, "Terminal resize event");
                // Resize is handled automatically by ratatui
            }
            Event::Tick => {
                self.notifications.tick();
            }
        }
    }

    /// Handle keyboard input events.
    fn handle_key_event(&mut self, key_event: crossterm::event::KeyEvent) {
        use crossterm::event::{KeyCode, KeyModifiers};

        // The form blocks all other input while open.
        if self.form.is_open() {
            if let Some(action) = self.form.handle_input(key_event) {
                self.handle_form_action(action);
            }
            return;
        }

        // Theme picker second.
        if self.theme_picker.is_visible() {
            if let Some(action) = self.theme_picker.handle_input(key_event) {
                match action {
                    ThemePickerAction::Select(theme) => self.set_theme(theme),
                    ThemePickerAction::Cancel => debug!("Theme selection cancelled"),
                }
            }
            return;
        }

        // While the search panel captures keys, only Ctrl+C stays global.
        let typing = self.screen == Screen::Members && self.members_view.is_search_open();

        // Global key bindings
        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Char('?'), KeyModifiers::NONE) if !typing => {
                if self.screen != Screen::Help {
                    self.previous_screen = self.screen;
                    self.screen = Screen::Help;
                }
                return;
            }
            (KeyCode::Char('1'), KeyModifiers::NONE) if !typing => {
                self.go_to(Screen::Members);
                return;
            }
            (KeyCode::Char('2'), KeyModifiers::NONE) if !typing => {
                self.go_to(Screen::Dashboard);
                return;
            }
            (KeyCode::Char('3'), KeyModifiers::NONE) if !typing => {
                self.go_to(Screen::Profile);
                return;
            }
            (KeyCode::Char('t'), KeyModifiers::NONE)
                if !typing && self.screen != Screen::MemberDetail =>
            {
                self.theme_picker.show(self.theme);
                return;
            }
            _ => {}
        }

        // Screen-specific key handling
        match self.screen {
            Screen::Members => {
                if !typing
                    && key_event.code == KeyCode::Char('q')
                    && key_event.modifiers == KeyModifiers::NONE
                {
                    self.should_quit = true;
                    return;
                }

                let ids = self.filtered_ids();
                if let Some(action) = self.members_view.handle_input(key_event, &ids) {
                    self.handle_members_action(action);
                } else {
                    // Typing in the search panel may have changed the query.
                    self.apply_search();
                }
            }
            Screen::MemberDetail => {
                if let Some(action) = self.detail_view.handle_input(key_event) {
                    match action {
                        DetailAction::GoBack => {
                            debug!("Leaving member detail");
                            self.detail_view.clear();
                            self.screen = Screen::Members;
                        }
                        DetailAction::Edit(id) => self.open_edit(id),
                    }
                }
            }
            Screen::Dashboard | Screen::Profile => {
                match key_event.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        if key_event.code == KeyCode::Esc {
                            self.screen = Screen::Members;
                        } else {
                            self.should_quit = true;
                        }
                    }
                    _ => {}
                }
            }
            Screen::Help => {
                if key_event.code == KeyCode::Esc
                    || (key_event.code == KeyCode::Char('q')
                        && key_event.modifiers == KeyModifiers::NONE)
                {
                    self.screen = self.previous_screen;
                }
            }
        }
    }

    fn go_to(&mut self, screen: Screen) {
        if self.screen == Screen::MemberDetail {
            self.detail_view.clear();
        }
        self.screen = screen;
    }

    fn handle_members_action(&mut self, action: MembersAction) {
        match action {
            MembersAction::OpenDetail(id) => self.open_detail(id),
            MembersAction::Edit(id) => self.open_edit(id),
            MembersAction::View(id) => self.open_view(id),
            MembersAction::CreateNew => self.open_create(),
            MembersAction::ToggleViewMode => {
                self.view_mode = self.view_mode.toggled();
                self.config.settings.view_mode = self.view_mode;
                debug!(mode = self.view_mode.display(), "Toggled list layout");
            }
        }
    }

    /// Open the detail screen. The screen is entered even when the id no
    /// longer resolves; the detail view then renders nothing.
    fn open_detail(&mut self, id: u32) {
        debug!(member = id, "Opening member detail");
        match self.store.get(id).cloned() {
            Some(member) => self.detail_view.set_member(member),
            None => self.detail_view.clear(),
        }
        self.screen = Screen::MemberDetail;
    }

    fn open_create(&mut self) {
        let member_id = format!("MBR{:03}", self.store.len() as u32 + 1);
        debug!(member_id = %member_id, "Opening creation form");
        self.form.open_create(member_id);
        self.modal_state = ModalState::CreatingNew;
    }

    fn open_edit(&mut self, id: u32) {
        match self.store.get(id) {
            Some(member) => {
                debug!(member = id, "Opening edit form");
                self.form.open_edit(member);
                self.modal_state = ModalState::Editing(id);
            }
            None => self.handle_error(&AppError::Store(
                crate::store::StoreError::NotFound(id),
            )),
        }
    }

    fn open_view(&mut self, id: u32) {
        match self.store.get(id) {
            Some(member) => {
                self.form.open_view(member);
                self.modal_state = ModalState::ViewingReadOnly(id);
            }
            None => self.handle_error(&AppError::Store(
                crate::store::StoreError::NotFound(id),
            )),
        }
    }

    fn handle_form_action(&mut self, action: FormAction) {
        let modal = self.modal_state;
        self.modal_state = ModalState::Closed;

        let draft = match action {
            FormAction::Cancel => {
                debug!("Form dismissed");
                return;
            }
            FormAction::Save(draft) => draft,
        };

        match modal {
            ModalState::CreatingNew => {
                let member = self.store.create(draft);
                let message = format!("Member {} created", member.member_id);
                info!(member = member.id, "Created member");
                self.notifications.success(message);
                // The save may change what the active search matches.
                self.apply_search();
            }
            ModalState::Editing(id) => match self.store.update(id, draft) {
                Ok(member) => {
                    let message = format!("Member {} updated", member.member_id);
                    let member = member.clone();
                    info!(member = id, "Updated member");
                    self.notifications.success(message);
                    // Keep an open detail screen in sync with the edit.
                    if self.detail_view.member().map(|m| m.id) == Some(id) {
                        self.detail_view.set_member(member);
                    }
                    self.apply_search();
                }
                Err(e) => self.handle_error(&AppError::Store(e)),
            },
            ModalState::ViewingReadOnly(_) | ModalState::Closed => {
                // Read-only forms never emit Save.
                warn!("Save action from a non-editing modal state");
            }
        }
    }

    /// Handle an application error: toast for recoverable errors, quit
    /// flag for critical ones.
    pub fn handle_error(&mut self, error: &AppError) {
        if error.is_critical() {
            warn!(error = %error, "Critical error");
            self.should_quit = true;
        } else {
            debug!(error = %error, "Recoverable error");
            self.notifications.error(error.user_message());
        }
    }

    /// Re-read the query from the search panel and drop the stale cursor
    /// position if the match list shrank.
    fn apply_search(&mut self) {
        let query = self.members_view.query();
        if query != self.query {
            self.query = query;
        }
        let count = self.filter.filter(&self.store, &self.query).len();
        self.members_view.clamp_selection(count);
    }

    /// The ids of members matching the current query, in store order.
    fn filtered_ids(&mut self) -> Vec<u32> {
        self.filter.filter(&self.store, &self.query).to_vec()
    }

    /// Render the application UI.
    ///
    /// This implements the View part of The Elm Architecture (TEA).
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(1),    // Content
                Constraint::Length(1), // Footer
            ])
            .split(area);

        self.render_header(frame, chunks[0]);
        self.render_content(frame, chunks[1]);
        self.render_footer(frame, chunks[2]);

        // Overlays, bottom to top.
        self.form.render(frame, area, &self.tokens);
        self.theme_picker.render(frame, area);
        self.notifications.render(frame, area);
    }

    /// Render the application header.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let title = Line::from(vec![
            Span::styled(
                "MemberDash",
                Style::default()
                    .fg(self.tokens.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  [{}]", self.theme.name()),
                Style::default().fg(self.tokens.text_dim),
            ),
        ]);
        let header = Paragraph::new(title).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(self.tokens.border)),
        );
        frame.render_widget(header, area);
    }

    /// Render the main content area based on the current screen.
    fn render_content(&mut self, frame: &mut Frame, area: Rect) {
        match self.screen {
            Screen::Members => {
                self.filter.filter(&self.store, &self.query);
                let members = self.filter.members(&self.store);
                self.members_view.render(
                    frame,
                    area,
                    &members,
                    self.store.len(),
                    self.view_mode,
                    &self.tokens,
                );
            }
            Screen::MemberDetail => self.detail_view.render(frame, area, &self.tokens),
            Screen::Dashboard => render_dashboard(frame, area, &self.store, &self.tokens),
            Screen::Profile => render_profile(frame, area, &self.tokens),
            Screen::Help => self.render_help(frame, area),
        }
    }

    /// Render the footer with screen tabs and global hints.
    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let tab = |label: &str, active: bool| {
            if active {
                Span::styled(
                    format!(" {label} "),
                    Style::default()
                        .fg(self.tokens.accent)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED),
                )
            } else {
                Span::styled(format!(" {label} "), Style::default().fg(self.tokens.text_dim))
            }
        };

        let footer = Line::from(vec![
            tab("1:Members", matches!(self.screen, Screen::Members | Screen::MemberDetail)),
            tab("2:Dashboard", self.screen == Screen::Dashboard),
            tab("3:Profile", self.screen == Screen::Profile),
            Span::styled(
                "  t:theme  ?:help  q:quit",
                Style::default().fg(self.tokens.text_dim),
            ),
        ]);
        frame.render_widget(Paragraph::new(footer), area);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let heading = Style::default()
            .fg(self.tokens.accent)
            .add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(self.tokens.text_dim);

        let lines = vec![
            Line::raw(""),
            Line::styled("Help", heading),
            Line::raw(""),
            Line::styled("Global:", heading),
            Line::raw("  1 / 2 / 3 - Members / Dashboard / Profile"),
            Line::raw("  t         - Switch background theme"),
            Line::raw("  Ctrl+C    - Quit"),
            Line::raw(""),
            Line::styled("Members:", heading),
            Line::raw("  j / k     - Move selection"),
            Line::raw("  g / G     - First / last member"),
            Line::raw("  Enter     - Open member detail"),
            Line::raw("  n         - New member"),
            Line::raw("  e         - Edit selected member"),
            Line::raw("  o         - View selected member (read only)"),
            Line::raw("  s or /    - Toggle search panel"),
            Line::raw("  c         - Clear search"),
            Line::raw("  v         - Table / grid layout"),
            Line::raw("  q         - Quit"),
            Line::raw(""),
            Line::styled("Member Detail:", heading),
            Line::raw("  j / k     - Scroll"),
            Line::raw("  e         - Edit this member"),
            Line::raw("  q / Esc   - Back to list"),
            Line::raw(""),
            Line::styled("Press Esc or q to close this help screen", dim),
        ];

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn test_app() -> App {
        App::with_config(Config::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.update(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_app_starts_on_members_screen() {
        let app = test_app();
        assert_eq!(app.screen(), Screen::Members);
        assert_eq!(app.modal_state(), ModalState::Closed);
        assert!(!app.should_quit());
        assert_eq!(app.store().len(), 5);
    }

    #[test]
    fn test_default_theme_is_dark() {
        let app = test_app();
        assert_eq!(app.theme(), BackgroundTheme::Dark);
    }

    #[test]
    fn test_quit_events() {
        let mut app = test_app();
        app.update(Event::Quit);
        assert!(app.should_quit());

        let mut app = test_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());

        let mut app = test_app();
        app.update(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit());
    }

    #[test]
    fn test_screen_navigation_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.screen(), Screen::Dashboard);

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.screen(), Screen::Profile);

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.screen(), Screen::Members);
    }

    #[test]
    fn test_help_returns_to_previous_screen() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.screen(), Screen::Help);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen(), Screen::Dashboard);
    }

    #[test]
    fn test_enter_opens_detail_with_selected_member() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.screen(), Screen::MemberDetail);
        assert_eq!(app.detail_view.member().map(|m| m.id), Some(2));
    }

    #[test]
    fn test_detail_back_returns_to_members() {
        let mut app = test_app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::MemberDetail);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen(), Screen::Members);
        assert!(app.detail_view.member().is_none());
    }

    #[test]
    fn test_detail_survives_missing_record() {
        let mut app = test_app();
        app.open_detail(999);

        assert_eq!(app.screen(), Screen::MemberDetail);
        assert!(app.detail_view.member().is_none());
    }

    #[test]
    fn test_create_flow_assigns_next_member_id() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.modal_state(), ModalState::CreatingNew);

        // Fill the required fields and submit.
        type_text(&mut app, "Farah Khan");
        press(&mut app, KeyCode::Tab); // Tier
        press(&mut app, KeyCode::Tab); // Address
        press(&mut app, KeyCode::Tab); // City
        press(&mut app, KeyCode::Tab); // Mobile
        type_text(&mut app, "9000011111");
        press(&mut app, KeyCode::Tab); // Active
        press(&mut app, KeyCode::Tab); // Dob
        type_text(&mut app, "1991-06-02");
        for _ in 0..10 {
            press(&mut app, KeyCode::Tab); // through to Submit
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.modal_state(), ModalState::Closed);
        assert_eq!(app.store().len(), 6);
        let member = app.store().get(6).unwrap();
        assert_eq!(member.member_id, "MBR006");
        assert_eq!(member.name, "Farah Khan");
        assert!(!app.notifications.is_empty());
    }

    #[test]
    fn test_edit_flow_preserves_identity() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.modal_state(), ModalState::Editing(1));

        // Append to the name, then submit.
        press(&mut app, KeyCode::End);
        type_text(&mut app, " Jr");
        for _ in 0..16 {
            press(&mut app, KeyCode::Tab);
        }
        press(&mut app, KeyCode::Enter);

        let member = app.store().get(1).unwrap();
        assert_eq!(member.member_id, "MBR001");
        assert_eq!(member.name, "Alice Shah Jr");
        assert_eq!(app.store().len(), 5);
    }

    #[test]
    fn test_update_missing_member_surfaces_error_toast() {
        let mut app = test_app();
        app.modal_state = ModalState::Editing(999);
        app.handle_form_action(FormAction::Save(crate::store::MemberDraft::default()));

        assert_eq!(app.modal_state(), ModalState::Closed);
        assert!(!app.notifications.is_empty());
        assert_eq!(app.store().len(), 5);
    }

    #[test]
    fn test_read_only_view_never_saves() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('o'));
        assert_eq!(app.modal_state(), ModalState::ViewingReadOnly(1));

        type_text(&mut app, "zz");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.modal_state(), ModalState::Closed);
        assert_eq!(app.store().get(1).unwrap().name, "Alice Shah");
    }

    #[test]
    fn test_form_cancel_discards_draft() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "Ghost Member");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.modal_state(), ModalState::Closed);
        assert_eq!(app.store().len(), 5);
    }

    #[test]
    fn test_search_narrows_member_list() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Tab); // focus the name field
        type_text(&mut app, "alice");
        press(&mut app, KeyCode::Enter); // apply and collapse

        assert_eq!(app.filtered_ids(), vec![1]);
    }

    #[test]
    fn test_search_typing_does_not_trigger_global_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('s'));
        type_text(&mut app, "q2n"); // would otherwise quit, switch screen, open form

        assert!(!app.should_quit());
        assert_eq!(app.screen(), Screen::Members);
        assert_eq!(app.modal_state(), ModalState::Closed);
    }

    #[test]
    fn test_selection_clamped_when_filter_shrinks() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.members_view.selected(), 4);

        press(&mut app, KeyCode::Char('s'));
        type_text(&mut app, "MBR001");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.filtered_ids(), vec![1]);
        assert_eq!(app.members_view.selected(), 0);
    }

    #[test]
    fn test_selection_clamped_when_edit_drops_match() {
        let mut app = test_app();

        // Search by name: "an" matches Chitra Deshpande and Esha Banerjee.
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "an");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.filtered_ids(), vec![3, 5]);

        // Select the last match and rename it out of the filter.
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.members_view.selected(), 1);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.modal_state(), ModalState::Editing(5));

        press(&mut app, KeyCode::End);
        for _ in 0..8 {
            press(&mut app, KeyCode::Backspace);
        }
        for _ in 0..16 {
            press(&mut app, KeyCode::Tab);
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.store().get(5).unwrap().name, "Esha ");
        assert_eq!(app.filtered_ids(), vec![3]);
        assert_eq!(app.members_view.selected(), 0);
    }

    #[test]
    fn test_theme_picker_selection_updates_tokens() {
        let mut app = test_app();
        let dark_tokens = app.tokens;

        press(&mut app, KeyCode::Char('t'));
        assert!(app.theme_picker.is_visible());

        // Select the "minimal" (light) theme directly.
        app.theme_picker.hide();
        app.set_theme(BackgroundTheme::Minimal);

        assert_eq!(app.theme(), BackgroundTheme::Minimal);
        assert_ne!(app.tokens.is_dark, dark_tokens.is_dark);
        assert_eq!(app.config().settings.theme, "minimal");
    }

    #[test]
    fn test_view_mode_toggle_persists_to_config() {
        let mut app = test_app();
        let initial = app.view_mode;
        press(&mut app, KeyCode::Char('v'));

        assert_eq!(app.view_mode, initial.toggled());
        assert_eq!(app.config().settings.view_mode, initial.toggled());
    }

    #[test]
    fn test_tick_expires_notifications() {
        let mut app = test_app();
        app.notifications.push(
            crate::ui::components::Notification::new(
                "stale",
                crate::ui::components::NotificationType::Info,
                std::time::Duration::from_millis(1),
            ),
        );
        std::thread::sleep(std::time::Duration::from_millis(5));
        app.update(Event::Tick);
        assert!(app.notifications.is_empty());
    }
}
