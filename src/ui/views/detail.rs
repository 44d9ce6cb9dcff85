//! Member detail view.
//!
//! Shows the full record for one member. When no member is held the view
//! renders nothing at all; the caller decides whether that state is even
//! reachable.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::store::Member;
use crate::ui::theme::StyleTokens;

/// Actions returned from the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    /// Return to the members list.
    GoBack,
    /// Open the edit form for the displayed member.
    Edit(u32),
}

/// The member detail view.
#[derive(Debug, Default)]
pub struct DetailView {
    /// The member being displayed, if any.
    member: Option<Member>,
    /// Vertical scroll offset.
    scroll: u16,
}

impl DetailView {
    /// Create a new detail view with nothing to show.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the member to display. Resets scroll.
    pub fn set_member(&mut self, member: Member) {
        self.member = Some(member);
        self.scroll = 0;
    }

    /// Drop the displayed member.
    pub fn clear(&mut self) {
        self.member = None;
        self.scroll = 0;
    }

    /// The member currently displayed.
    pub fn member(&self) -> Option<&Member> {
        self.member.as_ref()
    }

    /// Handle keyboard input.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<DetailAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) | (KeyCode::Char('q'), KeyModifiers::NONE) => {
                Some(DetailAction::GoBack)
            }
            (KeyCode::Char('e'), KeyModifiers::NONE) => {
                self.member.as_ref().map(|m| DetailAction::Edit(m.id))
            }
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            _ => None,
        }
    }

    /// Render the view. With no member held this draws nothing.
    pub fn render(&self, frame: &mut Frame, area: Rect, tokens: &StyleTokens) {
        let Some(member) = &self.member else {
            return;
        };

        let label = Style::default().fg(tokens.text_dim);
        let value = Style::default().fg(tokens.text);
        let field = |name: &str, val: &str| {
            Line::from(vec![
                Span::styled(format!("{name:<16}"), label),
                Span::styled(val.to_string(), value),
            ])
        };

        let status = if member.active { "Active" } else { "Inactive" };
        let mut lines = vec![
            field("Member ID", &member.member_id),
            field("Name", &member.name),
            Line::from(vec![
                Span::styled(format!("{:<16}", "Tier"), label),
                Span::styled(
                    format!("{} {}", member.tier.icon(), member.tier.display()),
                    Style::default()
                        .fg(member.tier.color())
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            field("Status", status),
            Line::default(),
            field("Address", &member.address),
            field("City", member.city.display()),
            field("Mobile", &member.mobile),
            field("Date of Birth", &member.dob),
            field("Marital Status", member.marital_status.display()),
            field(
                "Anniversary",
                member.anniversary_date.as_deref().unwrap_or("-"),
            ),
            Line::default(),
            field("PAN", &member.pan),
            field("Aadhaar", &member.aadhaar_display()),
            field(
                "Photo",
                member
                    .photo
                    .as_ref()
                    .map(|a| a.file_name.as_str())
                    .unwrap_or("-"),
            ),
            field(
                "Address Proof",
                member
                    .proof_of_address
                    .as_ref()
                    .map(|a| a.file_name.as_str())
                    .unwrap_or("-"),
            ),
            Line::default(),
            field("Policy", &member.policy_name),
            field("Policy Number", &member.policy_number),
            field("Renewal Date", &member.policy_renewal_date),
        ];

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "e:edit  Esc:back  j/k:scroll",
            label,
        )));

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", member.name),
                Style::default()
                    .fg(tokens.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(tokens.border));

        let paragraph = Paragraph::new(lines).block(block).scroll((self.scroll, 0));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{City, MaritalStatus, MemberDraft, MemberStore, MemberTier};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn sample_member() -> Member {
        let mut store = MemberStore::new();
        store
            .create(MemberDraft {
                name: "Alice Shah".to_string(),
                tier: MemberTier::Gold,
                address: "12 Marine Drive".to_string(),
                city: City::Mumbai,
                mobile: "9876543210".to_string(),
                active: true,
                dob: "1988-04-12".to_string(),
                marital_status: MaritalStatus::Married,
                pan: "ABCDE1234F".to_string(),
                aadhaar: "123456789012".to_string(),
                policy_renewal_date: "2026-03-01".to_string(),
                policy_name: "Family Health Shield".to_string(),
                policy_number: "POL-88121".to_string(),
                ..MemberDraft::default()
            })
            .clone()
    }

    #[test]
    fn test_new_view_holds_nothing() {
        let view = DetailView::new();
        assert!(view.member().is_none());
    }

    #[test]
    fn test_set_and_clear_member() {
        let mut view = DetailView::new();
        view.set_member(sample_member());
        assert_eq!(view.member().map(|m| m.id), Some(1));

        view.clear();
        assert!(view.member().is_none());
    }

    #[test]
    fn test_escape_goes_back() {
        let mut view = DetailView::new();
        assert_eq!(
            view.handle_input(key(KeyCode::Esc)),
            Some(DetailAction::GoBack)
        );
    }

    #[test]
    fn test_edit_requires_a_member() {
        let mut view = DetailView::new();
        assert_eq!(view.handle_input(key(KeyCode::Char('e'))), None);

        view.set_member(sample_member());
        assert_eq!(
            view.handle_input(key(KeyCode::Char('e'))),
            Some(DetailAction::Edit(1))
        );
    }

    #[test]
    fn test_scroll_never_underflows() {
        let mut view = DetailView::new();
        view.set_member(sample_member());
        view.handle_input(key(KeyCode::Char('k')));
        view.handle_input(key(KeyCode::Char('j')));
        view.handle_input(key(KeyCode::Char('j')));
        assert_eq!(view.scroll, 2);
    }
}
