//! Member form: modal create/edit/read-only dialog.
//!
//! The form owns a draft of every editable field. Closed-set fields (tier,
//! city, marital status) are cycled with Left/Right rather than typed, so
//! the form can never produce a value outside the set.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::store::{Attachment, City, MaritalStatus, Member, MemberDraft, MemberTier};
use crate::ui::components::TextInput;
use crate::ui::theme::StyleTokens;

/// Actions returned from the member form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    /// Close without saving.
    Cancel,
    /// Save the entered draft.
    Save(MemberDraft),
}

/// The form fields in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Tier,
    Address,
    City,
    Mobile,
    Active,
    Dob,
    MaritalStatus,
    Anniversary,
    Pan,
    Aadhaar,
    Photo,
    ProofOfAddress,
    PolicyName,
    PolicyNumber,
    PolicyRenewal,
    Submit,
}

impl FormField {
    const ORDER: [FormField; 17] = [
        FormField::Name,
        FormField::Tier,
        FormField::Address,
        FormField::City,
        FormField::Mobile,
        FormField::Active,
        FormField::Dob,
        FormField::MaritalStatus,
        FormField::Anniversary,
        FormField::Pan,
        FormField::Aadhaar,
        FormField::Photo,
        FormField::ProofOfAddress,
        FormField::PolicyName,
        FormField::PolicyNumber,
        FormField::PolicyRenewal,
        FormField::Submit,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }
}

/// How the form was opened.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FormMode {
    /// New record; `member_id` is the number the store will assign.
    Create { member_id: String },
    /// Editing the record with this id.
    Edit { id: u32, member_id: String },
    /// Read-only display; every edit key is ignored.
    View { member_id: String },
}

/// The modal member form.
pub struct MemberFormView {
    mode: Option<FormMode>,
    focus: FormField,
    errors: Vec<String>,

    name: TextInput,
    address: TextInput,
    mobile: TextInput,
    dob: TextInput,
    anniversary: TextInput,
    pan: TextInput,
    aadhaar: TextInput,
    photo: TextInput,
    proof_of_address: TextInput,
    policy_name: TextInput,
    policy_number: TextInput,
    policy_renewal: TextInput,

    tier_index: usize,
    city_index: usize,
    marital_index: usize,
    active: bool,
}

impl Default for MemberFormView {
    fn default() -> Self {
        Self::new()
    }
}

impl MemberFormView {
    /// Create a closed form.
    pub fn new() -> Self {
        Self {
            mode: None,
            focus: FormField::Name,
            errors: Vec::new(),
            name: TextInput::with_placeholder("Full name"),
            address: TextInput::with_placeholder("Street address"),
            mobile: TextInput::with_placeholder("10-digit mobile"),
            dob: TextInput::with_placeholder("YYYY-MM-DD"),
            anniversary: TextInput::with_placeholder("YYYY-MM-DD (optional)"),
            pan: TextInput::with_placeholder("PAN number"),
            aadhaar: TextInput::with_placeholder("12-digit aadhaar"),
            photo: TextInput::with_placeholder("Path to photo (optional)"),
            proof_of_address: TextInput::with_placeholder("Path to document (optional)"),
            policy_name: TextInput::with_placeholder("Policy name"),
            policy_number: TextInput::with_placeholder("Policy number"),
            policy_renewal: TextInput::with_placeholder("YYYY-MM-DD"),
            tier_index: 0,
            city_index: 0,
            marital_index: 0,
            active: true,
        }
    }

    /// Open an empty form for a new member.
    ///
    /// `member_id` is the number the store will assign on save, shown in
    /// the title so the agent can quote it immediately.
    pub fn open_create(&mut self, member_id: String) {
        self.reset();
        self.mode = Some(FormMode::Create { member_id });
    }

    /// Open the form pre-filled from an existing record.
    pub fn open_edit(&mut self, member: &Member) {
        self.reset();
        self.load(member);
        self.mode = Some(FormMode::Edit {
            id: member.id,
            member_id: member.member_id.clone(),
        });
    }

    /// Open the form read-only.
    pub fn open_view(&mut self, member: &Member) {
        self.reset();
        self.load(member);
        self.mode = Some(FormMode::View {
            member_id: member.member_id.clone(),
        });
    }

    /// Close the form, discarding any entered state.
    pub fn close(&mut self) {
        self.mode = None;
    }

    /// Whether the form is on screen.
    pub fn is_open(&self) -> bool {
        self.mode.is_some()
    }

    /// Whether the form ignores edits.
    pub fn is_read_only(&self) -> bool {
        matches!(self.mode, Some(FormMode::View { .. }))
    }

    /// The id being edited, when in edit mode.
    pub fn editing_id(&self) -> Option<u32> {
        match &self.mode {
            Some(FormMode::Edit { id, .. }) => Some(*id),
            _ => None,
        }
    }

    fn reset(&mut self) {
        *self = Self::new();
    }

    fn load(&mut self, member: &Member) {
        self.name.set_value(&member.name);
        self.address.set_value(&member.address);
        self.mobile.set_value(&member.mobile);
        self.dob.set_value(&member.dob);
        if let Some(date) = &member.anniversary_date {
            self.anniversary.set_value(date);
        }
        self.pan.set_value(&member.pan);
        self.aadhaar.set_value(&member.aadhaar);
        if let Some(photo) = &member.photo {
            self.photo.set_value(photo.path.to_string_lossy());
        }
        if let Some(proof) = &member.proof_of_address {
            self.proof_of_address.set_value(proof.path.to_string_lossy());
        }
        self.policy_name.set_value(&member.policy_name);
        self.policy_number.set_value(&member.policy_number);
        self.policy_renewal.set_value(&member.policy_renewal_date);

        self.tier_index = MemberTier::ALL
            .iter()
            .position(|t| *t == member.tier)
            .unwrap_or(0);
        self.city_index = City::ALL
            .iter()
            .position(|c| *c == member.city)
            .unwrap_or(0);
        self.marital_index = MaritalStatus::ALL
            .iter()
            .position(|s| *s == member.marital_status)
            .unwrap_or(0);
        self.active = member.active;
    }

    /// Build the draft from the current field values.
    pub fn draft(&self) -> MemberDraft {
        let optional = |input: &TextInput| {
            let v = input.value().trim();
            (!v.is_empty()).then(|| v.to_string())
        };
        let attachment = |input: &TextInput| {
            let v = input.value().trim();
            (!v.is_empty()).then(|| Attachment::from_path(v))
        };

        MemberDraft {
            name: self.name.value().trim().to_string(),
            tier: MemberTier::ALL[self.tier_index],
            address: self.address.value().trim().to_string(),
            city: City::ALL[self.city_index],
            mobile: self.mobile.value().trim().to_string(),
            active: self.active,
            dob: self.dob.value().trim().to_string(),
            marital_status: MaritalStatus::ALL[self.marital_index],
            pan: self.pan.value().trim().to_string(),
            aadhaar: self.aadhaar.value().trim().to_string(),
            photo: attachment(&self.photo),
            proof_of_address: attachment(&self.proof_of_address),
            anniversary_date: optional(&self.anniversary),
            policy_renewal_date: self.policy_renewal.value().trim().to_string(),
            policy_name: self.policy_name.value().trim().to_string(),
            policy_number: self.policy_number.value().trim().to_string(),
        }
    }

    /// Validate required fields, storing messages for the error row.
    fn validate(&mut self) -> bool {
        self.errors.clear();
        if self.name.value().trim().is_empty() {
            self.errors.push("Name is required".to_string());
        }
        if self.mobile.value().trim().is_empty() {
            self.errors.push("Mobile is required".to_string());
        }
        if self.dob.value().trim().is_empty() {
            self.errors.push("Date of birth is required".to_string());
        }
        self.errors.is_empty()
    }

    /// Handle keyboard input.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<FormAction> {
        if self.mode.is_none() {
            return None;
        }

        if self.is_read_only() {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
                    self.close();
                    Some(FormAction::Cancel)
                }
                _ => None,
            };
        }

        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => {
                self.close();
                Some(FormAction::Cancel)
            }
            (KeyCode::Tab, KeyModifiers::NONE) => {
                self.focus = self.focus.next();
                None
            }
            (KeyCode::BackTab, _) | (KeyCode::Tab, KeyModifiers::SHIFT) => {
                self.focus = self.focus.prev();
                None
            }
            (KeyCode::Enter, KeyModifiers::NONE) if self.focus == FormField::Submit => {
                if self.validate() {
                    let draft = self.draft();
                    self.close();
                    Some(FormAction::Save(draft))
                } else {
                    None
                }
            }
            (KeyCode::Enter, KeyModifiers::NONE) => {
                self.focus = self.focus.next();
                None
            }
            _ => {
                self.handle_field_input(key);
                None
            }
        }
    }

    fn handle_field_input(&mut self, key: KeyEvent) {
        match self.focus {
            FormField::Tier => {
                cycle(&mut self.tier_index, MemberTier::ALL.len(), key.code);
            }
            FormField::City => {
                cycle(&mut self.city_index, City::ALL.len(), key.code);
            }
            FormField::MaritalStatus => {
                cycle(&mut self.marital_index, MaritalStatus::ALL.len(), key.code);
            }
            FormField::Active => {
                if matches!(
                    key.code,
                    KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
                ) {
                    self.active = !self.active;
                }
            }
            FormField::Submit => {}
            _ => {
                if let Some(input) = self.focused_input_mut() {
                    input.handle_input(key);
                }
            }
        }
    }

    fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::Address => Some(&mut self.address),
            FormField::Mobile => Some(&mut self.mobile),
            FormField::Dob => Some(&mut self.dob),
            FormField::Anniversary => Some(&mut self.anniversary),
            FormField::Pan => Some(&mut self.pan),
            FormField::Aadhaar => Some(&mut self.aadhaar),
            FormField::Photo => Some(&mut self.photo),
            FormField::ProofOfAddress => Some(&mut self.proof_of_address),
            FormField::PolicyName => Some(&mut self.policy_name),
            FormField::PolicyNumber => Some(&mut self.policy_number),
            FormField::PolicyRenewal => Some(&mut self.policy_renewal),
            _ => None,
        }
    }

    fn title(&self) -> String {
        match &self.mode {
            Some(FormMode::Create { member_id }) => format!(" New Member {member_id} "),
            Some(FormMode::Edit { member_id, .. }) => format!(" Edit Member {member_id} "),
            Some(FormMode::View { member_id }) => format!(" Member {member_id} (read only) "),
            None => String::new(),
        }
    }

    /// Render the form as a modal overlay. No-op while closed.
    pub fn render(&self, frame: &mut Frame, area: Rect, tokens: &StyleTokens) {
        if self.mode.is_none() {
            return;
        }

        let dialog_width = 76u16.min(area.width.saturating_sub(4));
        let dialog_height = 31u16.min(area.height.saturating_sub(2));
        let dialog_area = centered_rect(area, dialog_width, dialog_height);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(Span::styled(
                self.title(),
                Style::default()
                    .fg(tokens.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(tokens.accent));
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Name / Tier
                Constraint::Length(3), // Address / City
                Constraint::Length(3), // Mobile / Active
                Constraint::Length(3), // Dob / Marital
                Constraint::Length(3), // Anniversary / Pan
                Constraint::Length(3), // Aadhaar / Photo
                Constraint::Length(3), // Proof / Policy name
                Constraint::Length(3), // Policy number / Renewal
                Constraint::Length(1), // Errors
                Constraint::Length(1), // Submit
            ])
            .split(inner);

        let pairs: [[(FormField, &str); 2]; 8] = [
            [(FormField::Name, "Name *"), (FormField::Tier, "Tier")],
            [(FormField::Address, "Address"), (FormField::City, "City")],
            [
                (FormField::Mobile, "Mobile *"),
                (FormField::Active, "Status"),
            ],
            [
                (FormField::Dob, "Date of Birth *"),
                (FormField::MaritalStatus, "Marital Status"),
            ],
            [
                (FormField::Anniversary, "Anniversary"),
                (FormField::Pan, "PAN"),
            ],
            [
                (FormField::Aadhaar, "Aadhaar"),
                (FormField::Photo, "Photo"),
            ],
            [
                (FormField::ProofOfAddress, "Address Proof"),
                (FormField::PolicyName, "Policy Name"),
            ],
            [
                (FormField::PolicyNumber, "Policy Number"),
                (FormField::PolicyRenewal, "Renewal Date"),
            ],
        ];

        for (row, pair) in rows.iter().take(8).zip(pairs.iter()) {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(*row);
            for ((field, label), column) in pair.iter().zip(columns.iter()) {
                self.render_field(frame, *column, *field, label, tokens);
            }
        }

        if let Some(error) = self.errors.first() {
            let msg = Paragraph::new(Span::styled(
                error.as_str(),
                Style::default().fg(ratatui::style::Color::Red),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(msg, rows[8]);
        }

        self.render_submit(frame, rows[9], tokens);
    }

    fn render_field(
        &self,
        frame: &mut Frame,
        area: Rect,
        field: FormField,
        label: &str,
        tokens: &StyleTokens,
    ) {
        let focused = !self.is_read_only() && self.focus == field;
        match field {
            FormField::Tier => {
                let tier = MemberTier::ALL[self.tier_index];
                render_picker(
                    frame,
                    area,
                    label,
                    &format!("{} {}", tier.icon(), tier.display()),
                    focused,
                    tokens,
                );
            }
            FormField::City => {
                let city = City::ALL[self.city_index];
                render_picker(frame, area, label, city.display(), focused, tokens);
            }
            FormField::MaritalStatus => {
                let status = MaritalStatus::ALL[self.marital_index];
                render_picker(frame, area, label, status.display(), focused, tokens);
            }
            FormField::Active => {
                let value = if self.active { "Active" } else { "Inactive" };
                render_picker(frame, area, label, value, focused, tokens);
            }
            FormField::Submit => {}
            _ => {
                if let Some(input) = self.input_for(field) {
                    input.render_with_label(frame, area, label, focused, tokens);
                }
            }
        }
    }

    fn input_for(&self, field: FormField) -> Option<&TextInput> {
        match field {
            FormField::Name => Some(&self.name),
            FormField::Address => Some(&self.address),
            FormField::Mobile => Some(&self.mobile),
            FormField::Dob => Some(&self.dob),
            FormField::Anniversary => Some(&self.anniversary),
            FormField::Pan => Some(&self.pan),
            FormField::Aadhaar => Some(&self.aadhaar),
            FormField::Photo => Some(&self.photo),
            FormField::ProofOfAddress => Some(&self.proof_of_address),
            FormField::PolicyName => Some(&self.policy_name),
            FormField::PolicyNumber => Some(&self.policy_number),
            FormField::PolicyRenewal => Some(&self.policy_renewal),
            _ => None,
        }
    }

    fn render_submit(&self, frame: &mut Frame, area: Rect, tokens: &StyleTokens) {
        let (text, style) = if self.is_read_only() {
            (
                "Esc to close",
                Style::default().fg(tokens.text_dim),
            )
        } else if self.focus == FormField::Submit {
            (
                "[ Save ]",
                Style::default()
                    .fg(tokens.accent)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
        } else {
            ("[ Save ]", Style::default().fg(tokens.text_dim))
        };

        let button = Paragraph::new(Span::styled(text, style)).alignment(Alignment::Center);
        frame.render_widget(button, area);
    }
}

/// Cycle a picker index with Left/Right, wrapping at both ends.
fn cycle(index: &mut usize, len: usize, code: KeyCode) {
    match code {
        KeyCode::Left | KeyCode::Char('h') => {
            *index = (*index + len - 1) % len;
        }
        KeyCode::Right | KeyCode::Char('l') => {
            *index = (*index + 1) % len;
        }
        _ => {}
    }
}

fn render_picker(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    tokens: &StyleTokens,
) {
    let (border_style, title_style) = if focused {
        (
            Style::default().fg(tokens.accent),
            Style::default()
                .fg(tokens.accent)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(tokens.border),
            Style::default().fg(tokens.text),
        )
    };

    let display = if focused {
        format!("← {value} →")
    } else {
        value.to_string()
    };

    let block = Block::default()
        .title(Span::styled(format!(" {label} "), title_style))
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(
        Paragraph::new(display)
            .style(Style::default().fg(tokens.text))
            .block(block),
        area,
    );
}

/// Calculate a centered rectangle within the given area.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(form: &mut MemberFormView, text: &str) {
        for c in text.chars() {
            form.handle_input(key(KeyCode::Char(c)));
        }
    }

    fn tab_to_submit(form: &mut MemberFormView) {
        while form.focus != FormField::Submit {
            form.handle_input(key(KeyCode::Tab));
        }
    }

    fn sample_member() -> Member {
        Member {
            id: 3,
            member_id: "MBR003".to_string(),
            name: "Chitra Deshpande".to_string(),
            tier: MemberTier::Diamond,
            address: "9 FC Road".to_string(),
            city: City::Pune,
            mobile: "9812345678".to_string(),
            active: true,
            dob: "1979-09-30".to_string(),
            marital_status: MaritalStatus::Divorced,
            pan: "KLMNO9012P".to_string(),
            aadhaar: "555566667777".to_string(),
            photo: None,
            proof_of_address: None,
            anniversary_date: None,
            policy_renewal_date: "2026-01-15".to_string(),
            policy_name: "Senior Care Plus".to_string(),
            policy_number: "POL-70455".to_string(),
        }
    }

    #[test]
    fn test_form_starts_closed() {
        let form = MemberFormView::new();
        assert!(!form.is_open());
    }

    #[test]
    fn test_open_create_shows_assigned_member_id() {
        let mut form = MemberFormView::new();
        form.open_create("MBR006".to_string());
        assert!(form.is_open());
        assert!(!form.is_read_only());
        assert!(form.title().contains("MBR006"));
    }

    #[test]
    fn test_escape_cancels() {
        let mut form = MemberFormView::new();
        form.open_create("MBR001".to_string());
        let action = form.handle_input(key(KeyCode::Esc));
        assert_eq!(action, Some(FormAction::Cancel));
        assert!(!form.is_open());
    }

    #[test]
    fn test_submit_requires_name_mobile_dob() {
        let mut form = MemberFormView::new();
        form.open_create("MBR001".to_string());

        tab_to_submit(&mut form);
        assert_eq!(form.handle_input(key(KeyCode::Enter)), None);
        assert_eq!(form.errors.len(), 3);
        assert!(form.is_open());
    }

    #[test]
    fn test_submit_emits_draft() {
        let mut form = MemberFormView::new();
        form.open_create("MBR001".to_string());

        type_text(&mut form, "Farah Khan");
        form.focus = FormField::Mobile;
        type_text(&mut form, "9000011111");
        form.focus = FormField::Dob;
        type_text(&mut form, "1991-06-02");

        tab_to_submit(&mut form);
        let action = form.handle_input(key(KeyCode::Enter));
        match action {
            Some(FormAction::Save(draft)) => {
                assert_eq!(draft.name, "Farah Khan");
                assert_eq!(draft.mobile, "9000011111");
                assert_eq!(draft.dob, "1991-06-02");
                assert_eq!(draft.city, City::Mumbai);
            }
            other => panic!("expected save, got {other:?}"),
        }
        assert!(!form.is_open());
    }

    #[test]
    fn test_open_edit_prefills_fields() {
        let mut form = MemberFormView::new();
        let member = sample_member();
        form.open_edit(&member);

        assert_eq!(form.editing_id(), Some(3));
        let draft = form.draft();
        assert_eq!(draft.name, "Chitra Deshpande");
        assert_eq!(draft.tier, MemberTier::Diamond);
        assert_eq!(draft.city, City::Pune);
        assert_eq!(draft.marital_status, MaritalStatus::Divorced);
    }

    #[test]
    fn test_tier_picker_cycles() {
        let mut form = MemberFormView::new();
        form.open_create("MBR001".to_string());
        form.focus = FormField::Tier;

        form.handle_input(key(KeyCode::Right));
        assert_eq!(form.draft().tier, MemberTier::ALL[1]);

        form.handle_input(key(KeyCode::Left));
        form.handle_input(key(KeyCode::Left));
        assert_eq!(form.draft().tier, *MemberTier::ALL.last().unwrap());
    }

    #[test]
    fn test_active_toggle() {
        let mut form = MemberFormView::new();
        form.open_create("MBR001".to_string());
        form.focus = FormField::Active;

        assert!(form.draft().active);
        form.handle_input(key(KeyCode::Char(' ')));
        assert!(!form.draft().active);
    }

    #[test]
    fn test_read_only_ignores_edits() {
        let mut form = MemberFormView::new();
        let member = sample_member();
        form.open_view(&member);
        assert!(form.is_read_only());

        type_text(&mut form, "zzz");
        form.handle_input(key(KeyCode::Tab));
        assert_eq!(form.draft().name, "Chitra Deshpande");

        let action = form.handle_input(key(KeyCode::Esc));
        assert_eq!(action, Some(FormAction::Cancel));
        assert!(!form.is_open());
    }

    #[test]
    fn test_attachment_paths_become_attachments() {
        let mut form = MemberFormView::new();
        form.open_create("MBR001".to_string());
        form.photo.set_value("/tmp/uploads/photo.jpg");

        let draft = form.draft();
        let photo = draft.photo.expect("photo attachment");
        assert_eq!(photo.file_name, "photo.jpg");
        assert!(draft.proof_of_address.is_none());
    }

    #[test]
    fn test_tab_wraps_through_every_field() {
        let mut form = MemberFormView::new();
        form.open_create("MBR001".to_string());

        for _ in 0..FormField::ORDER.len() {
            form.handle_input(key(KeyCode::Tab));
        }
        assert_eq!(form.focus, FormField::Name);
    }
}
