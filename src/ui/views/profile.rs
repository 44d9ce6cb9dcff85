//! Agent profile view.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::StyleTokens;

/// Render the agent profile card.
///
/// The profile is static in this build; the record shown here belongs to
/// the signed-in agent, not to a member.
pub fn render_profile(frame: &mut Frame, area: Rect, tokens: &StyleTokens) {
    let label = Style::default().fg(tokens.text_dim);
    let value = Style::default().fg(tokens.text);
    let field = |name: &str, val: &str| {
        Line::from(vec![
            Span::styled(format!("{name:<14}"), label),
            Span::styled(val.to_string(), value),
        ])
    };

    let lines = vec![
        field("Name", "Ravi Kulkarni"),
        field("Role", "Insurance Agent"),
        field("Branch", "Mumbai Central"),
        field("Agent Code", "AGT-2041"),
        field("Email", "ravi.kulkarni@example.com"),
        field("Phone", "9820011223"),
    ];

    let block = Block::default()
        .title(Span::styled(
            " Agent Profile ",
            Style::default()
                .fg(tokens.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(tokens.border));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
