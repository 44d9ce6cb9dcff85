//! Dashboard view with membership statistics.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::store::{MemberStore, MemberTier};
use crate::ui::theme::StyleTokens;

/// Render the dashboard: headline counts plus a per-tier breakdown.
pub fn render_dashboard(frame: &mut Frame, area: Rect, store: &MemberStore, tokens: &StyleTokens) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(6)])
        .split(area);

    render_headline(frame, chunks[0], store, tokens);
    render_tier_breakdown(frame, chunks[1], store, tokens);
}

fn render_headline(frame: &mut Frame, area: Rect, store: &MemberStore, tokens: &StyleTokens) {
    let total = store.len();
    let active = store.active_count();
    let inactive = total - active;

    let cells = [
        ("Total Members", total, tokens.accent),
        ("Active", active, ratatui::style::Color::Green),
        ("Inactive", inactive, ratatui::style::Color::Red),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    for ((title, count, color), column) in cells.iter().zip(columns.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(tokens.border));
        let lines = vec![
            Line::from(Span::styled(
                count.to_string(),
                Style::default().fg(*color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                *title,
                Style::default().fg(tokens.text_dim),
            )),
        ];
        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(paragraph, *column);
    }
}

fn render_tier_breakdown(frame: &mut Frame, area: Rect, store: &MemberStore, tokens: &StyleTokens) {
    let total = store.len().max(1);
    let bar_width = area.width.saturating_sub(26) as usize;

    let mut lines = Vec::with_capacity(MemberTier::ALL.len());
    for tier in MemberTier::ALL {
        let count = store.tier_count(tier);
        let filled = bar_width * count / total;
        let bar: String = "█".repeat(filled);

        lines.push(Line::from(vec![
            Span::styled(
                format!("{} {:<10}", tier.icon(), tier.display()),
                Style::default().fg(tier.color()),
            ),
            Span::styled(format!("{count:>3}  "), Style::default().fg(tokens.text)),
            Span::styled(bar, Style::default().fg(tier.color())),
        ]));
    }

    let block = Block::default()
        .title(Span::styled(
            " Members by Tier ",
            Style::default()
                .fg(tokens.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(tokens.border));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
