//! Tabular renderer for the member list.
//!
//! Purely presentational: receives the filtered members and the current
//! selection, renders one row per member, and never touches state.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::store::Member;
use crate::ui::theme::StyleTokens;

/// Render the member table with the given row selected.
pub fn render_member_table(
    frame: &mut Frame,
    area: Rect,
    members: &[&Member],
    selected: usize,
    tokens: &StyleTokens,
) {
    let header = Row::new(vec![
        Cell::from("Member ID"),
        Cell::from("Name"),
        Cell::from("Tier"),
        Cell::from("City"),
        Cell::from("Mobile"),
        Cell::from("Renewal"),
        Cell::from("Status"),
    ])
    .style(
        Style::default()
            .fg(tokens.accent)
            .add_modifier(Modifier::BOLD),
    )
    .height(1);

    let rows: Vec<Row> = members
        .iter()
        .map(|m| {
            let status = if m.active { "Active" } else { "Inactive" };
            Row::new(vec![
                Cell::from(m.member_id.clone()),
                Cell::from(m.name.clone()),
                Cell::from(Span::styled(
                    format!("{} {}", m.tier.icon(), m.tier.display()),
                    Style::default().fg(m.tier.color()),
                )),
                Cell::from(m.city.display()),
                Cell::from(m.mobile.clone()),
                Cell::from(m.policy_renewal_date.clone()),
                Cell::from(status),
            ])
            .style(Style::default().fg(tokens.text))
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Min(18),
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(11),
        Constraint::Length(9),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(tokens.border)),
        )
        .highlight_style(
            Style::default()
                .fg(tokens.accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .highlight_symbol("▸ ");

    let mut state = TableState::default();
    if !members.is_empty() {
        state.select(Some(selected.min(members.len() - 1)));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
