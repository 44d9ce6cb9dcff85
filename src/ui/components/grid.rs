//! Card-grid renderer for the member list.
//!
//! The grid counterpart to the table renderer: one bordered card per member,
//! laid out in rows of up to three columns. Purely presentational.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::store::Member;
use crate::ui::theme::StyleTokens;

/// Cards per grid row.
const COLUMNS: usize = 3;
/// Height of a single member card.
const CARD_HEIGHT: u16 = 7;

/// Render the member grid with the given card selected.
pub fn render_member_grid(
    frame: &mut Frame,
    area: Rect,
    members: &[&Member],
    selected: usize,
    tokens: &StyleTokens,
) {
    if members.is_empty() {
        return;
    }

    let (first_row, shown_rows) = visible_rows(members.len(), selected, area.height);

    let constraints: Vec<Constraint> = (0..shown_rows)
        .map(|_| Constraint::Length(CARD_HEIGHT))
        .collect();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (slot, row_area) in row_areas.iter().enumerate() {
        let row = first_row + slot;
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(34),
                Constraint::Percentage(33),
            ])
            .split(*row_area);

        for col in 0..COLUMNS {
            let idx = row * COLUMNS + col;
            if let Some(member) = members.get(idx) {
                render_card(frame, col_areas[col], member, idx == selected, tokens);
            }
        }
    }
}

/// Scroll the grid by whole rows so the selected card stays in view.
///
/// Returns the first visible row and the number of rows to lay out.
/// The selection is clamped to the data so a cursor left pointing past
/// the end, for example after an edit shrinks the list, cannot produce
/// an out-of-range row.
fn visible_rows(member_count: usize, selected: usize, area_height: u16) -> (usize, usize) {
    let row_count = member_count.div_ceil(COLUMNS);
    let fit = (area_height / CARD_HEIGHT).max(1) as usize;

    let selected_row = (selected / COLUMNS).min(row_count.saturating_sub(1));
    let first_row = selected_row.saturating_sub(fit.saturating_sub(1));
    (first_row, fit.min(row_count - first_row))
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    member: &Member,
    selected: bool,
    tokens: &StyleTokens,
) {
    let border_style = if selected {
        Style::default()
            .fg(tokens.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(tokens.border)
    };

    let title = Span::styled(
        format!(" {} ", member.member_id),
        Style::default().fg(tokens.accent),
    );

    let status = if member.active {
        Span::styled("Active", Style::default().fg(ratatui::style::Color::Green))
    } else {
        Span::styled("Inactive", Style::default().fg(tokens.text_dim))
    };

    let lines = vec![
        Line::from(Span::styled(
            member.name.clone(),
            Style::default()
                .fg(tokens.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} {}", member.tier.icon(), member.tier.display()),
            Style::default().fg(member.tier.color()),
        )),
        Line::from(Span::styled(
            format!("{} · {}", member.city.display(), member.mobile),
            Style::default().fg(tokens.text_dim),
        )),
        Line::from(Span::styled(
            format!("Renews {}", member.policy_renewal_date),
            Style::default().fg(tokens.text_dim),
        )),
        Line::from(status),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(card, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row_fits() {
        // Two members, plenty of height: one row starting at the top.
        assert_eq!(visible_rows(2, 0, 21), (0, 1));
    }

    #[test]
    fn test_scrolls_to_keep_selection_visible() {
        // Nine members in three rows, two rows fit: selecting the last
        // card scrolls the first row out of view.
        assert_eq!(visible_rows(9, 8, 14), (1, 2));
    }

    #[test]
    fn test_stale_selection_beyond_data_is_clamped() {
        // A selection left pointing past the end, as after an edit
        // shrinks the filtered list, must not scroll past the data.
        assert_eq!(visible_rows(1, 9, 14), (0, 1));
        assert_eq!(visible_rows(1, 9, 7), (0, 1));
        assert_eq!(visible_rows(4, 30, 7), (1, 1));
    }
}
