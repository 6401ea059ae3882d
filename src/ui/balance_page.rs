use super::helper::*;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::api::BalanceRecord;

pub fn draw_balance(frame: &mut Frame, balance: &BalanceRecord, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Spacing
        Constraint::Min(7),    // Card
    ])
    .split(area);

    let card_area = centered_rect(90, chunks[1]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" 👤 Account ");

    let lines = vec![
        format_kv("Address", &shorten_address(&balance.address)),
        Line::from(""),
        format_big_kv("SOL Balance", &format_sol(balance.lamports)),
        format_big_kv("Lamports", &format_lamports(balance.lamports)),
        Line::from(""),
        Line::from(vec![Span::styled(
            "^Y copy address • ^O view on Solscan",
            Style::default().fg(Color::DarkGray),
        )]),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, card_area);
}
