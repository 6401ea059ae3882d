use super::helper::*;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::api::TransactionSignature;

pub fn draw_transactions(
    frame: &mut Frame,
    shown: &[TransactionSignature],
    total: usize,
    selected: usize,
    area: Rect,
) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Count
        Constraint::Min(3),    // List
    ])
    .split(area);

    let mut count = transaction_count_label(total);
    if shown.len() < total {
        count.push_str(&format!(" (first {})", shown.len()));
    }
    let header = Paragraph::new(count).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(header, chunks[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Signatures ");

    let items: Vec<ListItem> = shown
        .iter()
        .enumerate()
        .map(|(i, tx)| format_tx_item(i, tx, i == selected))
        .collect();

    let list = List::new(items).block(block);
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, chunks[1], &mut state);
}

fn format_tx_item<'a>(index: usize, tx: &TransactionSignature, selected: bool) -> ListItem<'a> {
    let line = Line::from(vec![
        Span::styled(
            format!("#{:<4}", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            shorten_signature(&tx.signature),
            Style::default().fg(Color::White),
        ),
    ]);

    let style = if selected {
        Style::default().bg(Color::Cyan).fg(Color::Black)
    } else {
        Style::default()
    };

    ListItem::new(line).style(style)
}
