mod balance_page;
mod helper;
mod tx_page;

use balance_page::draw_balance;
use helper::*;
use tx_page::draw_transactions;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::app::{App, Tab, TabContent};

const NAV_HELP: &str =
    "Enter search • F5 refresh • Tab switch • ↑↓ select • ^Y copy • ^O open • Esc quit";

pub fn draw(frame: &mut Frame, app: &App) {
    let area = padded_rect(frame.area(), 1);
    let error_height = if app.error().is_some() { 3 } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(1),            // Title
        Constraint::Length(1),            // Subtitle
        Constraint::Length(1),            // Spacing
        Constraint::Length(3),            // Address bar
        Constraint::Length(error_height), // Error banner
        Constraint::Length(1),            // Tabs
        Constraint::Min(5),               // Tab body
        Constraint::Length(1),            // Help
        Constraint::Length(1),            // Footer
    ])
    .split(area);

    let title = Paragraph::new("◎ Solana Explorer")
        .style(Style::default().fg(Color::Magenta).bold())
        .alignment(Alignment::Left);
    frame.render_widget(title, chunks[0]);

    let subtitle = Paragraph::new(format!(
        "{} balance and transaction history",
        cluster_name(&app.config.cluster)
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(subtitle, chunks[1]);

    draw_address_bar(frame, app, chunks[3]);

    if let Some(error) = app.error() {
        draw_error(frame, &error.to_string(), chunks[4]);
    }

    draw_tabs(frame, app, chunks[5]);
    draw_body(frame, app, chunks[6]);

    let help = Paragraph::new(NAV_HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[7]);

    let footer = Paragraph::new(format!(
        "Connected to Solana {} · Backend: {}",
        cluster_name(&app.config.cluster),
        app.config.api_url
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[8]);
}

fn cluster_name(cluster: &str) -> String {
    let mut chars = cluster.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn draw_address_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (button, button_style) = if app.is_loading() {
        (" ⠿ Loading ", Style::default().fg(Color::DarkGray))
    } else {
        (" Search ⏎ ", Style::default().fg(Color::Black).bg(Color::White))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" 🔍 Address ")
        .title_style(Style::default().fg(Color::Cyan))
        .title_bottom(Line::from(Span::styled(button, button_style)).right_aligned());

    let inner_width = area.width.saturating_sub(2) as usize;
    let scroll = app.address_input.visual_scroll(inner_width);

    let display_text = if app.address().is_empty() {
        Span::styled("Enter address", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(app.address(), Style::default().fg(Color::White))
    };

    let input = Paragraph::new(display_text)
        .block(block)
        .scroll((0, scroll as u16));
    frame.render_widget(input, area);

    let cursor_x = area.x + 1 + (app.address_input.visual_cursor().saturating_sub(scroll)) as u16;
    let cursor_y = area.y + 1;
    if cursor_x < (area.x + area.width).saturating_sub(1) {
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

fn draw_error(frame: &mut Frame, msg: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" ❌ Error ");

    let paragraph = Paragraph::new(Line::from(msg.to_string()).fg(Color::Red))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let selected = match app.active_tab {
        Tab::Balance => 0,
        Tab::Transactions => 1,
    };

    let tabs = Tabs::new([Tab::Balance.title(), Tab::Transactions.title()])
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("│");
    frame.render_widget(tabs, area);
}

fn draw_body(frame: &mut Frame, app: &App, area: Rect) {
    match app.content() {
        TabContent::Loading(msg) => draw_loading(frame, msg, area),
        TabContent::Balance(balance) => draw_balance(frame, balance, area),
        TabContent::Transactions {
            shown,
            total,
            selected,
        } => draw_transactions(frame, shown, total, selected, area),
        TabContent::NoTransactions => {
            draw_placeholder(frame, &["No transactions found"], area);
        }
        TabContent::GetStarted(Tab::Balance) => draw_placeholder(
            frame,
            &["Enter an address to get started", "^E try example address"],
            area,
        ),
        TabContent::GetStarted(Tab::Transactions) => draw_placeholder(
            frame,
            &[
                "Enter an address to view transactions",
                "^E try example address",
            ],
            area,
        ),
    }
}

fn draw_loading(frame: &mut Frame, msg: &str, area: Rect) {
    let spinner_frames = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    let idx = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| (d.as_millis() / 100) as usize)
        .unwrap_or(0)
        % spinner_frames.len();

    let lines = vec![
        Line::from(""),
        Line::from(spinner_frames[idx]).fg(Color::White),
        Line::from(msg.to_string()).fg(Color::DarkGray),
    ];

    let paragraph = Paragraph::new(lines)
        .block(body_block())
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_placeholder(frame: &mut Frame, text: &[&str], area: Rect) {
    let mut lines = vec![Line::from("")];
    for (i, line) in text.iter().enumerate() {
        let color = if i == 0 { Color::Gray } else { Color::DarkGray };
        lines.push(Line::from(line.to_string()).fg(color));
    }

    let paragraph = Paragraph::new(lines)
        .block(body_block())
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn body_block() -> Block<'static> {
    Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray))
}
