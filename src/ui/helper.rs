use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

// ============================================================================
// Helper Functions
// ============================================================================

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Lamports as SOL with exactly four decimals.
///
/// Formats the `f64` quotient, so boundary values round the way the float
/// actually lands (150_000 lamports is 0.000149999... and shows `0.0001`).
pub fn format_sol(lamports: u64) -> String {
    format!("{:.4}", lamports as f64 / LAMPORTS_PER_SOL as f64)
}

/// Lamports with thousands separators, e.g. `2,500,000,000`
pub fn format_lamports(lamports: u64) -> String {
    let digits = lamports.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// First `keep` + "..." + last `keep` characters. Display only.
pub fn shorten(value: &str, keep: usize) -> String {
    let len = value.chars().count();
    if len <= keep * 2 + 3 {
        return value.to_string();
    }
    let head: String = value.chars().take(keep).collect();
    let tail: String = value.chars().skip(len - keep).collect();
    format!("{head}...{tail}")
}

pub fn shorten_address(address: &str) -> String {
    shorten(address, 8)
}

pub fn shorten_signature(signature: &str) -> String {
    shorten(signature, 10)
}

pub fn transaction_count_label(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("Showing {count} transaction{plural}")
}

pub fn format_kv(key: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ])
}

pub fn format_big_kv(key: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(
            value.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

pub fn centered_rect(percent_x: u16, area: Rect) -> Rect {
    let popup_layout = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(area);

    popup_layout[1]
}

pub fn padded_rect(area: Rect, padding: u16) -> Rect {
    Rect {
        x: area.x + padding,
        y: area.y + padding,
        width: area.width.saturating_sub(padding * 2),
        height: area.height.saturating_sub(padding * 2),
    }
}
