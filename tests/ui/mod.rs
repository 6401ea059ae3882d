//! UI rendering tests for solex
//!
//! These tests ensure the UI renders correctly by searching the rendered buffer.
//! Run with: cargo test --test ui_tests

pub mod balance_tests;
pub mod home_tests;
pub mod transactions_tests;

use solex::api::{BalanceRecord, TransactionSignature};
use solex::app::{App, LookupData, LookupOutcome, Tab, EXAMPLE_ADDRESS};
use solex::config::{Config, ViewMode};
use solex::error::RequestFailure;
use solex::ui::draw;

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

// ==================== Test Data Builders ====================

pub fn mock_config() -> Config {
    Config::default()
}

pub fn mock_balance() -> BalanceRecord {
    BalanceRecord {
        address: EXAMPLE_ADDRESS.to_string(),
        lamports: 2_500_000_000,
    }
}

pub fn mock_signatures(n: usize) -> Vec<TransactionSignature> {
    (0..n)
        .map(|i| TransactionSignature {
            signature: format!("SIG{i:03}{}END{i:03}", "x".repeat(70)),
        })
        .collect()
}

pub fn create_test_app(view: ViewMode) -> App {
    let config = Config {
        view,
        ..mock_config()
    };
    let mut app = App::new(config);
    app.set_address(EXAMPLE_ADDRESS);
    app
}

/// Run one lookup on `tab` to completion with the given result
pub fn complete_lookup(app: &mut App, tab: Tab, result: Result<LookupData, RequestFailure>) {
    app.select_tab(tab);
    let request = app.submit().expect("lookup should start");
    app.apply(LookupOutcome {
        generation: request.generation,
        result,
    });
}

// ==================== Helper Functions ====================

/// Render the app to a buffer and return it
pub fn render_to_buffer(app: &App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| {
            draw(frame, app);
        })
        .unwrap();

    terminal.backend().buffer().clone()
}

/// Check if buffer contains a specific string anywhere
pub fn buffer_contains(buffer: &Buffer, needle: &str) -> bool {
    let content = buffer_to_string(buffer);
    content.contains(needle)
}

/// Convert buffer to a single string for searching
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let mut content = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            content.push(
                buffer
                    .cell((x, y))
                    .map(|c| c.symbol().chars().next().unwrap_or(' '))
                    .unwrap_or(' '),
            );
        }
        content.push('\n');
    }
    content
}

/// Get a specific line from the buffer
#[allow(dead_code)]
pub fn buffer_line(buffer: &Buffer, y: u16) -> String {
    let mut line = String::new();
    for x in 0..buffer.area.width {
        if let Some(cell) = buffer.cell((x, y)) {
            line.push_str(cell.symbol());
        }
    }
    line.trim_end().to_string()
}

/// Print buffer for debugging
#[allow(dead_code)]
pub fn print_buffer(buffer: &Buffer) {
    for y in 0..buffer.area.height {
        println!("{}", buffer_line(buffer, y));
    }
}
