//! Initial screen UI tests

use super::*;
use solex::app::App;

#[test]
fn test_home_shows_title_and_cluster() {
    let app = App::new(mock_config());
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "Solana Explorer"));
    assert!(buffer_contains(&buffer, "Devnet balance and transaction history"));
}

#[test]
fn test_home_shows_placeholder_and_tabs() {
    let app = App::new(mock_config());
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "Enter address"));
    assert!(buffer_contains(&buffer, "Balance"));
    assert!(buffer_contains(&buffer, "Transactions"));
    assert!(buffer_contains(&buffer, "Enter an address to get started"));
}

#[test]
fn test_home_transactions_tab_prompt() {
    let mut app = App::new(mock_config());
    app.select_tab(Tab::Transactions);
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "Enter an address to view transactions"));
}

#[test]
fn test_footer_names_backend() {
    let app = App::new(mock_config());
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "Backend: http://localhost:3000"));
}

#[test]
fn test_typed_address_is_shown() {
    let app = create_test_app(ViewMode::Compact);
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, EXAMPLE_ADDRESS));
}
