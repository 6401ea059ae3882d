//! Balance tab UI tests

use super::*;

#[test]
fn test_balance_shows_sol_value() {
    let mut app = create_test_app(ViewMode::Compact);
    complete_lookup(&mut app, Tab::Balance, Ok(LookupData::Balance(mock_balance())));
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "2.5000"));
    assert!(buffer_contains(&buffer, "2,500,000,000"));
}

#[test]
fn test_balance_dust_rounds_to_zero() {
    let mut app = create_test_app(ViewMode::Compact);
    let record = BalanceRecord {
        address: EXAMPLE_ADDRESS.to_string(),
        lamports: 1,
    };
    complete_lookup(&mut app, Tab::Balance, Ok(LookupData::Balance(record)));
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "0.0000"));
}

#[test]
fn test_balance_shows_shortened_address_but_keeps_full_value() {
    let mut app = create_test_app(ViewMode::Compact);
    complete_lookup(&mut app, Tab::Balance, Ok(LookupData::Balance(mock_balance())));
    // Edit the input so the full address only lives in the balance record
    app.set_address("x");
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "9xQeWvG8...9PusVFin"));
    assert!(!buffer_contains(&buffer, EXAMPLE_ADDRESS));
    assert_eq!(app.copy_target(), Some(EXAMPLE_ADDRESS));
}

#[test]
fn test_balance_loading_message() {
    let mut app = create_test_app(ViewMode::Compact);
    app.submit();
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "Fetching balance..."));
    assert!(buffer_contains(&buffer, "Loading"));
}
