//! Transactions tab UI tests

use super::*;

#[test]
fn test_empty_list_reports_no_transactions() {
    let mut app = create_test_app(ViewMode::Compact);
    complete_lookup(&mut app, Tab::Transactions, Ok(LookupData::Transactions(vec![])));
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "No transactions found"));
    assert!(!buffer_contains(&buffer, "Error"));
}

#[test]
fn test_list_shows_count_and_order() {
    let mut app = create_test_app(ViewMode::Full);
    complete_lookup(
        &mut app,
        Tab::Transactions,
        Ok(LookupData::Transactions(mock_signatures(3))),
    );
    let buffer = render_to_buffer(&app, 100, 30);
    let text = buffer_to_string(&buffer);

    assert!(text.contains("Showing 3 transactions"));
    let first = text.find("SIG000").unwrap();
    let second = text.find("SIG001").unwrap();
    let third = text.find("SIG002").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn test_single_transaction_label() {
    let mut app = create_test_app(ViewMode::Full);
    complete_lookup(
        &mut app,
        Tab::Transactions,
        Ok(LookupData::Transactions(mock_signatures(1))),
    );
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "Showing 1 transaction"));
    assert!(!buffer_contains(&buffer, "Showing 1 transactions"));
}

#[test]
fn test_signatures_are_shortened() {
    let mut app = create_test_app(ViewMode::Full);
    let sigs = mock_signatures(1);
    complete_lookup(
        &mut app,
        Tab::Transactions,
        Ok(LookupData::Transactions(sigs.clone())),
    );
    let buffer = render_to_buffer(&app, 120, 30);

    assert!(buffer_contains(&buffer, "SIG000xxxx...xxxxEND000"));
    assert!(!buffer_contains(&buffer, &sigs[0].signature));
    assert_eq!(app.copy_target(), Some(sigs[0].signature.as_str()));
}

#[test]
fn test_compact_view_stops_at_ten() {
    let mut app = create_test_app(ViewMode::Compact);
    complete_lookup(
        &mut app,
        Tab::Transactions,
        Ok(LookupData::Transactions(mock_signatures(15))),
    );
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Showing 15 transactions (first 10)"));
    assert!(buffer_contains(&buffer, "SIG009"));
    assert!(!buffer_contains(&buffer, "SIG010"));
}

#[test]
fn test_full_view_lists_everything() {
    let mut app = create_test_app(ViewMode::Full);
    complete_lookup(
        &mut app,
        Tab::Transactions,
        Ok(LookupData::Transactions(mock_signatures(15))),
    );
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Showing 15 transactions"));
    assert!(!buffer_contains(&buffer, "(first"));
    assert!(buffer_contains(&buffer, "SIG014"));
}

#[test]
fn test_transactions_loading_message() {
    let mut app = create_test_app(ViewMode::Compact);
    app.select_tab(Tab::Transactions);
    app.submit();
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "Loading transactions..."));
}
