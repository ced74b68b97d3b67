#![allow(clippy::unwrap_used)]

use std::io::Write;

use rust_decimal_macros::dec;

use super::*;
use crate::config::Settings;
use crate::models::BillStatus;

fn setup() -> (App, Ledger) {
    (App::new(Settings::default()), Ledger::demo())
}

// ── Dispatch ─────────────────────────────────────────────────

#[test]
fn test_navigation_commands() {
    let (mut app, mut ledger) = setup();
    handle_command("loan", &mut app, &mut ledger);
    assert_eq!(app.screen, Screen::Loan);
    handle_command("b", &mut app, &mut ledger);
    assert_eq!(app.screen, Screen::Budget);
    handle_command("  goals  ", &mut app, &mut ledger);
    assert_eq!(app.screen, Screen::Goals);
}

#[test]
fn test_quit_stops_app() {
    let (mut app, mut ledger) = setup();
    handle_command("q", &mut app, &mut ledger);
    assert!(!app.running);
}

#[test]
fn test_unknown_command_suggests_closest() {
    let (mut app, mut ledger) = setup();
    handle_command("lon", &mut app, &mut ledger);
    assert!(app.status_message.contains("Unknown command: :lon"));
    assert!(app.status_message.contains(":loan"));
}

#[test]
fn test_empty_command_is_ignored() {
    let (mut app, mut ledger) = setup();
    handle_command("   ", &mut app, &mut ledger);
    assert!(app.status_message.is_empty());
    assert!(app.running);
}

#[test]
fn test_levenshtein() {
    assert_eq!(levenshtein("kitten", "sitting"), 3);
    assert_eq!(levenshtein("", "abc"), 3);
    assert_eq!(levenshtein("pay", "pay"), 0);
}

#[test]
fn test_every_command_has_description() {
    assert!(COMMANDS.values().all(|c| !c.description.is_empty()));
}

// ── Budget ───────────────────────────────────────────────────

#[test]
fn test_add_budget() {
    let (mut app, mut ledger) = setup();
    handle_command("add-budget Eating Out 3,000", &mut app, &mut ledger);
    let last = ledger.budgets.last().unwrap();
    assert_eq!(last.name, "Eating Out");
    assert_eq!(last.limit, dec!(3000));
    assert_eq!(last.spent, dec!(0));
    assert_eq!(app.budget_index, 4);
}

#[test]
fn test_add_budget_zero_limit_reports_error() {
    let (mut app, mut ledger) = setup();
    handle_command("add-budget Travel 0", &mut app, &mut ledger);
    assert_eq!(ledger.budgets.len(), 4);
    assert!(app.status_message.starts_with("Error:"));
}

#[test]
fn test_spend_on_multi_word_category() {
    let (mut app, mut ledger) = setup();
    handle_command("spend food & dining 500", &mut app, &mut ledger);
    assert_eq!(ledger.budgets[1].spent, dec!(9000));
}

#[test]
fn test_spend_unknown_category() {
    let (mut app, mut ledger) = setup();
    handle_command("spend Pets 100", &mut app, &mut ledger);
    assert!(app.status_message.contains("not found"));
}

#[test]
fn test_delete_budget_asks_for_confirmation() {
    let (mut app, mut ledger) = setup();
    app.budget_index = 3;
    handle_command("delete-budget", &mut app, &mut ledger);
    assert_eq!(app.input_mode, InputMode::Confirm);
    assert_eq!(app.confirm_message, "Delete budget 'Shopping'?");
    assert!(matches!(
        app.pending_action,
        Some(PendingAction::DeleteBudget { index: 3, .. })
    ));
    assert_eq!(ledger.budgets.len(), 4);
}

#[test]
fn test_import_budgets_replaces_list() {
    let (mut app, mut ledger) = setup();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "name,spent,limit").unwrap();
    writeln!(file, "Rent,12000,12000").unwrap();
    writeln!(file, "Fuel,800,2000").unwrap();

    let cmd = format!("import-budgets {}", file.path().display());
    handle_command(&cmd, &mut app, &mut ledger);
    assert_eq!(ledger.budgets.len(), 2);
    assert_eq!(ledger.budgets[1].name, "Fuel");
    assert!(app.status_message.starts_with("Loaded 2 budget categories"));
}

#[test]
fn test_import_missing_file_keeps_ledger() {
    let (mut app, mut ledger) = setup();
    handle_command("import-txns /nonexistent/file.csv", &mut app, &mut ledger);
    assert_eq!(ledger.transactions.len(), 7);
    assert!(app.status_message.starts_with("Error:"));
}

// ── Goals ────────────────────────────────────────────────────

#[test]
fn test_add_goal() {
    let (mut app, mut ledger) = setup();
    handle_command("add-goal saving 60000 New Laptop", &mut app, &mut ledger);
    let goal = ledger.goals.last().unwrap();
    assert_eq!(goal.title, "New Laptop");
    assert_eq!(goal.target, dec!(60000));
    assert_eq!(goal.kind, GoalKind::Saving);
    assert_eq!(app.screen, Screen::Goals);
}

#[test]
fn test_add_goal_bad_kind() {
    let (mut app, mut ledger) = setup();
    handle_command("add-goal wish 100 Pony", &mut app, &mut ledger);
    assert_eq!(ledger.goals.len(), 3);
    assert!(app.status_message.contains("Saving, Challenge"));
}

#[test]
fn test_contribute_to_selected_goal() {
    let (mut app, mut ledger) = setup();
    app.goal_index = 2;
    handle_command("contribute 17000", &mut app, &mut ledger);
    assert_eq!(ledger.goals[2].current, dec!(25000));
    assert!(app.status_message.ends_with("(complete!)"));
}

#[test]
fn test_contribute_negative_rejected() {
    let (mut app, mut ledger) = setup();
    handle_command("contribute -50", &mut app, &mut ledger);
    assert_eq!(ledger.goals[0].current, dec!(45000));
    assert!(app.status_message.starts_with("Error:"));
}

// ── Expenses & bills ─────────────────────────────────────────

#[test]
fn test_add_txn_keeps_newest_first() {
    let (mut app, mut ledger) = setup();
    handle_command("add-txn 2024-11-30 Food -320 Team lunch", &mut app, &mut ledger);
    let first = &ledger.transactions[0];
    assert_eq!(first.description, "Team lunch");
    assert_eq!(first.category, "Food");
    assert_eq!(first.amount, dec!(-320));
    assert_eq!(ledger.totals().unwrap().total_expense, dec!(9459));
}

#[test]
fn test_add_txn_bad_date() {
    let (mut app, mut ledger) = setup();
    handle_command("add-txn yesterday Food -320 Lunch", &mut app, &mut ledger);
    assert_eq!(ledger.transactions.len(), 7);
    assert!(app.status_message.contains("Could not parse date"));
}

#[test]
fn test_pay_selected_bill() {
    let (mut app, mut ledger) = setup();
    handle_command("pay", &mut app, &mut ledger);
    assert_eq!(ledger.bills[0].status, BillStatus::Paid);
    assert_eq!(app.status_message, "Paid: Electricity");

    handle_command("pay", &mut app, &mut ledger);
    assert_eq!(app.status_message, "Electricity is already paid");
}

#[test]
fn test_filter_resets_cursor() {
    let (mut app, mut ledger) = setup();
    app.transaction_index = 5;
    handle_command("filter income", &mut app, &mut ledger);
    assert_eq!(app.txn_filter, TxnFilter::Income);
    assert_eq!(app.transaction_index, 0);
    assert_eq!(app.screen, Screen::Expenses);
}

// ── Loan planner ─────────────────────────────────────────────

#[test]
fn test_amount_and_tenure() {
    let (mut app, mut ledger) = setup();
    handle_command("amount 750000", &mut app, &mut ledger);
    handle_command("tenure 36", &mut app, &mut ledger);
    assert_eq!(app.loan.amount, dec!(750000));
    assert_eq!(app.loan.tenure, 36);
    assert_eq!(app.screen, Screen::Loan);
}

#[test]
fn test_amount_out_of_range_is_clamped() {
    let (mut app, mut ledger) = setup();
    handle_command("amount 99999999", &mut app, &mut ledger);
    assert_eq!(app.loan.amount, dec!(5000000));
    assert!(app.status_message.starts_with("Amount limited to"));
}

#[test]
fn test_rate() {
    let (mut app, mut ledger) = setup();
    handle_command("rate 8.5%", &mut app, &mut ledger);
    assert_eq!(app.loan.rate, dec!(8.5));

    handle_command("rate -1", &mut app, &mut ledger);
    assert_eq!(app.loan.rate, dec!(8.5));
    assert!(app.status_message.contains("cannot be negative"));
}

#[test]
fn test_rate_zero_gives_flat_emi() {
    let (mut app, mut ledger) = setup();
    handle_command("rate 0", &mut app, &mut ledger);
    let result = crate::calc::compute_emi(&app.loan.inputs()).unwrap();
    assert_eq!(result.monthly_payment, dec!(20833));
}
