#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::config::Settings;
use crate::data::Ledger;

fn test_form() -> LoanForm {
    LoanForm::new(&Settings::default().loan)
}

// ── LoanForm ──────────────────────────────────────────────────

#[test]
fn test_loan_form_starts_at_defaults() {
    let form = test_form();
    assert_eq!(form.amount, dec!(500000));
    assert_eq!(form.tenure, 24);
    assert_eq!(form.rate, dec!(10.5));
    assert_eq!(form.field, LoanField::Amount);
}

#[test]
fn test_loan_form_adjust_amount_by_step() {
    let mut form = test_form();
    form.adjust(3);
    assert_eq!(form.amount, dec!(530000));
    form.adjust(-5);
    assert_eq!(form.amount, dec!(480000));
}

#[test]
fn test_loan_form_amount_clamps_to_bounds() {
    let mut form = test_form();
    form.adjust(-1000);
    assert_eq!(form.amount, dec!(50000));
    form.adjust(1000);
    assert_eq!(form.amount, dec!(5000000));
}

#[test]
fn test_loan_form_adjust_tenure() {
    let mut form = test_form();
    form.toggle_field();
    assert_eq!(form.field, LoanField::Tenure);
    form.adjust(1);
    assert_eq!(form.tenure, 30);
    form.adjust(-100);
    assert_eq!(form.tenure, 6);
    form.adjust(100);
    assert_eq!(form.tenure, 60);
}

#[test]
fn test_loan_form_out_of_range_default_is_clamped() {
    let mut settings = Settings::default().loan;
    settings.default_amount = dec!(10);
    settings.default_tenure = 600;
    let form = LoanForm::new(&settings);
    assert_eq!(form.amount, dec!(50000));
    assert_eq!(form.tenure, 60);
}

#[test]
fn test_loan_form_inputs_feed_the_calculator() {
    let result = crate::calc::compute_emi(&test_form().inputs()).unwrap();
    assert_eq!(result.monthly_payment, dec!(23188));
}

// ── TxnFilter ─────────────────────────────────────────────────

#[test]
fn test_txn_filter_parse() {
    assert_eq!(TxnFilter::parse("all"), Some(TxnFilter::All));
    assert_eq!(TxnFilter::parse("Income"), Some(TxnFilter::Income));
    assert_eq!(TxnFilter::parse("expenses"), Some(TxnFilter::Expense));
    assert_eq!(TxnFilter::parse("bogus"), None);
}

#[test]
fn test_filtered_transactions() {
    let ledger = Ledger::demo();
    let mut app = App::new(Settings::default());
    assert_eq!(app.filtered_transactions(&ledger).len(), 7);

    app.txn_filter = TxnFilter::Income;
    assert_eq!(app.filtered_transactions(&ledger).len(), 2);

    app.txn_filter = TxnFilter::Expense;
    let expenses = app.filtered_transactions(&ledger);
    assert_eq!(expenses.len(), 5);
    assert!(expenses.iter().all(|t| t.is_expense()));
}

// ── App ───────────────────────────────────────────────────────

#[test]
fn test_clamp_cursors_after_removal() {
    let mut ledger = Ledger::demo();
    let mut app = App::new(Settings::default());
    app.budget_index = 3;
    app.goal_index = 2;
    ledger.remove_budget(3);
    ledger.remove_goal(2);
    app.clamp_cursors(&ledger);
    assert_eq!(app.budget_index, 2);
    assert_eq!(app.goal_index, 1);
}

#[test]
fn test_clamp_cursors_on_filter_change() {
    let ledger = Ledger::demo();
    let mut app = App::new(Settings::default());
    app.transaction_index = 6;
    app.transaction_scroll = 4;
    app.txn_filter = TxnFilter::Income;
    app.clamp_cursors(&ledger);
    assert_eq!(app.transaction_index, 1);
    assert_eq!(app.transaction_scroll, 1);
}
