#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal_macros::dec;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 11, d).unwrap()
}

// ── Demo data ─────────────────────────────────────────────────

#[test]
fn test_demo_totals() {
    let ledger = Ledger::demo();
    let totals = ledger.totals().unwrap();
    assert_eq!(totals.total_income, dec!(57000));
    assert_eq!(totals.total_expense, dec!(9139));
    assert_eq!(totals.net_savings, dec!(47861));
}

#[test]
fn test_demo_budgets_roll_up() {
    let ledger = Ledger::demo();
    let rollup = calc::compute_budget_rollup(&ledger.budgets).unwrap();
    assert_eq!(rollup.used_percent, dec!(86.25));
}

#[test]
fn test_demo_transactions_newest_first() {
    let ledger = Ledger::demo();
    for pair in ledger.transactions.windows(2) {
        assert!(pair[0].date >= pair[1].date);
    }
}

#[test]
fn test_demo_has_every_goal_kind() {
    let ledger = Ledger::demo();
    for kind in GoalKind::all() {
        assert!(ledger.goals.iter().any(|g| g.kind == *kind));
    }
}

// ── Transactions ──────────────────────────────────────────────

#[test]
fn test_add_transaction_keeps_order() {
    let mut ledger = Ledger::demo();
    ledger.add_transaction(Transaction::new(
        day(26),
        "Chai".into(),
        "Food".into(),
        dec!(-20),
    ));
    let pos = ledger
        .transactions
        .iter()
        .position(|t| t.description == "Chai")
        .unwrap();
    assert_eq!(ledger.transactions[pos - 1].date, day(27));
    assert_eq!(ledger.transactions[pos + 1].description, "Uber Ride");
}

#[test]
fn test_add_transaction_oldest_goes_last() {
    let mut ledger = Ledger::demo();
    ledger.add_transaction(Transaction::new(
        day(1),
        "Old".into(),
        "Misc".into(),
        dec!(-1),
    ));
    assert_eq!(ledger.transactions.last().unwrap().description, "Old");
}

#[test]
fn test_replace_transactions_sorts() {
    let mut ledger = Ledger::default();
    ledger.replace_transactions(vec![
        Transaction::new(day(1), "a".into(), "x".into(), dec!(1)),
        Transaction::new(day(9), "b".into(), "x".into(), dec!(1)),
    ]);
    assert_eq!(ledger.transactions[0].description, "b");
}

// ── Budgets ───────────────────────────────────────────────────

#[test]
fn test_add_budget() {
    let mut ledger = Ledger::default();
    ledger.add_budget("Entertainment", dec!(3000)).unwrap();
    assert_eq!(ledger.budgets[0].spent, Decimal::ZERO);
    assert_eq!(ledger.budgets[0].limit, dec!(3000));
}

#[test]
fn test_add_budget_rejects_duplicate_name() {
    let mut ledger = Ledger::demo();
    assert!(ledger.add_budget("housing", dec!(1)).is_err());
}

#[test]
fn test_add_budget_rejects_zero_limit() {
    let mut ledger = Ledger::default();
    assert!(ledger.add_budget("Gifts", Decimal::ZERO).is_err());
    assert!(ledger.budgets.is_empty());
}

#[test]
fn test_spend_accumulates() {
    let mut ledger = Ledger::demo();
    let spent = ledger.spend("Shopping", dec!(200)).unwrap();
    assert_eq!(spent, dec!(7000));
}

#[test]
fn test_spend_unknown_budget() {
    let mut ledger = Ledger::demo();
    let err = ledger.spend("Travel", dec!(10)).unwrap_err();
    assert!(err.to_string().contains("Travel"));
}

#[test]
fn test_spend_rejects_non_positive() {
    let mut ledger = Ledger::demo();
    assert!(ledger.spend("Shopping", dec!(-5)).is_err());
}

#[test]
fn test_remove_budget() {
    let mut ledger = Ledger::demo();
    let removed = ledger.remove_budget(0).unwrap();
    assert_eq!(removed.name, "Housing");
    assert_eq!(ledger.budgets.len(), 3);
    assert!(ledger.remove_budget(10).is_none());
}

// ── Goals ─────────────────────────────────────────────────────

#[test]
fn test_add_goal_and_contribute() {
    let mut ledger = Ledger::default();
    ledger
        .add_goal("  New Laptop ", dec!(80000), GoalKind::Saving)
        .unwrap();
    assert_eq!(ledger.goals[0].title, "New Laptop");
    let saved = ledger.contribute(0, dec!(5000)).unwrap();
    assert_eq!(saved, dec!(5000));
}

#[test]
fn test_add_goal_validation() {
    let mut ledger = Ledger::default();
    assert!(ledger.add_goal("", dec!(10), GoalKind::Saving).is_err());
    assert!(ledger
        .add_goal("Trip", Decimal::ZERO, GoalKind::Saving)
        .is_err());
}

#[test]
fn test_contribute_without_goal() {
    let mut ledger = Ledger::default();
    assert!(ledger.contribute(0, dec!(1)).is_err());
}

#[test]
fn test_remove_goal() {
    let mut ledger = Ledger::demo();
    assert_eq!(ledger.remove_goal(1).unwrap().title, "Limit Coffee Spend");
    assert_eq!(ledger.goals.len(), 2);
}

// ── Bills ─────────────────────────────────────────────────────

#[test]
fn test_pay_bill() {
    let mut ledger = Ledger::demo();
    assert_eq!(ledger.pay_bill(0), Some(true));
    assert!(ledger.bills[0].is_paid());
    assert_eq!(ledger.pay_bill(3), Some(false), "Mobile is already paid");
    assert_eq!(ledger.pay_bill(99), None);
}
