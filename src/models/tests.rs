#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

// ── Transaction ───────────────────────────────────────────────

fn make_txn(amount: Decimal) -> Transaction {
    Transaction::new(
        NaiveDate::from_ymd_opt(2024, 11, 26).unwrap(),
        "Test".into(),
        "Misc".into(),
        amount,
    )
}

#[test]
fn test_income() {
    let txn = make_txn(dec!(45000));
    assert!(txn.is_income());
    assert!(!txn.is_expense());
}

#[test]
fn test_expense() {
    let txn = make_txn(dec!(-649));
    assert!(!txn.is_income());
    assert!(txn.is_expense());
}

#[test]
fn test_zero_is_neither() {
    let txn = make_txn(Decimal::ZERO);
    assert!(!txn.is_income());
    assert!(!txn.is_expense());
}

#[test]
fn test_abs_amount() {
    assert_eq!(make_txn(dec!(-2400)).abs_amount(), dec!(2400));
    assert_eq!(make_txn(dec!(12000)).abs_amount(), dec!(12000));
    assert_eq!(make_txn(Decimal::ZERO).abs_amount(), Decimal::ZERO);
}

// ── GoalKind ──────────────────────────────────────────────────

#[test]
fn test_goal_kind_parse() {
    assert_eq!(GoalKind::parse("saving"), Some(GoalKind::Saving));
    assert_eq!(GoalKind::parse("SAVINGS"), Some(GoalKind::Saving));
    assert_eq!(GoalKind::parse("Challenge"), Some(GoalKind::Challenge));
    assert_eq!(GoalKind::parse("loan"), None);
}

#[test]
fn test_goal_kind_roundtrip() {
    for kind in GoalKind::all() {
        let s = kind.as_str();
        assert_eq!(GoalKind::parse(s), Some(*kind), "Roundtrip failed for {s}");
    }
}

#[test]
fn test_goal_kind_display() {
    assert_eq!(format!("{}", GoalKind::Saving), "Saving");
    assert_eq!(format!("{}", GoalKind::Challenge), "Challenge");
}

#[test]
fn test_goal_new_starts_empty() {
    let goal = Goal::new("Goa Trip".into(), dec!(25000), GoalKind::Saving);
    assert_eq!(goal.current, Decimal::ZERO);
    assert_eq!(goal.target, dec!(25000));
    assert_eq!(goal.kind, GoalKind::Saving);
}

// ── BudgetCategory ────────────────────────────────────────────

#[test]
fn test_budget_category_find_by_name_case_insensitive() {
    let mut cats = vec![
        BudgetCategory::new("Housing".into(), dec!(15000), dec!(20000)),
        BudgetCategory::new("Food & Dining".into(), dec!(8500), dec!(10000)),
    ];
    let found = BudgetCategory::find_by_name_mut(&mut cats, "food & dining").unwrap();
    found.spent += dec!(500);
    assert_eq!(cats[1].spent, dec!(9000));
    assert!(BudgetCategory::find_by_name_mut(&mut cats, "Travel").is_none());
}

#[test]
fn test_budget_category_display() {
    let cat = BudgetCategory::new("Shopping".into(), dec!(6800), dec!(5000));
    assert_eq!(format!("{cat}"), "Shopping");
}

// ── Bill ──────────────────────────────────────────────────────

#[test]
fn test_bill_pay_once() {
    let mut bill = Bill::new(
        "Electricity".into(),
        dec!(1240),
        "Tomorrow".into(),
        BillStatus::Due,
    );
    assert!(!bill.is_paid());
    assert!(bill.pay());
    assert!(bill.is_paid());
    assert!(!bill.pay(), "paying twice should report no change");
}

#[test]
fn test_bill_status_display() {
    assert_eq!(BillStatus::Due.to_string(), "Due");
    assert_eq!(BillStatus::Upcoming.to_string(), "Upcoming");
    assert_eq!(BillStatus::Paid.to_string(), "Paid");
}
