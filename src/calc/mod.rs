//! Pure finance calculations behind every screen and CLI command.
//!
//! Nothing in here performs I/O or keeps state between calls: the same
//! inputs always produce the same outputs, so these functions can be called
//! from anywhere without coordination. Precondition failures come back as
//! [`InvalidArgument`] instead of NaN-like values.

mod error;

pub(crate) use error::InvalidArgument;

use std::collections::BTreeMap;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};

use crate::models::{BudgetCategory, Goal, Transaction};

pub(crate) type CalcResult<T> = Result<T, InvalidArgument>;

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Longest term, in months, that [`amortization_schedule`] will lay out.
pub(crate) const MAX_SCHEDULE_MONTHS: u32 = 1200;

// ── Loans ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LoanInputs {
    pub(crate) principal: Decimal,
    pub(crate) annual_rate_percent: Decimal,
    pub(crate) term_months: u32,
}

impl LoanInputs {
    pub(crate) fn new(principal: Decimal, annual_rate_percent: Decimal, term_months: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_months,
        }
    }

    /// Monthly rate as a fraction: 10.5% p.a. → 0.00875.
    pub(crate) fn monthly_rate(&self) -> Decimal {
        self.annual_rate_percent / MONTHS_PER_YEAR / Decimal::ONE_HUNDRED
    }

    fn validate(&self) -> CalcResult<()> {
        if self.principal <= Decimal::ZERO {
            return Err(InvalidArgument::NonPositivePrincipal(self.principal));
        }
        if self.term_months == 0 {
            return Err(InvalidArgument::ZeroTerm);
        }
        if self.annual_rate_percent < Decimal::ZERO {
            return Err(InvalidArgument::NegativeRate(self.annual_rate_percent));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LoanResult {
    /// Whole currency units, rounded half away from zero.
    pub(crate) monthly_payment: Decimal,
    pub(crate) total_payment: Decimal,
    pub(crate) total_interest: Decimal,
}

/// Equated monthly installment for a loan compounded monthly:
///
/// `EMI = P × r × (1+r)^N / ((1+r)^N − 1)` with `r = rate / 12 / 100`.
///
/// A zero rate degenerates to `P / N`. The payment is rounded to whole
/// currency units half-up; totals are derived from the rounded payment.
/// A loan small enough for the exact payment to fall below half a unit
/// therefore reports a payment of 0 and a negative `total_interest`.
pub(crate) fn compute_emi(inputs: &LoanInputs) -> CalcResult<LoanResult> {
    inputs.validate()?;

    let monthly_payment = round_whole(exact_payment(inputs)?);
    let total_payment = monthly_payment
        .checked_mul(Decimal::from(inputs.term_months))
        .ok_or(InvalidArgument::Overflow("total repayment"))?;

    Ok(LoanResult {
        monthly_payment,
        total_payment,
        total_interest: total_payment - inputs.principal,
    })
}

fn exact_payment(inputs: &LoanInputs) -> CalcResult<Decimal> {
    let months = Decimal::from(inputs.term_months);
    let rate = inputs.monthly_rate();
    if rate.is_zero() {
        return Ok(inputs.principal / months);
    }

    let factor = (Decimal::ONE + rate)
        .checked_powu(u64::from(inputs.term_months))
        .ok_or(InvalidArgument::Overflow("compounded interest"))?;
    let denominator = factor - Decimal::ONE;
    if denominator.is_zero() {
        // Rate is below decimal precision; compounding has no visible effect.
        return Ok(inputs.principal / months);
    }

    inputs
        .principal
        .checked_mul(rate)
        .and_then(|v| v.checked_mul(factor))
        .and_then(|v| v.checked_div(denominator))
        .ok_or(InvalidArgument::Overflow("monthly payment"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Installment {
    pub(crate) month: u32,
    pub(crate) payment: Decimal,
    pub(crate) interest: Decimal,
    pub(crate) principal: Decimal,
    /// Outstanding balance after this installment.
    pub(crate) balance: Decimal,
}

/// Month-by-month breakdown of a loan paid with the rounded EMI.
///
/// Interest is charged on the opening balance and rounded to cents. The
/// final row absorbs whatever rounding residue is left, so the closing
/// balance is always exactly zero. Terms longer than
/// [`MAX_SCHEDULE_MONTHS`] are rejected with `ScheduleTooLong`.
pub(crate) fn amortization_schedule(inputs: &LoanInputs) -> CalcResult<Vec<Installment>> {
    let emi = compute_emi(inputs)?.monthly_payment;
    if inputs.term_months > MAX_SCHEDULE_MONTHS {
        return Err(InvalidArgument::ScheduleTooLong {
            months: inputs.term_months,
            max: MAX_SCHEDULE_MONTHS,
        });
    }
    let rate = inputs.monthly_rate();

    let mut balance = inputs.principal;
    let mut schedule = Vec::new();

    for month in 1..=inputs.term_months {
        let interest = balance
            .checked_mul(rate)
            .ok_or(InvalidArgument::Overflow("interest"))?
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        let scheduled_principal = emi - interest;
        let (payment, principal) =
            if month == inputs.term_months || scheduled_principal >= balance {
                (balance + interest, balance)
            } else {
                (emi, scheduled_principal)
            };

        balance -= principal;
        schedule.push(Installment {
            month,
            payment,
            interest,
            principal,
            balance,
        });

        if balance.is_zero() {
            break;
        }
    }

    Ok(schedule)
}

/// The same loan priced at another annual rate, e.g. a lender's offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RateQuote {
    pub(crate) annual_rate_percent: Decimal,
    pub(crate) result: LoanResult,
    /// Base EMI minus quoted EMI; negative when the quote costs more.
    pub(crate) monthly_saving: Decimal,
}

pub(crate) fn quote_at_rate(base: &LoanInputs, annual_rate_percent: Decimal) -> CalcResult<RateQuote> {
    let base_payment = compute_emi(base)?.monthly_payment;
    let result = compute_emi(&LoanInputs {
        annual_rate_percent,
        ..*base
    })?;

    Ok(RateQuote {
        annual_rate_percent,
        result,
        monthly_saving: base_payment - result.monthly_payment,
    })
}

// ── Budgets ──────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategoryUsage {
    pub(crate) name: String,
    pub(crate) spent: Decimal,
    pub(crate) limit: Decimal,
    /// `spent / limit × 100`, not clamped: anything above 100 is an overage.
    pub(crate) percent: Decimal,
    pub(crate) is_over: bool,
    pub(crate) over_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BudgetRollup {
    pub(crate) total_spent: Decimal,
    pub(crate) total_limit: Decimal,
    pub(crate) used_percent: Decimal,
    /// Negative once the overall budget is exceeded.
    pub(crate) remaining: Decimal,
    pub(crate) categories: Vec<CategoryUsage>,
}

/// Aggregate spending against limits across budget categories.
///
/// Category order is preserved. Fails on an empty list, a non-positive
/// limit or negative spending, since none of those has a meaningful
/// percentage.
pub(crate) fn compute_budget_rollup(categories: &[BudgetCategory]) -> CalcResult<BudgetRollup> {
    if categories.is_empty() {
        return Err(InvalidArgument::EmptyCategories);
    }

    let mut total_spent = Decimal::ZERO;
    let mut total_limit = Decimal::ZERO;
    let mut usage = Vec::with_capacity(categories.len());

    for category in categories {
        usage.push(category_usage(category)?);
        total_spent = checked_sum(total_spent, category.spent, "total spent")?;
        total_limit = checked_sum(total_limit, category.limit, "total limit")?;
    }

    Ok(BudgetRollup {
        total_spent,
        total_limit,
        used_percent: percent_of(total_spent, total_limit, "budget usage")?,
        remaining: total_limit - total_spent,
        categories: usage,
    })
}

fn category_usage(category: &BudgetCategory) -> CalcResult<CategoryUsage> {
    if category.limit <= Decimal::ZERO {
        return Err(InvalidArgument::NonPositiveLimit {
            name: category.name.clone(),
            limit: category.limit,
        });
    }
    if category.spent < Decimal::ZERO {
        return Err(InvalidArgument::NegativeSpent {
            name: category.name.clone(),
            spent: category.spent,
        });
    }

    Ok(CategoryUsage {
        name: category.name.clone(),
        spent: category.spent,
        limit: category.limit,
        percent: percent_of(category.spent, category.limit, "category usage")?,
        is_over: category.spent > category.limit,
        over_amount: (category.spent - category.limit).max(Decimal::ZERO),
    })
}

// ── Income & spending ────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Totals {
    pub(crate) total_income: Decimal,
    pub(crate) total_expense: Decimal,
    pub(crate) net_savings: Decimal,
}

/// Split signed amounts into income (positive) and expense (negative).
/// Zero counts toward neither.
pub(crate) fn compute_totals(amounts: &[Decimal]) -> CalcResult<Totals> {
    let mut total_income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;

    for &amount in amounts {
        if amount > Decimal::ZERO {
            total_income = checked_sum(total_income, amount, "total income")?;
        } else if amount < Decimal::ZERO {
            total_expense = checked_sum(total_expense, amount.abs(), "total expense")?;
        }
    }

    Ok(Totals {
        total_income,
        total_expense,
        net_savings: total_income - total_expense,
    })
}

/// Convert host floating-point amounts, rejecting NaN and infinities.
pub(crate) fn amounts_from_f64(raw: &[f64]) -> CalcResult<Vec<Decimal>> {
    raw.iter()
        .enumerate()
        .map(|(index, &value)| {
            if !value.is_finite() {
                return Err(InvalidArgument::NonFiniteAmount { index });
            }
            Decimal::from_f64(value).ok_or(InvalidArgument::Overflow("amount"))
        })
        .collect()
}

/// Total expense per category, largest first (ties by name). Income is skipped.
pub(crate) fn spending_by_category(
    transactions: &[Transaction],
) -> CalcResult<Vec<(String, Decimal)>> {
    let mut by_category: BTreeMap<&str, Decimal> = BTreeMap::new();
    for txn in transactions.iter().filter(|t| t.is_expense()) {
        let entry = by_category.entry(txn.category.as_str()).or_default();
        *entry = checked_sum(*entry, txn.abs_amount(), "category spending")?;
    }

    let mut spending: Vec<(String, Decimal)> = by_category
        .into_iter()
        .map(|(name, total)| (name.to_string(), total))
        .collect();
    spending.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Ok(spending)
}

// ── Goals ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GoalProgress {
    /// Unclamped; a finished saving goal can sit above 100.
    pub(crate) percent: Decimal,
    pub(crate) remaining: Decimal,
    pub(crate) is_complete: bool,
}

pub(crate) fn goal_progress(goal: &Goal) -> CalcResult<GoalProgress> {
    if goal.target <= Decimal::ZERO {
        return Err(InvalidArgument::NonPositiveTarget {
            title: goal.title.clone(),
            target: goal.target,
        });
    }
    if goal.current < Decimal::ZERO {
        return Err(InvalidArgument::NegativeProgress {
            title: goal.title.clone(),
            current: goal.current,
        });
    }

    Ok(GoalProgress {
        percent: percent_of(goal.current, goal.target, "goal progress")?,
        remaining: (goal.target - goal.current).max(Decimal::ZERO),
        is_complete: goal.current >= goal.target,
    })
}

// ── Helpers ──────────────────────────────────────────────────

fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

fn checked_sum(acc: Decimal, value: Decimal, what: &'static str) -> CalcResult<Decimal> {
    acc.checked_add(value).ok_or(InvalidArgument::Overflow(what))
}

/// `part × 100 / whole`; callers guarantee `whole > 0`.
fn percent_of(part: Decimal, whole: Decimal, what: &'static str) -> CalcResult<Decimal> {
    part.checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|v| v.checked_div(whole))
        .ok_or(InvalidArgument::Overflow(what))
}
