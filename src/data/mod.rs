mod csv_load;

pub(crate) use csv_load::{load_budgets, load_transactions, parse_date, parse_decimal};

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calc::{self, CalcResult, Totals};
use crate::models::{Bill, BillStatus, BudgetCategory, Goal, GoalKind, Transaction};

/// Everything the dashboard shows, owned by whoever drives the UI or CLI.
///
/// There is no backing store: the ledger starts from demo data or CSV files
/// and lives as long as the process does.
#[derive(Debug, Clone, Default)]
pub(crate) struct Ledger {
    /// Newest first.
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) budgets: Vec<BudgetCategory>,
    pub(crate) goals: Vec<Goal>,
    pub(crate) bills: Vec<Bill>,
}

impl Ledger {
    pub(crate) fn demo() -> Self {
        Self {
            transactions: demo_transactions(),
            budgets: demo_budgets(),
            goals: demo_goals(),
            bills: demo_bills(),
        }
    }

    pub(crate) fn totals(&self) -> CalcResult<Totals> {
        let amounts: Vec<Decimal> = self.transactions.iter().map(|t| t.amount).collect();
        calc::compute_totals(&amounts)
    }

    pub(crate) fn replace_transactions(&mut self, mut transactions: Vec<Transaction>) {
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        self.transactions = transactions;
    }

    /// Insert keeping newest-first order. Same-day entries go before older ones.
    pub(crate) fn add_transaction(&mut self, txn: Transaction) {
        let pos = self
            .transactions
            .iter()
            .position(|t| t.date <= txn.date)
            .unwrap_or(self.transactions.len());
        self.transactions.insert(pos, txn);
    }

    pub(crate) fn add_budget(&mut self, name: &str, limit: Decimal) -> Result<()> {
        if limit <= Decimal::ZERO {
            anyhow::bail!("Budget limit must be greater than zero");
        }
        if BudgetCategory::find_by_name_mut(&mut self.budgets, name).is_some() {
            anyhow::bail!("Budget '{name}' already exists");
        }
        self.budgets
            .push(BudgetCategory::new(name.to_string(), Decimal::ZERO, limit));
        Ok(())
    }

    /// Record spending against a budget category; returns the new total spent.
    pub(crate) fn spend(&mut self, name: &str, amount: Decimal) -> Result<Decimal> {
        if amount <= Decimal::ZERO {
            anyhow::bail!("Spending amount must be greater than zero");
        }
        let category = BudgetCategory::find_by_name_mut(&mut self.budgets, name)
            .ok_or_else(|| anyhow::anyhow!("Budget '{name}' not found"))?;
        category.spent = category
            .spent
            .checked_add(amount)
            .ok_or_else(|| anyhow::anyhow!("Spending total is too large"))?;
        Ok(category.spent)
    }

    pub(crate) fn remove_budget(&mut self, index: usize) -> Option<BudgetCategory> {
        (index < self.budgets.len()).then(|| self.budgets.remove(index))
    }

    pub(crate) fn add_goal(&mut self, title: &str, target: Decimal, kind: GoalKind) -> Result<()> {
        if title.trim().is_empty() {
            anyhow::bail!("Goal title cannot be empty");
        }
        if target <= Decimal::ZERO {
            anyhow::bail!("Goal target must be greater than zero");
        }
        self.goals
            .push(Goal::new(title.trim().to_string(), target, kind));
        Ok(())
    }

    /// Put money toward a goal; returns the new amount saved.
    pub(crate) fn contribute(&mut self, index: usize, amount: Decimal) -> Result<Decimal> {
        if amount <= Decimal::ZERO {
            anyhow::bail!("Contribution must be greater than zero");
        }
        let goal = self
            .goals
            .get_mut(index)
            .ok_or_else(|| anyhow::anyhow!("No goal selected"))?;
        goal.current = goal
            .current
            .checked_add(amount)
            .ok_or_else(|| anyhow::anyhow!("Goal total is too large"))?;
        Ok(goal.current)
    }

    pub(crate) fn remove_goal(&mut self, index: usize) -> Option<Goal> {
        (index < self.goals.len()).then(|| self.goals.remove(index))
    }

    /// Mark a bill paid. `None` if the index is out of range, otherwise
    /// whether the status changed.
    pub(crate) fn pay_bill(&mut self, index: usize) -> Option<bool> {
        self.bills.get_mut(index).map(Bill::pay)
    }
}

fn demo_date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 11, day).unwrap_or_default()
}

fn demo_transactions() -> Vec<Transaction> {
    [
        (28, "Netflix Subscription", "Entertainment", Decimal::from(-649)),
        (27, "Salary Credited", "Salary", Decimal::from(45000)),
        (27, "Grocery Store", "Food", Decimal::from(-2400)),
        (26, "Uber Ride", "Transport", Decimal::from(-350)),
        (25, "Electric Bill", "Utilities", Decimal::from(-1240)),
        (24, "Freelance Payment", "Income", Decimal::from(12000)),
        (23, "Amazon Purchase", "Shopping", Decimal::from(-4500)),
    ]
    .into_iter()
    .map(|(day, desc, cat, amount)| {
        Transaction::new(demo_date(day), desc.to_string(), cat.to_string(), amount)
    })
    .collect()
}

fn demo_budgets() -> Vec<BudgetCategory> {
    [
        ("Housing", 15000, 20000),
        ("Food & Dining", 8500, 10000),
        ("Transportation", 4200, 5000),
        ("Shopping", 6800, 5000),
    ]
    .into_iter()
    .map(|(name, spent, limit)| {
        BudgetCategory::new(name.to_string(), Decimal::from(spent), Decimal::from(limit))
    })
    .collect()
}

fn demo_goals() -> Vec<Goal> {
    [
        ("Emergency Fund", 100000, 45000, GoalKind::Saving),
        ("Limit Coffee Spend", 500, 120, GoalKind::Challenge),
        ("Goa Trip", 25000, 8000, GoalKind::Saving),
    ]
    .into_iter()
    .map(|(title, target, current, kind)| Goal {
        title: title.to_string(),
        target: Decimal::from(target),
        current: Decimal::from(current),
        kind,
    })
    .collect()
}

fn demo_bills() -> Vec<Bill> {
    [
        ("Electricity", 1240, "Tomorrow", BillStatus::Due),
        ("Internet", 599, "in 3 days", BillStatus::Upcoming),
        ("Water", 340, "in 5 days", BillStatus::Upcoming),
        ("Mobile", 450, "in 1 week", BillStatus::Paid),
    ]
    .into_iter()
    .map(|(name, amount, due, status)| {
        Bill::new(name.to_string(), Decimal::from(amount), due.to_string(), status)
    })
    .collect()
}

#[cfg(test)]
mod tests;
