use rust_decimal::Decimal;

use crate::calc::LoanInputs;
use crate::config::{LoanSettings, Settings};
use crate::data::Ledger;
use crate::models::Transaction;
use crate::ui::util::clamp_index;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Expenses,
    Budget,
    Goals,
    Loan,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[
            Self::Dashboard,
            Self::Expenses,
            Self::Budget,
            Self::Goals,
            Self::Loan,
        ]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Expenses => write!(f, "Expenses"),
            Self::Budget => write!(f, "Budget"),
            Self::Goals => write!(f, "Goals"),
            Self::Loan => write!(f, "Loan"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    DeleteBudget { index: usize, name: String },
    DeleteGoal { index: usize, title: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TxnFilter {
    All,
    Income,
    Expense,
}

impl TxnFilter {
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" | "" => Some(Self::All),
            "income" | "in" => Some(Self::Income),
            "expense" | "expenses" | "out" => Some(Self::Expense),
            _ => None,
        }
    }

    pub(crate) fn matches(&self, txn: &Transaction) -> bool {
        match self {
            Self::All => true,
            Self::Income => txn.is_income(),
            Self::Expense => txn.is_expense(),
        }
    }
}

impl std::fmt::Display for TxnFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expenses"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoanField {
    Amount,
    Tenure,
}

/// Slider state for the loan planner. Values always stay inside the
/// configured bounds.
#[derive(Debug, Clone)]
pub(crate) struct LoanForm {
    pub(crate) amount: Decimal,
    pub(crate) tenure: u32,
    pub(crate) rate: Decimal,
    pub(crate) field: LoanField,
    bounds: LoanSettings,
}

impl LoanForm {
    pub(crate) fn new(settings: &LoanSettings) -> Self {
        let mut form = Self {
            amount: settings.default_amount,
            tenure: settings.default_tenure,
            rate: settings.annual_rate_percent,
            field: LoanField::Amount,
            bounds: settings.clone(),
        };
        form.set_amount(settings.default_amount);
        form.set_tenure(settings.default_tenure);
        form
    }

    pub(crate) fn inputs(&self) -> LoanInputs {
        LoanInputs::new(self.amount, self.rate, self.tenure)
    }

    pub(crate) fn offers(&self) -> &[crate::config::LoanOffer] {
        &self.bounds.offers
    }

    pub(crate) fn toggle_field(&mut self) {
        self.field = match self.field {
            LoanField::Amount => LoanField::Tenure,
            LoanField::Tenure => LoanField::Amount,
        };
    }

    /// Move the focused slider by `steps` increments.
    pub(crate) fn adjust(&mut self, steps: i32) {
        match self.field {
            LoanField::Amount => {
                let delta = self.bounds.amount_step * Decimal::from(steps);
                self.set_amount(self.amount.saturating_add(delta));
            }
            LoanField::Tenure => {
                let delta = i64::from(self.bounds.tenure_step) * i64::from(steps);
                let next = (i64::from(self.tenure) + delta).max(0);
                self.set_tenure(u32::try_from(next).unwrap_or(u32::MAX));
            }
        }
    }

    pub(crate) fn set_amount(&mut self, amount: Decimal) {
        self.amount = amount.clamp(self.bounds.amount_min, self.bounds.amount_max);
    }

    pub(crate) fn set_tenure(&mut self, months: u32) {
        self.tenure = months.clamp(self.bounds.tenure_min, self.bounds.tenure_max);
    }

    pub(crate) fn amount_bounds(&self) -> (Decimal, Decimal) {
        (self.bounds.amount_min, self.bounds.amount_max)
    }

    pub(crate) fn tenure_bounds(&self) -> (u32, u32) {
        (self.bounds.tenure_min, self.bounds.tenure_max)
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) settings: Settings,

    // Dashboard
    pub(crate) bill_index: usize,

    // Expenses
    pub(crate) txn_filter: TxnFilter,
    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,

    // Budget
    pub(crate) budget_index: usize,

    // Goals
    pub(crate) goal_index: usize,

    // Loan
    pub(crate) loan: LoanForm,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(settings: Settings) -> Self {
        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            bill_index: 0,

            txn_filter: TxnFilter::All,
            transaction_index: 0,
            transaction_scroll: 0,

            budget_index: 0,
            goal_index: 0,

            loan: LoanForm::new(&settings.loan),
            settings,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    pub(crate) fn currency(&self) -> &str {
        &self.settings.currency_symbol
    }

    pub(crate) fn filtered_transactions<'a>(&self, ledger: &'a Ledger) -> Vec<&'a Transaction> {
        ledger
            .transactions
            .iter()
            .filter(|t| self.txn_filter.matches(t))
            .collect()
    }

    /// Pull every cursor back inside its list after the ledger changed.
    pub(crate) fn clamp_cursors(&mut self, ledger: &Ledger) {
        let txn_count = self.filtered_transactions(ledger).len();
        clamp_index(&mut self.transaction_index, txn_count);
        if self.transaction_scroll > self.transaction_index {
            self.transaction_scroll = self.transaction_index;
        }
        clamp_index(&mut self.budget_index, ledger.budgets.len());
        clamp_index(&mut self.goal_index, ledger.goals.len());
        clamp_index(&mut self.bill_index, ledger.bills.len());
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
