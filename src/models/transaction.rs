use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    /// Positive for income, negative for expense.
    pub amount: Decimal,
}

impl Transaction {
    pub fn new(date: NaiveDate, description: String, category: String, amount: Decimal) -> Self {
        Self {
            date,
            description,
            category,
            amount,
        }
    }

    pub fn is_income(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_expense(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    pub fn abs_amount(&self) -> Decimal {
        self.amount.abs()
    }
}
