mod bill;
mod budget;
mod goal;
mod transaction;

pub use bill::{Bill, BillStatus};
pub use budget::BudgetCategory;
pub use goal::{Goal, GoalKind};
pub use transaction::Transaction;

#[cfg(test)]
mod tests;
