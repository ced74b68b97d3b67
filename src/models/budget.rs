use rust_decimal::Decimal;

/// A monthly spending limit and what has been spent against it so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetCategory {
    pub name: String,
    pub spent: Decimal,
    pub limit: Decimal,
}

impl BudgetCategory {
    pub fn new(name: String, spent: Decimal, limit: Decimal) -> Self {
        Self { name, spent, limit }
    }

    /// Find a category by name (case-insensitive) in a slice.
    pub fn find_by_name_mut<'a>(
        categories: &'a mut [BudgetCategory],
        name: &str,
    ) -> Option<&'a mut BudgetCategory> {
        let lower = name.to_lowercase();
        categories
            .iter_mut()
            .find(|c| c.name.to_lowercase() == lower)
    }
}

impl std::fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
