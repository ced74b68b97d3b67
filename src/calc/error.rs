use rust_decimal::Decimal;

/// A precondition of one of the calculator functions did not hold.
///
/// Every variant names the check that failed so callers can tell the user
/// which input to fix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum InvalidArgument {
    #[error("principal must be greater than zero (got {0})")]
    NonPositivePrincipal(Decimal),

    #[error("loan term must be at least one month")]
    ZeroTerm,

    #[error("annual interest rate cannot be negative (got {0}%)")]
    NegativeRate(Decimal),

    #[error("repayment schedule is limited to {max} months (got {months})")]
    ScheduleTooLong { months: u32, max: u32 },

    #[error("budget rollup needs at least one category")]
    EmptyCategories,

    #[error("category '{name}' must have a limit greater than zero (got {limit})")]
    NonPositiveLimit { name: String, limit: Decimal },

    #[error("category '{name}' has negative spending ({spent})")]
    NegativeSpent { name: String, spent: Decimal },

    #[error("goal '{title}' must have a target greater than zero (got {target})")]
    NonPositiveTarget { title: String, target: Decimal },

    #[error("goal '{title}' has negative progress ({current})")]
    NegativeProgress { title: String, current: Decimal },

    #[error("amount #{} is not a finite number", .index + 1)]
    NonFiniteAmount { index: usize },

    #[error("{0} is outside the representable currency range")]
    Overflow(&'static str),
}
