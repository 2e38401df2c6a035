// Budget errors
// Insufficient funds is NOT an error here: withdraw/transfer report it as `false`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    /// A spend chart needs at least one withdrawal across all categories
    #[error("cannot chart spending: no withdrawals recorded in any category")]
    NoWithdrawals,

    /// Withdrawal totals do not fit in a `Decimal`
    #[error("cannot chart spending: withdrawal totals overflow")]
    AmountOverflow,
}

pub type Result<T> = std::result::Result<T, BudgetError>;
