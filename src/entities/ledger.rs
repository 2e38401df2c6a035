// 📒 Ledger Entry - One immutable line in a category ledger
//
// Deposits are stored as given, withdrawals as negative amounts.
// Entries are append-only: nothing edits or removes them once recorded.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    /// Signed amount (negative = money out)
    pub amount: Decimal,

    /// Free-text description, may be empty
    pub description: String,

    /// When the entry was appended
    pub recorded_at: DateTime<Utc>,
}

impl LedgerEntry {
    pub fn new(amount: Decimal, description: impl Into<String>) -> Self {
        LedgerEntry {
            amount,
            description: description.into(),
            recorded_at: Utc::now(),
        }
    }

    pub fn is_withdrawal(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }
}

/// Map `-0` (at any scale) to `0` so it never renders with a sign
pub(crate) fn unsigned_zero(amount: Decimal) -> Decimal {
    if amount.is_zero() {
        Decimal::ZERO
    } else {
        amount
    }
}

/// Overflow-checked sum of amounts
pub(crate) fn checked_sum<I>(amounts: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
}
