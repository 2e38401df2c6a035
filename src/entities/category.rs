// 🏷️ Category Entity - A budget category is a ledger with a name
//
// "Balance is never stored, it is always the sum of the ledger"
//
// Problem solved:
// - Deposits, withdrawals and transfers append to an ordered ledger
// - Withdrawals and transfers are gated by check_funds against the current balance
// - Display renders the category as a fixed-width ledger printout

use rust_decimal::Decimal;
use std::fmt;
use tracing::debug;

use crate::config::ReportConfig;
use crate::entities::ledger::{checked_sum, unsigned_zero, LedgerEntry};

// ============================================================================
// CATEGORY ENTITY
// ============================================================================

/// Category Entity - identity, name, append-only ledger
///
/// Identity: UUID (never changes)
/// Name: fixed at creation, used as display label and in transfer descriptions
/// Ledger: chronological, entries never edited or removed
#[derive(Debug, Clone)]
pub struct Category {
    /// Stable identity (UUID) - NEVER changes
    id: String,

    /// Category name (e.g., "Food", "Clothing", "Auto")
    name: String,

    /// Ledger entries in insertion order
    ledger: Vec<LedgerEntry>,
}

impl Category {
    /// Create new category with an empty ledger
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_ledger(name, Vec::new())
    }

    /// Create category with a pre-seeded ledger
    pub fn with_ledger(name: impl Into<String>, ledger: Vec<LedgerEntry>) -> Self {
        Category {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            ledger,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ledger(&self) -> &[LedgerEntry] {
        &self.ledger
    }

    // ========================================================================
    // LEDGER OPERATIONS
    // ========================================================================

    /// Record a deposit. No sign validation: a negative amount is recorded as given.
    ///
    /// Amounts are `Decimal`, so a ledger whose running sum exceeds
    /// `Decimal::MAX` makes `get_balance` panic; use `try_balance` to detect it.
    pub fn deposit(&mut self, amount: Decimal, description: impl Into<String>) {
        let entry = LedgerEntry::new(amount, description);
        debug!(category = %self.name, amount = %entry.amount, "deposit recorded");
        self.ledger.push(entry);
    }

    /// Record a withdrawal if funds allow. Returns `true` if it took place.
    ///
    /// The funds check uses `amount` as given while the entry always stores
    /// `-abs(amount)`, so a negative argument passes the check and is still
    /// recorded as money out.
    #[must_use]
    pub fn withdraw(&mut self, amount: Decimal, description: impl Into<String>) -> bool {
        if !self.check_funds(amount) {
            debug!(category = %self.name, amount = %amount, "withdrawal rejected: insufficient funds");
            return false;
        }

        let entry = LedgerEntry::new(unsigned_zero(-amount.abs()), description);
        debug!(category = %self.name, amount = %entry.amount, "withdrawal recorded");
        self.ledger.push(entry);
        true
    }

    /// Current balance: sum of every ledger amount, trailing zeros stripped
    ///
    /// # Panics
    /// If the sum overflows `Decimal` (see `try_balance`).
    pub fn get_balance(&self) -> Decimal {
        self.ledger.iter().map(|entry| entry.amount).sum::<Decimal>().normalize()
    }

    /// Balance, or `None` if the sum overflows `Decimal`
    pub fn try_balance(&self) -> Option<Decimal> {
        checked_sum(self.ledger.iter().map(|entry| entry.amount)).map(|sum| sum.normalize())
    }

    /// `false` if `amount` is greater than the balance, `true` otherwise
    pub fn check_funds(&self, amount: Decimal) -> bool {
        self.get_balance() >= amount
    }

    /// Move `amount` into `destination`. Both ledgers change or neither does.
    #[must_use]
    pub fn transfer(&mut self, amount: Decimal, destination: &mut Category) -> bool {
        if !self.check_funds(amount) {
            debug!(
                from = %self.name,
                to = %destination.name,
                amount = %amount,
                "transfer rejected: insufficient funds"
            );
            return false;
        }

        // check_funds already passed, so withdraw cannot fail here
        let withdrawn = self.withdraw(amount, format!("Transfer to {}", destination.name));
        debug_assert!(withdrawn);
        destination.deposit(amount, format!("Transfer from {}", self.name));
        true
    }

    /// Total money out: sum of the absolute values of negative entries
    ///
    /// # Panics
    /// If the sum overflows `Decimal` (see `try_spent`).
    pub fn spent(&self) -> Decimal {
        self.withdrawals().sum()
    }

    /// Money out, or `None` if the sum overflows `Decimal`
    pub fn try_spent(&self) -> Option<Decimal> {
        checked_sum(self.withdrawals())
    }

    fn withdrawals(&self) -> impl Iterator<Item = Decimal> + '_ {
        self.ledger
            .iter()
            .filter(|entry| entry.is_withdrawal())
            .map(|entry| entry.amount.abs())
    }

    // ========================================================================
    // RENDERING
    // ========================================================================

    /// Render the ledger printout with the given layout
    pub fn render(&self, config: &ReportConfig) -> String {
        let mut out = self.title_line(config);
        out.push('\n');

        for entry in &self.ledger {
            let description: String = entry
                .description
                .chars()
                .take(config.description_width)
                .collect();
            let amount = format!("{:.2}", unsigned_zero(entry.amount.round_dp(2)));

            out.push_str(&format!(
                "{:<desc_width$}{:>amount_width$}\n",
                description,
                amount,
                desc_width = config.description_width,
                amount_width = config.amount_width,
            ));
        }

        // Shortest decimal form, not forced to two places
        out.push_str(&format!("Total: {}", self.get_balance()));
        out
    }

    fn title_line(&self, config: &ReportConfig) -> String {
        let padding = config.title_width.saturating_sub(self.name.chars().count());
        let left = padding / 2;
        let right = padding - left;
        let fill = config.title_fill.to_string();

        format!("{}{}{}", fill.repeat(left), self.name, fill.repeat(right))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&ReportConfig::default()))
    }
}

// ============================================================================
// TESTS
// ============================================================================
