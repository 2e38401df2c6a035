// Entity Models
//
// A Category owns its ledger; LedgerEntry values are append-only.

pub mod category;
pub mod ledger;

pub use category::Category;
pub use ledger::LedgerEntry;
