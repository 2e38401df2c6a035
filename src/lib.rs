// Budget Ledger - Core Library
// Exposes the ledger model and both text reports for the demo binary and tests

pub mod chart;
pub mod config;
pub mod entities;
pub mod error;

// Re-export commonly used types
pub use chart::{create_spend_chart, create_spend_chart_with};
pub use config::ReportConfig;
pub use entities::{Category, LedgerEntry};
pub use error::{BudgetError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
