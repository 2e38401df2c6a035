// 📊 Spend Chart - Percentage spent by category as ASCII bars
//
// Share of each category = floor(spent * 100 / total spent), where "spent"
// counts withdrawals only. Bars are drawn top-down from 100 to 0 and the
// category names are written vertically under their columns.

use rust_decimal::Decimal;
use tracing::warn;

use crate::config::ReportConfig;
use crate::entities::ledger::checked_sum;
use crate::entities::Category;
use crate::error::{BudgetError, Result};

/// Render the spend chart with the default layout.
///
/// Column order follows the iteration order of `categories`.
/// Returns `BudgetError::NoWithdrawals` if nothing was spent anywhere.
pub fn create_spend_chart<'a, I>(categories: I) -> Result<String>
where
    I: IntoIterator<Item = &'a Category>,
{
    create_spend_chart_with(categories, &ReportConfig::default())
}

/// Render the spend chart with a custom layout
pub fn create_spend_chart_with<'a, I>(categories: I, config: &ReportConfig) -> Result<String>
where
    I: IntoIterator<Item = &'a Category>,
{
    let categories: Vec<&Category> = categories.into_iter().collect();

    let spent: Vec<Decimal> = categories
        .iter()
        .map(|c| c.try_spent())
        .collect::<Option<_>>()
        .ok_or(BudgetError::AmountOverflow)?;

    let total_withdrawn = checked_sum(spent.iter().copied()).ok_or(BudgetError::AmountOverflow)?;
    if total_withdrawn.is_zero() {
        warn!(categories = categories.len(), "spend chart requested with no withdrawals");
        return Err(BudgetError::NoWithdrawals);
    }

    let percentages: Vec<Decimal> = spent
        .iter()
        .map(|amount| spent_percent(*amount, total_withdrawn))
        .collect::<Result<_>>()?;

    let mut out = String::new();
    out.push_str(&config.chart_title);
    out.push('\n');

    // Bars
    let step = config.effective_chart_step();
    let bar = format!("{}  ", config.bar_char);
    for level in chart_levels(step) {
        out.push_str(&format!("{:>3}| ", level));
        for percent in &percentages {
            if Decimal::from(level) <= *percent {
                out.push_str(&bar);
            } else {
                out.push_str("   ");
            }
        }
        out.push('\n');
    }

    // Separator runs two characters past the last bar
    out.push_str("    ");
    out.push_str(&"-".repeat(3 * categories.len() + 1));
    out.push('\n');

    // Vertical labels
    let names: Vec<Vec<char>> = categories.iter().map(|c| c.name().chars().collect()).collect();
    let max_name_length = names.iter().map(|n| n.len()).max().unwrap_or(0);

    for i in 0..max_name_length {
        out.push_str("     ");
        for name in &names {
            match name.get(i) {
                Some(ch) => {
                    out.push(*ch);
                    out.push_str("  ");
                }
                None => out.push_str("   "),
            }
        }
        if i != max_name_length - 1 {
            out.push('\n');
        }
    }

    Ok(out)
}

/// floor(spent * 100 / total). Near `Decimal::MAX` the product overflows,
/// so divide first there (spent <= total keeps the share within [0, 1]).
fn spent_percent(spent: Decimal, total: Decimal) -> Result<Decimal> {
    spent
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(total))
        .or_else(|| {
            spent
                .checked_div(total)
                .and_then(|share| share.checked_mul(Decimal::ONE_HUNDRED))
        })
        .map(|percent| percent.floor())
        .ok_or(BudgetError::AmountOverflow)
}

/// Row levels from 100 down, always ending with the 0 baseline
fn chart_levels(step: u32) -> Vec<u32> {
    let mut levels: Vec<u32> = (0..=100).rev().step_by(step as usize).collect();
    if levels.last() != Some(&0) {
        levels.push(0);
    }
    levels
}

// ============================================================================
// TESTS
// ============================================================================
