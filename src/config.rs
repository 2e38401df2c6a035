// 📐 Report Configuration - Layout as Data
// Column widths and glyphs for the ledger printout and the spend chart

use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// REPORT CONFIG
// ============================================================================

/// Layout settings shared by `Category::render` and the spend chart.
///
/// Every field has a default, so a JSON file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Width of the `*****Food*****` title line
    #[serde(default = "default_title_width")]
    pub title_width: usize,

    /// Fill character around the category name
    #[serde(default = "default_title_fill")]
    pub title_fill: char,

    /// Descriptions are truncated to this many characters
    #[serde(default = "default_description_width")]
    pub description_width: usize,

    /// Amount column width (amounts right-aligned, two decimals)
    #[serde(default = "default_amount_width")]
    pub amount_width: usize,

    /// First line of the spend chart
    #[serde(default = "default_chart_title")]
    pub chart_title: String,

    /// Glyph used to draw bars
    #[serde(default = "default_bar_char")]
    pub bar_char: char,

    /// Percentage between chart rows
    #[serde(default = "default_chart_step")]
    pub chart_step: u32,
}

fn default_title_width() -> usize {
    30
}

fn default_title_fill() -> char {
    '*'
}

fn default_description_width() -> usize {
    23
}

fn default_amount_width() -> usize {
    7
}

fn default_chart_title() -> String {
    "Percentage spent by category".to_string()
}

fn default_bar_char() -> char {
    'o'
}

fn default_chart_step() -> u32 {
    10
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            title_width: default_title_width(),
            title_fill: default_title_fill(),
            description_width: default_description_width(),
            amount_width: default_amount_width(),
            chart_title: default_chart_title(),
            bar_char: default_bar_char(),
            chart_step: default_chart_step(),
        }
    }
}

impl ReportConfig {
    /// Load config from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read report config: {:?}", path.as_ref()))?;

        let config: ReportConfig = serde_json::from_str(&content)
            .context("Failed to parse report config JSON")?;

        Ok(config)
    }

    /// Row step actually used by the chart (0 or >100 falls back to 10)
    pub fn effective_chart_step(&self) -> u32 {
        if self.chart_step == 0 || self.chart_step > 100 {
            default_chart_step()
        } else {
            self.chart_step
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
