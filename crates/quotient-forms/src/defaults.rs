//! # Form Defaults
//!
//! Defaults applied when a form or line is created.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`QUOTIENT_*`)
//! 2. Defaults (this file)
//!
//! Defaults are frozen into the form at creation time, so a form keeps the
//! configuration it was opened with even if the environment changes later.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use quotient_core::{TaxSlab, MAX_DOCUMENT_LINES};

/// Per-form configuration.
///
/// ## Fields
/// All fields have defaults matching the production UI; deployments override
/// through environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormDefaults {
    /// Currency symbol shown in totals and line figures.
    pub currency_symbol: String,

    /// Tax percent pre-filled on every new line.
    /// The standard GST slab for resins and coatings.
    pub default_tax_percent: f64,

    /// Maximum number of lines a document may carry.
    pub max_lines: usize,
}

impl Default for FormDefaults {
    fn default() -> Self {
        FormDefaults {
            currency_symbol: "₹".to_string(),
            default_tax_percent: TaxSlab::Eighteen.percent(),
            max_lines: MAX_DOCUMENT_LINES,
        }
    }
}

impl FormDefaults {
    /// Creates defaults from environment variables, falling back field by
    /// field.
    ///
    /// ## Environment Variables
    /// - `QUOTIENT_CURRENCY_SYMBOL`: Override the currency symbol
    /// - `QUOTIENT_DEFAULT_TAX_PERCENT`: Override the tax prefill (e.g. "12")
    /// - `QUOTIENT_MAX_LINES`: Override the line cap
    ///
    /// Unparseable values are ignored rather than propagated as errors.
    pub fn from_env() -> Self {
        let mut defaults = FormDefaults::default();

        if let Ok(symbol) = std::env::var("QUOTIENT_CURRENCY_SYMBOL") {
            if !symbol.is_empty() {
                defaults.currency_symbol = symbol;
            }
        }

        if let Ok(raw) = std::env::var("QUOTIENT_DEFAULT_TAX_PERCENT") {
            if let Ok(pct) = raw.parse::<f64>() {
                if pct.is_finite() && (0.0..=100.0).contains(&pct) {
                    defaults.default_tax_percent = pct;
                }
            }
        }

        if let Ok(raw) = std::env::var("QUOTIENT_MAX_LINES") {
            if let Ok(max) = raw.parse::<usize>() {
                if max > 0 {
                    defaults.max_lines = max;
                }
            }
        }

        defaults
    }

    /// The slab percentages offered by the tax rate selector.
    pub fn tax_slab_options(&self) -> Vec<f64> {
        TaxSlab::ALL.iter().map(|slab| slab.percent()).collect()
    }

    /// The tax prefill as input text: whole slabs render without a decimal
    /// point ("18"), fractional overrides keep theirs ("12.5").
    pub fn tax_prefill(&self) -> String {
        if self.default_tax_percent.fract() == 0.0 {
            format!("{:.0}", self.default_tax_percent)
        } else {
            self.default_tax_percent.to_string()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let defaults = FormDefaults::default();
        assert_eq!(defaults.currency_symbol, "₹");
        assert_eq!(defaults.default_tax_percent, 18.0);
        assert_eq!(defaults.max_lines, 200);
    }

    #[test]
    fn test_tax_slab_options() {
        let defaults = FormDefaults::default();
        assert_eq!(defaults.tax_slab_options(), vec![0.0, 5.0, 12.0, 18.0, 28.0]);
    }

    #[test]
    fn test_tax_prefill_formatting() {
        let mut defaults = FormDefaults::default();
        assert_eq!(defaults.tax_prefill(), "18");

        defaults.default_tax_percent = 12.5;
        assert_eq!(defaults.tax_prefill(), "12.5");

        defaults.default_tax_percent = 0.0;
        assert_eq!(defaults.tax_prefill(), "0");
    }

    // No other test touches the QUOTIENT_* variables, so setting them here
    // cannot race a parallel test.
    #[test]
    fn test_from_env_overrides() {
        // Unusable values are ignored field by field
        std::env::set_var("QUOTIENT_CURRENCY_SYMBOL", "");
        std::env::set_var("QUOTIENT_DEFAULT_TAX_PERCENT", "banana");
        std::env::set_var("QUOTIENT_MAX_LINES", "0");
        assert_eq!(FormDefaults::from_env(), FormDefaults::default());

        std::env::set_var("QUOTIENT_CURRENCY_SYMBOL", "$");
        std::env::set_var("QUOTIENT_DEFAULT_TAX_PERCENT", "12.5");
        std::env::set_var("QUOTIENT_MAX_LINES", "50");
        let defaults = FormDefaults::from_env();
        assert_eq!(defaults.currency_symbol, "$");
        assert_eq!(defaults.default_tax_percent, 12.5);
        assert_eq!(defaults.max_lines, 50);
        assert_eq!(defaults.tax_prefill(), "12.5");

        std::env::remove_var("QUOTIENT_CURRENCY_SYMBOL");
        std::env::remove_var("QUOTIENT_DEFAULT_TAX_PERCENT");
        std::env::remove_var("QUOTIENT_MAX_LINES");
    }
}
