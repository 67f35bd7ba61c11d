//! # Display Formatting Module
//!
//! en-IN money formatting for the totals panel and line grids.
//!
//! ## The Only Place That Rounds
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Everything upstream (coercion, totals, payloads) carries full f64     │
//! │  precision. Rounding to 2 decimals happens HERE, at display time,      │
//! │  and nowhere else.                                                      │
//! │                                                                         │
//! │      1234567.891  ──▶  "12,34,567.89"      (en-IN digit grouping)      │
//! │      1234567.891  ──▶  "₹12,34,567.89"     (with currency symbol)      │
//! │     -1234.5       ──▶  "-₹1,234.50"        (sign before symbol)        │
//! │                                                                         │
//! │  Indian grouping: last 3 digits, then groups of 2 (lakh / crore).      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rounding is scaled half-away: `round(value × 100) / 100`. Ties round up
//! in magnitude (`1.125` → `"1.13"`), matching the rounding the totals
//! panel has always shown.

use crate::numeric::coerce;

// =============================================================================
// Amount Formatting
// =============================================================================

/// Rounds to 2 decimals, half away from zero.
fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Groups an unsigned integer-part string Indian-style: the last three
/// digits, then pairs (`1234567` → `12,34,567`).
fn group_indian(digits: &str) -> String {
    let reversed: Vec<char> = digits.chars().rev().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);

    for (i, c) in reversed.iter().enumerate() {
        if i == 3 || (i > 3 && (i - 3) % 2 == 0) {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    grouped.chars().rev().collect()
}

/// Formats an amount with 2 decimals and en-IN digit grouping.
///
/// Non-finite input formats as `"0.00"`, the same fallback the coercion
/// layer applies everywhere else.
///
/// ## Example
/// ```rust
/// use quotient_core::format::format_amount;
///
/// assert_eq!(format_amount(0.0), "0.00");
/// assert_eq!(format_amount(1234.5), "1,234.50");
/// assert_eq!(format_amount(1234567.891), "12,34,567.89");
/// assert_eq!(format_amount(-1234.5), "-1,234.50");
/// ```
pub fn format_amount(value: f64) -> String {
    let rounded = round_2dp(coerce(value));
    let negative = rounded < 0.0;

    let plain = format!("{:.2}", rounded.abs());
    let (int_part, dec_part) = match plain.split_once('.') {
        Some((int_part, dec_part)) => (int_part, dec_part),
        None => (plain.as_str(), "00"),
    };

    let grouped = group_indian(int_part);
    if negative {
        format!("-{grouped}.{dec_part}")
    } else {
        format!("{grouped}.{dec_part}")
    }
}

/// Formats an amount with a currency symbol, sign leading the symbol.
///
/// ## Example
/// ```rust
/// use quotient_core::format::format_currency;
///
/// assert_eq!(format_currency(212.4, "₹"), "₹212.40");
/// assert_eq!(format_currency(-1234.0, "₹"), "-₹1,234.00");
/// ```
pub fn format_currency(value: f64, symbol: &str) -> String {
    let rounded = round_2dp(coerce(value));
    if rounded < 0.0 {
        format!("-{}{}", symbol, format_amount(-rounded))
    } else {
        format!("{}{}", symbol, format_amount(rounded))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
