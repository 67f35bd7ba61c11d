//! # Numeric Coercion Module
//!
//! Parse-and-fallback conversions from form text and loose JSON to `f64`.
//!
//! ## The Coercion Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Form inputs arrive as free text. Whatever the user typed, the         │
//! │  numeric layer answers with a finite f64:                              │
//! │                                                                         │
//! │    ""        →  0.0        "  2.5 "  →  2.5                            │
//! │    "abc"     →  0.0        "1e3"     →  1000.0                         │
//! │    "NaN"     →  0.0        "-7"      →  -7.0                           │
//! │                                                                         │
//! │  NaN and infinities never leave this module. Downstream arithmetic    │
//! │  (totals, payloads) can assume finite inputs.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no validation here. A negative quantity or a 250% discount is
//! coerced faithfully and flows through to the totals engine; rejecting
//! values is the submission path's job (validation.rs).

use serde::{Deserialize, Deserializer};

// =============================================================================
// String Coercion
// =============================================================================

/// Parses a text field into a finite `f64`, falling back to `0.0`.
///
/// Falls back on empty input, unparseable input, and parseable-but-non-finite
/// input ("NaN", "inf"). The whole trimmed string must parse; trailing
/// garbage ("12abc") falls back rather than salvaging a prefix.
///
/// ## Example
/// ```rust
/// use quotient_core::numeric::parse_or_zero;
///
/// assert_eq!(parse_or_zero("12.5"), 12.5);
/// assert_eq!(parse_or_zero(""), 0.0);
/// assert_eq!(parse_or_zero("three"), 0.0);
/// ```
pub fn parse_or_zero(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Clamps a parsed number to the finite range by zeroing NaN and infinities.
pub fn coerce(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

// =============================================================================
// Serde Support
// =============================================================================

/// Deserializes a numeric field leniently: accepts a JSON number, a numeric
/// string, `null`, or anything else, and coerces all of them through the
/// same fallback rules as [`parse_or_zero`].
///
/// Wire payloads produced by browser form code carry numbers and numeric
/// strings interchangeably, so every numeric payload field routes through
/// this with `#[serde(deserialize_with = "...")]`.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Num(n)) => coerce(n),
        Some(Raw::Text(s)) => parse_or_zero(&s),
        Some(Raw::Other(_)) | None => 0.0,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn test_parse_valid_numbers() {
        assert_eq!(parse_or_zero("0"), 0.0);
        assert_eq!(parse_or_zero("42"), 42.0);
        assert_eq!(parse_or_zero("12.5"), 12.5);
        assert_eq!(parse_or_zero("-7.25"), -7.25);
        assert_eq!(parse_or_zero("1e3"), 1000.0);
        assert_eq!(parse_or_zero(".5"), 0.5);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_or_zero("  2.5  "), 2.5);
        assert_eq!(parse_or_zero("\t10\n"), 10.0);
    }

    #[test]
    fn test_parse_fallback_to_zero() {
        assert_eq!(parse_or_zero(""), 0.0);
        assert_eq!(parse_or_zero("   "), 0.0);
        assert_eq!(parse_or_zero("abc"), 0.0);
        assert_eq!(parse_or_zero("12abc"), 0.0);
        assert_eq!(parse_or_zero("1,000"), 0.0);
        assert_eq!(parse_or_zero("₹100"), 0.0);
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        // f64::from_str happily parses these; the fallback must not
        assert_eq!(parse_or_zero("NaN"), 0.0);
        assert_eq!(parse_or_zero("inf"), 0.0);
        assert_eq!(parse_or_zero("-infinity"), 0.0);
    }

    #[test]
    fn test_coerce() {
        assert_eq!(coerce(3.25), 3.25);
        assert_eq!(coerce(-1.0), -1.0);
        assert_eq!(coerce(f64::NAN), 0.0);
        assert_eq!(coerce(f64::INFINITY), 0.0);
        assert_eq!(coerce(f64::NEG_INFINITY), 0.0);
    }

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::lenient_f64")]
        v: f64,
    }

    fn probe(json: &str) -> f64 {
        serde_json::from_str::<Probe>(json).unwrap().v
    }

    #[test]
    fn test_lenient_accepts_numbers() {
        assert_eq!(probe(r#"{"v": 12.5}"#), 12.5);
        assert_eq!(probe(r#"{"v": 3}"#), 3.0);
        assert_eq!(probe(r#"{"v": -0.25}"#), -0.25);
    }

    #[test]
    fn test_lenient_accepts_numeric_strings() {
        assert_eq!(probe(r#"{"v": "12.5"}"#), 12.5);
        assert_eq!(probe(r#"{"v": " 40 "}"#), 40.0);
    }

    #[test]
    fn test_lenient_falls_back() {
        assert_eq!(probe(r#"{"v": null}"#), 0.0);
        assert_eq!(probe(r#"{"v": ""}"#), 0.0);
        assert_eq!(probe(r#"{"v": "n/a"}"#), 0.0);
        assert_eq!(probe(r#"{"v": true}"#), 0.0);
        assert_eq!(probe(r#"{"v": [1, 2]}"#), 0.0);
        assert_eq!(probe(r#"{"v": {"nested": 1}}"#), 0.0);
        assert_eq!(probe(r#"{}"#), 0.0);
    }
}
