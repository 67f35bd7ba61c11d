//! # Validation Module
//!
//! Field validators for the document submission path.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Two Paths, One Rule Set                            │
//! │                                                                         │
//! │  Preview path (every keystroke)                                        │
//! │  ├── numeric coercion only (parse-or-0)                                │
//! │  └── NO validation: totals::compute accepts anything                   │
//! │                                                                         │
//! │  Submission path (save / send)                                         │
//! │  ├── THIS MODULE: field validation via QuotationBuilder::build         │
//! │  └── Backend re-validates and recomputes on its side                   │
//! │                                                                         │
//! │  A value can preview as garbage for minutes and only gets rejected     │
//! │  when the user tries to submit it.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use quotient_core::validation::{validate_description, validate_percent};
//!
//! assert_eq!(validate_description(" Epoxy primer ").unwrap(), "Epoxy primer");
//! assert!(validate_percent("discount_percent", 150.0).is_err());
//! ```

use crate::error::ValidationError;
use crate::MAX_DESCRIPTION_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a line description.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
///
/// ## Returns
/// The trimmed description.
///
/// ## Example
/// ```rust
/// use quotient_core::validation::validate_description;
///
/// assert!(validate_description("Alkyd resin, 50kg drum").is_ok());
/// assert!(validate_description("   ").is_err());
/// ```
pub fn validate_description(description: &str) -> ValidationResult<String> {
    let description = description.trim();

    if description.is_empty() {
        return Err(ValidationError::Required {
            field: "description".to_string(),
        });
    }

    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(description.to_string())
}

/// Validates an HSN/SAC code.
///
/// ## Rules
/// - Blank is fine (the field is optional); normalized to `None`
/// - When present: 4 to 8 ASCII digits
///
/// ## Example
/// ```rust
/// use quotient_core::validation::validate_hsn_code;
///
/// assert_eq!(validate_hsn_code("320890").unwrap(), Some("320890".to_string()));
/// assert_eq!(validate_hsn_code("  ").unwrap(), None);
/// assert!(validate_hsn_code("32x890").is_err());
/// ```
pub fn validate_hsn_code(code: &str) -> ValidationResult<Option<String>> {
    let code = code.trim();

    if code.is_empty() {
        return Ok(None);
    }

    if !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "hsn_code".to_string(),
            reason: "must contain only digits".to_string(),
        });
    }

    if code.len() < 4 || code.len() > 8 {
        return Err(ValidationError::InvalidFormat {
            field: "hsn_code".to_string(),
            reason: "must be 4 to 8 digits".to_string(),
        });
    }

    Ok(Some(code.to_string()))
}

// =============================================================================
// Numeric Validators
// =============================================================================

fn validate_non_negative(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a line quantity.
///
/// ## Rules
/// - Must be finite (the coercion layer should have guaranteed this)
/// - Must be non-negative; zero is allowed (placeholder rows)
/// - Fractional quantities are allowed (2.5 kg)
pub fn validate_quantity(quantity: f64) -> ValidationResult<()> {
    validate_non_negative("quantity", quantity)
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be finite
/// - Must be non-negative; zero is allowed (free-of-charge samples)
pub fn validate_unit_price(unit_price: f64) -> ValidationResult<()> {
    validate_non_negative("unit_price", unit_price)
}

/// Validates a percentage field.
///
/// ## Rules
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  validate_percent("header_discount_percent", pct)                      │
/// │       │                                                                 │
/// │       ├── not finite?   → Error: NotFinite                             │
/// │       │                                                                 │
/// │       ├── outside 0..=100? → Error: OutOfRange                         │
/// │       │                                                                 │
/// │       └── OK → value accepted as-is (no slab check; any rate in       │
/// │                range is storable, the slab list is a UI affordance)    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Used for per-line discount, per-line tax and the header discount.
pub fn validate_percent(field: &str, pct: f64) -> ValidationResult<()> {
    if !pct.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    if !(0.0..=100.0).contains(&pct) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0.0,
            max: 100.0,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
