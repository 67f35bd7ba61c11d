//! # Error Types
//!
//! Domain-specific error types for quotient-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  quotient-core errors (this file)                                      │
//! │  ├── CoreError        - Document/line operation failures               │
//! │  └── ValidationError  - Field validation failures (builder only)       │
//! │                                                                         │
//! │  quotient-forms errors (separate crate)                                │
//! │  └── FormError        - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → FormError → Frontend              │
//! │                                                                         │
//! │  NOTE: the totals engine itself never errors. Coerced garbage flows    │
//! │  through arithmetic; only document construction is validated.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, index, limits)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent document-level rule violations. They should be
/// caught and translated to user-friendly messages at the form boundary.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A line index points past the end of the document.
    ///
    /// ## When This Occurs
    /// - A row update arrives for a line that was just removed
    /// - The client and the form state disagree about row count
    #[error("No line at index {index}")]
    LineNotFound { index: usize },

    /// Document has exceeded the maximum allowed line count.
    #[error("Document cannot have more than {max} lines")]
    TooManyLines { max: usize },

    /// A document with no lines cannot be submitted.
    ///
    /// Preview totals for an empty form are all zero and perfectly legal;
    /// only submission rejects the empty document.
    #[error("Document has no line items")]
    EmptyDocument,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field validation errors.
///
/// Raised only on the submission path (the document builder); the totals
/// preview never validates its input.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Value must be zero or greater.
    #[error("{field} must be non-negative")]
    MustBeNonNegative { field: String },

    /// Value is NaN or infinite.
    #[error("{field} is not a finite number")]
    NotFinite { field: String },

    /// Invalid format (e.g., malformed HSN code, bad date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Validity window ends before it starts.
    #[error("valid_until {valid_until} is before quote_date {quote_date}")]
    InvalidDateRange {
        quote_date: chrono::NaiveDate,
        valid_until: chrono::NaiveDate,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
