//! # Form Error Type
//!
//! Serializable boundary error returned by the form store.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Error Flow                                         │
//! │                                                                         │
//! │  React client                 Form store                                │
//! │  ────────────                 ──────────                                │
//! │                                                                         │
//! │  dispatch(lineUpdate)                                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  update_lines(...)                                               │  │
//! │  │  Result<FormSnapshot, FormError>                                 │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad index? ───── CoreError::LineNotFound ──┐                    │  │
//! │  │         │                                   ▼                    │  │
//! │  │  Invalid field? ─ ValidationError ───── FormError ──────────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ───────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  catch (e) {                                                            │
//! │    // e.message = "No line at index 7"                                  │
//! │    // e.code = "LINE_NOT_FOUND"                                         │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals never come through here: the preview path cannot fail. Only
//! structural line edits and payload building produce errors.

use serde::Serialize;

use quotient_core::{CoreError, ValidationError};

/// Error returned across the form-store boundary.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "description is required"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct FormError {
    /// Machine-readable error code for programmatic handling
    pub code: FormErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for form-store responses.
///
/// ## Usage in Frontend
/// ```typescript
/// try {
///   await store.updateLines(update);
/// } catch (e) {
///   switch (e.code) {
///     case 'LINE_NOT_FOUND':
///       refreshGrid();
///       break;
///     case 'VALIDATION_ERROR':
///       showFieldError(e.message);
///       break;
///     default:
///       showError('An error occurred');
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormErrorCode {
    /// A line index pointed past the current grid
    LineNotFound,

    /// The document line cap was hit
    TooManyLines,

    /// Submission attempted with no line items
    EmptyDocument,

    /// A field failed submission validation (400-class)
    ValidationError,

    /// Anything unexpected (500-class)
    Internal,
}

impl FormError {
    /// Creates a new form error.
    pub fn new(code: FormErrorCode, message: impl Into<String>) -> Self {
        FormError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        FormError::new(FormErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        FormError::new(FormErrorCode::Internal, message)
    }
}

/// Converts core errors to form errors.
impl From<CoreError> for FormError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::LineNotFound { .. } => {
                FormError::new(FormErrorCode::LineNotFound, err.to_string())
            }
            CoreError::TooManyLines { .. } => {
                FormError::new(FormErrorCode::TooManyLines, err.to_string())
            }
            CoreError::EmptyDocument => {
                FormError::new(FormErrorCode::EmptyDocument, err.to_string())
            }
            CoreError::Validation(e) => FormError::validation(e.to_string()),
        }
    }
}

/// Converts validation errors directly (skipping the core wrapper).
impl From<ValidationError> for FormError {
    fn from(err: ValidationError) -> Self {
        FormError::validation(err.to_string())
    }
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for FormError {}

// =============================================================================
// Unit Tests
// =============================================================================
