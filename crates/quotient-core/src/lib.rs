//! # quotient-core: Pure Business Logic for Quotient
//!
//! This crate is the **heart** of Quotient. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Quotient Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (React)                             │   │
//! │  │    Quotation Form ──► Line Table ──► Totals Card ──► Submit    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON (snapshots / payloads)            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    quotient-forms                               │   │
//! │  │    form store, reducer-style updates, submission payloads       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ quotient-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  totals   │  │  numeric  │  │ validation│  │   │
//! │  │   │ LineItem  │  │  engine   │  │ coercion  │  │   rules   │  │   │
//! │  │   │ Quotation │  │ breakdown │  │ parse-or-0│  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              REST backend (external collaborator)               │   │
//! │  │        /crm/quotations: recomputes authoritative totals         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, Quotation, TaxSlab, etc.)
//! - [`totals`] - The totals engine (subtotal → discount → tax → grand total)
//! - [`amount`] - Monetary value type over `f64` (display rounding only)
//! - [`numeric`] - Parse-and-fallback coercion for raw form input
//! - [`validation`] - Field validation used by the document builder
//! - [`format`] - Currency display formatting (en-IN digit grouping)
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, database access is FORBIDDEN here
//! 3. **Float In, Float Out**: Totals are `f64` end to end; rounding happens
//!    only at display formatting, never inside the engine
//! 4. **Lenient Preview, Strict Submission**: the engine never validates;
//!    the `QuotationBuilder` is where bad documents are rejected
//!
//! ## Example Usage
//!
//! ```rust
//! use quotient_core::{totals, LineItem};
//!
//! let items = vec![LineItem {
//!     description: "Alkyd resin, 50kg drum".to_string(),
//!     hsn_code: None,
//!     quantity: 2.0,
//!     unit_price: 100.0,
//!     discount_percent: 0.0,
//!     tax_percent: 18.0,
//! }];
//!
//! let breakdown = totals::compute(&items, 0.0);
//!
//! // Flat 18% document tax on the undiscounted subtotal
//! assert_eq!(breakdown.subtotal.value(), 200.0);
//! assert_eq!(breakdown.tax_amount.value(), 36.0);
//! assert_eq!(breakdown.grand_total.value(), 236.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod amount;
pub mod error;
pub mod format;
pub mod numeric;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use quotient_core::Amount` instead of
// `use quotient_core::amount::Amount`

pub use amount::Amount;
pub use error::{CoreError, ValidationError};
pub use totals::{TotalsBreakdown, FLAT_TAX_RATE};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum line items allowed on a single document
///
/// ## Business Reason
/// Prevents runaway forms and keeps the per-keystroke totals recomputation
/// trivially cheap. Can be made configurable per-tenant in future versions.
pub const MAX_DOCUMENT_LINES: usize = 200;

/// Maximum length of a line description
///
/// ## Business Reason
/// Matches the column width the backend stores; longer text is rejected at
/// submission rather than silently truncated.
pub const MAX_DESCRIPTION_LEN: usize = 200;
