//! # Amount Module
//!
//! Provides the `Amount` type for monetary values.
//!
//! ## Float Money, On Purpose
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE PREVIEW CONTRACT                                                   │
//! │                                                                         │
//! │  Every figure this workspace produces is a client-side PREVIEW.        │
//! │  The REST backend recomputes authoritative totals on save.             │
//! │                                                                         │
//! │  The browser computes quotation totals in IEEE-754 doubles, and the    │
//! │  preview here must land on the same bits. So Amount wraps f64 and      │
//! │  applies NO rounding anywhere: rounding happens once, at display       │
//! │  formatting (format.rs), exactly like the UI's 2-decimal rendering.    │
//! │                                                                         │
//! │  Ledger-grade integer money belongs to the backend, not the preview.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use quotient_core::amount::Amount;
//!
//! let subtotal = Amount::new(200.0);
//!
//! // Percentage application keeps the (pct / 100) grouping used on
//! // every discount and tax site
//! let discount = subtotal.percent(10.0);
//! assert_eq!(discount.value(), 20.0);
//!
//! // Arithmetic operations
//! let taxable = subtotal - discount;
//! assert_eq!(taxable.value(), 180.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Amount Type
// =============================================================================

/// A monetary value in major currency units (rupees, not paise).
///
/// ## Design Decisions
/// - **f64 (IEEE-754 double)**: mirrors the client arithmetic bit-for-bit
/// - **Single field tuple struct**: zero-cost abstraction over f64
/// - **No Eq/Ord/Hash**: floats only get `PartialEq`/`PartialOrd`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Amount(f64);

impl Amount {
    /// Creates an Amount from a raw value.
    ///
    /// ## Example
    /// ```rust
    /// use quotient_core::amount::Amount;
    ///
    /// let price = Amount::new(1099.5);
    /// assert_eq!(price.value(), 1099.5);
    /// ```
    #[inline]
    pub const fn new(value: f64) -> Self {
        Amount(value)
    }

    /// Returns the raw value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Returns zero.
    #[inline]
    pub const fn zero() -> Self {
        Amount(0.0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Checks if the value is negative.
    ///
    /// Negative amounts are never rejected; a negative quantity or price
    /// flows straight through to a negative total.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Amount(self.0.abs())
    }

    /// Applies a percentage and returns the resulting portion.
    ///
    /// Keeps the `value × (pct / 100)` grouping; callers that need a rate
    /// fraction (e.g. the flat document tax) multiply by the rate directly.
    ///
    /// ## Example
    /// ```rust
    /// use quotient_core::amount::Amount;
    ///
    /// let subtotal = Amount::new(1000.0);
    /// assert_eq!(subtotal.percent(12.0).value(), 120.0);
    /// assert_eq!(subtotal.percent(0.0).value(), 0.0);
    /// ```
    #[inline]
    pub fn percent(&self, pct: f64) -> Self {
        Amount(self.0 * (pct / 100.0))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows the amount with two decimals.
///
/// ## Note
/// This is for debugging and logs. UI display goes through `format.rs`,
/// which adds en-IN digit grouping and the currency symbol.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Default amount is zero.
impl Default for Amount {
    fn default() -> Self {
        Amount::zero()
    }
}

/// Addition of two Amounts.
impl Add for Amount {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Amount(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Amount {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Amounts.
impl Sub for Amount {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Amount(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Amount {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a scalar (quantities, rate fractions).
impl Mul<f64> for Amount {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Amount(self.0 * rhs)
    }
}

/// Negation (credit notes, corrections).
impl Neg for Amount {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Amount(-self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
