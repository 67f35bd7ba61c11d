//! # Domain Types
//!
//! Core domain types for quotation and invoice documents.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │    Quotation    │   │    TaxSlab      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  description    │   │  kind           │   │  Zero    (0%)   │       │
//! │  │  hsn_code       │   │  number         │   │  Five    (5%)   │       │
//! │  │  quantity       │   │  account        │   │  Twelve  (12%)  │       │
//! │  │  unit_price     │   │  dates, notes   │   │  Eighteen(18%)  │       │
//! │  │  discount_%     │   │  items[]        │   │  TwentyEight    │       │
//! │  │  tax_%          │   │  header_disc_%  │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │  DocumentKind   │   │ QuotationStatus │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  Quotation      │   │  Draft, Sent    │                             │
//! │  │  Invoice        │   │  Accepted, ...  │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Construction Paths
//! - `LineItem` is a plain value: anything coercible flows into the totals
//!   engine unchecked (preview path).
//! - `Quotation` is constructed only through `QuotationBuilder::build`, which
//!   validates every field (submission path).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::amount::Amount;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::validation;
use crate::MAX_DOCUMENT_LINES;

// =============================================================================
// Tax Slab
// =============================================================================

/// One of the five GST tax slabs offered by the rate selector.
///
/// ## Advisory, Not Enforced
/// The slab set is a UI choice list. `LineItem::tax_percent` stays a plain
/// `f64`, so a document loaded from elsewhere may carry an off-slab rate and
/// still compute. Serialized as its percent value (`18.0`), not a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub enum TaxSlab {
    Zero,
    Five,
    Twelve,
    Eighteen,
    TwentyEight,
}

impl TaxSlab {
    /// All slabs in ascending order, for select options.
    pub const ALL: [TaxSlab; 5] = [
        TaxSlab::Zero,
        TaxSlab::Five,
        TaxSlab::Twelve,
        TaxSlab::Eighteen,
        TaxSlab::TwentyEight,
    ];

    /// Returns the slab as a percentage.
    #[inline]
    pub const fn percent(self) -> f64 {
        match self {
            TaxSlab::Zero => 0.0,
            TaxSlab::Five => 5.0,
            TaxSlab::Twelve => 12.0,
            TaxSlab::Eighteen => 18.0,
            TaxSlab::TwentyEight => 28.0,
        }
    }
}

/// Default slab is 18%, the rate pre-filled on every new line.
impl Default for TaxSlab {
    fn default() -> Self {
        TaxSlab::Eighteen
    }
}

impl From<TaxSlab> for f64 {
    fn from(slab: TaxSlab) -> f64 {
        slab.percent()
    }
}

impl TryFrom<f64> for TaxSlab {
    type Error = String;

    /// Exact-match lookup. Off-slab percents are not rounded to a slab.
    fn try_from(pct: f64) -> Result<Self, Self::Error> {
        TaxSlab::ALL
            .into_iter()
            .find(|slab| slab.percent() == pct)
            .ok_or_else(|| format!("{pct} is not a GST slab (0, 5, 12, 18, 28)"))
    }
}

// =============================================================================
// Line Item
// =============================================================================

fn default_quantity() -> f64 {
    1.0
}

fn default_tax_percent() -> f64 {
    TaxSlab::Eighteen.percent()
}

/// A single row of a quotation or invoice.
///
/// Carries whatever the form coerced it to. Negative quantities, 250%
/// discounts and off-slab tax rates all pass through; rejection happens
/// only at `QuotationBuilder::build`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// What is being quoted (free text).
    pub description: String,

    /// HSN/SAC goods-and-services code, when the account requires one.
    pub hsn_code: Option<String>,

    /// Units quoted. Missing fields deserialize to the form prefill of 1.
    #[serde(default = "default_quantity")]
    pub quantity: f64,

    /// Price per unit in rupees.
    #[serde(default)]
    pub unit_price: f64,

    /// Per-line discount percentage. Display-only; see `line_total`.
    #[serde(default)]
    pub discount_percent: f64,

    /// Per-line tax percentage. Display-only; see `line_total`.
    #[serde(default = "default_tax_percent")]
    pub tax_percent: f64,
}

impl LineItem {
    /// Line extension before any discount or tax: `quantity × unit_price`.
    ///
    /// This is the only per-line figure the aggregate totals consume.
    #[inline]
    pub fn line_subtotal(&self) -> Amount {
        Amount::new(self.quantity * self.unit_price)
    }

    /// The row-level total shown next to the line:
    /// `quantity × unit_price × (1 − discount/100) × (1 + tax/100)`.
    ///
    /// ## Caution
    /// This figure applies the line's own discount and tax rates, while the
    /// document aggregate applies the header discount and a flat document
    /// rate (`totals::FLAT_TAX_RATE`). The two disagree whenever the line
    /// rates differ from the document's, and the rows are not expected to
    /// sum to the grand total. See `totals`.
    #[inline]
    pub fn line_total(&self) -> Amount {
        Amount::new(
            self.quantity
                * self.unit_price
                * (1.0 - self.discount_percent / 100.0)
                * (1.0 + self.tax_percent / 100.0),
        )
    }
}

// =============================================================================
// Document Kind
// =============================================================================

/// Which CRM document a form is editing.
///
/// Quotations and invoices share the line grid, the totals engine and the
/// payload shape; the kind selects the endpoint path and field labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Quotation,
    Invoice,
}

impl DocumentKind {
    /// Human label for headings and the number-field caption.
    pub const fn label(self) -> &'static str {
        match self {
            DocumentKind::Quotation => "Quotation",
            DocumentKind::Invoice => "Invoice",
        }
    }
}

impl Default for DocumentKind {
    fn default() -> Self {
        DocumentKind::Quotation
    }
}

// =============================================================================
// Quotation Status
// =============================================================================

/// Lifecycle status of a quotation document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum QuotationStatus {
    /// Being edited, not yet sent to the account.
    Draft,
    /// Sent to the account, awaiting a decision.
    Sent,
    /// Accepted by the account.
    Accepted,
    /// Rejected by the account.
    Rejected,
    /// Validity date passed without a decision.
    Expired,
}

impl QuotationStatus {
    /// Wire/display name, matching the serde representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            QuotationStatus::Draft => "draft",
            QuotationStatus::Sent => "sent",
            QuotationStatus::Accepted => "accepted",
            QuotationStatus::Rejected => "rejected",
            QuotationStatus::Expired => "expired",
        }
    }
}

impl Default for QuotationStatus {
    fn default() -> Self {
        QuotationStatus::Draft
    }
}

impl fmt::Display for QuotationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuotationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(QuotationStatus::Draft),
            "sent" => Ok(QuotationStatus::Sent),
            "accepted" => Ok(QuotationStatus::Accepted),
            "rejected" => Ok(QuotationStatus::Rejected),
            "expired" => Ok(QuotationStatus::Expired),
            other => Err(format!("unknown quotation status: {other}")),
        }
    }
}

// =============================================================================
// Quotation
// =============================================================================

/// A validated quotation or invoice document.
///
/// Constructed only through [`QuotationBuilder`]; every line and the header
/// discount have passed validation by the time a value of this type exists.
/// Totals are derived on demand and never stored.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Quotation {
    /// Backend identifier; `None` until the first save.
    pub id: Option<String>,
    pub kind: DocumentKind,
    /// Document number ("QT-2024-0042"); assigned by the backend when absent.
    pub number: Option<String>,
    /// Account (customer) the document is addressed to.
    pub account: Option<String>,
    #[ts(as = "Option<String>")]
    pub quote_date: Option<NaiveDate>,
    #[ts(as = "Option<String>")]
    pub valid_until: Option<NaiveDate>,
    pub notes: Option<String>,
    pub status: QuotationStatus,
    pub items: Vec<LineItem>,
    pub header_discount_percent: f64,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Quotation {
    /// Starts a builder for the given document kind.
    pub fn builder(kind: DocumentKind) -> QuotationBuilder {
        QuotationBuilder::new(kind)
    }

    /// Computes the document totals from the current items.
    pub fn totals(&self) -> crate::totals::TotalsBreakdown {
        crate::totals::compute(&self.items, self.header_discount_percent)
    }
}

// =============================================================================
// Quotation Builder
// =============================================================================

/// Fluent, validating constructor for [`Quotation`].
///
/// ## Usage
/// ```rust
/// use quotient_core::{DocumentKind, LineItem, Quotation};
///
/// let quotation = Quotation::builder(DocumentKind::Quotation)
///     .account("Acme Coatings Pvt Ltd")
///     .add_item(LineItem {
///         description: "Epoxy primer, 20L".to_string(),
///         hsn_code: None,
///         quantity: 2.0,
///         unit_price: 100.0,
///         discount_percent: 0.0,
///         tax_percent: 18.0,
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(quotation.totals().grand_total.value(), 236.0);
/// ```
#[derive(Debug, Clone)]
pub struct QuotationBuilder {
    kind: DocumentKind,
    number: Option<String>,
    account: Option<String>,
    quote_date: Option<NaiveDate>,
    valid_until: Option<NaiveDate>,
    notes: Option<String>,
    status: QuotationStatus,
    items: Vec<LineItem>,
    header_discount_percent: f64,
    created_at: Option<DateTime<Utc>>,
}

impl QuotationBuilder {
    pub fn new(kind: DocumentKind) -> Self {
        QuotationBuilder {
            kind,
            number: None,
            account: None,
            quote_date: None,
            valid_until: None,
            notes: None,
            status: QuotationStatus::default(),
            items: Vec::new(),
            header_discount_percent: 0.0,
            created_at: None,
        }
    }

    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    pub fn account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    pub fn quote_date(mut self, date: NaiveDate) -> Self {
        self.quote_date = Some(date);
        self
    }

    pub fn valid_until(mut self, date: NaiveDate) -> Self {
        self.valid_until = Some(date);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn status(mut self, status: QuotationStatus) -> Self {
        self.status = status;
        self
    }

    pub fn add_item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: Vec<LineItem>) -> Self {
        self.items = items;
        self
    }

    pub fn header_discount_percent(mut self, pct: f64) -> Self {
        self.header_discount_percent = pct;
        self
    }

    /// Pins the creation timestamp instead of taking the current time.
    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    /// Validates every field and produces the document.
    ///
    /// Checks, in order: line count (at least one, at most
    /// `MAX_DOCUMENT_LINES`), each line's fields, the header discount range,
    /// and date ordering. Descriptions and HSN codes come out trimmed.
    pub fn build(self) -> CoreResult<Quotation> {
        if self.items.is_empty() {
            return Err(CoreError::EmptyDocument);
        }
        if self.items.len() > MAX_DOCUMENT_LINES {
            return Err(CoreError::TooManyLines {
                max: MAX_DOCUMENT_LINES,
            });
        }

        let mut items = Vec::with_capacity(self.items.len());
        for item in self.items {
            let description = validation::validate_description(&item.description)?;
            let hsn_code = match item.hsn_code.as_deref() {
                Some(raw) => validation::validate_hsn_code(raw)?,
                None => None,
            };
            validation::validate_quantity(item.quantity)?;
            validation::validate_unit_price(item.unit_price)?;
            validation::validate_percent("discount_percent", item.discount_percent)?;
            validation::validate_percent("tax_percent", item.tax_percent)?;

            items.push(LineItem {
                description,
                hsn_code,
                ..item
            });
        }

        validation::validate_percent("header_discount_percent", self.header_discount_percent)?;

        if let (Some(quote_date), Some(valid_until)) = (self.quote_date, self.valid_until) {
            if valid_until < quote_date {
                return Err(ValidationError::InvalidDateRange {
                    quote_date,
                    valid_until,
                }
                .into());
            }
        }

        Ok(Quotation {
            id: None,
            kind: self.kind,
            number: self.number,
            account: self.account,
            quote_date: self.quote_date,
            valid_until: self.valid_until,
            notes: self.notes,
            status: self.status,
            items,
            header_discount_percent: self.header_discount_percent,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line(quantity: f64, unit_price: f64, discount: f64, tax: f64) -> LineItem {
        LineItem {
            description: "Test item".to_string(),
            hsn_code: None,
            quantity,
            unit_price,
            discount_percent: discount,
            tax_percent: tax,
        }
    }

    #[test]
    fn test_line_subtotal() {
        assert_eq!(line(2.0, 100.0, 0.0, 18.0).line_subtotal().value(), 200.0);
        assert_eq!(line(0.0, 100.0, 0.0, 18.0).line_subtotal().value(), 0.0);
        assert_eq!(line(2.5, 40.0, 0.0, 18.0).line_subtotal().value(), 100.0);
    }

    #[test]
    fn test_line_total_display_formula() {
        // qty × price × (1 − disc/100) × (1 + tax/100)
        let total = line(2.0, 100.0, 10.0, 18.0).line_total().value();
        assert!((total - 212.4).abs() < 1e-9);

        let untouched = line(1.0, 100.0, 0.0, 0.0).line_total().value();
        assert_eq!(untouched, 100.0);
    }

    #[test]
    fn test_line_total_disagrees_with_aggregate() {
        // Per-line rates feed the row figure; the aggregate uses the flat
        // document rate. With mixed slabs the two are different numbers.
        let items = vec![line(1.0, 100.0, 0.0, 28.0), line(1.0, 100.0, 0.0, 0.0)];

        let row_sum: f64 = items.iter().map(|i| i.line_total().value()).sum();
        let aggregate = crate::totals::compute(&items, 0.0);

        assert!((row_sum - 228.0).abs() < 1e-9);
        assert_eq!(aggregate.grand_total.value(), 236.0);
        assert!((row_sum - aggregate.grand_total.value()).abs() > 1.0);
    }

    #[test]
    fn test_line_item_deserialize_defaults() {
        let item: LineItem =
            serde_json::from_str(r#"{"description": "Thinner, 5L"}"#).unwrap();
        assert_eq!(item.quantity, 1.0);
        assert_eq!(item.unit_price, 0.0);
        assert_eq!(item.discount_percent, 0.0);
        assert_eq!(item.tax_percent, 18.0);
        assert_eq!(item.hsn_code, None);
    }

    #[test]
    fn test_tax_slab_percent() {
        assert_eq!(TaxSlab::Zero.percent(), 0.0);
        assert_eq!(TaxSlab::Five.percent(), 5.0);
        assert_eq!(TaxSlab::Twelve.percent(), 12.0);
        assert_eq!(TaxSlab::Eighteen.percent(), 18.0);
        assert_eq!(TaxSlab::TwentyEight.percent(), 28.0);
        assert_eq!(TaxSlab::ALL.len(), 5);
    }

    #[test]
    fn test_tax_slab_default_and_try_from() {
        assert_eq!(TaxSlab::default(), TaxSlab::Eighteen);
        assert_eq!(TaxSlab::try_from(12.0), Ok(TaxSlab::Twelve));
        assert!(TaxSlab::try_from(7.5).is_err());
        assert!(TaxSlab::try_from(-5.0).is_err());
    }

    #[test]
    fn test_tax_slab_serde_as_number() {
        assert_eq!(serde_json::to_string(&TaxSlab::Eighteen).unwrap(), "18.0");
        let slab: TaxSlab = serde_json::from_str("28.0").unwrap();
        assert_eq!(slab, TaxSlab::TwentyEight);
        assert!(serde_json::from_str::<TaxSlab>("7.5").is_err());
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            QuotationStatus::Draft,
            QuotationStatus::Sent,
            QuotationStatus::Accepted,
            QuotationStatus::Rejected,
            QuotationStatus::Expired,
        ] {
            let parsed: QuotationStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!("cancelled".parse::<QuotationStatus>().is_err());
        assert_eq!(QuotationStatus::default(), QuotationStatus::Draft);
        assert_eq!(
            serde_json::to_string(&QuotationStatus::Draft).unwrap(),
            "\"draft\""
        );
    }

    #[test]
    fn test_document_kind_labels() {
        assert_eq!(DocumentKind::Quotation.label(), "Quotation");
        assert_eq!(DocumentKind::Invoice.label(), "Invoice");
    }

    #[test]
    fn test_builder_happy_path() {
        let quotation = Quotation::builder(DocumentKind::Quotation)
            .number("QT-2024-0042")
            .account("Sharma Industrial Paints")
            .quote_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
            .valid_until(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap())
            .notes("Delivery within 2 weeks")
            .add_item(LineItem {
                description: "  Epoxy primer, 20L  ".to_string(),
                hsn_code: Some("320890".to_string()),
                quantity: 2.0,
                unit_price: 100.0,
                discount_percent: 0.0,
                tax_percent: 18.0,
            })
            .build()
            .unwrap();

        assert_eq!(quotation.id, None);
        assert_eq!(quotation.status, QuotationStatus::Draft);
        assert_eq!(quotation.items[0].description, "Epoxy primer, 20L");
        assert_eq!(quotation.items[0].hsn_code.as_deref(), Some("320890"));
        assert_eq!(quotation.totals().grand_total.value(), 236.0);
    }

    #[test]
    fn test_builder_blank_hsn_becomes_none() {
        let quotation = Quotation::builder(DocumentKind::Invoice)
            .add_item(LineItem {
                hsn_code: Some("   ".to_string()),
                ..line(1.0, 50.0, 0.0, 18.0)
            })
            .build()
            .unwrap();
        assert_eq!(quotation.items[0].hsn_code, None);
    }

    #[test]
    fn test_builder_rejects_empty_document() {
        let err = Quotation::builder(DocumentKind::Quotation)
            .build()
            .unwrap_err();
        assert!(matches!(err, CoreError::EmptyDocument));
    }

    #[test]
    fn test_builder_rejects_too_many_lines() {
        let mut builder = Quotation::builder(DocumentKind::Quotation);
        for _ in 0..=MAX_DOCUMENT_LINES {
            builder = builder.add_item(line(1.0, 1.0, 0.0, 18.0));
        }
        let err = builder.build().unwrap_err();
        assert!(matches!(
            err,
            CoreError::TooManyLines { max } if max == MAX_DOCUMENT_LINES
        ));
    }

    #[test]
    fn test_builder_rejects_bad_fields() {
        let blank_description = Quotation::builder(DocumentKind::Quotation)
            .add_item(LineItem {
                description: "   ".to_string(),
                ..line(1.0, 1.0, 0.0, 18.0)
            })
            .build()
            .unwrap_err();
        assert!(matches!(
            blank_description,
            CoreError::Validation(ValidationError::Required { .. })
        ));

        let negative_price = Quotation::builder(DocumentKind::Quotation)
            .add_item(line(1.0, -5.0, 0.0, 18.0))
            .build()
            .unwrap_err();
        assert!(matches!(
            negative_price,
            CoreError::Validation(ValidationError::MustBeNonNegative { .. })
        ));

        let nan_quantity = Quotation::builder(DocumentKind::Quotation)
            .add_item(line(f64::NAN, 1.0, 0.0, 18.0))
            .build()
            .unwrap_err();
        assert!(matches!(
            nan_quantity,
            CoreError::Validation(ValidationError::NotFinite { .. })
        ));

        let discount_past_full = Quotation::builder(DocumentKind::Quotation)
            .add_item(line(1.0, 1.0, 150.0, 18.0))
            .build()
            .unwrap_err();
        assert!(matches!(
            discount_past_full,
            CoreError::Validation(ValidationError::OutOfRange { .. })
        ));

        let bad_hsn = Quotation::builder(DocumentKind::Quotation)
            .add_item(LineItem {
                hsn_code: Some("32x890".to_string()),
                ..line(1.0, 1.0, 0.0, 18.0)
            })
            .build()
            .unwrap_err();
        assert!(matches!(
            bad_hsn,
            CoreError::Validation(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_builder_rejects_inverted_dates() {
        let err = Quotation::builder(DocumentKind::Quotation)
            .add_item(line(1.0, 1.0, 0.0, 18.0))
            .quote_date(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap())
            .valid_until(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_builder_accepts_header_discount_bounds() {
        for pct in [0.0, 50.0, 100.0] {
            let built = Quotation::builder(DocumentKind::Quotation)
                .add_item(line(1.0, 10.0, 0.0, 18.0))
                .header_discount_percent(pct)
                .build();
            assert!(built.is_ok());
        }

        let err = Quotation::builder(DocumentKind::Quotation)
            .add_item(line(1.0, 10.0, 0.0, 18.0))
            .header_discount_percent(100.5)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { .. })
        ));
    }
}
