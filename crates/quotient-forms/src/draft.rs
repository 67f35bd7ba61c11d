//! # Form Drafts
//!
//! The immutable form-state value and its reducer-style updates.
//!
//! ## Keystroke Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Keystroke, One New Value                         │
//! │                                                                         │
//! │  Input event             Update value            State transition       │
//! │  ───────────             ────────────            ────────────────       │
//! │                                                                         │
//! │  Type in "Account" ────► MetaUpdate::Account ──► form.apply_meta(u)    │
//! │                                                                         │
//! │  Type in qty cell ─────► LineUpdate::Set ──────► form.apply_lines(u)?  │
//! │                                                                         │
//! │  Click "Add line" ─────► LineUpdate::Add ──────► form.apply_lines(u)?  │
//! │                                                                         │
//! │  Type in discount ─────► raw text ─────────────► form.apply_header_    │
//! │                                                       discount(raw)     │
//! │                                                                         │
//! │  Every transition consumes the old value and returns a fresh one;      │
//! │  nothing is edited in place. Totals are recomputed from the new        │
//! │  value on every transition (cheap, pure).                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Text In, Numbers Much Later
//! Drafts hold the raw text of every input, exactly as typed: `"2"`,
//! `""`, `"12abc"` are all valid draft states. Numbers exist only at the
//! two exits: `totals()` (lenient, parse-or-0) and `to_quotation()`
//! (strict, validating builder).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use quotient_core::numeric::parse_or_zero;
use quotient_core::totals::{self, TotalsBreakdown};
use quotient_core::{CoreError, DocumentKind, LineItem, Quotation, ValidationError};

use crate::defaults::FormDefaults;

/// Wire and input format for quotation dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_date(field: &str, raw: &str) -> Result<Option<NaiveDate>, CoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => Ok(Some(date)),
        Err(_) => Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "expected a YYYY-MM-DD date".to_string(),
        }
        .into()),
    }
}

// =============================================================================
// Line Draft
// =============================================================================

/// One editable row of the line grid, as raw input text.
///
/// ## Design Notes
/// - `uid`: stable list key for the React grid. Survives edits and
///   reorders; regenerated only when a row is created or duplicated.
/// - Numeric cells are `String` on purpose: between keystrokes an input
///   legitimately holds `""`, `"2."`, or pasted garbage, and the draft
///   must represent that faithfully.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineDraft {
    /// Stable row key (UUID v4).
    pub uid: String,

    /// Item description, free text.
    pub description: String,

    /// HSN/SAC code; optional, blank means absent.
    pub hsn_code: String,

    /// Quantity cell text. Prefilled "1" on new rows.
    pub quantity: String,

    /// Unit price cell text.
    pub unit_price: String,

    /// Per-line discount percent cell text.
    pub discount_percent: String,

    /// Per-line tax percent cell text. Prefilled from the defaults.
    pub tax_percent: String,
}

impl LineDraft {
    /// Creates a fresh row with the form prefills.
    pub fn new(defaults: &FormDefaults) -> Self {
        LineDraft {
            uid: Uuid::new_v4().to_string(),
            description: String::new(),
            hsn_code: String::new(),
            quantity: "1".to_string(),
            unit_price: String::new(),
            discount_percent: "0".to_string(),
            tax_percent: defaults.tax_prefill(),
        }
    }

    /// Coerces the row into a [`LineItem`]. Never fails: unparseable
    /// numeric cells coerce to 0, a blank HSN becomes `None`.
    pub fn to_line_item(&self) -> LineItem {
        LineItem {
            description: self.description.clone(),
            hsn_code: non_blank(&self.hsn_code),
            quantity: parse_or_zero(&self.quantity),
            unit_price: parse_or_zero(&self.unit_price),
            discount_percent: parse_or_zero(&self.discount_percent),
            tax_percent: parse_or_zero(&self.tax_percent),
        }
    }
}

// =============================================================================
// Document Meta
// =============================================================================

/// The header fields above the line grid, as raw input text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DocumentMeta {
    /// Document number; backend assigns one when left blank.
    pub number: String,

    /// Account (customer) name.
    pub account: String,

    /// Quote date text, `YYYY-MM-DD` (HTML date input format).
    pub quote_date: String,

    /// Validity date text, `YYYY-MM-DD`.
    pub valid_until: String,

    /// Free-form notes / terms.
    pub notes: String,
}

// =============================================================================
// Updates
// =============================================================================

/// An edit to one of the header fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum MetaUpdate {
    Number(String),
    Account(String),
    QuoteDate(String),
    ValidUntil(String),
    Notes(String),
}

/// The editable columns of the line grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum LineField {
    Description,
    HsnCode,
    Quantity,
    UnitPrice,
    DiscountPercent,
    TaxPercent,
}

/// A structural or cell edit to the line grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum LineUpdate {
    /// Append a fresh prefilled row.
    Add,
    /// Remove the row at `index`. Removing the last row leaves an empty
    /// grid (totals all zero).
    Remove { index: usize },
    /// Copy the row at `index` (fresh uid) and insert the copy below it.
    Duplicate { index: usize },
    /// Replace the text of one cell.
    Set {
        index: usize,
        field: LineField,
        value: String,
    },
}

// =============================================================================
// Quotation Form
// =============================================================================

/// The whole form state: header fields, line grid, header discount.
///
/// Defaults are frozen in at creation (the same way a cart freezes prices),
/// so the line cap and tax prefill never shift under an open form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuotationForm {
    pub kind: DocumentKind,
    pub meta: DocumentMeta,
    pub lines: Vec<LineDraft>,
    /// Header discount percent as raw text. Out-of-range text is kept
    /// verbatim; the preview engine coerces, the builder rejects.
    pub header_discount_percent: String,
    #[serde(default)]
    pub defaults: FormDefaults,
}

impl QuotationForm {
    /// Creates a fresh form: blank header, one prefilled line, 0% discount.
    pub fn new(kind: DocumentKind, defaults: &FormDefaults) -> Self {
        QuotationForm {
            kind,
            meta: DocumentMeta::default(),
            lines: vec![LineDraft::new(defaults)],
            header_discount_percent: "0".to_string(),
            defaults: defaults.clone(),
        }
    }

    /// Coerces every row into a [`LineItem`] (parse-or-0, never fails).
    pub fn line_items(&self) -> Vec<LineItem> {
        self.lines.iter().map(LineDraft::to_line_item).collect()
    }

    /// Recomputes the document totals from the current text.
    ///
    /// Pure and cheap; called after every transition.
    pub fn totals(&self) -> TotalsBreakdown {
        totals::compute(
            &self.line_items(),
            parse_or_zero(&self.header_discount_percent),
        )
    }

    /// Applies a header-field edit. Infallible: header text is stored
    /// verbatim.
    #[must_use]
    pub fn apply_meta(mut self, update: MetaUpdate) -> Self {
        match update {
            MetaUpdate::Number(value) => self.meta.number = value,
            MetaUpdate::Account(value) => self.meta.account = value,
            MetaUpdate::QuoteDate(value) => self.meta.quote_date = value,
            MetaUpdate::ValidUntil(value) => self.meta.valid_until = value,
            MetaUpdate::Notes(value) => self.meta.notes = value,
        }
        self
    }

    /// Applies a line-grid edit.
    ///
    /// ## Errors
    /// - `LineNotFound` when `index` points past the grid
    /// - `TooManyLines` when `Add`/`Duplicate` would pass the cap
    pub fn apply_lines(mut self, update: LineUpdate) -> Result<Self, CoreError> {
        match update {
            LineUpdate::Add => {
                if self.lines.len() >= self.defaults.max_lines {
                    return Err(CoreError::TooManyLines {
                        max: self.defaults.max_lines,
                    });
                }
                self.lines.push(LineDraft::new(&self.defaults));
            }
            LineUpdate::Remove { index } => {
                if index >= self.lines.len() {
                    return Err(CoreError::LineNotFound { index });
                }
                self.lines.remove(index);
            }
            LineUpdate::Duplicate { index } => {
                if index >= self.lines.len() {
                    return Err(CoreError::LineNotFound { index });
                }
                if self.lines.len() >= self.defaults.max_lines {
                    return Err(CoreError::TooManyLines {
                        max: self.defaults.max_lines,
                    });
                }
                let mut copy = self.lines[index].clone();
                copy.uid = Uuid::new_v4().to_string();
                self.lines.insert(index + 1, copy);
            }
            LineUpdate::Set {
                index,
                field,
                value,
            } => {
                let line = self
                    .lines
                    .get_mut(index)
                    .ok_or(CoreError::LineNotFound { index })?;
                match field {
                    LineField::Description => line.description = value,
                    LineField::HsnCode => line.hsn_code = value,
                    LineField::Quantity => line.quantity = value,
                    LineField::UnitPrice => line.unit_price = value,
                    LineField::DiscountPercent => line.discount_percent = value,
                    LineField::TaxPercent => line.tax_percent = value,
                }
            }
        }
        Ok(self)
    }

    /// Replaces the header discount text. Infallible: `"abc"` and `"250"`
    /// are stored as typed, and the preview coerces them to 0 and 250.
    #[must_use]
    pub fn apply_header_discount(mut self, raw: impl Into<String>) -> Self {
        self.header_discount_percent = raw.into();
        self
    }

    /// Runs the submission path: coerce, then validate through the builder.
    ///
    /// Dates parse as `YYYY-MM-DD`; blank optional fields become `None`.
    pub fn to_quotation(&self) -> Result<Quotation, CoreError> {
        let mut builder = Quotation::builder(self.kind)
            .items(self.line_items())
            .header_discount_percent(parse_or_zero(&self.header_discount_percent));

        if let Some(number) = non_blank(&self.meta.number) {
            builder = builder.number(number);
        }
        if let Some(account) = non_blank(&self.meta.account) {
            builder = builder.account(account);
        }
        if let Some(date) = parse_date("quote_date", &self.meta.quote_date)? {
            builder = builder.quote_date(date);
        }
        if let Some(date) = parse_date("valid_until", &self.meta.valid_until)? {
            builder = builder.valid_until(date);
        }
        if let Some(notes) = non_blank(&self.meta.notes) {
            builder = builder.notes(notes);
        }

        builder.build()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
