//! # Form Store
//!
//! The single mutable seam between the UI and the pure form state.
//!
//! ## Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         The Store Contract                              │
//! │                                                                         │
//! │   UI event ──► FormStore::update_* ──► reducer on QuotationForm        │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                 FormSnapshot  ◄── everything a render needs:           │
//! │                                    raw text + totals + display Strings │
//! │                                                                         │
//! │   Failed updates leave the stored form exactly as it was; the          │
//! │   error goes back as a FormError and the last snapshot stays valid.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! The store owns exactly one form and is not shared: the UI runs a single
//! event loop and every update arrives in sequence. There is no lock here
//! and no interior mutability; callers hold `&mut FormStore` and the
//! borrow checker enforces the one-writer rule at compile time.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ts_rs::TS;

use quotient_core::format::format_currency;
use quotient_core::totals::TotalsBreakdown;
use quotient_core::{Amount, DocumentKind};

use crate::defaults::FormDefaults;
use crate::draft::{DocumentMeta, LineUpdate, MetaUpdate, QuotationForm};
use crate::error::FormError;
use crate::payload::SubmissionPayload;

// =============================================================================
// Snapshots
// =============================================================================

/// Document totals pre-formatted for the preview panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TotalsDisplay {
    pub subtotal: String,
    pub header_discount_amount: String,
    pub taxable_amount: String,
    pub tax_amount: String,
    pub grand_total: String,
}

impl TotalsDisplay {
    fn new(totals: &TotalsBreakdown, symbol: &str) -> Self {
        TotalsDisplay {
            subtotal: format_currency(totals.subtotal.value(), symbol),
            header_discount_amount: format_currency(
                totals.header_discount_amount.value(),
                symbol,
            ),
            taxable_amount: format_currency(totals.taxable_amount.value(), symbol),
            tax_amount: format_currency(totals.tax_amount.value(), symbol),
            grand_total: format_currency(totals.grand_total.value(), symbol),
        }
    }
}

/// One grid row as the UI renders it: the raw cell text plus the
/// row-level total (exact and formatted).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineSnapshot {
    pub uid: String,
    pub description: String,
    pub hsn_code: String,
    pub quantity: String,
    pub unit_price: String,
    pub discount_percent: String,
    pub tax_percent: String,
    pub line_total: Amount,
    pub line_total_display: String,
}

/// A full render of the form: raw input text, recomputed totals, and the
/// formatted strings the preview shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormSnapshot {
    pub kind: DocumentKind,
    pub meta: DocumentMeta,
    pub lines: Vec<LineSnapshot>,
    pub header_discount_percent: String,
    pub totals: TotalsBreakdown,
    pub display: TotalsDisplay,
}

impl From<&QuotationForm> for FormSnapshot {
    fn from(form: &QuotationForm) -> Self {
        let totals = form.totals();
        let symbol = &form.defaults.currency_symbol;

        let lines = form
            .lines
            .iter()
            .map(|line| {
                let line_total = line.to_line_item().line_total();
                LineSnapshot {
                    uid: line.uid.clone(),
                    description: line.description.clone(),
                    hsn_code: line.hsn_code.clone(),
                    quantity: line.quantity.clone(),
                    unit_price: line.unit_price.clone(),
                    discount_percent: line.discount_percent.clone(),
                    tax_percent: line.tax_percent.clone(),
                    line_total,
                    line_total_display: format_currency(line_total.value(), symbol),
                }
            })
            .collect();

        FormSnapshot {
            kind: form.kind,
            meta: form.meta.clone(),
            lines,
            header_discount_percent: form.header_discount_percent.clone(),
            display: TotalsDisplay::new(&totals, symbol),
            totals,
        }
    }
}

// =============================================================================
// Form Store
// =============================================================================

/// Owns the live form for one editor session.
pub struct FormStore {
    form: QuotationForm,
}

impl FormStore {
    /// Opens a fresh form of the given kind.
    pub fn new(kind: DocumentKind, defaults: FormDefaults) -> Self {
        info!("Opening {} form", kind.label());
        FormStore {
            form: QuotationForm::new(kind, &defaults),
        }
    }

    /// Read access to the current form value.
    pub fn form(&self) -> &QuotationForm {
        &self.form
    }

    /// Renders the current state without changing it.
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot::from(&self.form)
    }

    /// Applies a header-field edit and returns the new render.
    pub fn update_meta(&mut self, update: MetaUpdate) -> FormSnapshot {
        debug!("Meta update: {:?}", update);
        self.form = self.form.clone().apply_meta(update);
        self.snapshot()
    }

    /// Applies a line-grid edit and returns the new render.
    ///
    /// On failure the stored form is unchanged and the previous snapshot
    /// remains accurate.
    pub fn update_lines(&mut self, update: LineUpdate) -> Result<FormSnapshot, FormError> {
        debug!("Line update: {:?}", update);
        self.form = self.form.clone().apply_lines(update)?;
        Ok(self.snapshot())
    }

    /// Replaces the header discount text and returns the new render.
    pub fn update_header_discount(&mut self, raw: impl Into<String>) -> FormSnapshot {
        let raw = raw.into();
        debug!("Header discount update: {:?}", raw);
        self.form = self.form.clone().apply_header_discount(raw);
        self.snapshot()
    }

    /// Discards all edits and reopens a fresh form of the same kind, with
    /// the same frozen defaults.
    pub fn reset(&mut self) -> FormSnapshot {
        info!("Resetting {} form", self.form.kind.label());
        self.form = QuotationForm::new(self.form.kind, &self.form.defaults);
        self.snapshot()
    }

    /// Runs the submission path and builds the wire payload.
    ///
    /// Validation failures come back as a [`FormError`] with the offending
    /// field named in the message; the form keeps its current text so the
    /// user can correct it.
    pub fn build_payload(&self) -> Result<SubmissionPayload, FormError> {
        match self.form.to_quotation() {
            Ok(quotation) => {
                let payload = SubmissionPayload::from_quotation(&quotation);
                info!(
                    "Built {} payload: {} lines, grand total {:.2}",
                    self.form.kind.label(),
                    payload.items.len(),
                    payload.grand_total
                );
                Ok(payload)
            }
            Err(err) => {
                warn!("Submission blocked: {}", err);
                Err(err.into())
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
