//! # Wire Payloads
//!
//! What a submitted form sends to the CRM backend.
//!
//! ## The Submission Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   SubmissionPayload ──► POST /crm/quotations        (create)           │
//! │                         PUT  /crm/quotations/:id    (update)           │
//! │                                                                         │
//! │   The payload carries the client's derived totals, but they are        │
//! │   advisory: the server recomputes every figure from items[] and        │
//! │   header_discount_percent, and the stored totals are the server's.     │
//! │                                                                         │
//! │   created_at is never sent; the server assigns it on create.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Deserialization is lenient on every numeric field (string digits, null,
//! and junk all coerce, see [`quotient_core::numeric`]) so replaying a
//! payload logged by an older client cannot fail on a number.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use quotient_core::numeric::lenient_f64;
use quotient_core::{DocumentKind, LineItem, Quotation, QuotationStatus};

// =============================================================================
// Endpoints
// =============================================================================

/// Collection endpoint for quotation documents.
pub const QUOTATIONS_PATH: &str = "/crm/quotations";

/// Collection endpoint for invoice documents.
pub const INVOICES_PATH: &str = "/crm/invoices";

/// `POST` target for a new document of the given kind.
pub fn create_path(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Quotation => QUOTATIONS_PATH,
        DocumentKind::Invoice => INVOICES_PATH,
    }
}

/// `PUT` target for an existing document.
pub fn update_path(kind: DocumentKind, id: &str) -> String {
    format!("{}/{}", create_path(kind), id)
}

// =============================================================================
// Line Item Payload
// =============================================================================

/// One line item on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItemPayload {
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hsn_code: Option<String>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub quantity: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub unit_price: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub discount_percent: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub tax_percent: f64,

    /// Row display total, with the line's own rates applied. Advisory,
    /// like every derived figure in the payload.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub line_total: f64,
}

impl From<&LineItem> for LineItemPayload {
    fn from(item: &LineItem) -> Self {
        LineItemPayload {
            description: item.description.clone(),
            hsn_code: item.hsn_code.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
            discount_percent: item.discount_percent,
            tax_percent: item.tax_percent,
            line_total: item.line_total().value(),
        }
    }
}

// =============================================================================
// Submission Payload
// =============================================================================

/// The full create/update request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmissionPayload {
    /// Client-generated request key, fresh on every build. Lets the
    /// backend drop a double-submitted form instead of creating twice.
    pub client_ref: String,

    pub kind: DocumentKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub quote_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub valid_until: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    pub status: QuotationStatus,

    pub items: Vec<LineItemPayload>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub header_discount_percent: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub subtotal: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub header_discount_amount: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub taxable_amount: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub tax_amount: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub grand_total: f64,
}

impl SubmissionPayload {
    /// Flattens a validated document into the request body, recomputing
    /// the derived totals from its items.
    pub fn from_quotation(quotation: &Quotation) -> Self {
        let totals = quotation.totals();
        SubmissionPayload {
            client_ref: Uuid::new_v4().to_string(),
            kind: quotation.kind,
            number: quotation.number.clone(),
            account: quotation.account.clone(),
            quote_date: quotation.quote_date,
            valid_until: quotation.valid_until,
            notes: quotation.notes.clone(),
            status: quotation.status,
            items: quotation.items.iter().map(LineItemPayload::from).collect(),
            header_discount_percent: quotation.header_discount_percent,
            subtotal: totals.subtotal.value(),
            header_discount_amount: totals.header_discount_amount.value(),
            taxable_amount: totals.taxable_amount.value(),
            tax_amount: totals.tax_amount.value(),
            grand_total: totals.grand_total.value(),
        }
    }

    /// Serializes the request body.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(description: &str, quantity: f64, unit_price: f64) -> LineItem {
        LineItem {
            description: description.to_string(),
            hsn_code: None,
            quantity,
            unit_price,
            discount_percent: 0.0,
            tax_percent: 18.0,
        }
    }

    fn full_quotation() -> Quotation {
        Quotation::builder(DocumentKind::Quotation)
            .number("QT-2024-0042")
            .account("Acme Coatings")
            .quote_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
            .valid_until(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap())
            .add_item(item("Epoxy primer, 20L", 2.0, 100.0))
            .header_discount_percent(10.0)
            .build()
            .unwrap()
    }

    fn bare_quotation() -> Quotation {
        Quotation::builder(DocumentKind::Quotation)
            .add_item(item("Epoxy primer, 20L", 2.0, 100.0))
            .build()
            .unwrap()
    }

    #[test]
    fn test_paths() {
        assert_eq!(create_path(DocumentKind::Quotation), "/crm/quotations");
        assert_eq!(create_path(DocumentKind::Invoice), "/crm/invoices");
        assert_eq!(
            update_path(DocumentKind::Quotation, "42"),
            "/crm/quotations/42"
        );
        assert_eq!(
            update_path(DocumentKind::Invoice, "a1b2"),
            "/crm/invoices/a1b2"
        );
    }

    #[test]
    fn test_wire_shape() {
        let payload = SubmissionPayload::from_quotation(&full_quotation());
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["kind"], "quotation");
        assert_eq!(json["status"], "draft");
        assert_eq!(json["number"], "QT-2024-0042");
        assert_eq!(json["account"], "Acme Coatings");
        assert_eq!(json["quote_date"], "2024-03-01");
        assert_eq!(json["valid_until"], "2024-03-31");
        assert_eq!(json["header_discount_percent"], 10.0);

        assert_eq!(json["items"][0]["description"], "Epoxy primer, 20L");
        assert_eq!(json["items"][0]["quantity"], 2.0);
        assert_eq!(json["items"][0]["unit_price"], 100.0);
        assert_eq!(json["items"][0]["tax_percent"], 18.0);

        assert_eq!(json["subtotal"], 200.0);
        assert_eq!(json["header_discount_amount"], 20.0);
        assert_eq!(json["taxable_amount"], 180.0);
        assert_eq!(json["tax_amount"], 32.4);
        assert_eq!(json["grand_total"], 212.4);

        // Server-owned fields never ride along
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("created_at"));
        assert!(!object.contains_key("id"));
    }

    #[test]
    fn test_optional_fields_omitted() {
        let payload = SubmissionPayload::from_quotation(&bare_quotation());
        let json = serde_json::to_value(&payload).unwrap();
        let object = json.as_object().unwrap();

        assert!(!object.contains_key("number"));
        assert!(!object.contains_key("account"));
        assert!(!object.contains_key("quote_date"));
        assert!(!object.contains_key("valid_until"));
        assert!(!object.contains_key("notes"));

        let line = json["items"][0].as_object().unwrap();
        assert!(!line.contains_key("hsn_code"));

        assert_eq!(json["grand_total"], 236.0);
    }

    #[test]
    fn test_line_total_rides_along() {
        let payload = SubmissionPayload::from_quotation(&bare_quotation());
        // 2 × 100 × 1.18, the row's own view of itself
        assert!((payload.items[0].line_total - 236.0).abs() < 1e-9);
    }

    #[test]
    fn test_client_ref_is_fresh_uuid() {
        let quotation = bare_quotation();
        let first = SubmissionPayload::from_quotation(&quotation);
        let second = SubmissionPayload::from_quotation(&quotation);

        assert_ne!(first.client_ref, second.client_ref);
        assert!(Uuid::parse_str(&first.client_ref).is_ok());
        assert!(Uuid::parse_str(&second.client_ref).is_ok());
    }

    #[test]
    fn test_lenient_line_deserialization() {
        let line: LineItemPayload = serde_json::from_str(
            r#"{
                "description": "Epoxy primer",
                "quantity": "2",
                "unit_price": "abc",
                "tax_percent": null
            }"#,
        )
        .unwrap();

        assert_eq!(line.quantity, 2.0);
        assert_eq!(line.unit_price, 0.0);
        assert_eq!(line.discount_percent, 0.0);
        assert_eq!(line.tax_percent, 0.0);
        assert_eq!(line.hsn_code, None);
    }

    #[test]
    fn test_lenient_payload_deserialization() {
        let payload: SubmissionPayload = serde_json::from_str(
            r#"{
                "client_ref": "b5f9a6c0-0000-0000-0000-000000000000",
                "kind": "invoice",
                "status": "sent",
                "items": [],
                "grand_total": "212.40"
            }"#,
        )
        .unwrap();

        assert_eq!(payload.kind, DocumentKind::Invoice);
        assert_eq!(payload.status, QuotationStatus::Sent);
        assert_eq!(payload.grand_total, 212.4);
        assert_eq!(payload.subtotal, 0.0);
        assert_eq!(payload.number, None);
    }

    #[test]
    fn test_round_trip() {
        let payload = SubmissionPayload::from_quotation(&full_quotation());
        let json = payload.to_json().unwrap();
        let parsed: SubmissionPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, payload);
    }
}
