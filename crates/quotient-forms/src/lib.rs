//! # Quotient Forms
//!
//! Form state for the quotation and invoice editors: immutable drafts,
//! reducer-style updates, render snapshots, and the wire payload.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           quotient-forms                                │
//! │                                                                         │
//! │   React editor (quotation / invoice form)                               │
//! │      │  keystrokes, clicks                ▲  FormSnapshot (renders)    │
//! │      ▼                                    │                             │
//! │   ┌───────────────┐    updates    ┌───────────────┐   submit          │
//! │   │    store      │ ────────────► │     draft     │ ─────────┐        │
//! │   │  FormStore    │               │ QuotationForm │          ▼        │
//! │   └───────────────┘               └───────────────┘   ┌────────────┐  │
//! │          │                               │            │  payload   │  │
//! │          │ FormError                     │            │ POST /crm/…│  │
//! │          ▼                               ▼            └────────────┘  │
//! │   ┌───────────────┐              quotient-core                        │
//! │   │    error      │              (totals, validation, formatting)     │
//! │   └───────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use quotient_core::DocumentKind;
//! use quotient_forms::{FormDefaults, FormStore, LineField, LineUpdate, MetaUpdate};
//!
//! let mut store = FormStore::new(DocumentKind::Quotation, FormDefaults::default());
//! store.update_meta(MetaUpdate::Account("Acme Coatings".to_string()));
//! store.update_lines(LineUpdate::Set {
//!     index: 0,
//!     field: LineField::Description,
//!     value: "Epoxy primer, 20L".to_string(),
//! })?;
//! store.update_lines(LineUpdate::Set {
//!     index: 0,
//!     field: LineField::Quantity,
//!     value: "2".to_string(),
//! })?;
//! store.update_lines(LineUpdate::Set {
//!     index: 0,
//!     field: LineField::UnitPrice,
//!     value: "100".to_string(),
//! })?;
//! let snapshot = store.update_header_discount("10");
//! assert_eq!(snapshot.display.grand_total, "₹212.40");
//!
//! let payload = store.build_payload()?;
//! assert_eq!(payload.grand_total, 212.4);
//! # Ok::<(), quotient_forms::FormError>(())
//! ```

pub mod defaults;
pub mod draft;
pub mod error;
pub mod payload;
pub mod store;

pub use defaults::FormDefaults;
pub use draft::{
    DocumentMeta, LineDraft, LineField, LineUpdate, MetaUpdate, QuotationForm, DATE_FORMAT,
};
pub use error::{FormError, FormErrorCode};
pub use payload::{
    create_path, update_path, LineItemPayload, SubmissionPayload, INVOICES_PATH, QUOTATIONS_PATH,
};
pub use store::{FormSnapshot, FormStore, LineSnapshot, TotalsDisplay};
