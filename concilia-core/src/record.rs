//! Normalized record types the engine matches over.
//!
//! Both types are immutable once built: ingest runs the normalizers and
//! extractors exactly once per row, and the engine only reads.

use serde::{Deserialize, Serialize};

use crate::dates::{BusinessDay, DateValue};

/// One normalized bank-statement (cartola) row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementRecord {
    pub date: DateValue,
    /// Free-text description as the bank wrote it.
    pub narrative: String,
    /// Document number column; empty when the dialect has none.
    pub document_number: String,
    pub charge: i64,
    pub credit: i64,
    /// RUT extracted from the narrative, when the dialect extracts one.
    pub rut: Option<String>,
    /// Counterparty name extracted from the narrative.
    pub name: Option<String>,
}

/// One normalized general-ledger (libro mayor) row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRecord {
    pub date: DateValue,
    /// Glosa comprobante detalle.
    pub narrative: String,
    pub document_number: String,
    pub debit: i64,
    pub credit: i64,
    pub rut: Option<String>,
    pub name: Option<String>,
    /// Computed once at load time from the business-day calendar; lets a
    /// statement row posted one settlement day later still match.
    pub next_business_day: BusinessDay,
}
