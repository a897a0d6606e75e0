//! concilia-ingest: bank-specific sheet-row mapping into engine records.
//!
//! Each bank exports its cartola and libro mayor with different column
//! layouts; the parsers here own those offsets, run the core normalizers
//! and extractors exactly once per row, and hand the engine fully built
//! records. Per-row faults (bad dates, extraction misses) become sentinels,
//! never errors.

pub mod parsers;
pub mod types;

pub use types::{LEDGER_DATA_START, RawRow, STATEMENT_DATA_START, cell};
