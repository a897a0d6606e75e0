//! concilia-core: record-linkage engine reconciling a bank statement
//! (cartola) against a general-ledger extract (libro mayor).
//!
//! The engine is pure data-in/data-out: collaborators hand it normalized
//! records and a business-day calendar, it hands back matched pairs plus the
//! two pending sets. Spreadsheet/CSV handling lives in the ingest and cli
//! crates.

pub mod amount;
pub mod cell;
pub mod dates;
pub mod dialect;
pub mod engine;
pub mod extract;
pub mod index;
pub mod record;
pub mod report;

pub use amount::normalize_amount;
pub use cell::Cell;
pub use dates::{BusinessDay, BusinessDayCalendar, DateValue, parse_date};
pub use dialect::{Bank, BankDialect, InvalidDatePolicy};
pub use engine::{MatchedPair, Reconciliation, reconcile};
pub use index::MatchIndex;
pub use record::{LedgerRecord, StatementRecord};
pub use report::{Report, Sheet, Summary, build_report};
