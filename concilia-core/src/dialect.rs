//! Per-bank matching configuration.
//!
//! Both banks share one algorithmic skeleton (index the ledger, then greedy
//! first-fit over the statement); what differs is which fields make up a
//! match key and in what priority order the strategies run. Each dialect is
//! an ordered table of [`MatchStrategy`] values plus a policy for ledger
//! rows whose next business day could not be computed.
//!
//! Keys are case- and format-sensitive by design: both sides must run the
//! same normalizers before key building. A missing RUT or name contributes
//! the literal segment "0" on either side, so two records that both lack one
//! can still key equal; an invalid date contributes an empty segment.

use crate::dates::BusinessDay;
use crate::record::{LedgerRecord, StatementRecord};

/// Separator joining key segments.
pub const KEY_SEPARATOR: &str = "|";

/// Segment for an optional extracted field.
fn opt_seg(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("0")
}

/// How a date-based strategy indexes a ledger row whose next business day is
/// `Invalid` or `Unavailable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidDatePolicy {
    /// Index the row under a key with an empty date segment (BCI).
    EmptySegment,
    /// Do not index the row under a next-day key at all (Estado).
    SkipEntry,
}

/// One matching strategy: how a statement row and a ledger row each turn
/// into a comparable key. Ledger rows of date-based strategies yield two
/// keys, one for their own date and one for the next business day, so a
/// statement row dated either day can reach them.
pub struct MatchStrategy {
    pub name: &'static str,
    pub statement_key: fn(&StatementRecord) -> String,
    pub ledger_keys: fn(&LedgerRecord, InvalidDatePolicy) -> Vec<String>,
}

/// Supported bank dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bank {
    Bci,
    Estado,
}

/// A bank's full matching configuration.
pub struct BankDialect {
    bank: Bank,
    invalid_date_policy: InvalidDatePolicy,
    strategies: &'static [MatchStrategy],
}

impl BankDialect {
    pub fn bci() -> Self {
        Self {
            bank: Bank::Bci,
            invalid_date_policy: InvalidDatePolicy::EmptySegment,
            strategies: &BCI_STRATEGIES,
        }
    }

    pub fn estado() -> Self {
        Self {
            bank: Bank::Estado,
            invalid_date_policy: InvalidDatePolicy::SkipEntry,
            strategies: &ESTADO_STRATEGIES,
        }
    }

    pub fn for_bank(bank: Bank) -> Self {
        match bank {
            Bank::Bci => Self::bci(),
            Bank::Estado => Self::estado(),
        }
    }

    pub fn bank(&self) -> Bank {
        self.bank
    }

    pub fn invalid_date_policy(&self) -> InvalidDatePolicy {
        self.invalid_date_policy
    }

    /// Strategies in priority order; the engine stops at the first hit.
    pub fn strategies(&self) -> &'static [MatchStrategy] {
        self.strategies
    }
}

/// Own-date segment plus, policy permitting, the next-business-day segment.
fn ledger_date_segments(record: &LedgerRecord, policy: InvalidDatePolicy) -> Vec<String> {
    let mut segments = vec![record.date.key_segment()];
    match (record.next_business_day, policy) {
        (BusinessDay::Date(d), _) => segments.push(d.format("%d/%m/%Y").to_string()),
        (_, InvalidDatePolicy::EmptySegment) => segments.push(String::new()),
        (_, InvalidDatePolicy::SkipEntry) => {}
    }
    segments
}

// BCI pairs statement credit against ledger debit and statement charge
// against ledger credit: money the bank credits the account is a debit in
// the books.

fn bci_statement_doc_amounts(s: &StatementRecord) -> String {
    [
        s.document_number.clone(),
        s.credit.to_string(),
        s.charge.to_string(),
    ]
    .join(KEY_SEPARATOR)
}

fn bci_ledger_doc_amounts(l: &LedgerRecord, _policy: InvalidDatePolicy) -> Vec<String> {
    vec![
        [
            l.document_number.clone(),
            l.debit.to_string(),
            l.credit.to_string(),
        ]
        .join(KEY_SEPARATOR),
    ]
}

fn bci_statement_doc_date_amounts(s: &StatementRecord) -> String {
    [
        s.document_number.clone(),
        s.date.key_segment(),
        s.credit.to_string(),
        s.charge.to_string(),
    ]
    .join(KEY_SEPARATOR)
}

fn bci_ledger_doc_date_amounts(l: &LedgerRecord, policy: InvalidDatePolicy) -> Vec<String> {
    ledger_date_segments(l, policy)
        .into_iter()
        .map(|date_seg| {
            [
                l.document_number.clone(),
                date_seg,
                l.debit.to_string(),
                l.credit.to_string(),
            ]
            .join(KEY_SEPARATOR)
        })
        .collect()
}

static BCI_STRATEGIES: [MatchStrategy; 2] = [
    MatchStrategy {
        name: "documento-montos",
        statement_key: bci_statement_doc_amounts,
        ledger_keys: bci_ledger_doc_amounts,
    },
    MatchStrategy {
        name: "documento-fecha-montos",
        statement_key: bci_statement_doc_date_amounts,
        ledger_keys: bci_ledger_doc_date_amounts,
    },
];

// Estado cross-pairs the same way: statement credit against ledger debit
// (debe) and statement charge against ledger credit (haber).

fn estado_statement_rut_date_amounts(s: &StatementRecord) -> String {
    [
        opt_seg(&s.rut).to_string(),
        s.date.key_segment(),
        s.credit.to_string(),
        s.charge.to_string(),
    ]
    .join(KEY_SEPARATOR)
}

fn estado_ledger_rut_date_amounts(l: &LedgerRecord, policy: InvalidDatePolicy) -> Vec<String> {
    ledger_date_segments(l, policy)
        .into_iter()
        .map(|date_seg| {
            [
                opt_seg(&l.rut).to_string(),
                date_seg,
                l.debit.to_string(),
                l.credit.to_string(),
            ]
            .join(KEY_SEPARATOR)
        })
        .collect()
}

fn estado_statement_name_amounts(s: &StatementRecord) -> String {
    [
        opt_seg(&s.name).to_string(),
        s.credit.to_string(),
        s.charge.to_string(),
    ]
    .join(KEY_SEPARATOR)
}

fn estado_ledger_name_amounts(l: &LedgerRecord, _policy: InvalidDatePolicy) -> Vec<String> {
    vec![
        [
            opt_seg(&l.name).to_string(),
            l.debit.to_string(),
            l.credit.to_string(),
        ]
        .join(KEY_SEPARATOR),
    ]
}

fn estado_statement_date_amounts(s: &StatementRecord) -> String {
    [
        s.date.key_segment(),
        s.credit.to_string(),
        s.charge.to_string(),
    ]
    .join(KEY_SEPARATOR)
}

fn estado_ledger_date_amounts(l: &LedgerRecord, policy: InvalidDatePolicy) -> Vec<String> {
    ledger_date_segments(l, policy)
        .into_iter()
        .map(|date_seg| {
            [date_seg, l.debit.to_string(), l.credit.to_string()].join(KEY_SEPARATOR)
        })
        .collect()
}

static ESTADO_STRATEGIES: [MatchStrategy; 3] = [
    MatchStrategy {
        name: "rut-fecha-montos",
        statement_key: estado_statement_rut_date_amounts,
        ledger_keys: estado_ledger_rut_date_amounts,
    },
    MatchStrategy {
        name: "nombre-montos",
        statement_key: estado_statement_name_amounts,
        ledger_keys: estado_ledger_name_amounts,
    },
    MatchStrategy {
        name: "fecha-montos",
        statement_key: estado_statement_date_amounts,
        ledger_keys: estado_ledger_date_amounts,
    },
];
