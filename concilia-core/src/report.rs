//! Tabular report assembly: the three output sheets and the run summary.
//!
//! Column sets and headers differ slightly per dialect (BCI reports carry
//! the document number, Estado reports carry the RUT), so the layouts live
//! here next to the dialect they belong to. Dates render `dd/MM/yyyy` with
//! their sentinel labels, narratives are uppercased.

use serde::Serialize;

use crate::dialect::{Bank, BankDialect};
use crate::engine::Reconciliation;
use crate::record::{LedgerRecord, StatementRecord};

/// One renderable sheet: headers plus data rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sheet {
    pub name: &'static str,
    pub headers: &'static [&'static str],
    pub rows: Vec<Vec<String>>,
}

/// Counts of a finished run, as the original reported them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub total_statement: usize,
    pub total_ledger: usize,
    pub matched: usize,
    pub pending_statement: usize,
    pub pending_ledger: usize,
    pub reconciled_percentage: f64,
}

/// Full report for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub matched: Sheet,
    pub pending_statement: Sheet,
    pub pending_ledger: Sheet,
    pub summary: Summary,
}

fn rut_seg(rut: &Option<String>) -> String {
    rut.clone().unwrap_or_else(|| "0".to_string())
}

fn matched_row(bank: Bank, statement: &StatementRecord, ledger: &LedgerRecord) -> Vec<String> {
    match bank {
        // Both dialects show the bank's credit under CARGO and its charge
        // under ABONO, mirroring the books' side of the pairing.
        Bank::Bci => vec![
            statement.date.label(),
            statement.narrative.to_uppercase(),
            ledger.document_number.clone(),
            rut_seg(&ledger.rut),
            statement.credit.to_string(),
            statement.charge.to_string(),
        ],
        Bank::Estado => vec![
            statement.date.label(),
            statement.narrative.to_uppercase(),
            ledger.document_number.clone(),
            rut_seg(&statement.rut),
            statement.credit.to_string(),
            statement.charge.to_string(),
        ],
    }
}

fn pending_statement_row(bank: Bank, record: &StatementRecord) -> Vec<String> {
    match bank {
        Bank::Bci => vec![
            record.date.label(),
            record.narrative.to_uppercase(),
            record.document_number.clone(),
            record.credit.to_string(),
            record.charge.to_string(),
        ],
        Bank::Estado => vec![
            record.date.label(),
            record.narrative.to_uppercase(),
            rut_seg(&record.rut),
            record.credit.to_string(),
            record.charge.to_string(),
        ],
    }
}

fn pending_ledger_row(bank: Bank, record: &LedgerRecord) -> Vec<String> {
    match bank {
        Bank::Bci => vec![
            record.date.label(),
            record.narrative.to_uppercase(),
            record.document_number.clone(),
            record.debit.to_string(),
            record.credit.to_string(),
        ],
        Bank::Estado => vec![
            record.date.label(),
            record.narrative.to_uppercase(),
            rut_seg(&record.rut),
            record.debit.to_string(),
            record.credit.to_string(),
        ],
    }
}

const BCI_MATCHED_HEADERS: &[&str] = &[
    "FECHA",
    "DESCRIPCIÓN",
    "N° DOCUMENTO",
    "RUT",
    "CARGO",
    "ABONO",
];
const BCI_PENDING_HEADERS: &[&str] =
    &["FECHA", "DESCRIPCIÓN", "N° DOCUMENTO", "CARGO", "ABONO"];
const ESTADO_MATCHED_HEADERS: &[&str] =
    &["FECHA", "DETALLE", "N°DOCUMENTO", "RUT", "CARGO", "ABONO"];
const ESTADO_PENDING_HEADERS: &[&str] = &["FECHA", "DETALLE", "RUT", "CARGO", "ABONO"];

/// Assemble the three sheets and the summary for a finished run.
pub fn build_report(dialect: &BankDialect, reconciliation: &Reconciliation) -> Report {
    let bank = dialect.bank();
    let (matched_headers, pending_headers) = match bank {
        Bank::Bci => (BCI_MATCHED_HEADERS, BCI_PENDING_HEADERS),
        Bank::Estado => (ESTADO_MATCHED_HEADERS, ESTADO_PENDING_HEADERS),
    };

    let matched = Sheet {
        name: "Conciliados",
        headers: matched_headers,
        rows: reconciliation
            .matched
            .iter()
            .map(|pair| matched_row(bank, &pair.statement, &pair.ledger))
            .collect(),
    };

    let pending_statement = Sheet {
        name: "Pendientes Cartola",
        headers: pending_headers,
        rows: reconciliation
            .pending_statement
            .iter()
            .map(|r| pending_statement_row(bank, r))
            .collect(),
    };

    let pending_ledger = Sheet {
        name: "Pendientes Libro Mayor",
        headers: pending_headers,
        rows: reconciliation
            .pending_ledger
            .iter()
            .map(|r| pending_ledger_row(bank, r))
            .collect(),
    };

    let summary = Summary {
        total_statement: reconciliation.total_statement(),
        total_ledger: reconciliation.total_ledger(),
        matched: reconciliation.matched.len(),
        pending_statement: reconciliation.pending_statement.len(),
        pending_ledger: reconciliation.pending_ledger.len(),
        reconciled_percentage: reconciliation.reconciled_percentage(),
    };

    Report {
        matched,
        pending_statement,
        pending_ledger,
        summary,
    }
}
