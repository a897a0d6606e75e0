//! BCI sheet-row mapping.
//!
//! Cartola layout (data rows, 0-based columns):
//!   0 Fecha | 5 Descripción | 7 N° Documento | 9 Cheques/Cargos | 10 Depósitos/Abonos
//! Libro mayor layout:
//!   2 Fecha | 5 Glosa comprobante detalle | 8 Debe | 9 Haber
//! with RUT, counterparty name and document number extracted from the glosa.

use concilia_core::dates::{BusinessDay, DateValue};
use concilia_core::extract::{
    document_from_bci_ledger, name_from_bci_ledger, rut_from_bci_ledger,
};
use concilia_core::{BusinessDayCalendar, LedgerRecord, StatementRecord, normalize_amount, parse_date};

use crate::types::{RawRow, cell};

/// Map cartola data rows to statement records. BCI statements carry an
/// explicit document number column, so nothing is extracted from the
/// description.
pub fn map_statement_rows(rows: &[RawRow]) -> Vec<StatementRecord> {
    rows.iter()
        .map(|row| StatementRecord {
            date: parse_date(cell(row, 0)),
            narrative: cell(row, 5).text(),
            document_number: cell(row, 7).text(),
            charge: normalize_amount(cell(row, 9)),
            credit: normalize_amount(cell(row, 10)),
            rut: None,
            name: None,
        })
        .collect()
}

/// Map libro mayor data rows to ledger records, running extraction and the
/// business-day lookup once per row.
///
/// A row whose date does not parse becomes a full sentinel record: empty
/// document, zero amounts, no extraction, invalid next business day. It
/// still flows through matching and lands in a terminal set.
pub fn map_ledger_rows(rows: &[RawRow], calendar: &BusinessDayCalendar) -> Vec<LedgerRecord> {
    rows.iter()
        .map(|row| {
            let date = parse_date(cell(row, 2));
            let glosa = cell(row, 5).text();

            if !date.is_valid() {
                return LedgerRecord {
                    date: DateValue::Invalid,
                    narrative: glosa,
                    document_number: String::new(),
                    debit: 0,
                    credit: 0,
                    rut: None,
                    name: None,
                    next_business_day: BusinessDay::Invalid,
                };
            }

            LedgerRecord {
                date,
                document_number: document_from_bci_ledger(&glosa)
                    .unwrap_or_else(|| "0".to_string()),
                rut: rut_from_bci_ledger(&glosa),
                name: name_from_bci_ledger(&glosa),
                debit: normalize_amount(cell(row, 8)),
                credit: normalize_amount(cell(row, 9)),
                next_business_day: calendar.next_business_day(date),
                narrative: glosa,
            }
        })
        .collect()
}
