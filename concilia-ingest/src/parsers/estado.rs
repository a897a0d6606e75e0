//! Banco Estado sheet-row mapping.
//!
//! Cartola layout (data rows, 0-based columns):
//!   0 Fecha | 6 Descripción | 7 Cheques/Cargos | 8 Depósitos/Abonos
//! with RUT and counterparty name extracted from the description (Estado
//! statements carry no document number column).
//! Libro mayor layout:
//!   2 Fecha | 5 Glosa comprobante detalle | 7 N° Documento | 8 Debe | 9 Haber
//! with RUT and name extracted from the glosa.

use concilia_core::dates::{BusinessDay, DateValue};
use concilia_core::extract::{
    name_from_estado_ledger, name_from_estado_statement, rut_from_estado_ledger,
    rut_from_estado_statement,
};
use concilia_core::{BusinessDayCalendar, LedgerRecord, StatementRecord, normalize_amount, parse_date};

use crate::types::{RawRow, cell};

/// Map cartola data rows to statement records, extracting RUT and
/// counterparty name from the free-text description.
pub fn map_statement_rows(rows: &[RawRow]) -> Vec<StatementRecord> {
    rows.iter()
        .map(|row| {
            let narrative = cell(row, 6).text();
            StatementRecord {
                date: parse_date(cell(row, 0)),
                rut: rut_from_estado_statement(&narrative),
                name: name_from_estado_statement(&narrative),
                document_number: String::new(),
                charge: normalize_amount(cell(row, 7)),
                credit: normalize_amount(cell(row, 8)),
                narrative,
            }
        })
        .collect()
}

/// Map libro mayor data rows to ledger records.
///
/// Unlike BCI, an invalid-date row keeps its document number and amounts
/// (only extraction and the business-day lookup are skipped); the two
/// exports disagree here and each dialect preserves its own shape.
pub fn map_ledger_rows(rows: &[RawRow], calendar: &BusinessDayCalendar) -> Vec<LedgerRecord> {
    rows.iter()
        .map(|row| {
            let date = parse_date(cell(row, 2));
            let glosa = cell(row, 5).text();
            let document_number = cell(row, 7).text();
            let debit = normalize_amount(cell(row, 8));
            let credit = normalize_amount(cell(row, 9));

            if !date.is_valid() {
                return LedgerRecord {
                    date: DateValue::Invalid,
                    narrative: glosa,
                    document_number,
                    debit,
                    credit,
                    rut: None,
                    name: None,
                    next_business_day: BusinessDay::Invalid,
                };
            }

            LedgerRecord {
                date,
                rut: rut_from_estado_ledger(&glosa),
                name: name_from_estado_ledger(&glosa),
                document_number,
                debit,
                credit,
                next_business_day: calendar.next_business_day(date),
                narrative: glosa,
            }
        })
        .collect()
}
