//! End-to-end runs: raw sheet rows through ingest, engine and report.

use chrono::NaiveDate;
use concilia_core::{
    Bank, BankDialect, BusinessDayCalendar, Cell, DateValue, build_report, reconcile,
};
use concilia_ingest::RawRow;
use concilia_ingest::parsers::{bci, estado};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn bci_statement_row(date: &str, desc: &str, doc: &str, charge: &str, credit: &str) -> RawRow {
    let mut row = vec![Cell::Empty; 11];
    row[0] = Cell::from(date);
    row[5] = Cell::from(desc);
    row[7] = Cell::from(doc);
    row[9] = Cell::from(charge);
    row[10] = Cell::from(credit);
    row
}

fn bci_ledger_row(date: &str, glosa: &str, debit: &str, credit: &str) -> RawRow {
    let mut row = vec![Cell::Empty; 11];
    row[2] = Cell::from(date);
    row[5] = Cell::from(glosa);
    row[8] = Cell::from(debit);
    row[9] = Cell::from(credit);
    row
}

#[test]
fn bci_round_trip_matches_and_reports() {
    let calendar = BusinessDayCalendar::from_dates([
        ymd(2024, 3, 1),
        ymd(2024, 3, 4),
        ymd(2024, 3, 5),
    ]);

    let statement = bci::map_statement_rows(&[
        bci_statement_row("2024-03-01", "Abono transferencia", "1001", "", "50000"),
        bci_statement_row("2024-03-04", "Cheque pagado", "2002", "120000", ""),
        bci_statement_row("2024-03-05", "Abono sin contraparte", "9999", "", "777"),
    ]);
    let ledger = bci::map_ledger_rows(
        &[
            // Doc 1001 booked the same day: exact strategy.
            bci_ledger_row("2024-03-01", "INGRESO/1001/12345678K/TRANSFER ANA SOTO", "50000", ""),
            // Doc 2002 booked 2024-03-01, settles next business day 2024-03-04.
            bci_ledger_row("2024-03-01", "EGRESO/2002/", "", "120000"),
            // Never consumed.
            bci_ledger_row("2024-03-05", "OTRO/3003/", "1", ""),
        ],
        &calendar,
    );

    let dialect = BankDialect::bci();
    let result = reconcile(&dialect, &statement, &ledger).unwrap();

    assert_eq!(result.matched.len(), 2);
    assert_eq!(result.matched[0].strategy, "documento-montos");
    assert_eq!(result.matched[0].ledger.rut, Some("12345678K".to_string()));
    // Doc+amounts ignores dates, so the settlement-lagged cheque also binds
    // through the first strategy.
    assert_eq!(result.matched[1].strategy, "documento-montos");
    assert_eq!(result.pending_statement.len(), 1);
    assert_eq!(result.pending_statement[0].document_number, "9999");
    assert_eq!(result.pending_ledger.len(), 1);

    let report = build_report(&dialect, &result);
    assert_eq!(report.matched.rows.len(), 2);
    assert_eq!(report.matched.rows[0][1], "ABONO TRANSFERENCIA");
    assert_eq!(report.summary.total_statement, 3);
    assert!((report.summary.reconciled_percentage - 200.0 / 3.0).abs() < 1e-9);
}

fn estado_statement_row(date: &str, desc: &str, charge: &str, credit: &str) -> RawRow {
    let mut row = vec![Cell::Empty; 10];
    row[0] = Cell::from(date);
    row[6] = Cell::from(desc);
    row[7] = Cell::from(charge);
    row[8] = Cell::from(credit);
    row
}

fn estado_ledger_row(date: &str, glosa: &str, doc: &str, debit: &str, credit: &str) -> RawRow {
    let mut row = vec![Cell::Empty; 13];
    row[2] = Cell::from(date);
    row[5] = Cell::from(glosa);
    row[7] = Cell::from(doc);
    row[8] = Cell::from(debit);
    row[9] = Cell::from(credit);
    row
}

#[test]
fn estado_round_trip_uses_next_business_day_bridge() {
    // 2024-03-02 is not a business day; the ledger row booked 2024-03-01
    // carries next business day 2024-03-04.
    let calendar = BusinessDayCalendar::from_dates([ymd(2024, 3, 1), ymd(2024, 3, 4)]);

    // A 12500 deposit: statement credit against the books' debe.
    let statement = estado::map_statement_rows(&[estado_statement_row(
        "2024-03-04",
        "Transferencia de 12345678-9 Ana Soto",
        "",
        "12500",
    )]);
    let ledger = estado::map_ledger_rows(
        &[estado_ledger_row(
            "2024-03-01",
            "transfer ana soto/123456789",
            "77",
            "12500",
            "",
        )],
        &calendar,
    );

    assert_eq!(statement[0].rut, Some("123456789".to_string()));
    assert_eq!(ledger[0].rut, Some("123456789".to_string()));

    let dialect = BankDialect::estado();
    let result = reconcile(&dialect, &statement, &ledger).unwrap();
    assert_eq!(result.matched.len(), 1);
    assert_eq!(result.matched[0].strategy, "rut-fecha-montos");
    assert!(result.pending_statement.is_empty());
    assert!(result.pending_ledger.is_empty());
}

#[test]
fn estado_name_fallback_binds_when_rut_differs() {
    let calendar = BusinessDayCalendar::from_dates([ymd(2024, 3, 1), ymd(2024, 3, 4)]);

    // Statement narrative has no RUT, only a "DE <name>" phrasing; the
    // ledger glosa has both. Dates differ too far for the date strategies.
    let statement = estado::map_statement_rows(&[estado_statement_row(
        "2024-03-20",
        "Transferencia de Ana Soto",
        "",
        "9900",
    )]);
    let ledger = estado::map_ledger_rows(
        &[estado_ledger_row(
            "2024-03-01",
            "transfer ana soto/12345678k",
            "88",
            "9900",
            "",
        )],
        &calendar,
    );

    let dialect = BankDialect::estado();
    let result = reconcile(&dialect, &statement, &ledger).unwrap();
    assert_eq!(result.matched.len(), 1);
    assert_eq!(result.matched[0].strategy, "nombre-montos");

    let report = build_report(&dialect, &result);
    // The deposit renders under CARGO, mirroring the books' debe.
    assert_eq!(report.matched.rows[0][4], "9900");
    assert_eq!(report.matched.rows[0][5], "0");
}

#[test]
fn invalid_date_rows_reach_a_terminal_state() {
    let calendar = BusinessDayCalendar::from_dates([ymd(2024, 3, 4)]);

    let statement = bci::map_statement_rows(&[bci_statement_row(
        "sin fecha", "Abono raro", "1001", "", "50000",
    )]);
    let ledger = bci::map_ledger_rows(
        &[bci_ledger_row("tampoco", "GLOSA/1001/", "50000", "")],
        &calendar,
    );

    // BCI sentinel ledger rows zero their amounts, so the pair cannot bind
    // on doc+amounts; both records must still land in a pending set.
    assert_eq!(ledger[0].debit, 0);
    let dialect = BankDialect::bci();
    let result = reconcile(&dialect, &statement, &ledger).unwrap();
    assert!(result.matched.is_empty());
    assert_eq!(result.pending_statement.len(), 1);
    assert_eq!(result.pending_ledger.len(), 1);
    assert_eq!(result.pending_statement[0].date, DateValue::Invalid);

    let report = build_report(&dialect, &result);
    assert_eq!(report.pending_statement.rows[0][0], "Fecha Inválida");
    assert_eq!(report.pending_ledger.rows[0][0], "Fecha Inválida");
}

#[test]
fn dialect_selection_by_bank() {
    assert_eq!(BankDialect::for_bank(Bank::Bci).bank(), Bank::Bci);
    assert_eq!(BankDialect::for_bank(Bank::Estado).bank(), Bank::Estado);
}
