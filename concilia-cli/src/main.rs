use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};

use concilia_core::report::Sheet;
use concilia_core::{Bank, BankDialect, BusinessDayCalendar, Cell, build_report, reconcile};
use concilia_ingest::parsers::{bci, estado};
use concilia_ingest::{LEDGER_DATA_START, RawRow, STATEMENT_DATA_START};

#[derive(Parser, Debug)]
#[command(
    name = "concilia",
    version,
    about = "Conciliación bancaria: cartola vs. libro mayor"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one reconciliation job and write the three report CSVs
    Reconcile {
        /// Bank dialect of the cartola/libro mayor exports
        #[arg(long, value_enum)]
        bank: BankArg,

        /// Cartola CSV (full sheet export, headers included)
        #[arg(long)]
        cartola: PathBuf,

        /// Libro mayor CSV (full sheet export, headers included)
        #[arg(long)]
        libro_mayor: PathBuf,

        /// Business-day calendar CSV (dates in the first column)
        #[arg(long)]
        dias_habiles: PathBuf,

        /// Output directory for the report CSVs
        #[arg(long, default_value = "out")]
        out_dir: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum BankArg {
    Bci,
    Estado,
}

impl From<BankArg> for Bank {
    fn from(arg: BankArg) -> Self {
        match arg {
            BankArg::Bci => Bank::Bci,
            BankArg::Estado => Bank::Estado,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Reconcile {
            bank,
            cartola,
            libro_mayor,
            dias_habiles,
            out_dir,
        } => run_reconcile(bank, &cartola, &libro_mayor, &dias_habiles, &out_dir),
    }
}

fn run_reconcile(
    bank: BankArg,
    cartola: &Path,
    libro_mayor: &Path,
    dias_habiles: &Path,
    out_dir: &Path,
) -> Result<()> {
    let cartola_rows = read_rows(cartola)?;
    let ledger_rows = read_rows(libro_mayor)?;
    let calendar = read_calendar(dias_habiles)?;

    let statement_data = data_rows(&cartola_rows, STATEMENT_DATA_START);
    let ledger_data = data_rows(&ledger_rows, LEDGER_DATA_START);

    let dialect = BankDialect::for_bank(bank.into());
    let (statement, ledger) = match dialect.bank() {
        Bank::Bci => (
            bci::map_statement_rows(statement_data),
            bci::map_ledger_rows(ledger_data, &calendar),
        ),
        Bank::Estado => (
            estado::map_statement_rows(statement_data),
            estado::map_ledger_rows(ledger_data, &calendar),
        ),
    };

    let result = reconcile(&dialect, &statement, &ledger)?;
    let report = build_report(&dialect, &result);

    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;
    write_sheet(out_dir, "conciliados.csv", &report.matched)?;
    write_sheet(out_dir, "pendientes_cartola.csv", &report.pending_statement)?;
    write_sheet(out_dir, "pendientes_libro_mayor.csv", &report.pending_ledger)?;

    let s = report.summary;
    println!("Conciliación completada ({:?})", dialect.bank());
    println!("Total de registros conciliados: {}", s.matched);
    println!("Pendientes Cartola: {}", s.pending_statement);
    println!("Pendientes Libro Mayor: {}", s.pending_ledger);
    println!("Porcentaje conciliados: {:.2}%", s.reconciled_percentage);
    println!("Archivos escritos en {}", out_dir.display());

    Ok(())
}

/// Read a full sheet export as loose cells. Rows may be ragged.
fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.with_context(|| format!("reading {}", path.display()))?;
        rows.push(record.iter().map(Cell::from).collect());
    }
    Ok(rows)
}

/// Calendar CSV: one header row, dates in the first column. Invalid entries
/// are dropped by the calendar itself.
fn read_calendar(path: &Path) -> Result<BusinessDayCalendar> {
    let rows = read_rows(path)?;
    let cells: Vec<Cell> = rows
        .iter()
        .skip(1)
        .map(|row| row.first().cloned().unwrap_or(Cell::Empty))
        .collect();
    Ok(BusinessDayCalendar::from_cells(&cells))
}

fn data_rows(rows: &[RawRow], start: usize) -> &[RawRow] {
    rows.get(start..).unwrap_or(&[])
}

fn write_sheet(dir: &Path, file: &str, sheet: &Sheet) -> Result<()> {
    let path = dir.join(file);
    let mut wtr = csv::Writer::from_path(&path)
        .with_context(|| format!("creating {}", path.display()))?;
    wtr.write_record(sheet.headers)?;
    for row in &sheet.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
