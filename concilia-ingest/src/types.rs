//! Shared row types and sheet offsets.

use concilia_core::Cell;

/// One raw sheet row, as loose cells. Rows may be ragged; missing trailing
/// cells read as empty.
pub type RawRow = Vec<Cell>;

/// Cartola data rows start at sheet row 3 (two header rows) in both bank
/// exports.
pub const STATEMENT_DATA_START: usize = 2;
/// Libro mayor data rows start at sheet row 10 (nine rows of report
/// preamble) in both bank exports.
pub const LEDGER_DATA_START: usize = 9;

static EMPTY: Cell = Cell::Empty;

/// Cell at `idx`, treating short rows as padded with empties.
pub fn cell(row: &[Cell], idx: usize) -> &Cell {
    row.get(idx).unwrap_or(&EMPTY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_pads_short_rows() {
        let row: RawRow = vec![Cell::from("a")];
        assert_eq!(cell(&row, 0), &Cell::from("a"));
        assert_eq!(cell(&row, 9), &Cell::Empty);
    }
}
