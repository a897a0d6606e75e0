//! Multi-strategy match index over the ledger.
//!
//! Built once per run, before any statement row is processed, and read-only
//! afterwards: one map per strategy, keyed by that strategy's composite key,
//! each value an ordered list of ledger indices. Order inside a list is
//! ledger order, which is what makes first-unconsumed-candidate selection
//! deterministic. Date-based strategies index a ledger row under up to two
//! keys (own date and next business day), so memory is linear with a small
//! constant factor.

use std::collections::HashMap;

use crate::dialect::BankDialect;
use crate::record::LedgerRecord;

pub struct MatchIndex {
    maps: Vec<HashMap<String, Vec<usize>>>,
}

impl MatchIndex {
    /// Index every ledger record under every strategy of the dialect.
    pub fn build(dialect: &BankDialect, ledger: &[LedgerRecord]) -> Self {
        let mut maps: Vec<HashMap<String, Vec<usize>>> =
            vec![HashMap::new(); dialect.strategies().len()];

        for (ledger_idx, record) in ledger.iter().enumerate() {
            for (map, strategy) in maps.iter_mut().zip(dialect.strategies()) {
                for key in (strategy.ledger_keys)(record, dialect.invalid_date_policy()) {
                    map.entry(key).or_default().push(ledger_idx);
                }
            }
        }

        Self { maps }
    }

    /// Candidate ledger indices for `key` under the strategy at `strategy_idx`,
    /// in ledger order.
    pub fn candidates(&self, strategy_idx: usize, key: &str) -> &[usize] {
        self.maps
            .get(strategy_idx)
            .and_then(|m| m.get(key))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::{BusinessDay, DateValue};
    use chrono::NaiveDate;

    fn ledger_row(doc: &str, debit: i64, credit: i64) -> LedgerRecord {
        LedgerRecord {
            date: DateValue::Valid(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
            narrative: String::new(),
            document_number: doc.to_string(),
            debit,
            credit,
            rut: None,
            name: None,
            next_business_day: BusinessDay::Date(
                NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            ),
        }
    }

    #[test]
    fn test_candidates_preserve_ledger_order() {
        let ledger = vec![
            ledger_row("1001", 50000, 0),
            ledger_row("2002", 100, 0),
            ledger_row("1001", 50000, 0),
        ];
        let index = MatchIndex::build(&BankDialect::bci(), &ledger);
        assert_eq!(index.candidates(0, "1001|50000|0"), &[0, 2]);
        assert_eq!(index.candidates(0, "2002|100|0"), &[1]);
    }

    #[test]
    fn test_date_strategy_reachable_under_both_days() {
        let ledger = vec![ledger_row("1001", 50000, 0)];
        let index = MatchIndex::build(&BankDialect::bci(), &ledger);
        assert_eq!(index.candidates(1, "1001|01/03/2024|50000|0"), &[0]);
        assert_eq!(index.candidates(1, "1001|04/03/2024|50000|0"), &[0]);
    }

    #[test]
    fn test_unknown_key_has_no_candidates() {
        let ledger = vec![ledger_row("1001", 50000, 0)];
        let index = MatchIndex::build(&BankDialect::bci(), &ledger);
        assert!(index.candidates(0, "9999|1|1").is_empty());
        assert!(index.candidates(7, "anything").is_empty());
    }
}
