//! The reconciliation engine: a single greedy, priority-ordered pass.
//!
//! For each statement row, in original order, the engine builds the dialect's
//! keys and tries the strategies in priority order; the first strategy with
//! an unconsumed candidate wins and binds the earliest such candidate in
//! ledger order. Consumed rows are never offered again and a bound pair is
//! never revisited. This is deliberately first-fit, not globally optimal:
//! with ambiguous inputs an earlier statement row can consume a ledger row a
//! later one needed. That order dependence is a documented property of the
//! process being reproduced, so changing it (e.g. to an assignment solver)
//! would change accepted output.

use anyhow::{Result, bail};
use serde::Serialize;

use crate::dialect::BankDialect;
use crate::index::MatchIndex;
use crate::record::{LedgerRecord, StatementRecord};

/// One statement row bound to one ledger row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedPair {
    pub statement: StatementRecord,
    pub ledger: LedgerRecord,
    /// Name of the strategy that bound the pair.
    pub strategy: &'static str,
}

/// Outcome of one reconciliation run. Every input record lands in exactly
/// one of the three sets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reconciliation {
    /// In statement order.
    pub matched: Vec<MatchedPair>,
    /// Statement rows no strategy could place, in statement order.
    pub pending_statement: Vec<StatementRecord>,
    /// Ledger rows never consumed, in ledger order.
    pub pending_ledger: Vec<LedgerRecord>,
}

impl Reconciliation {
    pub fn total_statement(&self) -> usize {
        self.matched.len() + self.pending_statement.len()
    }

    pub fn total_ledger(&self) -> usize {
        self.matched.len() + self.pending_ledger.len()
    }

    /// Share of statement rows that were matched, as a percentage.
    pub fn reconciled_percentage(&self) -> f64 {
        if self.total_statement() == 0 {
            return 0.0;
        }
        self.matched.len() as f64 * 100.0 / self.total_statement() as f64
    }
}

/// Run one reconciliation job.
///
/// Empty inputs are fatal initialization faults and abort before any
/// matching; per-record faults were already converted to sentinels upstream
/// and never abort.
pub fn reconcile(
    dialect: &BankDialect,
    statement: &[StatementRecord],
    ledger: &[LedgerRecord],
) -> Result<Reconciliation> {
    if statement.is_empty() {
        bail!("cartola has no data rows; nothing to reconcile");
    }
    if ledger.is_empty() {
        bail!("libro mayor has no data rows; nothing to reconcile");
    }

    let index = MatchIndex::build(dialect, ledger);
    let mut statement_consumed = vec![false; statement.len()];
    let mut ledger_consumed = vec![false; ledger.len()];

    let mut matched = Vec::new();
    let mut pending_statement = Vec::new();

    for (stmt_idx, stmt) in statement.iter().enumerate() {
        // Defensive: the single forward pass never revisits an index.
        if statement_consumed[stmt_idx] {
            continue;
        }

        let hit = dialect
            .strategies()
            .iter()
            .enumerate()
            .find_map(|(strategy_idx, strategy)| {
                let key = (strategy.statement_key)(stmt);
                index
                    .candidates(strategy_idx, &key)
                    .iter()
                    .copied()
                    .find(|&ledger_idx| !ledger_consumed[ledger_idx])
                    .map(|ledger_idx| (ledger_idx, strategy.name))
            });

        match hit {
            Some((ledger_idx, strategy)) => {
                statement_consumed[stmt_idx] = true;
                ledger_consumed[ledger_idx] = true;
                matched.push(MatchedPair {
                    statement: stmt.clone(),
                    ledger: ledger[ledger_idx].clone(),
                    strategy,
                });
            }
            None => pending_statement.push(stmt.clone()),
        }
    }

    let pending_ledger = ledger
        .iter()
        .zip(&ledger_consumed)
        .filter(|(_, consumed)| !**consumed)
        .map(|(record, _)| record.clone())
        .collect();

    Ok(Reconciliation {
        matched,
        pending_statement,
        pending_ledger,
    })
}
