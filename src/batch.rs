//! Batch driver: feeds procedure sources through the checker and shapes
//! rows for the presentation layer.
//!
//! The checker itself is pure and total, so the driver is a thin map over
//! the input sequence: input order in, row order out, one bad procedure
//! never aborting the rest.
use crate::audit::{AuditError, AuditLog};
use crate::checker;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// One procedure under audit: its object name plus raw body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureSource {
    pub name: String,
    pub body: String,
}

impl ProcedureSource {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self { name: name.into(), body: body.into() }
    }
}

/// One presentation row: name, `"OK"`/`"FAILURE"`, and the joined message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRow {
    pub name: String,
    pub status: String,
    pub message: String,
}

fn row_for(source: &ProcedureSource) -> AuditRow {
    let report = checker::check(&source.body);
    AuditRow {
        name: source.name.clone(),
        status: report.verdict.to_string(),
        message: report.message(),
    }
}

/// Checks every source, preserving input order.
pub fn check_batch(sources: &[ProcedureSource]) -> Vec<AuditRow> {
    tracing::debug!(procedures = sources.len(), "running compliance batch");
    sources.iter().map(row_for).collect()
}

/// Parallel variant of [`check_batch`].
///
/// The checker holds no shared state, so invocations are independent; the
/// indexed parallel iterator keeps the collected rows in input order, making
/// this byte-for-byte equivalent to the sequential run.
pub fn check_batch_parallel(sources: &[ProcedureSource]) -> Vec<AuditRow> {
    tracing::debug!(procedures = sources.len(), "running compliance batch (parallel)");
    sources.par_iter().map(row_for).collect()
}

/// Records every raw source to the audit log, then checks the batch.
///
/// Sources are persisted before any verdict is computed, so the log holds
/// the full input even when the caller discards the rows.
pub fn check_batch_with_audit(
    sources: &[ProcedureSource],
    log: &mut AuditLog,
) -> Result<Vec<AuditRow>, AuditError> {
    for source in sources {
        log.record(&source.name, &source.body)?;
    }
    Ok(check_batch(sources))
}

/// Serializes rows for machine consumption.
pub fn to_json(rows: &[AuditRow]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}
