//! Convention audit core for stored procedures.
//!
//! The heart of the crate is [`check`]: a pure, deterministic function that
//! audits one procedure's raw source text against the house instrumentation
//! convention (timing/status declarations, transaction balancing, and the
//! execution-log INSERTs on both the normal and exception paths) and returns
//! a verdict plus every violation found. It performs no I/O, holds no state,
//! and is total over all string inputs.
//!
//! Around it sit three thin collaborator-facing pieces: the batch driver
//! (sources in, grid rows out), the append-only audit log of raw sources,
//! and the sibling marker scanner for table/view definitions.

pub mod audit;
pub mod batch;
pub mod checker;
pub mod report;
pub mod scanner;

// Re-export the primary surface for convenient access
pub use audit::{AuditError, AuditLog};
pub use batch::{check_batch, check_batch_parallel, check_batch_with_audit, AuditRow, ProcedureSource};
pub use checker::check;
pub use report::{CheckReport, RuleId, Verdict, Violation};
pub use scanner::{scan_definitions, ObjectDefinition};
