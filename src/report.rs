//! Defines the verdict and violation types produced by the checker.
use serde::{Deserialize, Serialize};
use std::fmt;

/// The rule family a violation belongs to.
///
// Callers that need to branch on the kind of failure should match on this
// enum rather than grepping the violation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleId {
    /// One of the mandatory instrumentation `DECLARE`s is absent.
    RequiredDeclarations,
    /// The `OBJECT_NAME(@@PROCID)` name binding is absent.
    ProcedureNameBinding,
    /// Transaction begin/commit/rollback keywords are unbalanced.
    TransactionBalance,
    /// No execution-log INSERT reaches the CATCH-block closer.
    CatchBlockLogging,
    /// The canonical seven-column final INSERT is absent or malformed.
    FinalInsertShape,
    /// A CATCH block writes NULL into the ErrorMessage column.
    NullErrorInCatch,
}

/// A single failed convention check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The rule family that produced this violation.
    pub rule: RuleId,
    /// A human-readable message explaining the violation.
    pub message: String,
}

impl Violation {
    pub(crate) fn new(rule: RuleId, message: impl Into<String>) -> Self {
        Self { rule, message: message.into() }
    }
}

/// The pass/fail summary. Derived from the violation list, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Ok,
    Failure,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Ok => write!(f, "OK"),
            Verdict::Failure => write!(f, "FAILURE"),
        }
    }
}

/// The full result of one checker run over one procedure's source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub verdict: Verdict,
    pub violations: Vec<Violation>,
}

impl CheckReport {
    /// Derives the verdict: `Ok` iff the violation list is empty.
    pub(crate) fn from_violations(violations: Vec<Violation>) -> Self {
        let verdict = if violations.is_empty() { Verdict::Ok } else { Verdict::Failure };
        Self { verdict, violations }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self.verdict, Verdict::Ok)
    }

    /// The display message for this report.
    ///
    /// Violations are joined with `"; "` in catalogue order; a clean report
    /// reads "All checks passed".
    pub fn message(&self) -> String {
        if self.violations.is_empty() {
            "All checks passed".to_string()
        } else {
            self.violations
                .iter()
                .map(|v| v.message.as_str())
                .collect::<Vec<_>>()
                .join("; ")
        }
    }
}
