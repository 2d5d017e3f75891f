//! Rule for transaction balancing.
use super::Haystack;
use crate::report::{RuleId, Violation};

/// "The Ledger Must Close": explicit transactions need both exits.
///
/// A procedure that opens a transaction must contain a COMMIT and a
/// ROLLBACK somewhere in its text (the ROLLBACK normally lives in the
/// CATCH block). The inverse also holds: a COMMIT or ROLLBACK with no
/// matching BEGIN is flagged as an orphan. Commit and rollback are
/// evaluated independently, so both can be reported at once.
pub(crate) fn transaction_balance(text: &Haystack<'_>, out: &mut Vec<Violation>) {
    let has_begin = text.contains_ci("begin transaction");
    let has_commit = text.contains_ci("commit transaction");
    let has_rollback = text.contains_ci("rollback transaction");

    if has_begin {
        if !has_commit {
            out.push(Violation::new(RuleId::TransactionBalance, "Missing COMMIT TRANSACTION"));
        }
        if !has_rollback {
            out.push(Violation::new(RuleId::TransactionBalance, "Missing ROLLBACK TRANSACTION"));
        }
    } else {
        if has_commit {
            out.push(Violation::new(RuleId::TransactionBalance, "Invalid extra COMMIT TRANSACTION"));
        }
        if has_rollback {
            out.push(Violation::new(RuleId::TransactionBalance, "Invalid extra ROLLBACK TRANSACTION"));
        }
    }
}
