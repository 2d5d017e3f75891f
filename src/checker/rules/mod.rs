//! The rule catalogue: a declarative, ordered list of convention checks.
//!
//! Each rule is an independent function over the full text; it appends zero
//! or more violations. The catalogue order fixes message ordering, nothing
//! else — no rule depends on another's outcome.
mod declarations;
mod logging;
mod transactions;

use crate::report::Violation;

/// The execution-log table every compliant procedure must INSERT into,
/// both in the normal-completion path and inside every CATCH block.
pub(crate) const LOG_TABLE: &str = "dbo.ProcedureExecutionLog";

/// The text under audit, with a pre-lowered copy for the substring rules.
///
/// Keywords and identifiers in the convention are plain ASCII, so one
/// `to_ascii_lowercase` pass up front lets every containment check run
/// case-insensitively without re-lowering per rule.
pub(crate) struct Haystack<'a> {
    /// The raw text, used by the regex rules (which carry `(?i)` themselves).
    pub raw: &'a str,
    /// ASCII-lowercased copy for substring containment.
    pub lower: String,
}

impl<'a> Haystack<'a> {
    pub(crate) fn new(raw: &'a str) -> Self {
        Self { raw, lower: raw.to_ascii_lowercase() }
    }

    /// Case-insensitive containment. The needle must already be lowercase.
    pub(crate) fn contains_ci(&self, needle: &str) -> bool {
        debug_assert_eq!(needle, needle.to_ascii_lowercase());
        self.lower.contains(needle)
    }
}

/// A single convention check: sees the full text, appends its violations.
pub(crate) type RuleFn = fn(&Haystack<'_>, &mut Vec<Violation>);

/// The house convention, in reporting order.
pub(crate) const CATALOGUE: [RuleFn; 6] = [
    declarations::required_declarations,
    declarations::procedure_name_binding,
    transactions::transaction_balance,
    logging::catch_block_logging,
    logging::final_insert_shape,
    logging::null_error_in_catch,
];
