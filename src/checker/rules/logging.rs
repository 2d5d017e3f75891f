//! Rules for the execution-log INSERTs: the CATCH path, the canonical
//! final statement, and the NULL-error anti-pattern.
use super::{Haystack, LOG_TABLE};
use crate::report::{RuleId, Violation};
use regex::Regex;
use std::sync::LazyLock;

// All patterns run with `(?is)`: case-insensitive, dot matches newline.
// The lazy middles scan forward across line boundaries without swallowing
// the rest of the procedure.

fn log_table_pattern(tail: &str) -> Regex {
    let pattern = format!(r"(?is)INSERT\s+INTO\s+{}{}", regex::escape(LOG_TABLE), tail);
    Regex::new(&pattern).expect("hard-coded pattern is valid")
}

/// An execution-log INSERT whose statement body eventually reaches a
/// CATCH-block closer.
static CATCH_PATH_INSERT: LazyLock<Regex> = LazyLock::new(|| log_table_pattern(r".*?CATCH"));

/// The canonical seven-column final INSERT, with a literal NULL in the
/// ErrorMessage position. Whitespace-insensitive between tokens.
static FINAL_INSERT: LazyLock<Regex> = LazyLock::new(|| {
    log_table_pattern(
        r"\s*\(\s*ProcedureName,\s*StartTime,\s*EndTime,\s*DurationSeconds,\s*Status,\s*ErrorMessage,\s*ExecutedBy\s*\)\s*VALUES\s*\(\s*@ProcedureName,\s*@StartTime,\s*@EndTime,\s*@DurationSeconds,\s*@Status,\s*NULL,\s*@ExecutedBy\s*\)",
    )
});

/// One CATCH block: opener to the nearest following closer, interior captured.
static CATCH_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)BEGIN\s+CATCH(.*?)END\s+CATCH").expect("hard-coded pattern is valid")
});

/// A log INSERT that names the ErrorMessage column and carries a NULL
/// anywhere in its VALUES list. Loose and non-positional: it does not
/// verify the NULL lines up with the ErrorMessage column.
static NULL_ERROR_INSERT: LazyLock<Regex> = LazyLock::new(|| {
    log_table_pattern(r"\s*\(.*?ErrorMessage.*?\)\s*VALUES\s*\(.*?NULL.*?\)")
});

/// The exception path must log too: some execution-log INSERT has to sit
/// before a CATCH closer.
pub(crate) fn catch_block_logging(text: &Haystack<'_>, out: &mut Vec<Violation>) {
    if !CATCH_PATH_INSERT.is_match(text.raw) {
        out.push(Violation::new(
            RuleId::CatchBlockLogging,
            "Missing INSERT INTO log table in CATCH block",
        ));
    }
}

/// The normal-completion path must end in the canonical log INSERT.
///
/// Trailing whitespace is trimmed first, but the pattern still floats
/// anywhere in the text rather than anchoring to the tail — the rule name
/// promises more than the match enforces. Known looseness, kept as-is:
/// anchoring it would change verdicts on real procedures.
pub(crate) fn final_insert_shape(text: &Haystack<'_>, out: &mut Vec<Violation>) {
    if !FINAL_INSERT.is_match(text.raw.trim_end()) {
        out.push(Violation::new(
            RuleId::FinalInsertShape,
            "Missing or incorrect final INSERT INTO log statement",
        ));
    }
}

/// The inverse of the final-INSERT expectation: inside a CATCH block the
/// log row must carry the real error message, never NULL. Each offending
/// span is reported separately, in discovery order.
pub(crate) fn null_error_in_catch(text: &Haystack<'_>, out: &mut Vec<Violation>) {
    for span in CATCH_SPAN.captures_iter(text.raw) {
        let body = &span[1];
        if NULL_ERROR_INSERT.is_match(body) {
            out.push(Violation::new(
                RuleId::NullErrorInCatch,
                "ERROR: This procedure inserts NULL into ErrorMessage in the CATCH block.",
            ));
        }
    }
}
