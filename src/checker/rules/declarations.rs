//! Rules for the mandatory instrumentation declarations.
use super::Haystack;
use crate::report::{RuleId, Violation};

/// The instrumentation variables every procedure must declare, in
/// reporting order.
const REQUIRED_VARIABLES: [&str; 7] = [
    "@StartTime",
    "@EndTime",
    "@DurationSeconds",
    "@Status",
    "@ErrorMessage",
    "@ProcedureName",
    "@ExecutedBy",
];

/// "The Timekeeper's Checklist": every timing/status variable must be declared.
///
/// Matching is case-insensitive substring containment on `DECLARE @X`. This
/// is intentionally loose — `DECLARE @StatusCode` also satisfies the
/// `@Status` check. Word-boundary anchoring would change verdicts on real
/// procedures, so the looseness stays.
pub(crate) fn required_declarations(text: &Haystack<'_>, out: &mut Vec<Violation>) {
    for variable in REQUIRED_VARIABLES {
        let needle = format!("declare {}", variable.to_ascii_lowercase());
        if !text.contains_ci(&needle) {
            out.push(Violation::new(
                RuleId::RequiredDeclarations,
                format!("Missing {variable} declaration"),
            ));
        }
    }
}

/// The procedure must bind its own object name via `OBJECT_NAME(@@PROCID)`,
/// so the log rows carry the real name rather than a copy-pasted literal.
pub(crate) fn procedure_name_binding(text: &Haystack<'_>, out: &mut Vec<Violation>) {
    if !text.contains_ci("object_name(@@procid)") {
        out.push(Violation::new(
            RuleId::ProcedureNameBinding,
            "Missing OBJECT_NAME(@@PROCID) declaration",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn run(rule: super::super::RuleFn, source: &str) -> Vec<Violation> {
        let haystack = Haystack::new(source);
        let mut out = Vec::new();
        rule(&haystack, &mut out);
        out
    }

    #[rstest]
    #[case("@StartTime")]
    #[case("@EndTime")]
    #[case("@DurationSeconds")]
    #[case("@Status")]
    #[case("@ErrorMessage")]
    #[case("@ProcedureName")]
    #[case("@ExecutedBy")]
    fn test_each_missing_variable_is_reported(#[case] variable: &str) {
        // Declare everything except the variable under test.
        let source: String = REQUIRED_VARIABLES
            .iter()
            .filter(|v| **v != variable)
            .map(|v| format!("DECLARE {v} INT;\n"))
            .collect();

        let violations = run(required_declarations, &source);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, format!("Missing {variable} declaration"));
    }

    #[test]
    fn test_all_declared_yields_nothing() {
        let source: String = REQUIRED_VARIABLES
            .iter()
            .map(|v| format!("declare {v} datetime;\n"))
            .collect();
        assert!(run(required_declarations, &source).is_empty());
    }

    #[test]
    fn test_case_insensitive_matching() {
        let source = "Declare @startTIME datetime";
        let violations = run(required_declarations, source);
        assert!(!violations.iter().any(|v| v.message.contains("@StartTime")));
    }

    #[test]
    fn test_longer_identifier_satisfies_substring_check() {
        // Known looseness: @StatusCode contains @Status.
        let violations = run(required_declarations, "DECLARE @StatusCode INT");
        assert!(!violations.iter().any(|v| v.message.contains("@Status declaration")));
    }

    #[test]
    fn test_procid_binding_detected() {
        let source = "DECLARE @ProcedureName SYSNAME = object_name(@@procid);";
        assert!(run(procedure_name_binding, source).is_empty());

        let violations = run(procedure_name_binding, "DECLARE @ProcedureName SYSNAME = 'sp_X';");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, "Missing OBJECT_NAME(@@PROCID) declaration");
    }
}
