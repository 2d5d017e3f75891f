//! The central checker that runs the full convention rule catalogue.
pub(crate) mod rules;

use crate::report::CheckReport;
use rules::Haystack;

/// Audits one procedure's source text against the house convention.
///
/// Every rule in the catalogue is evaluated unconditionally (no early exit)
/// and violations accumulate in catalogue order, so identical input always
/// yields an identical report. The function is total over all string inputs:
/// empty text, non-SQL, or binary garbage simply fails more rules — nothing
/// in here can panic or return an error, so one bad procedure never aborts
/// a batch.
pub fn check(source: &str) -> CheckReport {
    let haystack = Haystack::new(source);

    let mut violations = Vec::new();
    for rule in rules::CATALOGUE {
        rule(&haystack, &mut violations);
    }

    CheckReport::from_violations(violations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{RuleId, Verdict};

    /// A synthetic procedure that satisfies every rule in the catalogue.
    const COMPLIANT_PROCEDURE: &str = r#"
CREATE PROCEDURE dbo.sp_RefreshInventory
AS
BEGIN
    DECLARE @StartTime DATETIME = GETDATE();
    DECLARE @EndTime DATETIME;
    DECLARE @DurationSeconds INT;
    DECLARE @Status NVARCHAR(20) = 'Success';
    DECLARE @ErrorMessage NVARCHAR(MAX);
    DECLARE @ProcedureName SYSNAME = OBJECT_NAME(@@PROCID);
    DECLARE @ExecutedBy SYSNAME = SUSER_SNAME();

    BEGIN TRY
        BEGIN TRANSACTION;
        UPDATE dbo.Inventory SET Quantity = Quantity + 1;
        COMMIT TRANSACTION;
    END TRY
    BEGIN CATCH
        ROLLBACK TRANSACTION;
        SET @ErrorMessage = ERROR_MESSAGE();
        SET @Status = 'Failure';
        SET @EndTime = GETDATE();
        SET @DurationSeconds = DATEDIFF(SECOND, @StartTime, @EndTime);
        INSERT INTO dbo.ProcedureExecutionLog (ProcedureName, StartTime, EndTime, DurationSeconds, Status, ErrorMessage, ExecutedBy)
        VALUES (@ProcedureName, @StartTime, @EndTime, @DurationSeconds, @Status, @ErrorMessage, @ExecutedBy);
    END CATCH;

    SET @EndTime = GETDATE();
    SET @DurationSeconds = DATEDIFF(SECOND, @StartTime, @EndTime);
    INSERT INTO dbo.ProcedureExecutionLog (ProcedureName, StartTime, EndTime, DurationSeconds, Status, ErrorMessage, ExecutedBy)
    VALUES (@ProcedureName, @StartTime, @EndTime, @DurationSeconds, @Status, NULL, @ExecutedBy)
END"#;

    #[test]
    fn test_compliant_procedure_passes_clean() {
        let report = check(COMPLIANT_PROCEDURE);
        assert_eq!(report.violations, Vec::new(), "expected no violations");
        assert_eq!(report.verdict, Verdict::Ok);
        assert_eq!(report.message(), "All checks passed");
    }

    #[test]
    fn test_empty_input_degrades_to_violations() {
        // Totality: empty input is not an error, it just fails every
        // presence rule. Transaction rules stay silent (no BEGIN, no
        // COMMIT/ROLLBACK) and there are no CATCH spans to inspect.
        let report = check("");
        assert_eq!(report.verdict, Verdict::Failure);
        assert_eq!(report.violations.len(), 10);

        let decl_count = report
            .violations
            .iter()
            .filter(|v| v.rule == RuleId::RequiredDeclarations)
            .count();
        assert_eq!(decl_count, 7);

        for rule in [
            RuleId::ProcedureNameBinding,
            RuleId::CatchBlockLogging,
            RuleId::FinalInsertShape,
        ] {
            assert!(report.violations.iter().any(|v| v.rule == rule));
        }
        assert!(!report.violations.iter().any(|v| v.rule == RuleId::TransactionBalance));
        assert!(!report.violations.iter().any(|v| v.rule == RuleId::NullErrorInCatch));
    }

    #[test]
    fn test_determinism() {
        for input in ["", COMPLIANT_PROCEDURE, "BEGIN TRANSACTION\nselect 1", "\u{0}\u{1}garbage\u{ff}"] {
            assert_eq!(check(input), check(input));
        }
    }

    #[test]
    fn test_binary_garbage_never_panics() {
        let garbage: String = (0u8..=255).map(|b| b as char).collect();
        let report = check(&garbage);
        assert_eq!(report.verdict, Verdict::Failure);
    }

    #[test]
    fn test_violations_follow_catalogue_order() {
        // A text failing everything: declarations first, then the name
        // binding, then transactions, then the logging rules.
        let source = "COMMIT TRANSACTION";
        let report = check(source);
        let order: Vec<RuleId> = report.violations.iter().map(|v| v.rule).collect();
        let mut sorted = order.clone();
        sorted.sort_by_key(|r| match r {
            RuleId::RequiredDeclarations => 0,
            RuleId::ProcedureNameBinding => 1,
            RuleId::TransactionBalance => 2,
            RuleId::CatchBlockLogging => 3,
            RuleId::FinalInsertShape => 4,
            RuleId::NullErrorInCatch => 5,
        });
        assert_eq!(order, sorted);
    }

    #[test]
    fn test_trailing_whitespace_does_not_change_verdict() {
        let padded = format!("{}\n\n   \n\t\n", COMPLIANT_PROCEDURE);
        assert_eq!(check(&padded).verdict, Verdict::Ok);
    }
}
