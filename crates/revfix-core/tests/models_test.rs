use chrono::{TimeZone, Utc};
use revfix_core::errors::ValidationError;
use revfix_core::models::*;

fn draft() -> NewFinding {
    NewFinding {
        finding_id: "f-1".to_string(),
        repo: "acme/api".to_string(),
        pr_id: "42".to_string(),
        rule_id: "ruff:E501".to_string(),
        severity: Severity::Warning,
        file_path: "./src/x.py".to_string(),
        line_range: LineRange::single(10).unwrap(),
        tool_name: None,
        tool_version: Some("0.4.1".to_string()),
        normalized_message: "line too long".to_string(),
        raw_message: "E501 line too long (120 > 88)".to_string(),
        commit_sha: "abc123".to_string(),
        observed_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    }
}

#[test]
fn finding_normalizes_path_and_defaults_tool_name() {
    let finding = ReviewFindingObserved::new(draft()).unwrap();
    assert_eq!(finding.file_path(), "src/x.py");
    assert_eq!(finding.tool_name(), "ruff");
    assert_eq!(finding.rule_id().code(), "E501");
    assert_eq!(finding.line(), 10);
}

#[test]
fn finding_rejects_empty_ids_and_bad_rules() {
    let mut d = draft();
    d.finding_id = "  ".to_string();
    assert_eq!(
        ReviewFindingObserved::new(d).unwrap_err(),
        ValidationError::EmptyField {
            field: "finding_id"
        }
    );

    let mut d = draft();
    d.rule_id = "E501".to_string();
    assert!(matches!(
        ReviewFindingObserved::new(d),
        Err(ValidationError::InvalidRuleId { .. })
    ));
}

#[test]
fn finding_deserialization_validates() {
    let json = serde_json::json!({
        "finding_id": "f-2",
        "repo": "acme/api",
        "pr_id": "7",
        "rule_id": "nocolon",
        "file_path": "a.py",
        "line_range": {"start": 1, "end": 1},
        "commit_sha": "abc",
        "observed_at": "2024-05-01T12:00:00Z"
    });
    assert!(serde_json::from_value::<ReviewFindingObserved>(json).is_err());

    let json = serde_json::json!({
        "finding_id": "f-2",
        "repo": "acme/api",
        "pr_id": "7",
        "rule_id": "ruff:F401",
        "file_path": "a.py",
        "line_range": {"start": 3, "end": 1},
        "commit_sha": "abc",
        "observed_at": "2024-05-01T12:00:00Z"
    });
    assert!(serde_json::from_value::<ReviewFindingObserved>(json).is_err());
}

#[test]
fn fix_rejects_empty_sha_and_normalizes_files() {
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 5, 0).unwrap();
    let err = ReviewFixApplied::new(NewFix {
        fix_commit_sha: String::new(),
        diff_hunks: vec![],
        tool_autofix: false,
        touched_line_range: LineRange::single(1).unwrap(),
        touched_files: vec![],
        applied_at: at,
    })
    .unwrap_err();
    assert_eq!(
        err,
        ValidationError::EmptyField {
            field: "fix_commit_sha"
        }
    );

    let fix = ReviewFixApplied::new(NewFix {
        fix_commit_sha: "def456".to_string(),
        diff_hunks: vec![],
        tool_autofix: true,
        touched_line_range: LineRange::single(1).unwrap(),
        touched_files: vec!["./b.py".into(), "a.py".into(), "b.py".into()],
        applied_at: at,
    })
    .unwrap();
    assert_eq!(fix.touched_files(), ["a.py", "b.py"]);
}

#[test]
fn corrected_pair_is_a_new_record() {
    let pair = FindingFixPair {
        pair_id: "p-1".to_string(),
        finding_id: "f-1".to_string(),
        fix_commit_sha: "def456".to_string(),
        diff_hunks: vec![],
        confidence: Confidence::new(0.8),
        disappearance_confirmed: false,
        pairing_type: PairingType::Temporal,
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 13, 0, 0).unwrap(),
    };
    let result = VerificationResult {
        finding_id: "f-1".to_string(),
        pair_id: "p-1".to_string(),
        outcome: VerificationOutcome::StillPresent,
        disappearance_confirmed: false,
        confidence_delta: -0.20,
        resolved_event: None,
    };

    let corrected = pair.with_verification(&result);
    assert!((corrected.confidence.value() - 0.6).abs() < 1e-9);
    assert_eq!(pair.confidence.value(), 0.8);
    assert_eq!(corrected.identity(), pair.identity());
}

#[test]
fn same_pairing_ignores_pair_id() {
    let base = FindingFixPair {
        pair_id: "p-1".to_string(),
        finding_id: "f-1".to_string(),
        fix_commit_sha: "def456".to_string(),
        diff_hunks: vec![],
        confidence: Confidence::new(0.5),
        disappearance_confirmed: false,
        pairing_type: PairingType::SamePr,
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 13, 0, 0).unwrap(),
    };
    let other = FindingFixPair {
        pair_id: "p-2".to_string(),
        ..base.clone()
    };
    assert!(base.same_pairing(&other));
    assert_ne!(base, other);
}

#[test]
fn enums_serialize_snake_case() {
    assert_eq!(
        serde_json::to_string(&PairingType::SameCommit).unwrap(),
        "\"same_commit\""
    );
    assert_eq!(
        serde_json::to_string(&VerificationOutcome::DisappearsWithoutMod).unwrap(),
        "\"disappears_without_mod\""
    );
    assert_eq!(
        serde_json::to_string(&RewardOutcome::PreemptiveAvoidance).unwrap(),
        "\"preemptive_avoidance\""
    );
}
