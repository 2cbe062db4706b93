//! Verification outcomes against post-fix CI runs.

use revfix_core::models::VerificationOutcome;
use revfix_core::RevfixConfig;
use revfix_fixtures::*;
use revfix_verification::FindingDisappearanceVerifier;

fn verifier() -> FindingDisappearanceVerifier {
    FindingDisappearanceVerifier::with_defaults().unwrap()
}

#[test]
fn clean_run_on_touched_file_confirms() {
    let f = finding("ruff:E501", "src/x.py", 10);
    let pair = stored_pair(&f, "fix-1", 0.8);
    let ci = clean_ci_run(&["src/x.py"], &["src/x.py"]);

    let result = verifier().verify(&f, &pair, &ci);
    assert_eq!(result.outcome, VerificationOutcome::Confirmed);
    assert!(result.disappearance_confirmed);
    assert_eq!(result.confidence_delta, 0.0);
    assert_eq!(result.pair_id, pair.pair_id);

    let event = result.resolved_event.expect("confirmed emits an event");
    assert_eq!(event.finding_id, f.finding_id());
    assert_eq!(event.fix_commit_sha, "fix-1");
    assert_eq!(event.ci_run_id, "ci-1001");
    assert_eq!(event.verification_commit_sha, "ver1f1ed");
}

#[test]
fn empty_fix_file_set_still_confirms() {
    let f = finding("ruff:E501", "src/x.py", 10);
    let result = verifier().verify(&f, &stored_pair(&f, "fix-1", 0.8), &clean_ci_run(&[], &[]));
    assert_eq!(result.outcome, VerificationOutcome::Confirmed);
}

#[test]
fn reported_again_is_still_present() {
    let f = finding("ruff:E501", "src/x.py", 10);
    let mut ci = clean_ci_run(&["src/x.py"], &["src/x.py"]);
    ci.findings.push(post_fix_finding("E501", "./src/x.py", Some(11)));

    let result = verifier().verify(&f, &stored_pair(&f, "fix-1", 0.8), &ci);
    assert_eq!(result.outcome, VerificationOutcome::StillPresent);
    assert!(!result.disappearance_confirmed);
    assert_eq!(result.confidence_delta, -0.20);
    assert!(result.resolved_event.is_none());
}

#[test]
fn same_rule_elsewhere_does_not_count() {
    let f = finding("ruff:E501", "src/x.py", 10);
    let mut ci = clean_ci_run(&["src/x.py"], &["src/x.py"]);
    ci.findings.push(post_fix_finding("ruff:E501", "src/y.py", Some(10)));

    let result = verifier().verify(&f, &stored_pair(&f, "fix-1", 0.8), &ci);
    assert_eq!(result.outcome, VerificationOutcome::Confirmed);
}

#[test]
fn config_only_scenario() {
    let f = finding("ruff:E501", "src/x.py", 10);
    let pair = stored_pair(&f, "fix-1", 0.8);
    let ci = clean_ci_run(&["src/other.py"], &["src/other.py", "pyproject.toml"]);

    let result = verifier().verify(&f, &pair, &ci);
    assert_eq!(result.outcome, VerificationOutcome::ConfigOnly);
    assert_eq!(result.confidence_delta, -0.10);
    assert!(!result.disappearance_confirmed);

    let corrected = pair.with_verification(&result);
    assert!((corrected.confidence.value() - 0.70).abs() < 1e-9);
    assert_eq!(pair.confidence.value(), 0.8);
}

#[test]
fn nested_config_files_are_recognized() {
    let f = finding("eslint:no-unused-vars", "web/src/app.js", 3);
    let ci = clean_ci_run(&["web/src/app.js"], &["web/src/app.js", "web/.eslintrc.json"]);
    let result = verifier().verify(&f, &stored_pair(&f, "fix-1", 0.8), &ci);
    assert_eq!(result.outcome, VerificationOutcome::ConfigOnly);
}

#[test]
fn untouched_file_disappearance_is_penalized() {
    let f = finding("ruff:E501", "src/x.py", 10);
    let ci = clean_ci_run(&["src/other.py"], &["src/other.py"]);
    let result = verifier().verify(&f, &stored_pair(&f, "fix-1", 0.8), &ci);
    assert_eq!(result.outcome, VerificationOutcome::DisappearsWithoutMod);
    assert_eq!(result.confidence_delta, -0.15);
    assert!(result.resolved_event.is_none());
}

#[test]
fn extra_patterns_extend_the_builtin_list() {
    let config = RevfixConfig::from_toml(
        r#"
        [verification]
        extra_config_patterns = ["lint/rules.yml"]
        "#,
    )
    .unwrap();
    let verifier = FindingDisappearanceVerifier::from_config(&config).unwrap();
    let f = finding("ruff:E501", "src/x.py", 10);
    let ci = clean_ci_run(&["src/x.py"], &["src/x.py", "lint/rules.yml"]);
    let result = verifier.verify(&f, &stored_pair(&f, "fix-1", 0.8), &ci);
    assert_eq!(result.outcome, VerificationOutcome::ConfigOnly);

    let ci = clean_ci_run(&["src/x.py"], &["src/x.py", "other/lint/rules.yml"]);
    let result = verifier.verify(&f, &stored_pair(&f, "fix-1", 0.8), &ci);
    assert_eq!(result.outcome, VerificationOutcome::Confirmed);
}

#[test]
fn invalid_extra_pattern_is_a_config_error() {
    let config = RevfixConfig::from_toml(
        r#"
        [verification]
        extra_config_patterns = ["[unclosed"]
        "#,
    )
    .unwrap();
    assert!(FindingDisappearanceVerifier::from_config(&config).is_err());
}

#[test]
fn batch_preserves_input_order() {
    let touched = finding("ruff:E501", "src/x.py", 10);
    let untouched = finding("ruff:F401", "src/z.py", 1);
    let reported = finding("ruff:E711", "src/x.py", 20);
    let mut ci = clean_ci_run(&["src/x.py"], &["src/x.py"]);
    ci.findings.push(post_fix_finding("ruff:E711", "src/x.py", None));

    let pairs: Vec<_> = [touched, untouched, reported]
        .into_iter()
        .map(|f| {
            let pair = stored_pair(&f, "fix-1", 0.6);
            (f, pair)
        })
        .collect();
    let outcomes: Vec<_> = verifier()
        .verify_batch(&pairs, &ci)
        .into_iter()
        .map(|r| r.outcome)
        .collect();
    assert_eq!(
        outcomes,
        vec![
            VerificationOutcome::Confirmed,
            VerificationOutcome::DisappearsWithoutMod,
            VerificationOutcome::StillPresent,
        ]
    );
}

#[test]
fn result_serializes_outcome_label() {
    let f = finding("ruff:E501", "src/x.py", 10);
    let result = verifier().verify(&f, &stored_pair(&f, "fix-1", 0.8), &clean_ci_run(&[], &[]));
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["outcome"], "confirmed");
    assert_eq!(json["resolved_event"]["ci_run_id"], "ci-1001");
}
