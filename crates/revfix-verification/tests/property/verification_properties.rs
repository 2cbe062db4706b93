use proptest::prelude::*;
use revfix_core::models::VerificationOutcome;
use revfix_fixtures::*;
use revfix_verification::FindingDisappearanceVerifier;

fn arb_path() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("src/x.py".to_string()),
        Just("src/other.py".to_string()),
        Just("pyproject.toml".to_string()),
        Just("docs/setup.cfg".to_string()),
        "[a-z]{1,6}/[a-z]{1,6}\\.rs",
    ]
}

proptest! {
    #[test]
    fn still_present_beats_everything(
        fix_files in prop::collection::vec(arb_path(), 0..4),
        pr_files in prop::collection::vec(arb_path(), 0..4),
    ) {
        let verifier = FindingDisappearanceVerifier::with_defaults().unwrap();
        let f = finding("ruff:E501", "src/x.py", 10);
        let fix_refs: Vec<&str> = fix_files.iter().map(String::as_str).collect();
        let pr_refs: Vec<&str> = pr_files.iter().map(String::as_str).collect();
        let mut ci = clean_ci_run(&fix_refs, &pr_refs);
        ci.findings.push(post_fix_finding("ruff:E501", "src/x.py", Some(10)));

        let result = verifier.verify(&f, &stored_pair(&f, "fix", 0.5), &ci);
        prop_assert_eq!(result.outcome, VerificationOutcome::StillPresent);
    }

    #[test]
    fn config_only_beats_untouched_file(
        fix_files in prop::collection::vec("[a-z]{1,6}/[a-z]{1,6}\\.rs", 1..4),
        config in prop_oneof![Just("pyproject.toml"), Just("a/b/.flake8"), Just(".eslintrc.js")],
    ) {
        let verifier = FindingDisappearanceVerifier::with_defaults().unwrap();
        let f = finding("ruff:E501", "src/x.py", 10);
        let fix_refs: Vec<&str> = fix_files.iter().map(String::as_str).collect();
        let mut pr_refs = fix_refs.clone();
        pr_refs.push(config);
        let ci = clean_ci_run(&fix_refs, &pr_refs);

        let result = verifier.verify(&f, &stored_pair(&f, "fix", 0.5), &ci);
        prop_assert_eq!(result.outcome, VerificationOutcome::ConfigOnly);
        prop_assert_eq!(result.confidence_delta, -0.10);
    }

    #[test]
    fn corrected_confidence_stays_in_range(
        start in 0.0f64..=1.0,
        pr_files in prop::collection::vec(arb_path(), 0..4),
    ) {
        let verifier = FindingDisappearanceVerifier::with_defaults().unwrap();
        let f = finding("ruff:E501", "src/x.py", 10);
        let pr_refs: Vec<&str> = pr_files.iter().map(String::as_str).collect();
        let pair = stored_pair(&f, "fix", start);
        let result = verifier.verify(&f, &pair, &clean_ci_run(&pr_refs, &pr_refs));
        let corrected = pair.with_verification(&result);
        prop_assert!((0.0..=1.0).contains(&corrected.confidence.value()));
    }
}
