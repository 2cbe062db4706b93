use proptest::prelude::*;
use revfix_core::models::Confidence;
use revfix_reward::{FindingRecord, InjectionRecord, PairingMetricsCalculator};

prop_compose! {
    fn arb_finding()(
        index in 0u32..10_000,
        repo in prop_oneof![Just("acme/api"), Just("acme/web")],
        rule in prop_oneof![Just("ruff:E501"), Just("ruff:F401"), Just("eslint:no-undef")],
        paired in any::<bool>(),
        autofix in any::<bool>(),
        confidence in 0.0f64..=1.0,
        resolution_secs in proptest::option::of(0u64..1_000_000),
        promoted in any::<bool>(),
        reintroduced in any::<bool>(),
    ) -> FindingRecord {
        FindingRecord {
            finding_id: format!("f-{index}"),
            repo: repo.to_string(),
            rule_id: rule.to_string(),
            paired,
            autofix,
            confidence: Confidence::new(confidence),
            resolution_secs,
            promoted,
            reintroduced,
        }
    }
}

prop_compose! {
    fn arb_injection()(repo in prop_oneof![Just("acme/api"), Just("acme/web")], avoided in any::<bool>()) -> InjectionRecord {
        InjectionRecord { repo: repo.to_string(), rule_id: "ruff:E501".to_string(), avoided }
    }
}

proptest! {
    #[test]
    fn rates_are_bounded_and_finite(
        findings in prop::collection::vec(arb_finding(), 0..40),
        injections in prop::collection::vec(arb_injection(), 0..20),
    ) {
        let s = PairingMetricsCalculator::new().compute(&findings, &injections);
        for rate in [s.paired_rate, s.average_confidence, s.reintroduction_rate, s.preemptive_avoidance_rate] {
            prop_assert!((0.0..=1.0).contains(&rate), "rate out of range: {}", rate);
        }
        prop_assert!((0.0..=100.0).contains(&s.autofix_percentage));
        prop_assert!(s.median_resolution_secs.is_finite() && s.median_resolution_secs >= 0.0);
        let per_rule_total: u64 = s.per_rule.values().map(|r| r.total_findings).sum();
        prop_assert_eq!(per_rule_total, s.total_findings);
    }
}
