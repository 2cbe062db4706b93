use proptest::prelude::*;
use revfix_fixtures::*;
use revfix_pairing::{PairingEngine, SkipReason};

prop_compose! {
    fn arb_candidate()(
        index in 0u32..1000,
        minutes in -120i64..(80 * 60),
        line in 1u32..40,
        span in 0u32..5,
        removes in any::<bool>(),
        autofix in any::<bool>(),
        confirmed in any::<bool>(),
    ) -> FixBuilder {
        let mut builder = FixBuilder::new(&format!("sha-{index}"), minutes).lines(line, line + span);
        if removes {
            builder = builder.hunk(hunk_removing("src/x.py", line, "E501"));
        }
        if autofix {
            builder = builder.autofix();
        }
        if confirmed {
            builder = builder.confirmed();
        }
        builder
    }
}

proptest! {
    #[test]
    fn winner_comes_from_candidate_set(builders in prop::collection::vec(arb_candidate(), 0..8)) {
        let engine = PairingEngine::with_defaults().unwrap();
        let f = finding("ruff:E501", "src/x.py", 10);
        let candidates: Vec<_> = builders.iter().map(FixBuilder::build).collect();
        let result = engine.pair(&f, &candidates, t0());

        prop_assert!(result.pairs.len() <= 1);
        prop_assert!(result.promoted.len() <= result.pairs.len());
        match result.pair() {
            Some(pair) => {
                prop_assert!(candidates.iter().any(|c| c.fix_commit_sha() == pair.fix_commit_sha));
                prop_assert!((0.0..=1.0).contains(&pair.confidence.value()));
                prop_assert!(result.skip_reason.is_none());
            }
            None => prop_assert!(result.skip_reason.is_some()),
        }
        if candidates.is_empty() {
            prop_assert_eq!(result.skip_reason, Some(SkipReason::NoCandidates));
        }
    }

    #[test]
    fn pairing_is_deterministic(builders in prop::collection::vec(arb_candidate(), 1..6)) {
        let engine = PairingEngine::with_defaults().unwrap();
        let f = finding("ruff:E501", "src/x.py", 10);
        let candidates: Vec<_> = builders.iter().map(FixBuilder::build).collect();
        let a = engine.pair(&f, &candidates, t0());
        let b = engine.pair(&f, &candidates, t0());

        prop_assert_eq!(a.skip_reason, b.skip_reason);
        prop_assert_eq!(&a.breakdown, &b.breakdown);
        match (a.pair(), b.pair()) {
            (Some(x), Some(y)) => prop_assert!(x.same_pairing(y)),
            (None, None) => {}
            _ => prop_assert!(false, "pairing outcome differed between runs"),
        }
    }
}
