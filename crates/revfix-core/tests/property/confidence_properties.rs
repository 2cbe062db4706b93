use proptest::prelude::*;
use revfix_core::models::{Confidence, LineRange};

proptest! {
    #[test]
    fn confidence_always_in_unit_interval(value in proptest::num::f64::ANY) {
        let c = Confidence::new(value);
        prop_assert!((0.0..=1.0).contains(&c.value()));
    }

    #[test]
    fn adjusted_confidence_stays_in_range(start in 0.0f64..=1.0, delta in -2.0f64..2.0) {
        let c = Confidence::new(start).adjusted(delta);
        prop_assert!((0.0..=1.0).contains(&c.value()));
    }

    #[test]
    fn overlap_is_symmetric(a in 1u32..200, b in 0u32..50, c in 1u32..200, d in 0u32..50) {
        let r1 = LineRange::new(a, a + b).unwrap();
        let r2 = LineRange::new(c, c + d).unwrap();
        prop_assert_eq!(r1.overlaps(&r2), r2.overlaps(&r1));
    }
}
