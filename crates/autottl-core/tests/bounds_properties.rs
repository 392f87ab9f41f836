use autottl_core::TtlBounds;
use proptest::prelude::*;

fn arb_consistent_bounds() -> impl Strategy<Value = TtlBounds> {
    (0u64..1_000_000, 0u64..1_000_000).prop_map(|(a, b)| TtlBounds::new(a.min(b), a.max(b)))
}

proptest! {
    #[test]
    fn clamp_stays_within_consistent_bounds(bounds in arb_consistent_bounds(), value in any::<u64>()) {
        let clamped = bounds.clamp(value);
        prop_assert!(clamped >= bounds.default_ttl);
        prop_assert!(clamped <= bounds.max_ttl);
    }

    #[test]
    fn clamp_is_idempotent(bounds in arb_consistent_bounds(), value in any::<u64>()) {
        let once = bounds.clamp(value);
        // A clamped zero only comes from (0, 0) bounds, which map zero to itself.
        prop_assert_eq!(bounds.clamp(once), once);
    }

    #[test]
    fn inconsistent_bounds_always_yield_default(
        max_ttl in 0u64..1_000_000,
        excess in 1u64..1_000_000,
        value in any::<u64>(),
    ) {
        let bounds = TtlBounds::new(max_ttl + excess, max_ttl);
        prop_assert_eq!(bounds.clamp(value), bounds.default_ttl);
    }
}
