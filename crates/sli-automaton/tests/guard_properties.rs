use proptest::prelude::*;
use sli_automaton::parse_guard;
use sli_core::{Columns, Measurement, Value};

fn meas(v: i64) -> Measurement {
    let mut cols = Columns::new();
    cols.push("v", Value::Int(v));
    Measurement::new(0, cols)
}

proptest! {
    /// A parsed `v > k` guard agrees with the plain integer comparison for
    /// every sampled `v` and threshold `k`.
    #[test]
    fn parsed_guard_matches_native_comparison(v in -1000i64..1000, k in -1000i64..1000) {
        let guard = parse_guard(&format!("v > {k}")).unwrap();
        prop_assert_eq!(guard.evaluate(&meas(v)), v > k);
    }

    /// `!(v <= k)` and `v > k` are equivalent for every sampled input.
    #[test]
    fn negated_le_matches_gt(v in -1000i64..1000, k in -1000i64..1000) {
        let negated = parse_guard(&format!("!(v <= {k})")).unwrap();
        let direct = parse_guard(&format!("v > {k}")).unwrap();
        prop_assert_eq!(negated.evaluate(&meas(v)), direct.evaluate(&meas(v)));
    }
}
