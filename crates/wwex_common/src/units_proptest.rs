#[cfg(test)]
mod tests {
    use crate::units::{ensure_unit_of_measure, Measurement, Unit};
    use proptest::prelude::*;

    fn weight_unit() -> impl Strategy<Value = Unit> {
        prop_oneof![
            Just(Unit::Pound),
            Just(Unit::Ounce),
            Just(Unit::Kilogram),
            Just(Unit::Gram),
        ]
    }

    fn length_unit() -> impl Strategy<Value = Unit> {
        prop_oneof![
            Just(Unit::Inch),
            Just(Unit::Foot),
            Just(Unit::Millimeter),
            Just(Unit::Centimeter),
            Just(Unit::Meter),
        ]
    }

    // Relative tolerance; factors span several orders of magnitude
    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    proptest! {
        #[test]
        fn test_weight_round_trip(value in 0.0..100_000.0f64, from in weight_unit(), to in weight_unit()) {
            let original = Measurement::new(value, from);
            let converted = ensure_unit_of_measure(original, to).unwrap();
            let back = ensure_unit_of_measure(converted, from).unwrap();
            prop_assert_eq!(back.unit, from);
            prop_assert!(close(back.number, value), "{} != {}", back.number, value);
        }

        #[test]
        fn test_length_round_trip(value in 0.0..100_000.0f64, from in length_unit(), to in length_unit()) {
            let original = Measurement::new(value, from);
            let back = original.convert(to).and_then(|m| m.convert(from)).unwrap();
            prop_assert!(close(back.number, value), "{} != {}", back.number, value);
        }

        #[test]
        fn test_cross_kind_conversion_always_fails(value in 0.0..1_000.0f64, from in weight_unit(), to in length_unit()) {
            prop_assert!(Measurement::new(value, from).convert(to).is_err());
            prop_assert!(Measurement::new(value, to).convert(from).is_err());
        }
    }
}
