#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use crate::logic::build_shipment_packages;
    use proptest::prelude::*;
    use wwex_common::{Measurement, Unit};

    proptest! {
        #[test]
        fn test_per_unit_weight_is_total_over_quantity(
            total in 0.0..10_000.0f64,
            quantity in 1u32..500,
        ) {
            let shipment = shipment(vec![item("a", quantity, Measurement::new(total, Unit::Pound))]);
            let packages = build_shipment_packages(&shipment, &box_package_type()).unwrap();

            let per_unit = packages[0].weight;
            prop_assert_eq!(per_unit.unit, Unit::Pound);
            let expected = total / f64::from(quantity);
            prop_assert!((per_unit.number - expected).abs() <= 1e-9 * expected.max(1.0));
        }

        #[test]
        fn test_one_package_per_item_in_order(weights in prop::collection::vec(0.1..100.0f64, 0..20)) {
            let items = weights
                .iter()
                .enumerate()
                .map(|(index, weight)| item(&index.to_string(), 1, Measurement::new(*weight, Unit::Kilogram)))
                .collect();
            let packages = build_shipment_packages(&shipment(items), &box_package_type()).unwrap();

            prop_assert_eq!(packages.len(), weights.len());
            for (index, package) in packages.iter().enumerate() {
                prop_assert_eq!(package.sequence, index as u32 + 1);
                prop_assert_eq!(package.length.unit, Unit::Inch);
            }
        }
    }
}
