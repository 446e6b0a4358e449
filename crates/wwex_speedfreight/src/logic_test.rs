#[cfg(test)]
mod tests {
    use crate::error::SpeedFreightError;
    use crate::logic::*;
    use crate::models::{FreightShipmentQuoteResult, QuoteSpeedFreightShipmentReturn};
    use rust_decimal::Decimal;
    use wwex_common::{Address, Measurement, Shipment, ShipmentItem, Unit};
    use wwex_config::WwexConfig;

    fn shipment() -> Shipment {
        let mut shipment = Shipment::new(
            "2002",
            Address {
                country_code: "US".to_string(),
                administrative_area: "IL".to_string(),
                locality: "Chicago".to_string(),
                postal_code: "60601".to_string(),
                ..Address::default()
            },
        );
        shipment.shipping_address = Some(Address {
            country_code: "US".to_string(),
            administrative_area: "GA".to_string(),
            locality: "Atlanta".to_string(),
            postal_code: "30301".to_string(),
            ..Address::default()
        });
        shipment
    }

    fn result(scac: &str, total: &str) -> FreightShipmentQuoteResult {
        FreightShipmentQuoteResult {
            carrier_scac: scac.to_string(),
            carrier_name: None,
            total_price: total.to_string(),
            transit_days: None,
        }
    }

    fn quote(status: &str, results: Vec<FreightShipmentQuoteResult>) -> QuoteSpeedFreightShipmentReturn {
        QuoteSpeedFreightShipmentReturn {
            response_status_code: status.to_string(),
            response_status_description: None,
            results,
        }
    }

    #[test]
    fn test_request_maps_sender_and_receiver() {
        let request = build_freight_shipment_quote_request(&shipment()).request;
        assert_eq!(request.sender_city, "Chicago");
        assert_eq!(request.sender_state, "IL");
        assert_eq!(request.sender_zip, "60601");
        assert_eq!(request.receiver_city, "Atlanta");
        assert_eq!(request.receiver_state, "GA");
        assert_eq!(request.receiver_zip, "30301");
    }

    #[test]
    fn test_commodity_is_the_fixed_pallet_regardless_of_items() {
        let mut heavy = shipment();
        heavy.items = vec![ShipmentItem {
            order_item_id: "1".to_string(),
            title: "Anvil".to_string(),
            quantity: 10,
            weight: Measurement::new(900.0, Unit::Kilogram),
            purchased_entity: None,
        }];

        let commodity = build_freight_shipment_quote_request(&heavy).request.commodity_details;
        assert_eq!(commodity, standard_pallet());

        let unit = &commodity.handling_units[0];
        assert_eq!(
            (unit.kind.as_str(), unit.count.as_str(), unit.height.as_str(), unit.length.as_str(), unit.width.as_str()),
            ("Pallet", "1", "5", "30", "30")
        );
        let line = &unit.line_items[0];
        assert_eq!(line.class, "85");
        assert_eq!(line.weight, "80");
        assert_eq!(line.description, "Pallet of stuff");
        assert_eq!(line.nmfc, None);
        assert_eq!(line.piece_type, "Pallet");
        assert_eq!(line.pieces, "1");
        assert_eq!(line.hazmat, "N");
    }

    #[test]
    fn test_missing_state_is_sent_as_is() {
        let mut shipment = shipment();
        if let Some(address) = shipment.shipping_address.as_mut() {
            address.administrative_area.clear();
        }
        let request = build_freight_shipment_quote_request(&shipment).request;
        assert_eq!(request.receiver_state, "");
    }

    #[test]
    fn test_normalize_success() {
        let rates = normalize_response(
            quote(SPEEDFREIGHT_SUCCESS_CODE, vec![result("ODFL", "245.10"), result("RLCA", "260")]),
            "speedfreight",
            &WwexConfig::default(),
        )
        .unwrap();

        assert_eq!(rates.len(), 2);
        assert_eq!(rates[0].service.id, "ODFL");
        assert_eq!(rates[0].service.label, "Old Dominion");
        assert_eq!(rates[0].amount.number, Decimal::new(24510, 2));
        assert_eq!(rates[0].amount.currency_code, "USD");
        assert_eq!(rates[0].delivery_date, None);
        assert_eq!(rates[1].service.label, "R & L Carriers Inc");
    }

    #[test]
    fn test_success_code_differs_from_parcel() {
        // "0" is success for SpeedShip only.
        let rates = normalize_response(
            quote("0", vec![result("ODFL", "245.10")]),
            "speedfreight",
            &WwexConfig::default(),
        )
        .unwrap();
        assert!(rates.is_empty());
    }

    #[test]
    fn test_normalize_skips_unknown_and_disabled_carriers() {
        let config = WwexConfig {
            services: ["SAIA".to_string()].into_iter().collect(),
            ..WwexConfig::default()
        };
        let rates = normalize_response(
            quote(
                SPEEDFREIGHT_SUCCESS_CODE,
                vec![result("ODFL", "1"), result("ZZZZ", "2"), result("SAIA", "3")],
            ),
            "speedfreight",
            &config,
        )
        .unwrap();

        assert_eq!(rates.len(), 1);
        assert_eq!(rates[0].service.id, "SAIA");
    }

    #[test]
    fn test_normalize_rejects_bad_amount() {
        let err = normalize_response(
            quote(SPEEDFREIGHT_SUCCESS_CODE, vec![result("ODFL", "$245")]),
            "speedfreight",
            &WwexConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SpeedFreightError::ParseError(_)));
    }

    #[test]
    fn test_carrier_table_is_complete() {
        assert_eq!(SERVICES.len(), 15);
        assert!(SERVICES.iter().any(|service| service.code == "CNWY" && service.label == "XPO Logistics"));
    }
}
