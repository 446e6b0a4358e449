// --- File: crates/wwex_speedfreight/src/logic.rs ---

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::{debug, warn};
use wwex_common::services::service_label;
use wwex_common::{Address, Price, Shipment, ServiceDefinition, ShippingRate, ShippingService};
use wwex_config::WwexConfig;

use crate::error::SpeedFreightError;
use crate::models::{
    CommodityDetails, FreightShipmentQuoteRequest, HandlingUnit, LineItem,
    QuoteSpeedFreightShipment, QuoteSpeedFreightShipmentReturn,
};

/// `responseStatusCode` of a successful SpeedFreight quote. Not the same as
/// SpeedShip's.
pub const SPEEDFREIGHT_SUCCESS_CODE: &str = "1";

/// LTL carriers quoted through SpeedFreight, keyed by SCAC.
pub static SERVICES: &[ServiceDefinition] = &[
    ServiceDefinition::new("CTII", "Central Transport"),
    ServiceDefinition::new("AACT", "AAA Cooper Transportation"),
    ServiceDefinition::new("SEFL", "Southeastern Freight Lines"),
    ServiceDefinition::new("RDFS", "Roadrunner Transportation Services"),
    ServiceDefinition::new("WARD", "Ward Trucking"),
    ServiceDefinition::new("CENF", "Central Freight Lines, Inc"),
    ServiceDefinition::new("FWDN", "Forward Air, Inc"),
    ServiceDefinition::new("HMES", "Holland"),
    ServiceDefinition::new("RLCA", "R & L Carriers Inc"),
    ServiceDefinition::new("UPGF", "UPS Freight"),
    ServiceDefinition::new("EXLA", "Estes Express Lines"),
    ServiceDefinition::new("CNWY", "XPO Logistics"),
    ServiceDefinition::new("ODFL", "Old Dominion"),
    ServiceDefinition::new("RDWY", "YRC"),
    ServiceDefinition::new("SAIA", "SAIA"),
];

/// The commodity quoted for every shipment: one 30 x 30 x 5 pallet holding an
/// 80 lb class 85 line item. Shipment items are not inspected.
pub fn standard_pallet() -> CommodityDetails {
    CommodityDetails {
        handling_units: vec![HandlingUnit {
            kind: "Pallet".to_string(),
            count: "1".to_string(),
            height: "5".to_string(),
            length: "30".to_string(),
            width: "30".to_string(),
            line_items: vec![LineItem {
                class: "85".to_string(),
                weight: "80".to_string(),
                description: "Pallet of stuff".to_string(),
                nmfc: None,
                piece_type: "Pallet".to_string(),
                pieces: "1".to_string(),
                hazmat: "N".to_string(),
            }],
        }],
    }
}

/// Shipper is the store, receiver is the shipment's shipping address.
///
/// State and zip are required by the carrier but not checked here.
pub fn build_freight_shipment_quote_request(shipment: &Shipment) -> QuoteSpeedFreightShipment {
    let empty = Address::default();
    let sender = &shipment.store_address;
    let receiver = shipment.shipping_address.as_ref().unwrap_or(&empty);

    QuoteSpeedFreightShipment {
        request: FreightShipmentQuoteRequest {
            sender_city: sender.locality.clone(),
            sender_state: sender.administrative_area.clone(),
            sender_zip: sender.postal_code.clone(),
            receiver_city: receiver.locality.clone(),
            receiver_state: receiver.administrative_area.clone(),
            receiver_zip: receiver.postal_code.clone(),
            commodity_details: standard_pallet(),
        },
    }
}

/// Turns a SpeedFreight answer into rates, one per quoting carrier.
pub fn normalize_response(
    response: QuoteSpeedFreightShipmentReturn,
    shipping_method_id: &str,
    config: &WwexConfig,
) -> Result<Vec<ShippingRate>, SpeedFreightError> {
    if response.response_status_code != SPEEDFREIGHT_SUCCESS_CODE {
        warn!(
            status = %response.response_status_code,
            description = response.response_status_description.as_deref().unwrap_or(""),
            "SpeedFreight quote was not successful"
        );
        return Ok(Vec::new());
    }

    let mut rates = Vec::with_capacity(response.results.len());
    for result in &response.results {
        let scac = result.carrier_scac.as_str();
        let Some(label) = service_label(SERVICES, scac) else {
            debug!(scac, "Skipping unknown SpeedFreight carrier");
            continue;
        };
        if !config.is_service_enabled(scac) {
            debug!(scac, "Skipping disabled SpeedFreight carrier");
            continue;
        }

        let total = result.total_price.trim();
        let number = Decimal::from_str(total).map_err(|err| {
            SpeedFreightError::ParseError(format!("invalid total price '{}' for {}: {}", total, scac, err))
        })?;

        rates.push(ShippingRate {
            shipping_method_id: shipping_method_id.to_string(),
            service: ShippingService {
                id: scac.to_string(),
                label: label.to_string(),
            },
            amount: Price::usd(number),
            delivery_date: None,
        });
    }
    Ok(rates)
}
