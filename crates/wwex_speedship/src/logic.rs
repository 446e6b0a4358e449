// --- File: crates/wwex_speedship/src/logic.rs ---

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::{debug, warn};
use wwex_common::services::service_label;
use wwex_common::{
    ensure_unit_of_measure, Address, DeliveryDate, PackageLine, PackageType, Price, Shipment,
    ServiceDefinition, ShippingRate, ShippingService, Unit,
};
use wwex_config::WwexConfig;

use crate::error::SpeedShipError;
use crate::models::{
    GetUpsServiceDetails, RateServiceOptions, ShipmentPackage, SimpleShipmentAddress,
    UpsServiceDetailRequest, UpsServiceDetailResponse,
};

/// `responseStatusCode` of a successful SpeedShip quote.
pub const SPEEDSHIP_SUCCESS_CODE: &str = "0";

/// UPS "customer supplied package".
pub const PACKAGING_TYPE: &str = "00";

const NOT_RESIDENTIAL: &str = "N";
const NO: &str = "N";
const BILL_SHIPPER: &str = "S";

// Default estimate format, e.g. "08:30 AM Friday 01/01/21".
const DELIVERY_DATE_TIME_FORMAT: &str = "%I:%M %p %A %m/%d/%y";
// Ground estimates, e.g. "End of Day Friday 01/01/21", once the prefix is removed.
const DELIVERY_DATE_FORMAT: &str = "%A %m/%d/%y";
const END_OF_DAY: &str = "End of Day";

/// UPS services quoted through SpeedShip.
pub static SERVICES: &[ServiceDefinition] = &[
    ServiceDefinition::new("1DA", "UPS Next Day Air"),
    ServiceDefinition::new("1DAS", "UPS Next Day Air Saturday"),
    ServiceDefinition::new("1DM", "UPS Next Day Air Early"),
    ServiceDefinition::new("1DMS", "UPS Next Day Air Early Saturday"),
    ServiceDefinition::new("1DP", "UPS Next Day Air Saver"),
    ServiceDefinition::new("2DA", "UPS Second Day Air"),
    ServiceDefinition::new("2DAS", "UPS Second Day Air Saturday"),
    ServiceDefinition::new("2DM", "UPS Second Day Air AM"),
    ServiceDefinition::new("GND", "UPS Ground"),
    ServiceDefinition::new("3DS", "UPS Three-Day Select"),
];

// --- Packages ---

/// Builds one package per shipment item.
///
/// Item weights arrive multiplied by quantity and are divided back out.
/// Dimensions come from the purchased entity when all three are known,
/// otherwise all three come from `package_type`.
pub fn build_shipment_packages(
    shipment: &Shipment,
    package_type: &PackageType,
) -> Result<Vec<PackageLine>, SpeedShipError> {
    shipment
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if item.quantity == 0 {
                return Err(SpeedShipError::InvalidQuantity {
                    order_item_id: item.order_item_id.clone(),
                });
            }
            let weight = ensure_unit_of_measure(item.weight, Unit::Pound)?
                .divide(f64::from(item.quantity));

            let dimensions = item
                .purchased_entity
                .as_ref()
                .and_then(|entity| entity.dimensions)
                .and_then(|dimensions| dimensions.complete())
                .unwrap_or(package_type.dimensions);

            Ok(PackageLine {
                sequence: index as u32 + 1,
                length: ensure_unit_of_measure(dimensions.length, Unit::Inch)?,
                width: ensure_unit_of_measure(dimensions.width, Unit::Inch)?,
                height: ensure_unit_of_measure(dimensions.height, Unit::Inch)?,
                weight,
                packaging_type: PACKAGING_TYPE.to_string(),
            })
        })
        .collect()
}

pub fn to_shipment_package(line: &PackageLine) -> ShipmentPackage {
    ShipmentPackage {
        height: line.height.number,
        length: line.length.number,
        width: line.width.number,
        weight: line.weight.number,
        sequence: line.sequence.to_string(),
        packaging_type: line.packaging_type.clone(),
    }
}

// --- Request ---

pub fn shipment_address(address: &Address) -> SimpleShipmentAddress {
    SimpleShipmentAddress {
        city: address.locality.clone(),
        country_code: address.country_code.clone(),
        zip_code: address.postal_code.clone(),
        residential: NOT_RESIDENTIAL.to_string(),
        state_province: address.administrative_area.clone(),
    }
}

/// No optional services, billed to the shipper.
pub fn rate_service_options() -> RateServiceOptions {
    RateServiceOptions {
        rate_type: None,
        saturday_delivery: NO.to_string(),
        cod: NO.to_string(),
        declared_value: NO.to_string(),
        delivery_confirmation: NO.to_string(),
        additional_handling: NO.to_string(),
        large_package: NO.to_string(),
        return_service: NO.to_string(),
        billing_option: BILL_SHIPPER.to_string(),
    }
}

/// Shipper is the store, receiver is the shipment's shipping address.
pub fn build_ups_service_detail_request(
    shipment: &Shipment,
    package_type: &PackageType,
) -> Result<GetUpsServiceDetails, SpeedShipError> {
    let receiver = shipment
        .shipping_address
        .as_ref()
        .map(shipment_address)
        .unwrap_or_else(|| shipment_address(&Address::default()));

    let packages = build_shipment_packages(shipment, package_type)?
        .iter()
        .map(to_shipment_package)
        .collect();

    Ok(GetUpsServiceDetails {
        request: UpsServiceDetailRequest {
            rate_service_options: rate_service_options(),
            sender: shipment_address(&shipment.store_address),
            receiver,
            packages,
        },
    })
}

// --- Response ---

pub fn parse_delivery_date(value: &str) -> Result<DeliveryDate, SpeedShipError> {
    let value = value.trim();
    if value.contains(END_OF_DAY) {
        let date = value.replace(END_OF_DAY, "");
        return NaiveDate::parse_from_str(date.trim(), DELIVERY_DATE_FORMAT)
            .map(DeliveryDate::Date)
            .map_err(|_| SpeedShipError::DeliveryDateParse(value.to_string()));
    }
    NaiveDateTime::parse_from_str(value, DELIVERY_DATE_TIME_FORMAT)
        .map(DeliveryDate::DateTime)
        .map_err(|_| SpeedShipError::DeliveryDateParse(value.to_string()))
}

/// Turns a SpeedShip answer into rates.
///
/// A failure status yields no rates. Unknown or disabled service codes are
/// skipped.
pub fn normalize_response(
    response: UpsServiceDetailResponse,
    shipping_method_id: &str,
    config: &WwexConfig,
) -> Result<Vec<ShippingRate>, SpeedShipError> {
    let status = &response.service_response;
    if status.response_status_code != SPEEDSHIP_SUCCESS_CODE {
        warn!(
            status = %status.response_status_code,
            description = status.response_status_description.as_deref().unwrap_or(""),
            "SpeedShip quote was not successful"
        );
        return Ok(Vec::new());
    }

    let mut rates = Vec::with_capacity(response.service_details.len());
    for detail in response.service_details {
        let code = detail.service_code.as_str();
        let Some(label) = service_label(SERVICES, code) else {
            debug!(service_code = code, "Skipping unknown SpeedShip service");
            continue;
        };
        if !config.is_service_enabled(code) {
            debug!(service_code = code, "Skipping disabled SpeedShip service");
            continue;
        }

        let total = detail.service_fee_grand_total.trim();
        let number = Decimal::from_str(total).map_err(|err| {
            SpeedShipError::ParseError(format!("invalid grand total '{}' for {}: {}", total, code, err))
        })?;
        let delivery_date = detail
            .estimate_delivery
            .as_deref()
            .map(parse_delivery_date)
            .transpose()?;

        rates.push(ShippingRate {
            shipping_method_id: shipping_method_id.to_string(),
            service: ShippingService {
                id: code.to_string(),
                label: label.to_string(),
            },
            amount: Price::usd(number),
            delivery_date,
        });
    }
    Ok(rates)
}
