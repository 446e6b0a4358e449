// --- File: crates/wwex_speedship/src/fixtures.rs ---
// Shared shipment and response builders for unit tests.

use wwex_common::{
    Address, Dimensions, Measurement, PackageType, ProductDimensions, PurchasedEntity, Shipment,
    ShipmentItem, Unit,
};
use wwex_config::{ApiInformation, WwexConfig};

use crate::models::{ServiceResponse, UpsServiceDetail, UpsServiceDetailResponse};

pub fn store_address() -> Address {
    Address {
        country_code: "US".to_string(),
        administrative_area: "IL".to_string(),
        locality: "Chicago".to_string(),
        postal_code: "60601".to_string(),
        address_line1: "1 Store Plaza".to_string(),
        ..Address::default()
    }
}

pub fn recipient_address() -> Address {
    Address {
        country_code: "US".to_string(),
        administrative_area: "TX".to_string(),
        locality: "Austin".to_string(),
        postal_code: "78701".to_string(),
        ..Address::default()
    }
}

pub fn box_package_type() -> PackageType {
    PackageType {
        id: "box".to_string(),
        label: "Box".to_string(),
        dimensions: Dimensions {
            length: Measurement::new(10.0, Unit::Inch),
            width: Measurement::new(8.0, Unit::Inch),
            height: Measurement::new(6.0, Unit::Inch),
        },
        weight: Measurement::new(0.0, Unit::Pound),
    }
}

pub fn item(id: &str, quantity: u32, weight: Measurement) -> ShipmentItem {
    ShipmentItem {
        order_item_id: id.to_string(),
        title: format!("Item {}", id),
        quantity,
        weight,
        purchased_entity: None,
    }
}

pub fn item_with_dimensions(
    id: &str,
    quantity: u32,
    weight: Measurement,
    dimensions: ProductDimensions,
) -> ShipmentItem {
    ShipmentItem {
        purchased_entity: Some(PurchasedEntity {
            id: format!("variation-{}", id),
            dimensions: Some(dimensions),
        }),
        ..item(id, quantity, weight)
    }
}

pub fn shipment(items: Vec<ShipmentItem>) -> Shipment {
    let mut shipment = Shipment::new("1001", store_address());
    shipment.shipping_address = Some(recipient_address());
    shipment.items = items;
    shipment
}

pub fn config() -> WwexConfig {
    WwexConfig {
        api_information: ApiInformation {
            user_name: "shipper".to_string(),
            password: "secret".to_string(),
            auth_key: "LICENSE".to_string(),
            account_number: "W0001".to_string(),
            mode: "test".to_string(),
        },
        ..WwexConfig::default()
    }
}

pub fn detail(code: &str, total: &str, estimate: Option<&str>) -> UpsServiceDetail {
    UpsServiceDetail {
        service_code: code.to_string(),
        service_fee_grand_total: total.to_string(),
        estimate_delivery: estimate.map(str::to_string),
    }
}

pub fn response(status: &str, details: Vec<UpsServiceDetail>) -> UpsServiceDetailResponse {
    UpsServiceDetailResponse {
        service_response: ServiceResponse {
            response_status_code: status.to_string(),
            response_status_description: None,
        },
        service_details: details,
    }
}
