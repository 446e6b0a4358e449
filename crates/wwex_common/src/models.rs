// --- File: crates/wwex_common/src/models.rs ---
//! Commerce data the shipping methods read and produce.
//!
//! Shipments, addresses and package types belong to the host store; the
//! shipping methods only read them, except for the commit phase of rate
//! selection which records the chosen rate and its packages.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use wwex_config::PackageTypeConfig;

use crate::units::{Measurement, UnitError};

/// Currency of every WWEX quote.
pub const USD: &str = "USD";

// --- Address ---
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub administrative_area: String, // State / province
    #[serde(default)]
    pub locality: String, // City
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: String,
    #[serde(default)]
    pub organization: String,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        [
            &self.country_code,
            &self.administrative_area,
            &self.locality,
            &self.postal_code,
            &self.address_line1,
            &self.address_line2,
            &self.organization,
        ]
        .iter()
        .all(|value| value.trim().is_empty())
    }
}

// --- Dimensions ---
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: Measurement,
    pub width: Measurement,
    pub height: Measurement,
}

/// Dimensions field of a purchasable product. Any axis may be unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDimensions {
    #[serde(default)]
    pub length: Option<Measurement>,
    #[serde(default)]
    pub width: Option<Measurement>,
    #[serde(default)]
    pub height: Option<Measurement>,
}

impl ProductDimensions {
    /// All three axes, or `None` when any one is missing.
    pub fn complete(&self) -> Option<Dimensions> {
        Some(Dimensions {
            length: self.length?,
            width: self.width?,
            height: self.height?,
        })
    }
}

// --- Package type ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageType {
    pub id: String,
    pub label: String,
    pub dimensions: Dimensions,
    pub weight: Measurement,
}

impl TryFrom<&PackageTypeConfig> for PackageType {
    type Error = UnitError;

    fn try_from(config: &PackageTypeConfig) -> Result<Self, Self::Error> {
        let dimension_unit = config.dimension_unit.parse()?;
        let weight_unit = config.weight_unit.parse()?;
        Ok(PackageType {
            id: config.id.clone(),
            label: config.label.clone(),
            dimensions: Dimensions {
                length: Measurement::new(config.length, dimension_unit),
                width: Measurement::new(config.width, dimension_unit),
                height: Measurement::new(config.height, dimension_unit),
            },
            weight: Measurement::new(config.weight, weight_unit),
        })
    }
}

// --- Shipment items ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchasedEntity {
    pub id: String,
    #[serde(default)]
    pub dimensions: Option<ProductDimensions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentItem {
    pub order_item_id: String,
    pub title: String,
    pub quantity: u32,
    /// Total weight of the item, already multiplied by the quantity.
    pub weight: Measurement,
    #[serde(default)]
    pub purchased_entity: Option<PurchasedEntity>,
}

/// One package as sent to the carrier: dimensions in inches, per-unit weight
/// in pounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageLine {
    pub sequence: u32, // 1-based
    pub length: Measurement,
    pub width: Measurement,
    pub height: Measurement,
    pub weight: Measurement,
    pub packaging_type: String,
}

// --- Shipment ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    #[serde(default)]
    pub id: Option<String>,
    pub order_id: String,
    /// Address from the shipping profile. `None` or empty means nothing to quote.
    #[serde(default)]
    pub shipping_address: Option<Address>,
    /// Address of the store the order was placed in.
    pub store_address: Address,
    #[serde(default)]
    pub package_type: Option<PackageType>,
    #[serde(default)]
    pub items: Vec<ShipmentItem>,

    // --- Set when a rate is selected ---
    #[serde(default)]
    pub packages: Vec<PackageLine>,
    #[serde(default)]
    pub shipping_method_id: Option<String>,
    #[serde(default)]
    pub shipping_service: Option<String>,
    #[serde(default)]
    pub amount: Option<Price>,
}

impl Shipment {
    pub fn new(order_id: impl Into<String>, store_address: Address) -> Self {
        Self {
            id: None,
            order_id: order_id.into(),
            shipping_address: None,
            store_address,
            package_type: None,
            items: Vec::new(),
            packages: Vec::new(),
            shipping_method_id: None,
            shipping_service: None,
            amount: None,
        }
    }

    /// The non-empty shipping address, if any.
    pub fn recipient_address(&self) -> Option<&Address> {
        self.shipping_address
            .as_ref()
            .filter(|address| !address.is_empty())
    }

    pub fn has_shipping_address(&self) -> bool {
        self.recipient_address().is_some()
    }
}

// --- Rates ---
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    #[serde(with = "rust_decimal::serde::str")]
    pub number: Decimal,
    pub currency_code: String,
}

impl Price {
    pub fn new(number: Decimal, currency_code: impl Into<String>) -> Self {
        Self {
            number,
            currency_code: currency_code.into(),
        }
    }

    pub fn usd(number: Decimal) -> Self {
        Self::new(number, USD)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingService {
    pub id: String,
    pub label: String,
}

/// Estimated delivery. Ground estimates carry no time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum DeliveryDate {
    DateTime(NaiveDateTime),
    Date(NaiveDate),
}

impl DeliveryDate {
    pub fn date(&self) -> NaiveDate {
        match self {
            DeliveryDate::DateTime(value) => value.date(),
            DeliveryDate::Date(value) => *value,
        }
    }

    pub fn time(&self) -> Option<NaiveTime> {
        match self {
            DeliveryDate::DateTime(value) => Some(value.time()),
            DeliveryDate::Date(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingRate {
    pub shipping_method_id: String,
    pub service: ShippingService,
    pub amount: Price,
    #[serde(default)]
    pub delivery_date: Option<DeliveryDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Unit;

    #[test]
    fn test_empty_address() {
        assert!(Address::default().is_empty());
        let address = Address {
            postal_code: "60601".to_string(),
            ..Address::default()
        };
        assert!(!address.is_empty());
    }

    #[test]
    fn test_recipient_address_ignores_empty_profile() {
        let mut shipment = Shipment::new("1", Address::default());
        assert!(!shipment.has_shipping_address());

        shipment.shipping_address = Some(Address::default());
        assert!(!shipment.has_shipping_address());

        shipment.shipping_address = Some(Address {
            locality: "Chicago".to_string(),
            ..Address::default()
        });
        assert!(shipment.has_shipping_address());
    }

    #[test]
    fn test_product_dimensions_complete_only_with_all_axes() {
        let axis = Measurement::new(10.0, Unit::Centimeter);
        let partial = ProductDimensions {
            length: Some(axis),
            width: Some(axis),
            height: None,
        };
        assert!(partial.complete().is_none());

        let full = ProductDimensions {
            height: Some(axis),
            ..partial
        };
        assert_eq!(full.complete().unwrap().height, axis);
    }

    #[test]
    fn test_package_type_from_config() {
        let config = PackageTypeConfig {
            id: "box".to_string(),
            label: "Box".to_string(),
            length: 30.0,
            width: 20.0,
            height: 10.0,
            dimension_unit: "cm".to_string(),
            weight: 0.5,
            weight_unit: "kg".to_string(),
        };
        let package_type = PackageType::try_from(&config).unwrap();
        assert_eq!(package_type.dimensions.length, Measurement::new(30.0, Unit::Centimeter));
        assert_eq!(package_type.weight, Measurement::new(0.5, Unit::Kilogram));

        let bad = PackageTypeConfig {
            dimension_unit: "cubit".to_string(),
            ..config
        };
        assert!(PackageType::try_from(&bad).is_err());
    }

    #[test]
    fn test_delivery_date_accessors() {
        let date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        let with_time = DeliveryDate::DateTime(date.and_hms_opt(8, 30, 0).unwrap());
        assert_eq!(with_time.date(), date);
        assert_eq!(with_time.time(), NaiveTime::from_hms_opt(8, 30, 0));
        assert_eq!(DeliveryDate::Date(date).time(), None);
    }

    #[test]
    fn test_price_serializes_number_as_string() {
        let price = Price::usd(Decimal::new(1234, 2));
        let json = serde_json::to_value(&price).unwrap();
        assert_eq!(json["number"], "12.34");
        assert_eq!(json["currency_code"], "USD");
    }
}
