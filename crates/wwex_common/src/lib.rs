// --- File: crates/wwex_common/src/lib.rs ---

// Declare modules within this crate
pub mod auth;     // SOAP authentication headers
pub mod error;    // Error handling
pub mod http;     // HTTP utilities
pub mod logging;  // Logging utilities
pub mod models;   // Commerce data structures
pub mod retry;    // Bounded retry around a single call
pub mod services; // Shipping method abstraction
pub mod soap;     // SOAP envelopes and XML trees
pub mod units;    // Measurements and unit conversion

#[cfg(test)]
mod units_proptest;

pub use auth::{AuthenticationDetail, AuthenticationToken};

// Re-export the common error type
pub use error::WwexError;

// Re-export HTTP utilities for easier access
pub use http::client::{create_client, post_soap, HTTP_CLIENT};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level, log_result};

pub use models::{
    Address, DeliveryDate, Dimensions, PackageLine, PackageType, Price, ProductDimensions,
    PurchasedEntity, Shipment, ShipmentItem, ShippingRate, ShippingService,
};
pub use retry::RetryPolicy;
pub use services::{apply_rate_selection, service_label, BoxFuture, ServiceDefinition, ShippingMethod};
pub use soap::{parse_envelope_body, SoapEnvelope, SoapError, WriteXml, XmlNode, XmlWriter};
pub use units::{ensure_unit_of_measure, Measurement, Unit, UnitError, UnitKind};

// This crate provides functionality shared by the SpeedShip and SpeedFreight
// shipping methods: the commerce model they read, unit normalization, the
// SOAP/HTTP plumbing and the common error type.
