// --- File: crates/wwex_speedship/src/service.rs ---
//! SpeedShip shipping method.
//!
//! This module provides an implementation of the ShippingMethod trait for
//! SpeedShip 2 parcel rating.

use tracing::{debug, error, info, warn};
use wwex_common::services::apply_rate_selection;
use wwex_common::{
    BoxFuture, PackageType, ServiceDefinition, Shipment, ShippingMethod, ShippingRate,
};
use wwex_config::WwexConfig;

use crate::client::{SoapSpeedShipClient, SpeedShipApi};
use crate::error::SpeedShipError;
use crate::logic::{self, SERVICES};
use crate::models::{GetUpsServiceDetails, UpsServiceDetailResponse};

pub struct SpeedShipMethod<A = SoapSpeedShipClient> {
    id: String,
    label: String,
    config: WwexConfig,
    default_package_type: PackageType,
    api: A,
}

impl SpeedShipMethod<SoapSpeedShipClient> {
    /// Creates a method talking to the configured SpeedShip endpoint.
    pub fn from_config(
        id: impl Into<String>,
        label: impl Into<String>,
        config: WwexConfig,
    ) -> Result<Self, SpeedShipError> {
        let api = SoapSpeedShipClient::from_config(&config)?;
        Self::new(id, label, config, api)
    }
}

impl<A: SpeedShipApi> SpeedShipMethod<A> {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        config: WwexConfig,
        api: A,
    ) -> Result<Self, SpeedShipError> {
        let default_package_type = PackageType::try_from(&config.default_package_type)?;
        if !config.is_configured() {
            warn!("SpeedShip is not fully configured; quotes will likely fail");
        }
        Ok(Self {
            id: id.into(),
            label: label.into(),
            config,
            default_package_type,
            api,
        })
    }

    pub fn config(&self) -> &WwexConfig {
        &self.config
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn default_package_type(&self) -> &PackageType {
        &self.default_package_type
    }

    // The shipment's own package type wins over the configured default.
    fn package_type_for<'s>(&'s self, shipment: &'s Shipment) -> &'s PackageType {
        shipment
            .package_type
            .as_ref()
            .unwrap_or(&self.default_package_type)
    }
}

impl<A: SpeedShipApi> ShippingMethod for SpeedShipMethod<A> {
    type Request = GetUpsServiceDetails;
    type Response = UpsServiceDetailResponse;
    type Error = SpeedShipError;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn services(&self) -> &'static [ServiceDefinition] {
        SERVICES
    }

    fn build_quote_request(&self, shipment: &Shipment) -> Result<Self::Request, Self::Error> {
        logic::build_ups_service_detail_request(shipment, self.package_type_for(shipment))
    }

    fn normalize_response(
        &self,
        response: Self::Response,
    ) -> Result<Vec<ShippingRate>, Self::Error> {
        logic::normalize_response(response, &self.id, &self.config)
    }

    fn calculate_rates<'a>(
        &'a self,
        shipment: &'a Shipment,
    ) -> BoxFuture<'a, Vec<ShippingRate>, Self::Error> {
        Box::pin(async move {
            if !shipment.has_shipping_address() {
                debug!(order_id = %shipment.order_id, "No shipping address; skipping SpeedShip quote");
                return Ok(Vec::new());
            }
            if shipment.items.is_empty() {
                debug!(order_id = %shipment.order_id, "No items; skipping SpeedShip quote");
                return Ok(Vec::new());
            }

            let request = self.build_quote_request(shipment)?;
            let response = match self.api.get_ups_service_details(&request).await {
                Ok(response) => response,
                Err(err) if err.is_fault() => {
                    warn!(order_id = %shipment.order_id, "SpeedShip rejected the quote: {}", err);
                    return Ok(Vec::new());
                }
                Err(err) => {
                    error!(order_id = %shipment.order_id, "SpeedShip quote failed: {}", err);
                    return Err(err);
                }
            };

            let rates = self.normalize_response(response)?;
            info!(order_id = %shipment.order_id, count = rates.len(), "SpeedShip rates calculated");
            Ok(rates)
        })
    }

    fn select_rate(&self, shipment: &mut Shipment, rate: &ShippingRate) -> Result<(), Self::Error> {
        if shipment.package_type.is_none() {
            shipment.package_type = Some(self.default_package_type.clone());
        }
        let packages = logic::build_shipment_packages(shipment, self.package_type_for(shipment))?;
        apply_rate_selection(shipment, rate);
        shipment.packages = packages;
        Ok(())
    }
}
