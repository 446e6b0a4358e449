// --- File: crates/wwex_speedfreight/src/service.rs ---
//! SpeedFreight shipping method.

use tracing::{debug, error, info, warn};
use wwex_common::services::apply_rate_selection;
use wwex_common::{
    BoxFuture, PackageType, ServiceDefinition, Shipment, ShippingMethod, ShippingRate,
};
use wwex_config::WwexConfig;

use crate::client::{SoapSpeedFreightClient, SpeedFreightApi};
use crate::error::SpeedFreightError;
use crate::logic::{self, SERVICES};
use crate::models::{QuoteSpeedFreightShipment, QuoteSpeedFreightShipmentReturn};

pub struct SpeedFreightMethod<A = SoapSpeedFreightClient> {
    id: String,
    label: String,
    config: WwexConfig,
    default_package_type: PackageType,
    api: A,
}

impl SpeedFreightMethod<SoapSpeedFreightClient> {
    pub fn from_config(
        id: impl Into<String>,
        label: impl Into<String>,
        config: WwexConfig,
    ) -> Result<Self, SpeedFreightError> {
        let api = SoapSpeedFreightClient::from_config(&config)?;
        Self::new(id, label, config, api)
    }
}

impl<A: SpeedFreightApi> SpeedFreightMethod<A> {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        config: WwexConfig,
        api: A,
    ) -> Result<Self, SpeedFreightError> {
        let default_package_type = PackageType::try_from(&config.default_package_type)?;
        if !config.is_configured() {
            warn!("SpeedFreight is not fully configured; quotes will likely fail");
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
}

impl<A: SpeedFreightApi> ShippingMethod for SpeedFreightMethod<A> {
    type Request = QuoteSpeedFreightShipment;
    type Response = QuoteSpeedFreightShipmentReturn;
    type Error = SpeedFreightError;

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
        Ok(logic::build_freight_shipment_quote_request(shipment))
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
                debug!(order_id = %shipment.order_id, "No shipping address; skipping SpeedFreight quote");
                return Ok(Vec::new());
            }
            if shipment.items.is_empty() {
                debug!(order_id = %shipment.order_id, "No items; skipping SpeedFreight quote");
                return Ok(Vec::new());
            }

            let request = self.build_quote_request(shipment)?;
            let response = match self.api.quote_speed_freight_shipment(&request).await {
                Ok(response) => response,
                Err(err) if err.is_fault() => {
                    warn!(order_id = %shipment.order_id, "SpeedFreight rejected the quote: {}", err);
                    return Ok(Vec::new());
                }
                Err(err) => {
                    error!(order_id = %shipment.order_id, "SpeedFreight quote failed: {}", err);
                    return Err(err);
                }
            };

            let rates = self.normalize_response(response)?;
            info!(order_id = %shipment.order_id, count = rates.len(), "SpeedFreight rates calculated");
            Ok(rates)
        })
    }

    /// Records the selection. Freight quotes use a fixed pallet, so no
    /// packages are stored.
    fn select_rate(&self, shipment: &mut Shipment, rate: &ShippingRate) -> Result<(), Self::Error> {
        if shipment.package_type.is_none() {
            shipment.package_type = Some(self.default_package_type.clone());
        }
        apply_rate_selection(shipment, rate);
        Ok(())
    }
}
