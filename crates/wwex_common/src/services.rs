// --- File: crates/wwex_common/src/services.rs ---
//! Shipping method abstraction.
//!
//! Both WWEX carriers implement [`ShippingMethod`]. Rating is split into two
//! phases: quoting reads the shipment and returns rates, selecting a rate
//! writes the choice (and, for carriers that need it, the packages) back.

use std::future::Future;
use std::pin::Pin;

use crate::error::WwexError;
use crate::logging::log_result;
use crate::models::{Price, Shipment, ShippingRate};

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A carrier service code and the label shown to customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDefinition {
    pub code: &'static str,
    pub label: &'static str,
}

impl ServiceDefinition {
    pub const fn new(code: &'static str, label: &'static str) -> Self {
        Self { code, label }
    }
}

/// Looks up the label of `code` in a carrier's service table.
pub fn service_label(table: &[ServiceDefinition], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|service| service.code == code)
        .map(|service| service.label)
}

/// A trait for carrier shipping methods.
pub trait ShippingMethod: Send + Sync {
    /// Outbound quote request understood by the carrier.
    type Request;
    /// Carrier answer to a quote request.
    type Response;
    /// Error type returned by shipping method operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Identifier of the configured shipping method; copied onto every rate.
    fn id(&self) -> &str;

    /// Human readable name of the method.
    fn label(&self) -> &str;

    /// Service codes this method can return, with their labels.
    fn services(&self) -> &'static [ServiceDefinition];

    /// Builds the carrier request for a shipment.
    fn build_quote_request(&self, shipment: &Shipment) -> Result<Self::Request, Self::Error>;

    /// Turns a carrier response into rates. A failure status yields no rates.
    fn normalize_response(&self, response: Self::Response)
        -> Result<Vec<ShippingRate>, Self::Error>;

    /// Quote phase: computes rates without touching the shipment.
    fn calculate_rates<'a>(
        &'a self,
        shipment: &'a Shipment,
    ) -> BoxFuture<'a, Vec<ShippingRate>, Self::Error>;

    /// Commit phase: records `rate` on the shipment.
    fn select_rate(&self, shipment: &mut Shipment, rate: &ShippingRate)
        -> Result<(), Self::Error>;

    /// Quote phase with carrier errors converted to [`WwexError`], so callers
    /// holding several carriers handle a single error type.
    fn quote<'a>(&'a self, shipment: &'a Shipment) -> BoxFuture<'a, Vec<ShippingRate>, WwexError>
    where
        Self::Error: Into<WwexError>,
    {
        Box::pin(async move {
            let result = self.calculate_rates(shipment).await.map_err(Into::into);
            log_result(result, "Quote completed", self.label())
        })
    }
}

/// Copies the selected rate onto the shipment.
pub fn apply_rate_selection(shipment: &mut Shipment, rate: &ShippingRate) {
    shipment.shipping_method_id = Some(rate.shipping_method_id.clone());
    shipment.shipping_service = Some(rate.service.id.clone());
    shipment.amount = Some(Price::new(
        rate.amount.number,
        rate.amount.currency_code.clone(),
    ));
}
