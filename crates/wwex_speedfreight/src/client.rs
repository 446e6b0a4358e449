// --- File: crates/wwex_speedfreight/src/client.rs ---
//! SpeedFreight SOAP transport.

use reqwest::Client;
use tracing::{error, info, warn};
use wwex_common::http::client::post_soap;
use wwex_common::soap::{parse_envelope_body, SoapEnvelope};
use wwex_common::{AuthenticationToken, BoxFuture, RetryPolicy, HTTP_CLIENT};
use wwex_config::{Mode, WwexConfig};

use crate::error::SpeedFreightError;
use crate::models::{QuoteSpeedFreightShipment, QuoteSpeedFreightShipmentReturn};

/// Service namespace used unless the endpoint configuration overrides it.
pub const DEFAULT_NAMESPACE: &str = "http://www.wwexship.com";

pub const SOAP_ACTION: &str = "quoteSpeedFreightShipment";

pub trait SpeedFreightApi: Send + Sync {
    fn quote_speed_freight_shipment<'a>(
        &'a self,
        request: &'a QuoteSpeedFreightShipment,
    ) -> BoxFuture<'a, QuoteSpeedFreightShipmentReturn, SpeedFreightError>;
}

/// Authenticated SOAP client for one mode. The token goes straight into the
/// SOAP header.
#[derive(Debug, Clone)]
pub struct SoapSpeedFreightClient {
    http: Client,
    url: String,
    namespace: String,
    mode: Mode,
    token: AuthenticationToken,
    retry: RetryPolicy,
}

impl SoapSpeedFreightClient {
    pub fn from_config(config: &WwexConfig) -> Result<Self, SpeedFreightError> {
        let endpoints = config.endpoints.as_ref().ok_or_else(|| {
            SpeedFreightError::ConfigError("no SpeedFreight endpoints configured".to_string())
        })?;
        let mode = config.mode();
        let url = endpoints.url_for(mode).trim();
        if url.is_empty() {
            return Err(SpeedFreightError::ConfigError(format!(
                "no SpeedFreight endpoint for {} mode",
                mode
            )));
        }
        if !config.is_configured() {
            warn!("SpeedFreight credentials are incomplete; requests will likely be rejected");
        }

        Ok(Self {
            http: HTTP_CLIENT.clone(),
            url: url.to_string(),
            namespace: endpoints
                .namespace
                .clone()
                .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
            mode,
            token: AuthenticationToken::from_api_information(&config.api_information),
            retry: RetryPolicy::from(&config.retry),
        })
    }

    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn envelope(&self, request: &QuoteSpeedFreightShipment) -> Result<String, SpeedFreightError> {
        let envelope = SoapEnvelope {
            namespace: &self.namespace,
            header: Some(&self.token),
            body: request,
        };
        Ok(envelope.to_xml()?)
    }
}

impl SpeedFreightApi for SoapSpeedFreightClient {
    fn quote_speed_freight_shipment<'a>(
        &'a self,
        request: &'a QuoteSpeedFreightShipment,
    ) -> BoxFuture<'a, QuoteSpeedFreightShipmentReturn, SpeedFreightError> {
        Box::pin(async move {
            let envelope = self.envelope(request)?;
            info!(mode = %self.mode, "Requesting SpeedFreight quotes");

            let (status, body) = self
                .retry
                .run(|| post_soap(&self.http, &self.url, SOAP_ACTION, envelope.clone()))
                .await?;

            let content = match parse_envelope_body(&body) {
                Err(err) if err.is_fault() => return Err(err.into()),
                _ if !status.is_success() => {
                    error!(%status, "SpeedFreight returned an HTTP error");
                    return Err(SpeedFreightError::HttpStatus {
                        status: status.as_u16(),
                    });
                }
                result => result?,
            };

            Ok(QuoteSpeedFreightShipmentReturn::from_xml(&content)?)
        })
    }
}
