// --- File: crates/wwex_speedship/src/client.rs ---
//! SpeedShip SOAP transport.

use reqwest::Client;
use tracing::{error, info, warn};
use wwex_common::http::client::post_soap;
use wwex_common::soap::{parse_envelope_body, SoapEnvelope};
use wwex_common::{AuthenticationDetail, AuthenticationToken, BoxFuture, RetryPolicy, HTTP_CLIENT};
use wwex_config::{Mode, WwexConfig};

use crate::error::SpeedShipError;
use crate::models::{GetUpsServiceDetails, UpsServiceDetailResponse};

/// Service namespace used unless the endpoint configuration overrides it.
pub const DEFAULT_NAMESPACE: &str = "http://www.wwexship.com";

pub const SOAP_ACTION: &str = "getUPSServiceDetails";

/// The SpeedShip operations used for rating.
pub trait SpeedShipApi: Send + Sync {
    fn get_ups_service_details<'a>(
        &'a self,
        request: &'a GetUpsServiceDetails,
    ) -> BoxFuture<'a, UpsServiceDetailResponse, SpeedShipError>;
}

/// Authenticated SOAP client for one mode.
#[derive(Debug, Clone)]
pub struct SoapSpeedShipClient {
    http: Client,
    url: String,
    namespace: String,
    mode: Mode,
    auth: AuthenticationDetail,
    retry: RetryPolicy,
}

impl SoapSpeedShipClient {
    /// Builds a client for the configured mode and credentials.
    pub fn from_config(config: &WwexConfig) -> Result<Self, SpeedShipError> {
        let endpoints = config.endpoints.as_ref().ok_or_else(|| {
            SpeedShipError::ConfigError("no SpeedShip endpoints configured".to_string())
        })?;
        let mode = config.mode();
        let url = endpoints.url_for(mode).trim();
        if url.is_empty() {
            return Err(SpeedShipError::ConfigError(format!(
                "no SpeedShip endpoint for {} mode",
                mode
            )));
        }
        if !config.is_configured() {
            warn!("SpeedShip credentials are incomplete; requests will likely be rejected");
        }

        Ok(Self {
            http: HTTP_CLIENT.clone(),
            url: url.to_string(),
            namespace: endpoints
                .namespace
                .clone()
                .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
            mode,
            auth: AuthenticationDetail {
                authentication_token: AuthenticationToken::from_api_information(
                    &config.api_information,
                ),
            },
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

    pub fn envelope(&self, request: &GetUpsServiceDetails) -> Result<String, SpeedShipError> {
        let envelope = SoapEnvelope {
            namespace: &self.namespace,
            header: Some(&self.auth),
            body: request,
        };
        Ok(envelope.to_xml()?)
    }
}

impl SpeedShipApi for SoapSpeedShipClient {
    fn get_ups_service_details<'a>(
        &'a self,
        request: &'a GetUpsServiceDetails,
    ) -> BoxFuture<'a, UpsServiceDetailResponse, SpeedShipError> {
        Box::pin(async move {
            let envelope = self.envelope(request)?;
            info!(mode = %self.mode, packages = request.request.packages.len(), "Requesting SpeedShip rates");

            let (status, body) = self
                .retry
                .run(|| post_soap(&self.http, &self.url, SOAP_ACTION, envelope.clone()))
                .await?;

            // Faults come back as HTTP 500 with a readable envelope.
            let content = match parse_envelope_body(&body) {
                Err(err) if err.is_fault() => return Err(err.into()),
                _ if !status.is_success() => {
                    error!(%status, "SpeedShip returned an HTTP error");
                    return Err(SpeedShipError::HttpStatus {
                        status: status.as_u16(),
                    });
                }
                result => result?,
            };

            Ok(UpsServiceDetailResponse::from_xml(&content)?)
        })
    }
}
