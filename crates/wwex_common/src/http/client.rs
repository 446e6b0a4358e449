// --- File: crates/wwex_common/src/http/client.rs ---
use once_cell::sync::Lazy;
use reqwest::{header, Client, Error as ReqwestError, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

use super::SOAP_CONTENT_TYPE;

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A static HTTP client shared by both carriers.
/// Configured with the default timeout; falls back to reqwest defaults if the
/// builder cannot be initialized.
pub static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    create_client(DEFAULT_TIMEOUT_SECS, true).unwrap_or_else(|err| {
        warn!("Failed to build configured HTTP client, using defaults: {}", err);
        Client::new()
    })
});

/// Creates a new HTTP client with custom configuration.
///
/// # Arguments
///
/// * `timeout_secs` - The timeout in seconds for the client
/// * `follow_redirects` - Whether the client should follow redirects
pub fn create_client(timeout_secs: u64, follow_redirects: bool) -> Result<Client, ReqwestError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .redirect(if follow_redirects {
            reqwest::redirect::Policy::default()
        } else {
            reqwest::redirect::Policy::none()
        })
        .build()
}

/// Posts a SOAP envelope and returns the status with the raw body.
///
/// Non-2xx statuses are returned rather than turned into errors: SOAP 1.1
/// servers answer faults with HTTP 500 and a parseable envelope.
pub async fn post_soap(
    client: &Client,
    url: &str,
    soap_action: &str,
    envelope: String,
) -> Result<(StatusCode, String), ReqwestError> {
    debug!(url, soap_action, "Posting SOAP request");
    let response = client
        .post(url)
        .header(header::CONTENT_TYPE, SOAP_CONTENT_TYPE)
        .header("SOAPAction", format!("\"{}\"", soap_action))
        .body(envelope)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    debug!(%status, bytes = body.len(), "SOAP response received");
    Ok((status, body))
}
