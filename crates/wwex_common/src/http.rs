// --- File: crates/wwex_common/src/http.rs ---
//! HTTP transport for carrier SOAP calls.

pub mod client;

/// Content type of SOAP 1.1 requests.
pub const SOAP_CONTENT_TYPE: &str = "text/xml; charset=utf-8";
