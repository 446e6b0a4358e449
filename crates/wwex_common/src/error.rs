// --- File: crates/wwex_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

use crate::soap::SoapError;
use crate::units::UnitError;

/// The base error type for all WWEX errors.
///
/// Each carrier crate extends this by implementing `From<CarrierError> for WwexError`.
#[derive(Error, Debug)]
pub enum WwexError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A measurement could not be normalized
    #[error("Unit error: {0}")]
    UnitError(#[from] UnitError),

    /// Shipment data the carrier request cannot be built from
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to a timeout
    #[error("Timeout: {0}")]
    TimeoutError(String),
}

// Common error conversions
impl From<reqwest::Error> for WwexError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            WwexError::TimeoutError(err.to_string())
        } else {
            WwexError::HttpError(err.to_string())
        }
    }
}

impl From<SoapError> for WwexError {
    fn from(err: SoapError) -> Self {
        match err {
            SoapError::Fault { code, message } => external_service_error(
                "WWEX SOAP",
                format!("fault {}: {}", code, message),
            ),
            other => WwexError::ParseError(other.to_string()),
        }
    }
}

fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> WwexError {
    WwexError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soap_fault_maps_to_external_service_error() {
        let err: WwexError = SoapError::Fault {
            code: "soapenv:Server".to_string(),
            message: "Invalid license key".to_string(),
        }
        .into();
        match err {
            WwexError::ExternalServiceError { service_name, message } => {
                assert_eq!(service_name, "WWEX SOAP");
                assert!(message.contains("Invalid license key"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_other_soap_errors_are_parse_errors() {
        let err: WwexError = SoapError::MissingElement("Body".to_string()).into();
        assert!(matches!(err, WwexError::ParseError(message) if message.contains("Body")));
    }
}
