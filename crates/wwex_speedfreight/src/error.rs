// --- File: crates/wwex_speedfreight/src/error.rs ---
use thiserror::Error;
use wwex_common::{SoapError, UnitError, WwexError};

#[derive(Error, Debug)]
pub enum SpeedFreightError {
    #[error("SpeedFreight API request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("SpeedFreight SOAP error: {0}")]
    SoapError(#[from] SoapError),
    #[error("SpeedFreight returned HTTP {status} without a SOAP envelope")]
    HttpStatus { status: u16 },
    #[error(transparent)]
    UnitError(#[from] UnitError),
    #[error("Failed to parse SpeedFreight response: {0}")]
    ParseError(String),
    #[error("SpeedFreight configuration missing or incomplete: {0}")]
    ConfigError(String),
}

impl SpeedFreightError {
    pub fn is_fault(&self) -> bool {
        matches!(self, SpeedFreightError::SoapError(err) if err.is_fault())
    }
}

impl From<SpeedFreightError> for WwexError {
    fn from(err: SpeedFreightError) -> Self {
        match err {
            SpeedFreightError::RequestError(err) => err.into(),
            SpeedFreightError::SoapError(err) => err.into(),
            SpeedFreightError::HttpStatus { status } => {
                WwexError::HttpError(format!("SpeedFreight returned HTTP {}", status))
            }
            SpeedFreightError::UnitError(err) => WwexError::UnitError(err),
            SpeedFreightError::ParseError(message) => WwexError::ParseError(message),
            SpeedFreightError::ConfigError(message) => WwexError::ConfigError(message),
        }
    }
}
