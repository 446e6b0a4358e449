// --- File: crates/wwex_speedship/src/error.rs ---
use thiserror::Error;
use wwex_common::{SoapError, UnitError, WwexError};

#[derive(Error, Debug)]
pub enum SpeedShipError {
    #[error("SpeedShip API request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("SpeedShip SOAP error: {0}")]
    SoapError(#[from] SoapError),
    #[error("SpeedShip returned HTTP {status} without a SOAP envelope")]
    HttpStatus { status: u16 },
    #[error(transparent)]
    UnitError(#[from] UnitError),
    #[error("Shipment item '{order_item_id}' has quantity 0")]
    InvalidQuantity { order_item_id: String },
    #[error("Unrecognized delivery estimate: '{0}'")]
    DeliveryDateParse(String),
    #[error("Failed to parse SpeedShip response: {0}")]
    ParseError(String),
    #[error("SpeedShip configuration missing or incomplete: {0}")]
    ConfigError(String),
}

impl SpeedShipError {
    /// A SOAP fault means the carrier answered and refused the quote.
    pub fn is_fault(&self) -> bool {
        matches!(self, SpeedShipError::SoapError(err) if err.is_fault())
    }
}

impl From<SpeedShipError> for WwexError {
    fn from(err: SpeedShipError) -> Self {
        match err {
            SpeedShipError::RequestError(err) => err.into(),
            SpeedShipError::SoapError(err) => err.into(),
            SpeedShipError::HttpStatus { status } => {
                WwexError::HttpError(format!("SpeedShip returned HTTP {}", status))
            }
            SpeedShipError::UnitError(err) => WwexError::UnitError(err),
            SpeedShipError::InvalidQuantity { .. } => {
                WwexError::ValidationError(err.to_string())
            }
            SpeedShipError::DeliveryDateParse(_) | SpeedShipError::ParseError(_) => {
                WwexError::ParseError(err.to_string())
            }
            SpeedShipError::ConfigError(message) => WwexError::ConfigError(message),
        }
    }
}
