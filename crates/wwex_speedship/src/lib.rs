// --- File: crates/wwex_speedship/src/lib.rs ---
// Declare modules within this crate
pub mod client;
pub mod error;
#[cfg(test)]
mod fixtures;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
pub mod models;
pub mod service;

pub use client::{SoapSpeedShipClient, SpeedShipApi};
pub use error::SpeedShipError;
pub use logic::{SERVICES, SPEEDSHIP_SUCCESS_CODE};
pub use service::SpeedShipMethod;
