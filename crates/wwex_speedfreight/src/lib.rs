// --- File: crates/wwex_speedfreight/src/lib.rs ---
// Declare modules within this crate
pub mod client;
pub mod error;
pub mod logic;
#[cfg(test)]
mod logic_test;
pub mod models;
pub mod service;

pub use client::{SoapSpeedFreightClient, SpeedFreightApi};
pub use error::SpeedFreightError;
pub use logic::{SERVICES, SPEEDFREIGHT_SUCCESS_CODE};
pub use service::SpeedFreightMethod;
