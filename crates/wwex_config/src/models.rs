// --- File: crates/wwex_config/src/models.rs ---

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

// --- Mode ---
/// Which carrier environment to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Test,
    Live,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Test => "test",
            Mode::Live => "live",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown mode '{0}', expected 'test' or 'live'")]
pub struct ModeParseError(pub String);

impl FromStr for Mode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "test" => Ok(Mode::Test),
            "live" => Ok(Mode::Live),
            other => Err(ModeParseError(other.to_string())),
        }
    }
}

// --- API Information ---
// Credentials issued by WWEX. Secrets are usually injected through
// "secret_from_env" markers, see `apply_env_overrides_from_marker`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ApiInformation {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub auth_key: String,
    #[serde(default)]
    pub account_number: String,
    // Kept as the raw string so an absent or empty value can fall back to test.
    #[serde(default)]
    pub mode: String,
}

impl Default for ApiInformation {
    fn default() -> Self {
        Self {
            user_name: String::new(),
            password: String::new(),
            auth_key: String::new(),
            account_number: String::new(),
            mode: Mode::Test.as_str().to_string(),
        }
    }
}

impl ApiInformation {
    /// Resolves the connection mode, defaulting to [`Mode::Test`].
    ///
    /// An unrecognised value never selects the live endpoint.
    pub fn mode(&self) -> Mode {
        if self.mode.trim().is_empty() {
            return Mode::Test;
        }
        self.mode.parse().unwrap_or_else(|err: ModeParseError| {
            warn!("{}; falling back to test mode", err);
            Mode::Test
        })
    }

    /// Determine if we have the minimum information to connect to WWEX.
    ///
    /// All four credentials must be present.
    pub fn is_configured(&self) -> bool {
        [
            &self.user_name,
            &self.auth_key,
            &self.password,
            &self.account_number,
        ]
        .iter()
        .all(|value| !value.trim().is_empty())
    }
}

// --- Endpoints ---
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub test_url: String, // Mandatory
    pub live_url: String, // Mandatory
    /// Overrides the carrier's default service namespace.
    #[serde(default)]
    pub namespace: Option<String>,
}

impl EndpointConfig {
    pub fn url_for(&self, mode: Mode) -> &str {
        match mode {
            Mode::Test => &self.test_url,
            Mode::Live => &self.live_url,
        }
    }
}

// --- Retry ---
// One attempt by default: retries are opt-in.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

fn default_max_attempts() -> u32 {
    1
}

fn default_base_delay_ms() -> u64 {
    500
}

fn default_max_delay_ms() -> u64 {
    10_000
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

// --- Default package type ---
/// Package type used when a shipment has none assigned.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PackageTypeConfig {
    pub id: String,
    pub label: String,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub dimension_unit: String, // e.g. "in", "cm"
    #[serde(default)]
    pub weight: f64,
    #[serde(default = "default_weight_unit")]
    pub weight_unit: String, // e.g. "lb", "kg"
}

fn default_weight_unit() -> String {
    "lb".to_string()
}

impl Default for PackageTypeConfig {
    fn default() -> Self {
        Self {
            id: "custom_box".to_string(),
            label: "Custom box".to_string(),
            length: 1.0,
            width: 1.0,
            height: 1.0,
            dimension_unit: "in".to_string(),
            weight: 0.0,
            weight_unit: default_weight_unit(),
        }
    }
}

// --- Shipping method configuration ---
/// Configuration of one WWEX shipping method instance.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct WwexConfig {
    #[serde(default)]
    pub api_information: ApiInformation,
    /// Enabled service codes. Empty means every service is enabled.
    #[serde(default)]
    pub services: BTreeSet<String>,
    #[serde(default)]
    pub default_package_type: PackageTypeConfig,
    #[serde(default)]
    pub endpoints: Option<EndpointConfig>,
    #[serde(default)]
    pub retry: RetryConfig,
}

impl WwexConfig {
    pub fn mode(&self) -> Mode {
        self.api_information.mode()
    }

    pub fn is_configured(&self) -> bool {
        self.api_information.is_configured()
    }

    pub fn is_service_enabled(&self, code: &str) -> bool {
        self.services.is_empty() || self.services.contains(code)
    }
}

/// Gets the mode to use to connect.
pub fn get_mode(config: &WwexConfig) -> Mode {
    config.mode()
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_speedship: bool,
    #[serde(default)]
    pub use_speedfreight: bool,

    // --- Optional Carrier Configurations ---
    #[serde(default)]
    pub speedship: Option<WwexConfig>,
    #[serde(default)]
    pub speedfreight: Option<WwexConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> ApiInformation {
        ApiInformation {
            user_name: "user".to_string(),
            password: "secret".to_string(),
            auth_key: "key".to_string(),
            account_number: "W123456".to_string(),
            mode: "live".to_string(),
        }
    }

    #[test]
    fn test_mode_defaults_to_test_when_empty() {
        let mut info = configured();
        info.mode = String::new();
        assert_eq!(info.mode(), Mode::Test);
    }

    #[test]
    fn test_mode_defaults_to_test_when_absent() {
        let config: WwexConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(get_mode(&config), Mode::Test);

        let config: WwexConfig =
            serde_json::from_str(r#"{"api_information": {"user_name": "u"}}"#).unwrap();
        assert_eq!(get_mode(&config), Mode::Test);
    }

    #[test]
    fn test_mode_live() {
        assert_eq!(configured().mode(), Mode::Live);
    }

    #[test]
    fn test_unknown_mode_never_selects_live() {
        let mut info = configured();
        info.mode = "production".to_string();
        assert_eq!(info.mode(), Mode::Test);
    }

    #[test]
    fn test_is_configured_with_all_credentials() {
        assert!(configured().is_configured());
    }

    #[test]
    fn test_is_configured_requires_account_number() {
        // Only the account number is missing; every other credential is set.
        let mut info = configured();
        info.account_number = String::new();
        assert!(!info.is_configured());
    }

    #[test]
    fn test_is_configured_requires_each_credential() {
        for field in 0..4 {
            let mut info = configured();
            match field {
                0 => info.user_name = " ".to_string(),
                1 => info.password = String::new(),
                2 => info.auth_key = String::new(),
                _ => info.account_number = String::new(),
            }
            assert!(!info.is_configured(), "field {} should be required", field);
        }
    }

    #[test]
    fn test_service_enabled() {
        let mut config = WwexConfig::default();
        assert!(config.is_service_enabled("GND"));

        config.services.insert("1DA".to_string());
        assert!(config.is_service_enabled("1DA"));
        assert!(!config.is_service_enabled("GND"));
    }

    #[test]
    fn test_endpoint_for_mode() {
        let endpoints = EndpointConfig {
            test_url: "https://test.example.com/soap".to_string(),
            live_url: "https://live.example.com/soap".to_string(),
            namespace: None,
        };
        assert_eq!(endpoints.url_for(Mode::Test), "https://test.example.com/soap");
        assert_eq!(endpoints.url_for(Mode::Live), "https://live.example.com/soap");
    }

    #[test]
    fn test_default_configuration() {
        let config = WwexConfig::default();
        assert_eq!(config.api_information.mode, "test");
        assert!(!config.is_configured());
        assert_eq!(config.retry.max_attempts, 1);
        assert_eq!(config.default_package_type.id, "custom_box");
    }
}
