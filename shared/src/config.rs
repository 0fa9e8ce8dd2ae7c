use serde::{Deserialize, Serialize};

use crate::cart::DEFAULT_TAX_RATE;
use crate::timer::PAYMENT_TIMEOUT_SECS;

/// Minimum severity the frontend logger forwards to the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Tunables for the app. Missing keys fall back to [`AppConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tax_rate: f64,
    pub payment_timeout_secs: u32,
    /// Simulated latency before seed data appears
    pub loading_delay_ms: u32,
    /// Simulated latency while an order is "processed"
    pub processing_delay_ms: u32,
    /// How long confirmation toasts stay visible
    pub toast_duration_ms: u32,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            payment_timeout_secs: PAYMENT_TIMEOUT_SECS,
            loading_delay_ms: 800,
            processing_delay_ms: 1500,
            toast_duration_ms: 2000,
            log_level: LogLevel::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "tax_rate": 0.1, "log_level": "debug" }"#).unwrap();
        assert_eq!(config.tax_rate, 0.1);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.payment_timeout_secs, 300);
        assert_eq!(config.loading_delay_ms, 800);
        assert_eq!(config.processing_delay_ms, 1500);
    }

    #[test]
    fn test_log_levels_are_ordered() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warn < LogLevel::Error);
    }
}
