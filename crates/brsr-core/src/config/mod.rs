use std::env;

use crate::metrics::MetricsConfig;

const MAX_PERCENTAGE_DECIMALS: usize = 6;

/// Distinguishes runtime behavior for different stages of the tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for callers of the reporting pipeline.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub report: ReportConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let percentage_decimals = match env::var("BRSR_PERCENTAGE_DECIMALS") {
            Ok(raw) => parse_decimals(&raw)?,
            Err(_) => MetricsConfig::default().percentage_decimals,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            report: ReportConfig {
                percentage_decimals,
            },
        })
    }
}

fn parse_decimals(raw: &str) -> Result<usize, ConfigError> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|decimals| *decimals <= MAX_PERCENTAGE_DECIMALS)
        .ok_or_else(|| ConfigError::InvalidValue {
            key: "BRSR_PERCENTAGE_DECIMALS",
            value: raw.to_string(),
        })
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Presentation knobs forwarded to the derived-metrics calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    pub percentage_decimals: usize,
}

impl ReportConfig {
    pub fn metrics_config(&self) -> MetricsConfig {
        MetricsConfig {
            percentage_decimals: self.percentage_decimals,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} has an invalid value '{value}'")]
    InvalidValue { key: &'static str, value: String },
}
