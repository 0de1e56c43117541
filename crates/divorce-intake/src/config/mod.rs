use std::env;
use std::fmt;

use crate::workflows::bulk_scan::{FormType, WarningIdStrategy};

/// Distinguishes runtime behavior for different stages of the service.
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

/// Top-level configuration for the intake tooling.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub intake: IntakeConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let form_types = parse_form_types(
            &env::var("INTAKE_FORM_TYPES").unwrap_or_else(|_| "D8,D8S".to_string()),
        )?;

        let warning_ids = match env::var("INTAKE_WARNING_IDS") {
            Ok(raw) => WarningIdStrategy::parse(&raw)
                .ok_or(ConfigError::InvalidWarningIds(raw))?,
            Err(_) => WarningIdStrategy::Uuid,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let format = match env::var("APP_LOG_FORMAT") {
            Ok(raw) => LogFormat::parse(&raw).ok_or(ConfigError::InvalidLogFormat(raw))?,
            Err(_) => LogFormat::Compact,
        };

        Ok(Self {
            environment,
            intake: IntakeConfig {
                form_types,
                warning_ids,
            },
            telemetry: TelemetryConfig { log_level, format },
        })
    }
}

fn parse_form_types(raw: &str) -> Result<Vec<FormType>, ConfigError> {
    let mut form_types = Vec::new();
    for entry in raw.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
        let form_type = FormType::parse(entry)
            .ok_or_else(|| ConfigError::UnknownFormType(entry.to_string()))?;
        if !form_types.contains(&form_type) {
            form_types.push(form_type);
        }
    }

    if form_types.is_empty() {
        return Err(ConfigError::NoFormTypes);
    }

    Ok(form_types)
}

/// Controls which paper forms are accepted and how warning records are keyed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeConfig {
    pub form_types: Vec<FormType>,
    pub warning_ids: WarningIdStrategy,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            form_types: FormType::all().to_vec(),
            warning_ids: WarningIdStrategy::Uuid,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Some(Self::Compact),
            "pretty" => Some(Self::Pretty),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    UnknownFormType(String),
    NoFormTypes,
    InvalidWarningIds(String),
    InvalidLogFormat(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownFormType(value) => {
                write!(f, "INTAKE_FORM_TYPES contains unknown form type '{}'", value)
            }
            ConfigError::NoFormTypes => {
                write!(f, "INTAKE_FORM_TYPES must name at least one form type")
            }
            ConfigError::InvalidWarningIds(value) => write!(
                f,
                "INTAKE_WARNING_IDS must be 'uuid' or 'sequential', found '{}'",
                value
            ),
            ConfigError::InvalidLogFormat(value) => write!(
                f,
                "APP_LOG_FORMAT must be 'compact' or 'pretty', found '{}'",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_LOG_FORMAT");
        env::remove_var("INTAKE_FORM_TYPES");
        env::remove_var("INTAKE_WARNING_IDS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.intake.form_types, vec![FormType::D8, FormType::D8S]);
        assert_eq!(config.intake.warning_ids, WarningIdStrategy::Uuid);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.telemetry.format, LogFormat::Compact);
    }

    #[test]
    fn form_types_are_trimmed_and_deduplicated() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("INTAKE_FORM_TYPES", " D8S , D8S,");
        env::set_var("INTAKE_WARNING_IDS", "Sequential");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.intake.form_types, vec![FormType::D8S]);
        assert_eq!(config.intake.warning_ids, WarningIdStrategy::Sequential);
        reset_env();
    }

    #[test]
    fn rejects_unknown_form_type() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("INTAKE_FORM_TYPES", "D8,D9");
        match AppConfig::load() {
            Err(ConfigError::UnknownFormType(value)) => assert_eq!(value, "D9"),
            other => panic!("expected unknown form type, got {other:?}"),
        }
        reset_env();
    }

    #[test]
    fn rejects_unknown_warning_id_strategy() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("INTAKE_WARNING_IDS", "random");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidWarningIds(_))
        ));
        reset_env();
    }
}
