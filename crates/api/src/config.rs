use std::str::FromStr;
use std::time::Duration;

use teamform_core::assignment::engine::DEFAULT_THEME_TIMEOUT;
use teamform_core::assignment::EngineSettings;

/// A configuration variable that is set but cannot be parsed.
#[derive(Debug, thiserror::Error)]
#[error("{var} has invalid value '{value}'")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub assignment: AssignmentConfig,
}

/// Group assignment engine and scheduler settings.
#[derive(Debug, Clone)]
pub struct AssignmentConfig {
    /// Upper bound on one theme's processing in a batch run.
    pub theme_timeout_secs: u64,
    /// Interval of the background batch. `0` disables the scheduler.
    pub batch_interval_secs: u64,
    /// Fixed shuffle seed. Unset seeds from OS entropy.
    pub rng_seed: Option<u64>,
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self {
            theme_timeout_secs: DEFAULT_THEME_TIMEOUT.as_secs(),
            batch_interval_secs: 0,
            rng_seed: None,
        }
    }
}

impl AssignmentConfig {
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            theme_timeout: Duration::from_secs(self.theme_timeout_secs),
            rng_seed: self.rng_seed,
        }
    }

    /// The scheduler interval, or `None` when the scheduler is off.
    pub fn batch_interval(&self) -> Option<Duration> {
        (self.batch_interval_secs > 0).then(|| Duration::from_secs(self.batch_interval_secs))
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                          | Default                 |
    /// |----------------------------------|-------------------------|
    /// | `HOST`                           | `0.0.0.0`               |
    /// | `PORT`                           | `3000`                  |
    /// | `CORS_ORIGINS`                   | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`           | `30`                    |
    /// | `ASSIGNMENT_THEME_TIMEOUT_SECS`  | `60`                    |
    /// | `ASSIGNMENT_BATCH_INTERVAL_SECS` | `0` (scheduler off)     |
    /// | `ASSIGNMENT_RNG_SEED`            | unset (OS entropy)      |
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = parse_var("PORT", 3000)?;

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_var("REQUEST_TIMEOUT_SECS", 30)?;

        let assignment = AssignmentConfig {
            theme_timeout_secs: parse_var(
                "ASSIGNMENT_THEME_TIMEOUT_SECS",
                DEFAULT_THEME_TIMEOUT.as_secs(),
            )?,
            batch_interval_secs: parse_var("ASSIGNMENT_BATCH_INTERVAL_SECS", 0)?,
            rng_seed: parse_optional_var("ASSIGNMENT_RNG_SEED")?,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            assignment,
        })
    }
}

fn parse_var<T: FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    Ok(parse_optional_var(var)?.unwrap_or(default))
}

fn parse_optional_var<T: FromStr>(var: &'static str) -> Result<Option<T>, ConfigError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError { var, value }),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheduler_off_by_default() {
        assert_eq!(AssignmentConfig::default().batch_interval(), None);
    }

    #[test]
    fn engine_settings_carry_seed_and_timeout() {
        let config = AssignmentConfig {
            theme_timeout_secs: 5,
            batch_interval_secs: 300,
            rng_seed: Some(42),
        };
        let settings = config.engine_settings();
        assert_eq!(settings.theme_timeout, Duration::from_secs(5));
        assert_eq!(settings.rng_seed, Some(42));
        assert_eq!(config.batch_interval(), Some(Duration::from_secs(300)));
    }

    #[test]
    fn unset_variable_falls_back_to_default() {
        let value: u64 = parse_var("TEAMFORM_TEST_UNSET_VARIABLE", 17).unwrap();
        assert_eq!(value, 17);
    }
}
