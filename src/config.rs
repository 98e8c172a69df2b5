use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const ENV_PREFIX: &str = "PROVISION_STATUS";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub refresh: RefreshConfig,
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RefreshConfig {
    pub interval_secs: u64,
    pub tick_rate_ms: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DisplayConfig {
    /// chrono format string applied in the local time zone
    pub timestamp_format: String,
    pub toast_duration_ms: u64,
    /// Characters of the API key shown before the ellipsis
    pub key_preview_chars: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct LoggingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Config {
    /// Defaults, then the optional TOML file, then `PROVISION_STATUS__*`
    /// environment variables, then the explicit URL override.
    pub fn load(path: impl AsRef<Path>, base_url: Option<String>) -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let config = config::Config::builder()
            .set_default("api.base_url", "http://127.0.0.1:5000")?
            .set_default("api.timeout_secs", 10i64)?
            .set_default("refresh.interval_secs", 30i64)?
            .set_default("refresh.tick_rate_ms", 250i64)?
            .set_default("display.timestamp_format", "%Y-%m-%d %H:%M:%S")?
            .set_default("display.toast_duration_ms", 3000i64)?
            .set_default("display.key_preview_chars", 12i64)?
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .set_override_option("api.base_url", base_url)?
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.api.base_url.trim().is_empty() {
            anyhow::bail!("api.base_url must not be empty");
        }
        if self.refresh.interval_secs == 0 {
            anyhow::bail!("refresh.interval_secs must be at least 1");
        }
        if self.refresh.tick_rate_ms == 0 {
            anyhow::bail!("refresh.tick_rate_ms must be at least 1");
        }
        Ok(())
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh.interval_secs)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.refresh.tick_rate_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.display.toast_duration_ms)
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
