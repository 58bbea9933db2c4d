use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub display: DisplayConfig,
    pub sync: SyncConfig,
    pub queue: QueueConfig,
    pub logging: LoggingConfig,
    pub environment: EnvironmentConfig,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: SecretString,
}

impl Serialize for ApiConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ApiConfig", 2)?;
        state.serialize_field("base_url", &self.base_url)?;
        state.serialize_field("token", "[REDACTED]")?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for ApiConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ApiConfigHelper {
            base_url: String,
            token: String,
        }

        let helper = ApiConfigHelper::deserialize(deserializer)?;
        Ok(ApiConfig {
            base_url: helper.base_url,
            token: SecretString::from(helper.token),
        })
    }
}

impl ApiConfig {
    #[must_use]
    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub upscale_factor: u32,
    pub window_title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    pub refresh_interval_secs: u64,
    pub read_reserve: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueConfig {
    pub flush_interval_secs: u64,
    pub write_reserve: u32,
    pub max_attempts: u32,
    pub cooldown_jitter_min_percent: u8,
    pub cooldown_jitter_max_percent: u8,
}

impl QueueConfig {
    /// Stretches a server-advertised cooldown so simultaneous clients do not
    /// all retry on the same second.
    #[must_use]
    pub fn cooldown_with_jitter(&self, base_seconds: u64) -> u64 {
        use rand::Rng;

        let min_percent = f64::from(self.cooldown_jitter_min_percent) / 100.0;
        let max_percent = f64::from(self.cooldown_jitter_max_percent) / 100.0;

        let mut rng = rand::rng();
        let jitter_factor = rng.random_range((1.0 + min_percent)..=(1.0 + max_percent));

        #[allow(clippy::cast_precision_loss)]
        let result = (base_seconds as f64 * jitter_factor).round();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let result_u64 = result as u64;
        result_u64
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub include_location: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LogFormat {
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "pretty")]
    Pretty,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub env: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "https://pixels.pythondiscord.com".to_string(),
                token: SecretString::from(String::new()),
            },
            display: DisplayConfig {
                upscale_factor: 8,
                window_title: "Pixels Desk".to_string(),
            },
            sync: SyncConfig {
                refresh_interval_secs: 1,
                read_reserve: 1,
            },
            queue: QueueConfig {
                flush_interval_secs: 1,
                write_reserve: 1,
                max_attempts: 5,
                cooldown_jitter_min_percent: 10,
                cooldown_jitter_max_percent: 20,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Pretty,
                include_location: false,
            },
            environment: EnvironmentConfig {
                env: "development".to_string(),
            },
        }
    }
}

impl Config {
    pub fn validate(&self) -> AppResult<()> {
        let base_url = url::Url::parse(&self.api.base_url).map_err(|e| AppError::ConfigError {
            message: format!("api base_url is not a valid URL: {e}"),
        })?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(AppError::ConfigError {
                message: "api base_url must use http or https".to_string(),
            });
        }

        // "[REDACTED]" is what the redacting serializer leaves behind when
        // the defaults round-trip through figment without a real token
        let token = self.api.token.expose_secret();
        if token.is_empty() || token == "[REDACTED]" {
            return Err(AppError::ConfigError {
                message: "api token cannot be empty; set PIXELSDESK_API__TOKEN".to_string(),
            });
        }

        if self.display.upscale_factor == 0 || self.display.upscale_factor > 64 {
            return Err(AppError::ConfigError {
                message: "upscale_factor must be between 1 and 64".to_string(),
            });
        }

        if self.sync.refresh_interval_secs == 0 {
            return Err(AppError::ConfigError {
                message: "refresh_interval_secs must be greater than 0".to_string(),
            });
        }

        if self.queue.flush_interval_secs == 0 {
            return Err(AppError::ConfigError {
                message: "flush_interval_secs must be greater than 0".to_string(),
            });
        }

        if self.queue.max_attempts == 0 {
            return Err(AppError::ConfigError {
                message: "max_attempts must be greater than 0".to_string(),
            });
        }

        if self.queue.cooldown_jitter_min_percent > self.queue.cooldown_jitter_max_percent {
            return Err(AppError::ConfigError {
                message: "cooldown_jitter_min_percent must be <= cooldown_jitter_max_percent"
                    .to_string(),
            });
        }

        if self.queue.cooldown_jitter_max_percent > 100 {
            return Err(AppError::ConfigError {
                message: "cooldown_jitter_max_percent must be <= 100".to_string(),
            });
        }

        Ok(())
    }
}
