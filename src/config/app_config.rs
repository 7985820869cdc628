use std::time::Duration;

use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub weather: WeatherConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Deployment environment label, reported by the health endpoint
    pub environment: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// City used when a request does not specify one
    pub default_city: String,
    /// Seconds a cached forecast stays fresh
    pub cache_ttl_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub forecast_base_url: String,
    pub geocoding_base_url: String,
    /// Per-attempt request timeout, in seconds
    pub request_timeout_secs: u64,
    /// Total attempts per upstream request, first try included
    pub max_attempts: u32,
    pub retry_initial_delay_secs: u64,
    pub retry_max_delay_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            environment: "development".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            default_city: "Houston, Texas".to_string(),
            cache_ttl_seconds: 1800,
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            forecast_base_url: "https://api.open-meteo.com/v1".to_string(),
            geocoding_base_url: "https://geocoding-api.open-meteo.com/v1".to_string(),
            request_timeout_secs: 10,
            max_attempts: 3,
            retry_initial_delay_secs: 1,
            retry_max_delay_secs: 8,
        }
    }
}

impl WeatherConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

impl UpstreamConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn retry_initial_delay(&self) -> Duration {
        Duration::from_secs(self.retry_initial_delay_secs)
    }

    pub fn retry_max_delay(&self) -> Duration {
        Duration::from_secs(self.retry_max_delay_secs)
    }
}

impl AppConfig {
    /// Loads configuration from optional `config/default` and `config/local`
    /// files, `APP__`-prefixed environment variables, and finally the plain
    /// environment variables this service documents (`PORT`, `APP_ENV`,
    /// `LOG_LEVEL`, `CITY`, `CACHE_TTL_SECONDS`).
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("server.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("logging.level", std::env::var("LOG_LEVEL").ok())?
            .set_override_option("weather.default_city", std::env::var("CITY").ok())?
            .set_override_option(
                "weather.cache_ttl_seconds",
                std::env::var("CACHE_TTL_SECONDS").ok(),
            )?
            .build()?;

        config.try_deserialize()
    }
}
