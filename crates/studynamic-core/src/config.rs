use anyhow::Result;
use config::Config;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub calendar: CalendarConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u16,
}

impl ApiConfig {
    /// ## Summary
    /// Returns the base URL with any trailing slash removed, so route
    /// constants can be appended directly.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// Days before the anchor date included in the expansion window.
    pub lookback_days: u16,
    /// Days after the anchor date included in the expansion window.
    pub lookahead_days: u16,
    /// Fallback wall-clock start time ("HH:MM") for schedule records whose
    /// start time is missing or unparseable.
    pub default_start_time: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `.env` file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("api.base_url", "http://localhost:5000/api")?
            .set_default("api.timeout_seconds", 30)?
            .set_default("calendar.lookback_days", 30)?
            .set_default("calendar.lookahead_days", 90)?
            .set_default("calendar.default_start_time", "08:00")?
            .set_default("logging.level", "debug")?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
