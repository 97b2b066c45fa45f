//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Environment variable selecting the output format (`json` or `pretty`).
pub const LOG_FORMAT_ENV: &str = "MENUORDER_LOG_FORMAT";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    /// Unrecognized values fall back to JSON.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// Filter used when `RUST_LOG` is unset or invalid.
    pub default_filter: String,
    pub format: LogFormat,
    pub with_target: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_filter: "info".to_string(),
            format: LogFormat::Json,
            with_target: false,
        }
    }
}

impl TracingConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var(LOG_FORMAT_ENV) {
            config.format = LogFormat::parse(&value);
        }
        config
    }

    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.default_filter))
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init_with(config: &TracingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(config.with_target);

    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}
