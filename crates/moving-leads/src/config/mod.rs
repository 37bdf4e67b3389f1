use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::leads::query::DEFAULT_PAGE_SIZE;
use crate::leads::{LeadMode, LeadServiceConfig};

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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub leads: LeadsConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3001".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            leads: LeadsConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Lead generation and listing knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadsConfig {
    /// Fixed RNG seed; `None` seeds from the operating system.
    pub seed: Option<u64>,
    pub seed_on_empty: usize,
    pub page_size: usize,
    pub mode: LeadMode,
}

impl LeadsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let seed = optional_number::<u64>("LEADS_SEED")?;
        let seed_on_empty = optional_number::<usize>("LEADS_SEED_ON_EMPTY")?.unwrap_or(5);
        let page_size = optional_number::<usize>("LEADS_PAGE_SIZE")?
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .max(1);

        // Credentials only flip the reported mode; generation stays mocked.
        let mode = match env::var("FACEBOOK_APP_ID") {
            Ok(value) if !value.trim().is_empty() => LeadMode::Facebook,
            _ => LeadMode::Mock,
        };

        Ok(Self {
            seed,
            seed_on_empty,
            page_size,
            mode,
        })
    }

    pub fn service_config(&self) -> LeadServiceConfig {
        LeadServiceConfig {
            mode: self.mode,
            seed_on_empty: self.seed_on_empty,
            default_page_size: self.page_size,
        }
    }
}

fn optional_number<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { key }),
        _ => Ok(None),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { key: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { key } => {
                write!(f, "{key} must be a non-negative integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidNumber { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
