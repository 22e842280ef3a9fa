//! Configuración de variables de entorno
//!
//! Este módulo carga la configuración del servicio una sola vez al arrancar.
//! El resto de componentes la reciben por referencia.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_AMADEUS_BASE_URL: &str = "https://test.api.amadeus.com";

/// Errores al leer la configuración
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be a valid number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: i128,
        min: i128,
        max: i128,
    },
}

/// Límites de los valores numéricos configurables
pub const MAX_CACHE_TTL_SECONDS: u64 = 7 * 24 * 3600;
pub const MAX_UPSTREAM_TIMEOUT_SECONDS: u64 = 300;
pub const MAX_DEFAULT_DAYS_AHEAD: i64 = 365;

/// Credenciales de la API de Amadeus (client credentials)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmadeusCredentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub amadeus_base_url: String,
    pub amadeus_client_id: Option<String>,
    pub amadeus_client_secret: Option<String>,
    pub cache_ttl_seconds: u64,
    pub upstream_timeout_seconds: u64,
    pub default_days_ahead: i64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 8000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            amadeus_base_url: DEFAULT_AMADEUS_BASE_URL.to_string(),
            amadeus_client_id: None,
            amadeus_client_secret: None,
            cache_ttl_seconds: 300, // 5 minutos
            upstream_timeout_seconds: 10,
            default_days_ahead: 14,
        }
    }
}

impl EnvironmentConfig {
    /// Construir la configuración a partir de las variables de entorno
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Igual que `from_env`, pero con una fuente de variables arbitraria
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Ok(Self {
            environment: non_empty("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_or("PORT", non_empty("PORT"), defaults.port)?,
            host: non_empty("HOST").unwrap_or(defaults.host),
            cors_origins: non_empty("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            amadeus_base_url: non_empty("AMADEUS_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.amadeus_base_url),
            amadeus_client_id: non_empty("AMADEUS_CLIENT_ID"),
            amadeus_client_secret: non_empty("AMADEUS_CLIENT_SECRET"),
            cache_ttl_seconds: in_range(
                "CACHE_TTL_SECONDS",
                parse_or("CACHE_TTL_SECONDS", non_empty("CACHE_TTL_SECONDS"), defaults.cache_ttl_seconds)?,
                0,
                MAX_CACHE_TTL_SECONDS,
            )?,
            upstream_timeout_seconds: in_range(
                "UPSTREAM_TIMEOUT_SECONDS",
                parse_or(
                    "UPSTREAM_TIMEOUT_SECONDS",
                    non_empty("UPSTREAM_TIMEOUT_SECONDS"),
                    defaults.upstream_timeout_seconds,
                )?,
                1,
                MAX_UPSTREAM_TIMEOUT_SECONDS,
            )?,
            default_days_ahead: in_range(
                "DEFAULT_DAYS_AHEAD",
                parse_or("DEFAULT_DAYS_AHEAD", non_empty("DEFAULT_DAYS_AHEAD"), defaults.default_days_ahead)?,
                0,
                MAX_DEFAULT_DAYS_AHEAD,
            )?,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Credenciales de Amadeus, sólo si ambas están presentes
    pub fn amadeus_credentials(&self) -> Option<AmadeusCredentials> {
        match (&self.amadeus_client_id, &self.amadeus_client_secret) {
            (Some(client_id), Some(client_secret)) => Some(AmadeusCredentials {
                client_id: client_id.clone(),
                client_secret: client_secret.clone(),
            }),
            _ => None,
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_seconds)
    }
}

fn parse_or<T: FromStr>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
        None => Ok(default),
    }
}

fn in_range<T>(name: &'static str, value: T, min: T, max: T) -> Result<T, ConfigError>
where
    T: PartialOrd + Copy + Into<i128>,
{
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            name,
            value: value.into(),
            min: min.into(),
            max: max.into(),
        });
    }
    Ok(value)
}
