//! Configuración de cache
//! 
//! Este módulo contiene la configuración para el cache de cotizaciones.

use std::time::Duration;

use crate::config::EnvironmentConfig;

/// Configuración del cache
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub default_ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: Duration::from_secs(300), // 5 minutos
        }
    }
}

impl From<&EnvironmentConfig> for CacheConfig {
    fn from(config: &EnvironmentConfig) -> Self {
        Self {
            default_ttl: config.cache_ttl(),
        }
    }
}
