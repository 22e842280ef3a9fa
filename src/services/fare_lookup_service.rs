//! Servicio de búsqueda de tarifas
//!
//! Cache primero, luego la API de precios y, si falla, la cotización fija de
//! respaldo. `lookup` nunca devuelve error.

use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, Utc};

use crate::cache::{CacheConfig, QuoteCache};
use crate::clients::FareProvider;
use crate::config::EnvironmentConfig;
use crate::models::{Quote, RouteKey};

#[derive(Clone)]
pub struct FareLookupService {
    provider: Arc<dyn FareProvider>,
    cache: QuoteCache,
    ttl: Duration,
    default_days_ahead: i64,
}

impl FareLookupService {
    pub fn new(provider: Arc<dyn FareProvider>, cache: QuoteCache, ttl: Duration, default_days_ahead: i64) -> Self {
        Self {
            provider,
            cache,
            ttl,
            default_days_ahead,
        }
    }

    pub fn from_config(provider: Arc<dyn FareProvider>, config: &EnvironmentConfig) -> Self {
        let cache_config = CacheConfig::from(config);
        Self::new(provider, QuoteCache::new(), cache_config.default_ttl, config.default_days_ahead)
    }

    /// Clave efectiva de una búsqueda (fecha por defecto incluida)
    pub fn route_key(&self, origin: &str, destination: &str, date: Option<NaiveDate>) -> RouteKey {
        RouteKey::with_default_date(origin, destination, date, Utc::now().date_naive(), self.default_days_ahead)
    }

    /// Obtener la cotización de una ruta
    pub async fn lookup(&self, origin: &str, destination: &str, date: Option<NaiveDate>) -> Quote {
        let key = self.route_key(origin, destination, date);

        if let Some(quote) = self.cache.get(&key).await {
            return quote.as_cached();
        }

        match self.provider.lowest_fare(&key).await {
            Ok(fare) => {
                let quote = Quote::live(key.origin(), key.destination(), fare.price, &fare.currency);
                log::info!("✅ Live fare for {}: {} {}", key, quote.price, quote.currency);
                self.cache.put(key, quote.clone(), self.ttl).await;
                quote
            }
            Err(e) => {
                // El fallback no se guarda: el siguiente miss vuelve a intentar la API
                log::error!("❌ Fare lookup failed for {} ({}): {}", key, e.kind(), e);
                Quote::fallback(key.origin(), key.destination())
            }
        }
    }

    pub fn cache(&self) -> &QuoteCache {
        &self.cache
    }
}
