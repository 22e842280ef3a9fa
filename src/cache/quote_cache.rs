//! Cache de cotizaciones con TTL
//!
//! Cache en memoria, local al proceso. Las entradas caducadas se tratan como
//! ausentes al leerlas (no hay limpieza en segundo plano) y no hay límite de
//! capacidad.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use log::debug;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::models::{Quote, RouteKey};

#[derive(Debug, Clone)]
struct CacheEntry {
    quote: Quote,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Cache compartido entre peticiones concurrentes
#[derive(Clone, Default)]
pub struct QuoteCache {
    entries: Arc<RwLock<HashMap<RouteKey, CacheEntry>>>,
}

impl QuoteCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Obtener una cotización vigente
    pub async fn get(&self, key: &RouteKey) -> Option<Quote> {
        let entries = self.entries.read().await;
        match entries.get(key) {
            Some(entry) if !entry.is_expired(Instant::now()) => {
                debug!("🎯 Quote cache HIT for {}", key);
                Some(entry.quote.clone())
            }
            Some(_) => {
                debug!("⏰ Quote cache EXPIRED for {}", key);
                None
            }
            None => {
                debug!("❌ Quote cache MISS for {}", key);
                None
            }
        }
    }

    /// Guardar una cotización; el último en escribir gana
    pub async fn put(&self, key: RouteKey, quote: Quote, ttl: Duration) {
        debug!("💾 Caching quote for {} (TTL: {}s)", key, ttl.as_secs());
        let entry = CacheEntry {
            quote,
            expires_at: Instant::now() + ttl,
        };
        self.entries.write().await.insert(key, entry);
    }

    /// Número de entradas guardadas, caducadas incluidas
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn key() -> RouteKey {
        RouteKey::new("BOM", "DEL", NaiveDate::from_ymd_opt(2026, 1, 5).unwrap())
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_returns_entry_within_ttl() {
        let cache = QuoteCache::new();
        let quote = Quote::live("BOM", "DEL", 5271, "INR");
        cache.put(key(), quote.clone(), Duration::from_secs(300)).await;

        tokio::time::advance(Duration::from_secs(299)).await;
        assert_eq!(cache.get(&key()).await, Some(quote));
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_entry_behaves_as_absent() {
        let cache = QuoteCache::new();
        cache
            .put(key(), Quote::live("BOM", "DEL", 5271, "INR"), Duration::from_secs(300))
            .await;

        tokio::time::advance(Duration::from_secs(300)).await;
        assert_eq!(cache.get(&key()).await, None);
        // Lazy expiry: la entrada sigue guardada hasta que se sobrescriba
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_put_overwrites_existing_entry() {
        let cache = QuoteCache::new();
        cache
            .put(key(), Quote::live("BOM", "DEL", 5000, "INR"), Duration::from_secs(60))
            .await;
        cache
            .put(key(), Quote::live("BOM", "DEL", 6000, "INR"), Duration::from_secs(60))
            .await;

        assert_eq!(cache.get(&key()).await.map(|q| q.price), Some(6000));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_missing_key() {
        let cache = QuoteCache::new();
        assert!(cache.is_empty().await);
        assert_eq!(cache.get(&key()).await, None);
    }
}
