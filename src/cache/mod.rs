//! Cache
//! 
//! Este módulo contiene el cache en memoria de cotizaciones.

pub mod cache_config;
pub mod quote_cache;

pub use cache_config::CacheConfig;
pub use quote_cache::QuoteCache;
