//! Métricas Prometheus
//!
//! Los contadores viven en un `Registry` propio que se guarda en el estado de
//! la aplicación; no hay registro global.

use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

use crate::models::Quote;

pub const SEARCH_REQUESTS_METRIC: &str = "travelsphere_requests_total";
pub const QUOTES_METRIC: &str = "travelsphere_quotes_total";

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    search_requests: IntCounter,
    quotes: IntCounterVec,
}

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let search_requests = IntCounter::new(SEARCH_REQUESTS_METRIC, "Total requests to TravelSphere API")?;
        let quotes = IntCounterVec::new(
            Opts::new(QUOTES_METRIC, "Quotes served, by source and cache status"),
            &["source", "cached"],
        )?;

        registry.register(Box::new(search_requests.clone()))?;
        registry.register(Box::new(quotes.clone()))?;

        #[cfg(target_os = "linux")]
        registry.register(Box::new(prometheus::process_collector::ProcessCollector::for_self()))?;

        Ok(Self {
            registry,
            search_requests,
            quotes,
        })
    }

    pub fn record_search(&self) {
        self.search_requests.inc();
    }

    pub fn record_quote(&self, quote: &Quote) {
        let cached = if quote.cached { "true" } else { "false" };
        self.quotes
            .with_label_values(&[quote.source.as_str(), cached])
            .inc();
    }

    pub fn search_requests(&self) -> u64 {
        self.search_requests.get()
    }

    /// Exportar en formato texto de Prometheus
    pub fn render(&self) -> prometheus::Result<String> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
