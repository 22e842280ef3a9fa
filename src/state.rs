//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Se construye una vez en `main`.

use std::sync::Arc;

use crate::clients::{AmadeusClient, FareProvider, UpstreamError};
use crate::config::environment::EnvironmentConfig;
use crate::services::FareLookupService;
use crate::utils::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub fares: FareLookupService,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, provider: Arc<dyn FareProvider>, metrics: Metrics) -> Self {
        let fares = FareLookupService::from_config(provider, &config);
        Self { config, fares, metrics }
    }

    /// Estado con el cliente real de Amadeus
    pub fn with_amadeus(config: EnvironmentConfig, metrics: Metrics) -> Result<Self, UpstreamError> {
        let client = AmadeusClient::new(&config)?;
        if !client.has_credentials() {
            log::warn!("⚠️ Amadeus credentials not configured, every cache miss will return the fallback quote");
        }
        Ok(Self::new(config, Arc::new(client), metrics))
    }
}
