//! Clients - HTTP Clients for External APIs
//!
//! This module contains the HTTP client for the upstream pricing API and the
//! trait the fare service uses to talk to it.

pub mod amadeus_client;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::RouteKey;

pub use amadeus_client::AmadeusClient;

/// Lowest live fare returned by the pricing API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveFare {
    pub price: i64,
    pub currency: String,
}

/// Failures talking to the upstream pricing API
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Missing AMADEUS_CLIENT_ID or AMADEUS_CLIENT_SECRET")]
    MissingCredentials,

    #[error("Token request rejected with status {status}: {body}")]
    Authentication { status: u16, body: String },

    #[error("Flight offers request failed with status {status}: {body}")]
    Request { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),
}

impl UpstreamError {
    /// Short label for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::MissingCredentials => "missing_credentials",
            UpstreamError::Authentication { .. } => "authentication",
            UpstreamError::Request { .. } => "request",
            UpstreamError::Transport(_) => "transport",
            UpstreamError::MalformedResponse(_) => "malformed_response",
        }
    }
}

/// Source of live fares
#[async_trait]
pub trait FareProvider: Send + Sync {
    async fn lowest_fare(&self, route: &RouteKey) -> Result<LiveFare, UpstreamError>;
}
