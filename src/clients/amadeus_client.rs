//! Cliente HTTP para Amadeus (Self-Service API)
//!
//! Intercambio client-credentials para obtener el token y búsqueda de
//! ofertas de vuelo con ese token. El token se guarda en memoria y se
//! reutiliza hasta poco antes de su caducidad.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use num_traits::ToPrimitive;
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use super::{FareProvider, LiveFare, UpstreamError};
use crate::config::{AmadeusCredentials, EnvironmentConfig};
use crate::dto::{AmadeusTokenResponse, FlightOffersQuery, FlightOffersResponse};
use crate::models::RouteKey;

const TOKEN_PATH: &str = "/v1/security/oauth2/token";
const FLIGHT_OFFERS_PATH: &str = "/v2/shopping/flight-offers";

/// Margen antes de la caducidad a partir del cual se pide un token nuevo
const TOKEN_EXPIRY_MARGIN_SECS: i64 = 60;

/// Token de acceso de Amadeus
#[derive(Clone, Debug)]
struct AccessToken {
    token: String,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// `None` si `expires_in` no cabe en una fecha representable
    fn new(token: String, expires_in_secs: u64) -> Option<Self> {
        let expires_in = Duration::try_seconds(i64::try_from(expires_in_secs).ok()?)?;
        let expires_at = Utc::now().checked_add_signed(expires_in)?;
        Some(Self { token, expires_at })
    }

    fn is_usable(&self) -> bool {
        Utc::now() + Duration::seconds(TOKEN_EXPIRY_MARGIN_SECS) < self.expires_at
    }
}

/// Cliente HTTP para Amadeus
#[derive(Clone)]
pub struct AmadeusClient {
    client: Client,
    base_url: String,
    credentials: Option<AmadeusCredentials>,
    token: Arc<RwLock<Option<AccessToken>>>,
}

impl AmadeusClient {
    pub fn new(config: &EnvironmentConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(config.upstream_timeout())
            .user_agent("TravelSphere/0.1")
            .build()?;

        Ok(Self {
            client,
            base_url: config.amadeus_base_url.clone(),
            credentials: config.amadeus_credentials(),
            token: Arc::new(RwLock::new(None)),
        })
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Obtener un token válido, reutilizando el guardado si aún sirve
    pub async fn access_token(&self) -> Result<String, UpstreamError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(UpstreamError::MissingCredentials)?;

        if let Some(token) = self.token.read().await.as_ref() {
            if token.is_usable() {
                log::debug!("🔑 Reusing Amadeus access token");
                return Ok(token.token.clone());
            }
        }

        log::info!("🔐 Requesting Amadeus access token");
        let response = self
            .client
            .post(format!("{}{}", self.base_url, TOKEN_PATH))
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", credentials.client_id.as_str()),
                ("client_secret", credentials.client_secret.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("❌ Amadeus token error: {} {}", status.as_u16(), body);
            return Err(UpstreamError::Authentication {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: AmadeusTokenResponse = serde_json::from_str(&body)
            .map_err(|e| UpstreamError::MalformedResponse(format!("token response: {}", e)))?;
        let access_token = parsed
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| UpstreamError::MalformedResponse("token response without access_token".to_string()))?;

        match parsed.expires_in {
            Some(expires_in) => match AccessToken::new(access_token.clone(), expires_in) {
                Some(token) => *self.token.write().await = Some(token),
                None => log::warn!("⚠️ Amadeus token expires_in out of range ({}), token not cached", expires_in),
            },
            None => log::debug!("🔑 Amadeus token response without expires_in, token not cached"),
        }

        Ok(access_token)
    }

    /// Olvidar el token guardado
    pub async fn invalidate_token(&self) {
        *self.token.write().await = None;
    }

    /// Buscar la oferta más barata para una ruta y fecha
    pub async fn search_lowest_fare(&self, route: &RouteKey) -> Result<LiveFare, UpstreamError> {
        let token = self.access_token().await?;

        let query = FlightOffersQuery {
            origin_location_code: route.origin().to_string(),
            destination_location_code: route.destination().to_string(),
            departure_date: route.date().format("%Y-%m-%d").to_string(),
            adults: 1,
            max: 1,
        };

        log::info!("✈️ Searching Amadeus flight offers for {}", route);
        let response = self
            .client
            .get(format!("{}{}", self.base_url, FLIGHT_OFFERS_PATH))
            .bearer_auth(&token)
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                self.invalidate_token().await;
            }
            let body = response.text().await.unwrap_or_default();
            log::error!("❌ Amadeus flight offers error: {} {}", status.as_u16(), body);
            return Err(UpstreamError::Request {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        parse_lowest_fare(&body)
    }
}

#[async_trait]
impl FareProvider for AmadeusClient {
    async fn lowest_fare(&self, route: &RouteKey) -> Result<LiveFare, UpstreamError> {
        self.search_lowest_fare(route).await
    }
}

/// Extraer la oferta más barata de un cuerpo de `flight-offers`
///
/// El total se trunca a entero.
pub fn parse_lowest_fare(body: &str) -> Result<LiveFare, UpstreamError> {
    let parsed: FlightOffersResponse = serde_json::from_str(body)
        .map_err(|e| UpstreamError::MalformedResponse(format!("flight offers response: {}", e)))?;

    let mut lowest: Option<(Decimal, String)> = None;
    for offer in parsed.data {
        let total: Decimal = offer.price.total.trim().parse().map_err(|_| {
            UpstreamError::MalformedResponse(format!("invalid price total '{}'", offer.price.total))
        })?;
        if lowest.as_ref().map_or(true, |(current, _)| total < *current) {
            lowest = Some((total, offer.price.currency));
        }
    }

    let (total, currency) =
        lowest.ok_or_else(|| UpstreamError::MalformedResponse("no flight offers in response".to_string()))?;
    let price = total
        .trunc()
        .to_i64()
        .ok_or_else(|| UpstreamError::MalformedResponse(format!("price out of range: {}", total)))?;

    Ok(LiveFare { price, currency })
}
