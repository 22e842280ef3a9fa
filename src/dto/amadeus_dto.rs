//! Respuestas de la API de Amadeus
//!
//! Sólo se modelan los campos que usa el servicio; el resto se ignora.

use serde::{Deserialize, Serialize};

/// Respuesta del endpoint `/v1/security/oauth2/token`
#[derive(Debug, Clone, Deserialize)]
pub struct AmadeusTokenResponse {
    pub access_token: Option<String>,
    /// Segundos de validez del token
    pub expires_in: Option<u64>,
}

/// Query del endpoint `/v2/shopping/flight-offers`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOffersQuery {
    pub origin_location_code: String,
    pub destination_location_code: String,
    pub departure_date: String,
    pub adults: u32,
    pub max: u32,
}

/// Respuesta del endpoint `/v2/shopping/flight-offers`
#[derive(Debug, Clone, Deserialize)]
pub struct FlightOffersResponse {
    #[serde(default)]
    pub data: Vec<FlightOffer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlightOffer {
    pub price: OfferPrice,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OfferPrice {
    /// Importe total como string decimal, p.ej. "5271.00"
    pub total: String,
    pub currency: String,
}
