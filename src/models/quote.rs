//! Modelo de Quote
//!
//! Cotización de un vuelo tal y como la devuelve `/search`.

use serde::Serialize;

/// Precio devuelto cuando la API de Amadeus no está disponible
pub const FALLBACK_PRICE: i64 = 5555;
pub const FALLBACK_CURRENCY: &str = "INR";

/// Origen de la cotización
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuoteSource {
    Live,
    Fallback,
}

impl QuoteSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteSource::Live => "live",
            QuoteSource::Fallback => "fallback",
        }
    }
}

/// Cotización de una ruta para una fecha
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Quote {
    pub origin: String,
    pub destination: String,
    pub price: i64,
    pub currency: String,
    pub source: QuoteSource,
    pub cached: bool,
}

impl Quote {
    /// Cotización recién obtenida de la API
    pub fn live(origin: &str, destination: &str, price: i64, currency: &str) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            price,
            currency: currency.to_string(),
            source: QuoteSource::Live,
            cached: false,
        }
    }

    /// Cotización fija de respaldo. Se marca `cached` porque no es un precio en vivo.
    pub fn fallback(origin: &str, destination: &str) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            price: FALLBACK_PRICE,
            currency: FALLBACK_CURRENCY.to_string(),
            source: QuoteSource::Fallback,
            cached: true,
        }
    }

    /// Copia de la cotización marcada como servida desde el cache
    pub fn as_cached(&self) -> Self {
        Self {
            cached: true,
            ..self.clone()
        }
    }
}
