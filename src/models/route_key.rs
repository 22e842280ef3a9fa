//! Clave de ruta para el cache de cotizaciones

use std::fmt;

use chrono::{Duration, NaiveDate};

/// Clave compuesta (origen, destino, fecha)
///
/// Los códigos se normalizan al construirla, de modo que `bom`/`BOM ` y
/// `BOM` producen la misma clave.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteKey {
    origin: String,
    destination: String,
    date: NaiveDate,
}

impl RouteKey {
    pub fn new(origin: &str, destination: &str, date: NaiveDate) -> Self {
        Self {
            origin: normalize_code(origin),
            destination: normalize_code(destination),
            date,
        }
    }

    /// Construir la clave usando `today + days_ahead` cuando no llega fecha
    pub fn with_default_date(
        origin: &str,
        destination: &str,
        date: Option<NaiveDate>,
        today: NaiveDate,
        days_ahead: i64,
    ) -> Self {
        let date = date.unwrap_or_else(|| today + Duration::days(days_ahead));
        Self::new(origin, destination, date)
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.origin, self.destination, self.date.format("%Y-%m-%d"))
    }
}

/// Normalizar un código de aeropuerto (trim + mayúsculas)
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
