//! Query de `/search`

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use validator::Validate;

use crate::utils::validation::{parse_iso_date, validate_iso_date, IATA_CODE_REGEX};

/// Parámetros de búsqueda de `/search`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchQuery {
    #[validate(regex = "IATA_CODE_REGEX")]
    pub origin: String,

    #[validate(regex = "IATA_CODE_REGEX")]
    pub destination: String,

    /// Fecha de salida `YYYY-MM-DD`; vacía equivale a ausente
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(custom = "validate_iso_date")]
    pub date: Option<String>,
}

impl SearchQuery {
    /// Fecha ya validada, `None` si no se indicó
    pub fn departure_date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(|d| parse_iso_date(d).ok())
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
