//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validar los parámetros
//! de búsqueda.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Código IATA de aeropuerto: tres letras, se admiten espacios alrededor
    pub static ref IATA_CODE_REGEX: Regex = Regex::new(r"^\s*[A-Za-z]{3}\s*$").unwrap();
}

/// Validar y convertir string a fecha
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validador `custom` para fechas ISO
pub fn validate_iso_date(value: &str) -> Result<(), ValidationError> {
    parse_iso_date(value).map(|_| ())
}
