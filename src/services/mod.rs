//! Services module
//! 
//! Este módulo contiene la lógica de negocio del servicio: la búsqueda de
//! tarifas con cache y respaldo.

pub mod fare_lookup_service;

pub use fare_lookup_service::*;
