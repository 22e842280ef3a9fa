//! Utilidades del sistema
//! 
//! Este módulo contiene utilidades para manejo de errores, validación
//! y métricas.

pub mod errors;
pub mod metrics;
pub mod validation;

pub use errors::*;
pub use metrics::Metrics;
