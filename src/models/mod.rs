//! Modelos del sistema
//! 
//! Este módulo contiene los modelos de datos del servicio de tarifas.

pub mod quote;
pub mod route_key;

pub use quote::*;
pub use route_key::*;
