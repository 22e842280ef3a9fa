//! DTOs
//! 
//! Estructuras de entrada/salida: la query de `/search` y las respuestas de Amadeus.

pub mod amadeus_dto;
pub mod search_dto;

pub use amadeus_dto::*;
pub use search_dto::*;
