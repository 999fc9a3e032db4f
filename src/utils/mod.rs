//! Utilidades del sistema
//! 
//! Este módulo contiene utilidades para manejo de errores, extractores y JWT.

pub mod errors;
pub mod extract;
pub mod jwt;
