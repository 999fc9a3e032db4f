//! Modelos del sistema
//! 
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al schema PostgreSQL.

pub mod route;

pub use route::{NewRoute, Route};
