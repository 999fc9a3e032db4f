//! SafePath API
//! 
//! Backend para enviar rutas de viaje, consultar el historial de cada usuario
//! y generar enlaces de direcciones para proveedores de mapas.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_app;
pub use state::AppState;
