//! Modelo de Route
//! 
//! Mapea exactamente la tabla `routes`. Una ruta pertenece a un único usuario
//! desde su creación y no se modifica después.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Route principal - mapea a la tabla routes
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Route {
    pub id: i64,
    pub user_id: i64,
    pub start_location: String,
    pub end_location: String,
    pub start_lat: Option<f64>,
    pub start_lng: Option<f64>,
    pub end_lat: Option<f64>,
    pub end_lng: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// Datos para insertar una ruta nueva; el dueño se pasa aparte
#[derive(Debug, Clone, PartialEq)]
pub struct NewRoute {
    pub start_location: String,
    pub end_location: String,
    pub start_lat: Option<f64>,
    pub start_lng: Option<f64>,
    pub end_lat: Option<f64>,
    pub end_lng: Option<f64>,
}

impl Route {
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}
