use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{NewRoute, Route};
use crate::services::map_links::MapProvider;

// Request para enviar una ruta. Cualquier `user_id` del cliente se ignora.
// Solo se exigen los dos textos y coordenadas numéricas opcionales: un texto
// vacío o una latitud fuera de rango se guardan tal cual.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRouteRequest {
    pub start_location: String,
    pub end_location: String,
    pub start_lat: Option<f64>,
    pub start_lng: Option<f64>,
    pub end_lat: Option<f64>,
    pub end_lng: Option<f64>,
}

impl From<CreateRouteRequest> for NewRoute {
    fn from(request: CreateRouteRequest) -> Self {
        Self {
            start_location: request.start_location,
            end_location: request.end_location,
            start_lat: request.start_lat,
            start_lng: request.start_lng,
            end_lat: request.end_lat,
            end_lng: request.end_lng,
        }
    }
}

// Response de ruta
#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct RouteResponse {
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

impl From<Route> for RouteResponse {
    fn from(route: Route) -> Self {
        Self {
            id: route.id,
            user_id: route.user_id,
            start_location: route.start_location,
            end_location: route.end_location,
            start_lat: route.start_lat,
            start_lng: route.start_lng,
            end_lat: route.end_lat,
            end_lng: route.end_lng,
            created_at: route.created_at,
        }
    }
}

// Paginación del historial
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    100
}

#[derive(Debug, Default, Deserialize)]
pub struct MapUrlQuery {
    #[serde(default)]
    pub provider: MapProvider,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MapUrlResponse {
    pub map_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_ignores_user_id() {
        let request: CreateRouteRequest = serde_json::from_value(json!({
            "start_location": "Home",
            "end_location": "Office",
            "user_id": 999
        }))
        .unwrap();

        let new_route = NewRoute::from(request);
        assert_eq!(new_route.start_location, "Home");
        assert_eq!(new_route.start_lat, None);
    }

    #[test]
    fn test_create_request_accepts_blank_and_out_of_range_values() {
        let request: CreateRouteRequest = serde_json::from_value(json!({
            "start_location": "",
            "end_location": "Office",
            "start_lat": 95.0,
            "end_lng": -200.0
        }))
        .unwrap();

        let new_route = NewRoute::from(request);
        assert_eq!(new_route.start_location, "");
        assert_eq!(new_route.start_lat, Some(95.0));
        assert_eq!(new_route.end_lng, Some(-200.0));
    }

    #[test]
    fn test_create_request_requires_both_locations() {
        let missing = serde_json::from_value::<CreateRouteRequest>(json!({ "start_location": "Home" }));
        assert!(missing.is_err());

        let wrong_type = serde_json::from_value::<CreateRouteRequest>(json!({
            "start_location": "Home",
            "end_location": "Office",
            "start_lat": "north"
        }));
        assert!(wrong_type.is_err());
    }

    #[test]
    fn test_history_query_defaults() {
        let query: HistoryQuery = serde_json::from_value(json!({})).unwrap();
        assert_eq!(query.skip, 0);
        assert_eq!(query.limit, 100);
    }
}
