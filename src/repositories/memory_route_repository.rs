//! Repositorio de rutas en memoria
//! 
//! Misma semántica que el repositorio de PostgreSQL: ids crecientes desde 1
//! y listados en orden de creación. Se usa en tests y desarrollo local.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::route_repository::RouteRepository;
use crate::models::{NewRoute, Route};
use crate::utils::errors::AppError;

#[derive(Default)]
pub struct InMemoryRouteRepository {
    routes: RwLock<Vec<Route>>,
}

impl InMemoryRouteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RouteRepository for InMemoryRouteRepository {
    async fn create(&self, owner_id: i64, route: NewRoute) -> Result<Route, AppError> {
        let mut routes = self.routes.write().await;
        let id = routes.last().map_or(1, |last| last.id + 1);

        let created = Route {
            id,
            user_id: owner_id,
            start_location: route.start_location,
            end_location: route.end_location,
            start_lat: route.start_lat,
            start_lng: route.start_lng,
            end_lat: route.end_lat,
            end_lng: route.end_lng,
            created_at: Utc::now(),
        };
        routes.push(created.clone());

        Ok(created)
    }

    async fn list_by_owner(&self, owner_id: i64, offset: u32, limit: u32) -> Result<Vec<Route>, AppError> {
        let routes = self.routes.read().await;

        Ok(routes
            .iter()
            .filter(|route| route.is_owned_by(owner_id))
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Route>, AppError> {
        let routes = self.routes.read().await;
        Ok(routes.iter().find(|route| route.id == id).cloned())
    }
}
