use tracing::info;

use crate::dto::route_dto::{CreateRouteRequest, HistoryQuery, MapUrlResponse, RouteResponse};
use crate::models::Route;
use crate::repositories::DynRouteRepository;
use crate::services::map_links::{MapLinkBuilder, MapProvider};
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct RouteController {
    repository: DynRouteRepository,
    map_links: MapLinkBuilder,
}

impl RouteController {
    pub fn new(repository: DynRouteRepository, map_links: MapLinkBuilder) -> Self {
        Self {
            repository,
            map_links,
        }
    }

    /// El dueño siempre es el usuario autenticado
    pub async fn submit(&self, user_id: i64, request: CreateRouteRequest) -> AppResult<RouteResponse> {
        let route = self.repository.create(user_id, request.into()).await?;
        info!("🗺️ Ruta {} creada para usuario {}", route.id, user_id);

        Ok(route.into())
    }

    pub async fn history(&self, user_id: i64, query: HistoryQuery) -> AppResult<Vec<RouteResponse>> {
        let routes = self
            .repository
            .list_by_owner(user_id, query.skip, query.limit)
            .await?;

        Ok(routes.into_iter().map(RouteResponse::from).collect())
    }

    pub async fn get(&self, user_id: i64, route_id: i64) -> AppResult<RouteResponse> {
        let route = self.find_owned(user_id, route_id).await?;
        Ok(route.into())
    }

    pub async fn map_url(&self, user_id: i64, route_id: i64, provider: MapProvider) -> AppResult<MapUrlResponse> {
        let route = self.find_owned(user_id, route_id).await?;

        Ok(MapUrlResponse {
            map_url: self.map_links.route_url(provider, &route),
        })
    }

    /// Una ruta inexistente es siempre 404, se pregunte quien se pregunte;
    /// la comprobación de dueño solo se hace si la ruta existe.
    async fn find_owned(&self, user_id: i64, route_id: i64) -> AppResult<Route> {
        let route = self
            .repository
            .find_by_id(route_id)
            .await?
            .ok_or_else(|| not_found_error("Route"))?;

        if !route.is_owned_by(user_id) {
            return Err(AppError::NotEnoughPermissions);
        }

        Ok(route)
    }
}
