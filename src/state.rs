//! Shared application state
//! 
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Todo lo que contiene es inmutable salvo los
//! contadores del rate limiter.

use std::sync::Arc;

use crate::config::Settings;
use crate::controllers::RouteController;
use crate::middleware::rate_limit::RateLimiter;
use crate::repositories::DynRouteRepository;
use crate::services::map_links::MapLinkBuilder;
use crate::utils::jwt::JwtConfig;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub routes: DynRouteRepository,
    pub jwt: JwtConfig,
    pub map_links: MapLinkBuilder,
    pub rate_limiter: RateLimiter,
}

impl AppState {
    pub fn new(settings: Settings, routes: DynRouteRepository, rate_limiter: RateLimiter) -> Self {
        Self {
            jwt: settings.jwt_config(),
            map_links: settings.map_links(),
            settings: Arc::new(settings),
            routes,
            rate_limiter,
        }
    }

    /// Controller por request, como el resto de endpoints
    pub fn route_controller(&self) -> RouteController {
        RouteController::new(self.routes.clone(), self.map_links.clone())
    }
}
