use axum::{
    extract::State,
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::dto::route_dto::{
    CreateRouteRequest, HistoryQuery, MapUrlQuery, MapUrlResponse, RouteResponse,
};
use crate::middleware::{auth_middleware, rate_limit_middleware, AuthenticatedUser};
use crate::services::map_links::MapProvider;
use crate::state::AppState;
use crate::utils::errors::{AppResult, ErrorResponse};
use crate::utils::extract::{AppJson, AppPath, AppQuery};

/// Tag de OpenAPI para los endpoints de rutas
pub static ROUTES_TAG: &str = "routes";

/// Documento OpenAPI de `/routes`, con paths relativos al router
#[derive(OpenApi)]
#[openapi(
    paths(submit_route, route_history, get_route, get_map_url),
    components(schemas(CreateRouteRequest, RouteResponse, MapUrlResponse, MapProvider, ErrorResponse)),
    modifiers(&BearerAuth),
    tags((name = "routes", description = "Envío e historial de rutas del usuario autenticado"))
)]
pub struct RouteApi;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Todas las rutas requieren usuario autenticado y pasan por el rate limiter
pub fn create_route_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/submit", post(submit_route))
        .route("/history", get(route_history))
        .route("/:route_id", get(get_route))
        .route("/:route_id/map-url", get(get_map_url))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
        .layer(middleware::from_fn_with_state(state, rate_limit_middleware))
}

/// Enviar una ruta nueva.
///
/// El dueño es siempre el usuario del token; un `user_id` en el body se ignora.
#[utoipa::path(
    post,
    path = "/submit",
    tag = ROUTES_TAG,
    request_body = CreateRouteRequest,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Route stored", body = RouteResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 422, description = "Body does not match the contract", body = ErrorResponse),
        (status = 429, description = "Too many requests", body = ErrorResponse)
    ),
)]
pub async fn submit_route(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    AppJson(request): AppJson<CreateRouteRequest>,
) -> AppResult<Json<RouteResponse>> {
    let response = state.route_controller().submit(user.user_id, request).await?;
    Ok(Json(response))
}

/// Historial del usuario, en orden de creación.
#[utoipa::path(
    get,
    path = "/history",
    tag = ROUTES_TAG,
    params(
        ("skip" = Option<u32>, Query, description = "Routes to skip (default: 0)"),
        ("limit" = Option<u32>, Query, description = "Maximum routes returned (default: 100)")
    ),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Caller's routes", body = Vec<RouteResponse>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
)]
pub async fn route_history(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    AppQuery(query): AppQuery<HistoryQuery>,
) -> AppResult<Json<Vec<RouteResponse>>> {
    let response = state.route_controller().history(user.user_id, query).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/{route_id}",
    tag = ROUTES_TAG,
    params(
        ("route_id" = i64, Path, description = "Route id")
    ),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Route", body = RouteResponse),
        (status = 400, description = "Route belongs to another user", body = ErrorResponse),
        (status = 404, description = "Route not found", body = ErrorResponse)
    ),
)]
pub async fn get_route(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    AppPath(route_id): AppPath<i64>,
) -> AppResult<Json<RouteResponse>> {
    let response = state.route_controller().get(user.user_id, route_id).await?;
    Ok(Json(response))
}

/// Enlace de direcciones del proveedor elegido (Google por defecto).
#[utoipa::path(
    get,
    path = "/{route_id}/map-url",
    tag = ROUTES_TAG,
    params(
        ("route_id" = i64, Path, description = "Route id"),
        ("provider" = Option<MapProvider>, Query, description = "Map provider (default: google)")
    ),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Directions link", body = MapUrlResponse),
        (status = 400, description = "Route belongs to another user", body = ErrorResponse),
        (status = 404, description = "Route not found", body = ErrorResponse)
    ),
)]
pub async fn get_map_url(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    AppPath(route_id): AppPath<i64>,
    AppQuery(query): AppQuery<MapUrlQuery>,
) -> AppResult<Json<MapUrlResponse>> {
    let response = state
        .route_controller()
        .map_url(user.user_id, route_id, query.provider)
        .await?;
    Ok(Json(response))
}
