pub mod route_routes;

use axum::{extract::State, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use utoipa::openapi::{InfoBuilder, OpenApi, OpenApiBuilder};
use utoipa::OpenApi as _;

use crate::config::Settings;
use crate::middleware::cors_middleware_with_origins;
use crate::state::AppState;

/// Crear el router principal de la aplicación
pub fn create_app(state: AppState) -> Router {
    let prefix = state.settings.api_v1_str.trim_end_matches('/');
    let routes_path = format!("{}/routes", prefix);
    let openapi_path = format!("{}/openapi.json", prefix);

    let mut app = Router::new()
        .route("/", get(root))
        .route(&openapi_path, get(openapi_json))
        .nest(&routes_path, route_routes::create_route_router(state.clone()))
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = cors_middleware_with_origins(&state.settings.backend_cors_origins) {
        app = app.layer(cors);
    }

    app.with_state(state)
}

/// Documento OpenAPI completo, con los paths bajo `API_V1_STR`
pub fn openapi_document(settings: &Settings) -> OpenApi {
    let routes_path = format!("{}/routes", settings.api_v1_str.trim_end_matches('/'));

    OpenApiBuilder::new()
        .info(
            InfoBuilder::new()
                .title(settings.project_name.clone())
                .version(env!("CARGO_PKG_VERSION"))
                .build(),
        )
        .build()
        .nest(routes_path, route_routes::RouteApi::openapi())
}

async fn root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": format!("Welcome to {} API", state.settings.project_name)
    }))
}

async fn openapi_json(State(state): State<AppState>) -> Json<OpenApi> {
    Json(openapi_document(&state.settings))
}
