//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use utoipa::ToSchema;
use tracing::{debug, error, warn};

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Body JSON mal formado o que no cumple el contrato (422)
    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not enough permissions")]
    NotEnoughPermissions,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
///
/// `detail` es el campo que leen los clientes móviles.
#[derive(Debug, serde::Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Route not found")]
    detail: String,
    #[schema(value_type = String, example = "Not Found")]
    error: &'static str,
    #[schema(value_type = String, example = "NOT_FOUND")]
    code: &'static str,
}

impl ErrorResponse {
    fn new(error: &'static str, code: &'static str, detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
            error,
            code,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Database(e) => {
                error!("❌ Error de base de datos: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        "Database Error",
                        "DB_ERROR",
                        "An error occurred while accessing the database",
                    ),
                )
            }

            AppError::UnprocessableEntity(msg) => {
                debug!("Invalid request body: {}", msg);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorResponse::new("Unprocessable Entity", "VALIDATION_ERROR", msg),
                )
            }

            AppError::Unauthorized(msg) => {
                debug!("Unauthorized access: {}", msg);
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse::new("Unauthorized", "UNAUTHORIZED", msg),
                )
            }

            AppError::NotFound(msg) => {
                debug!("Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new("Not Found", "NOT_FOUND", msg),
                )
            }

            // Los clientes existentes esperan 400 en este caso, no 403
            AppError::NotEnoughPermissions => {
                warn!("⚠️ Acceso a ruta ajena rechazado");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(
                        "Bad Request",
                        "NOT_ENOUGH_PERMISSIONS",
                        "Not enough permissions",
                    ),
                )
            }

            AppError::BadRequest(msg) => {
                debug!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("Bad Request", "BAD_REQUEST", msg),
                )
            }

            AppError::RateLimitExceeded => {
                warn!("⚠️ Rate limit excedido");
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    ErrorResponse::new(
                        "Rate Limit Exceeded",
                        "RATE_LIMIT_EXCEEDED",
                        "Too many requests. Please try again later",
                    ),
                )
            }

            AppError::Internal(msg) => {
                error!("❌ Error interno: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        "Internal Server Error",
                        "INTERNAL_ERROR",
                        "An unexpected error occurred",
                    ),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::UnprocessableEntity(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str) -> AppError {
    AppError::NotFound(format!("{} not found", resource))
}
