//! Middleware de CORS
//! 
//! Este módulo maneja la configuración de CORS para permitir
//! requests desde los orígenes configurados.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::warn;

/// Crear middleware de CORS con orígenes específicos.
/// Devuelve `None` si no hay ningún origen válido.
pub fn cors_middleware_with_origins(origins: &[String]) -> Option<CorsLayer> {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("⚠️ Origen CORS ignorado: {}", origin);
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        return None;
    }

    // Con credenciales no se permite el comodín, así que se reflejan
    // los métodos y headers de la request
    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true)
            .max_age(std::time::Duration::from_secs(3600)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_layer_without_origins() {
        assert!(cors_middleware_with_origins(&[]).is_none());
    }

    #[test]
    fn test_layer_with_origins() {
        let origins = vec!["http://localhost:19006".to_string()];
        assert!(cors_middleware_with_origins(&origins).is_some());
    }
}
