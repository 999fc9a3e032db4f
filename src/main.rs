use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use dotenvy::dotenv;

use safepath_api::config::Settings;
use safepath_api::database;
use safepath_api::middleware::RateLimiter;
use safepath_api::repositories::PgRouteRepository;
use safepath_api::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!("❌ Configuración inválida: {}", e);
            return Err(e.into());
        }
    };

    info!("🧭 {} API ({})", settings.project_name, settings.environment);
    info!("================================================");

    // Inicializar base de datos
    let pool = match database::connect(&settings).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    // Inicializar Redis para rate limiting
    let rate_limiter = match RateLimiter::redis(&settings).await {
        Ok(limiter) => limiter,
        Err(e) => {
            error!("❌ Error conectando a Redis: {}", e);
            return Err(anyhow::anyhow!("Error de Redis: {}", e));
        }
    };

    let addr: SocketAddr = settings.server_addr().parse()?;
    let prefix = settings.api_v1_str.trim_end_matches('/').to_string();
    let list_endpoints = settings.is_development();

    let app_state = AppState::new(settings, Arc::new(PgRouteRepository::new(pool)), rate_limiter);
    let app = create_app(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    if list_endpoints {
        info!("🔍 Endpoints disponibles:");
        info!("   GET  / - Bienvenida");
        info!("   GET  {}/openapi.json - Esquema OpenAPI", prefix);
        info!("   POST {}/routes/submit - Enviar ruta", prefix);
        info!("   GET  {}/routes/history - Historial de rutas", prefix);
        info!("   GET  {}/routes/:route_id - Obtener ruta", prefix);
        info!("   GET  {}/routes/:route_id/map-url - Enlace de mapa", prefix);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
