//! Configuración de conexión a PostgreSQL
//! 
//! Este módulo abre el pool de conexiones y aplica las migraciones embebidas.

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

use crate::config::{DatabaseConfig, Settings};

/// Crear el pool de conexiones y dejar el schema al día
pub async fn connect(settings: &Settings) -> Result<PgPool> {
    let config = DatabaseConfig::from(settings);
    info!("🗄️ Conectando a PostgreSQL: {}", mask_database_url(&config.url));

    let pool = config.create_pool().await?;
    run_migrations(&pool).await?;

    info!("✅ Base de datos lista (max {} conexiones)", config.max_connections);
    Ok(pool)
}

/// Ejecutar migraciones de la base de datos
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Función helper para enmascarar la URL de la base de datos en logs
pub fn mask_database_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://").map(|pos| pos + 3) else {
        return url.to_string();
    };

    match url[scheme_end..].rfind('@') {
        Some(at_pos) => {
            let host = &url[scheme_end + at_pos + 1..];
            format!("{}***:***@{}", &url[..scheme_end], host)
        }
        None => url.to_string(),
    }
}
