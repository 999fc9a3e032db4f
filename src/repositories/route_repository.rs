use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{NewRoute, Route};
use crate::utils::errors::AppError;

/// Operaciones de persistencia de rutas, siempre con el dueño explícito
#[async_trait]
pub trait RouteRepository: Send + Sync {
    /// Insertar una ruta nueva para `owner_id` y devolverla completa
    async fn create(&self, owner_id: i64, route: NewRoute) -> Result<Route, AppError>;

    /// Rutas de `owner_id` en orden de creación (id ascendente)
    async fn list_by_owner(&self, owner_id: i64, offset: u32, limit: u32) -> Result<Vec<Route>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Route>, AppError>;
}

pub type DynRouteRepository = Arc<dyn RouteRepository>;

pub struct PgRouteRepository {
    pool: PgPool,
}

impl PgRouteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RouteRepository for PgRouteRepository {
    async fn create(&self, owner_id: i64, route: NewRoute) -> Result<Route, AppError> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, Route>(
            r#"
            INSERT INTO routes (user_id, start_location, end_location, start_lat, start_lng, end_lat, end_lng)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#
        )
        .bind(owner_id)
        .bind(route.start_location)
        .bind(route.end_location)
        .bind(route.start_lat)
        .bind(route.start_lng)
        .bind(route.end_lat)
        .bind(route.end_lng)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(created)
    }

    async fn list_by_owner(&self, owner_id: i64, offset: u32, limit: u32) -> Result<Vec<Route>, AppError> {
        let routes = sqlx::query_as::<_, Route>(
            "SELECT * FROM routes WHERE user_id = $1 ORDER BY id ASC OFFSET $2 LIMIT $3"
        )
        .bind(owner_id)
        .bind(i64::from(offset))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(routes)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Route>, AppError> {
        let route = sqlx::query_as::<_, Route>("SELECT * FROM routes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(route)
    }
}
