//! Middleware de Rate Limiting
//!
//! Este módulo maneja la limitación de velocidad de requests por IP
//! para prevenir abuso de la API. Ventana fija, en Redis o en memoria.

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use redis::aio::ConnectionManager;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::config::Settings;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Información de rate limiting por IP
#[derive(Debug, Clone)]
struct RateLimitInfo {
    requests: u32,
    window_start: Instant,
}

/// Contadores en memoria del proceso
#[derive(Clone)]
pub struct MemoryRateLimiter {
    requests: Arc<RwLock<HashMap<String, RateLimitInfo>>>,
    max_requests: u32,
    window_duration: Duration,
}

impl MemoryRateLimiter {
    pub fn new(max_requests: u32, window_duration: Duration) -> Self {
        Self {
            requests: Arc::new(RwLock::new(HashMap::new())),
            max_requests,
            window_duration,
        }
    }

    /// Verificar si una IP ha excedido el límite
    pub async fn check(&self, ip: &str) -> Result<(), AppError> {
        let mut requests = self.requests.write().await;
        let now = Instant::now();

        // Limpiar entradas expiradas
        requests.retain(|_, info| now.duration_since(info.window_start) < self.window_duration);

        let info = requests.entry(ip.to_string()).or_insert(RateLimitInfo {
            requests: 0,
            window_start: now,
        });

        if info.requests >= self.max_requests {
            return Err(AppError::RateLimitExceeded);
        }

        info.requests += 1;
        Ok(())
    }
}

/// Contadores compartidos en Redis (SET NX EX + INCR en MULTI)
#[derive(Clone)]
pub struct RedisRateLimiter {
    manager: ConnectionManager,
    max_requests: u32,
    window_duration: Duration,
}

impl RedisRateLimiter {
    pub async fn connect(redis_url: &str, max_requests: u32, window_duration: Duration) -> anyhow::Result<Self> {
        info!("🔗 Conectando a Redis para rate limiting");

        let client = redis::Client::open(redis_url)?;
        let manager = ConnectionManager::new(client).await?;

        // Test de conexión usando un comando simple
        let mut conn = manager.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;

        info!("✅ Redis conectado exitosamente");
        Ok(Self {
            manager,
            max_requests,
            window_duration,
        })
    }

    fn key(ip: &str) -> String {
        format!("safepath:rate_limit:{}", ip)
    }

    /// MULTI: SET NX fija el TTL solo al abrir la ventana, luego INCR
    fn window_pipeline(key: &str, window: Duration) -> redis::Pipeline {
        let mut pipe = redis::pipe();
        pipe.atomic()
            .cmd("SET")
            .arg(key)
            .arg(0)
            .arg("EX")
            .arg(window.as_secs().max(1))
            .arg("NX")
            .ignore()
            .incr(key, 1);
        pipe
    }

    /// Si Redis no responde se deja pasar la request
    pub async fn check(&self, ip: &str) -> Result<(), AppError> {
        let key = Self::key(ip);
        let mut conn = self.manager.clone();

        let result: redis::RedisResult<(u64,)> = Self::window_pipeline(&key, self.window_duration)
            .query_async(&mut conn)
            .await;

        let count = match result {
            Ok((count,)) => count,
            Err(e) => {
                warn!("⚠️ Error de Redis en rate limiting para {}: {}", ip, e);
                return Ok(());
            }
        };

        if count > u64::from(self.max_requests) {
            return Err(AppError::RateLimitExceeded);
        }

        Ok(())
    }
}

/// Backend de rate limiting
#[derive(Clone)]
pub enum RateLimiter {
    Memory(MemoryRateLimiter),
    Redis(RedisRateLimiter),
}

impl RateLimiter {
    pub fn memory(settings: &Settings) -> Self {
        RateLimiter::Memory(MemoryRateLimiter::new(
            settings.rate_limit_requests,
            Duration::from_secs(settings.rate_limit_window_secs),
        ))
    }

    pub async fn redis(settings: &Settings) -> anyhow::Result<Self> {
        let limiter = RedisRateLimiter::connect(
            &settings.redis_url,
            settings.rate_limit_requests,
            Duration::from_secs(settings.rate_limit_window_secs),
        )
        .await?;
        Ok(RateLimiter::Redis(limiter))
    }

    pub async fn check(&self, ip: &str) -> Result<(), AppError> {
        match self {
            RateLimiter::Memory(limiter) => limiter.check(ip).await,
            RateLimiter::Redis(limiter) => limiter.check(ip).await,
        }
    }
}

/// IP del cliente: primer valor de X-Forwarded-For, luego la dirección del socket
fn client_ip(request: &Request) -> String {
    let forwarded = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty());

    if let Some(ip) = forwarded {
        return ip.to_string();
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Middleware de rate limiting
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let ip = client_ip(&request);
    state.rate_limiter.check(&ip).await?;

    Ok(next.run(request).await)
}
