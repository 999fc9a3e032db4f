//! Utilidades JWT
//!
//! Este módulo contiene funciones helper para emitir y verificar los tokens
//! de acceso que presentan los usuarios.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::utils::errors::AppError;

/// Claims del JWT token
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String, // user_id
    pub exp: usize,
    pub iat: usize,
}

/// Configuración de JWT
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: Algorithm,
    pub expiration_minutes: i64,
}

/// Generar JWT token para un usuario
pub fn generate_token(user_id: i64, config: &JwtConfig) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::minutes(config.expiration_minutes);

    let claims = JwtClaims {
        sub: user_id.to_string(),
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let encoding_key = EncodingKey::from_secret(config.secret.as_ref());

    encode(&Header::new(config.algorithm), &claims, &encoding_key)
        .map_err(|e| AppError::Internal(format!("Error generando token: {}", e)))
}

/// Verificar y decodificar JWT token
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<JwtClaims, AppError> {
    let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

    let token_data = decode::<JwtClaims>(token, &decoding_key, &Validation::new(config.algorithm))
        .map_err(|_| AppError::Unauthorized("Could not validate credentials".to_string()))?;

    Ok(token_data.claims)
}

/// Obtener el id de usuario del claim `sub`
pub fn user_id_from_claims(claims: &JwtClaims) -> Result<i64, AppError> {
    claims
        .sub
        .parse()
        .map_err(|_| AppError::Unauthorized("Could not validate credentials".to_string()))
}

/// Extraer token del header Authorization
pub fn extract_token_from_header(auth_header: &str) -> Result<&str, AppError> {
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Not authenticated".to_string()))?
        .trim();

    if token.is_empty() {
        return Err(AppError::Unauthorized("Not authenticated".to_string()));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            algorithm: Algorithm::HS256,
            expiration_minutes: 30,
        }
    }

    #[test]
    fn test_generated_token_verifies() {
        let token = generate_token(42, &config()).unwrap();
        let claims = verify_token(&token, &config()).unwrap();
        assert_eq!(user_id_from_claims(&claims).unwrap(), 42);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = generate_token(42, &config()).unwrap();
        let other = JwtConfig {
            secret: "another-secret".to_string(),
            ..config()
        };
        assert!(matches!(verify_token(&token, &other), Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn test_expired_token_rejected() {
        let expired = JwtConfig {
            expiration_minutes: -10,
            ..config()
        };
        let token = generate_token(7, &expired).unwrap();
        assert!(verify_token(&token, &config()).is_err());
    }

    #[test]
    fn test_extract_token_from_header() {
        assert_eq!(extract_token_from_header("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(extract_token_from_header("Basic dXNlcjpwYXNz").is_err());
        assert!(extract_token_from_header("Bearer ").is_err());
    }
}
