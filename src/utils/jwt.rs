use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::error::{AppError, AppResult};

/// Session token claims
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub user_id: Uuid,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiration time (unix seconds)
    pub exp: i64,
}

impl Claims {
    pub fn new(user_id: Uuid, expiration_hours: i64) -> Self {
        let now = jiff::Timestamp::now().as_second();
        Self {
            user_id,
            iat: now,
            exp: now + expiration_hours * 3600,
        }
    }
}

/// Signs and verifies HS256 session tokens with one shared secret.
#[derive(Clone)]
pub struct JwtManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_hours: i64,
}

impl std::fmt::Debug for JwtManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtManager")
            .field("expiration_hours", &self.expiration_hours)
            .finish_non_exhaustive()
    }
}

impl JwtManager {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            expiration_hours: config.expiration_hours,
        }
    }

    /// Token lifetime in seconds, mirrored by the cookie `Max-Age`.
    pub fn lifetime_secs(&self) -> i64 {
        self.expiration_hours * 3600
    }

    pub fn issue(&self, user_id: Uuid) -> AppResult<String> {
        let claims = Claims::new(user_id, self.expiration_hours);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AppError::Internal {
                source: anyhow::anyhow!("Failed to generate JWT token: {}", e),
            }
        })
    }

    /// Rejects any token whose `exp` is not in the future; no clock leeway.
    pub fn validate(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::unauthorized("Token has expired"),
                ErrorKind::InvalidSignature => AppError::unauthorized("Invalid token signature"),
                ErrorKind::InvalidToken => AppError::unauthorized("Invalid token"),
                _ => AppError::unauthorized(format!("Token validation failed: {}", e)),
            })
            .and_then(|claims| {
                // `exp` equal to the current second is already expired
                if claims.exp <= jiff::Timestamp::now().as_second() {
                    Err(AppError::unauthorized("Token has expired"))
                } else {
                    Ok(claims)
                }
            })
    }
}
