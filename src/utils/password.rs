use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::config::PasswordConfig;
use crate::error::{AppError, AppResult};

/// Argon2id hashing with configured cost parameters.
///
/// Hashing is CPU-bound, so the async wrappers move it onto the blocking pool.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    pub fn new(config: &PasswordConfig) -> AppResult<Self> {
        let params = Params::new(
            config.memory_cost_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|e| AppError::Internal {
            source: anyhow::anyhow!("Invalid Argon2 parameters: {}", e),
        })?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash a password into a PHC string
    pub fn hash(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut rand::thread_rng());
        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::Internal {
                source: anyhow::anyhow!("Failed to hash password: {}", e),
            })
    }

    /// Verify a password against a stored PHC string
    ///
    /// A malformed stored hash is an internal error, a mismatch is `Ok(false)`.
    pub fn verify(&self, password: &str, password_hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(password_hash).map_err(|e| AppError::Internal {
            source: anyhow::anyhow!("Stored password hash is malformed: {}", e),
        })?;
        Ok(self
            .argon2()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    pub async fn hash_async(&self, password: String) -> AppResult<String> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::Internal {
                source: anyhow::Error::from(e),
            })?
    }

    pub async fn verify_async(&self, password: String, password_hash: String) -> AppResult<bool> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &password_hash))
            .await
            .map_err(|e| AppError::Internal {
                source: anyhow::Error::from(e),
            })?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(&PasswordConfig {
            memory_cost_kib: 8,
            iterations: 1,
            parallelism: 1,
        })
        .unwrap()
    }

    #[test]
    fn test_hash_is_argon2id_phc() {
        let hash = hasher().hash("secret123").unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_verify_success_and_failure() {
        let hasher = hasher();
        let hash = hasher.hash("secret123").unwrap();
        assert!(hasher.verify("secret123", &hash).unwrap());
        assert!(!hasher.verify("secret124", &hash).unwrap());
    }

    #[test]
    fn test_different_hashes_for_same_password() {
        let hasher = hasher();
        let hash1 = hasher.hash("secret123").unwrap();
        let hash2 = hasher.hash("secret123").unwrap();
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_malformed_hash_is_internal() {
        assert!(matches!(
            hasher().verify("secret123", "plaintext"),
            Err(AppError::Internal { .. })
        ));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let result = PasswordHasher::new(&PasswordConfig {
            memory_cost_kib: 1,
            iterations: 1,
            parallelism: 1,
        });
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_async_round_trip() {
        let hasher = hasher();
        let hash = hasher.hash_async("secret123".to_string()).await.unwrap();
        assert!(
            hasher
                .verify_async("secret123".to_string(), hash)
                .await
                .unwrap()
        );
    }
}
