//! Bearer token issuing and verification (HS256 JWT).

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "adminId")]
    pub admin_id: Uuid,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// A freshly signed token and its lifetime
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    /// Seconds until expiry
    pub expires_in: i64,
}

/// Signs and verifies admin tokens with the server secret.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(config: &Config) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(config.jwt_secret_bytes()),
            decoding: DecodingKey::from_secret(config.jwt_secret_bytes()),
            validation,
            ttl: config.jwt_expire,
        }
    }

    pub fn issue(&self, admin_id: Uuid, email: &str) -> AppResult<IssuedToken> {
        self.issue_at(admin_id, email, Utc::now())
    }

    pub(crate) fn issue_at(
        &self,
        admin_id: Uuid,
        email: &str,
        now: DateTime<Utc>,
    ) -> AppResult<IssuedToken> {
        let claims = Claims {
            admin_id,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AppError::internal(format!("Token signing failed: {}", e)))?;

        Ok(IssuedToken {
            token,
            expires_in: self.ttl.num_seconds(),
        })
    }

    /// Check signature and expiry. Every failure is `InvalidToken`.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(reason = ?e.kind(), "Token rejected");
                AppError::InvalidToken
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(secret: &str, expire: &str) -> Config {
        let vars = HashMap::from([
            ("JWT_SECRET".to_string(), secret.to_string()),
            ("JWT_EXPIRE".to_string(), expire.to_string()),
        ]);
        Config::from_map(&vars).unwrap()
    }

    fn service() -> TokenService {
        TokenService::new(&config("a-very-long-test-secret-of-32-bytes!!", "7d"))
    }

    #[test]
    fn test_issue_then_verify() {
        let tokens = service();
        let admin_id = Uuid::new_v4();
        let issued = tokens.issue(admin_id, "admin@boutique.com").unwrap();

        let claims = tokens.verify(&issued.token).unwrap();
        assert_eq!(claims.admin_id, admin_id);
        assert_eq!(claims.email, "admin@boutique.com");
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 3600);
        assert_eq!(issued.expires_in, 7 * 24 * 3600);
    }

    #[test]
    fn test_claims_use_admin_id_key() {
        let tokens = service();
        let issued = tokens.issue(Uuid::new_v4(), "admin@boutique.com").unwrap();
        let claims = tokens.verify(&issued.token).unwrap();
        let json = serde_json::to_value(claims).unwrap();
        assert!(json.get("adminId").is_some());
        assert!(json.get("admin_id").is_none());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let tokens = service();
        let issued = tokens
            .issue_at(
                Uuid::new_v4(),
                "admin@boutique.com",
                Utc::now() - Duration::days(8),
            )
            .unwrap();

        assert!(matches!(
            tokens.verify(&issued.token),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_token_expiring_now_is_rejected() {
        let tokens = TokenService::new(&config("a-very-long-test-secret-of-32-bytes!!", "60s"));
        let issued = tokens
            .issue_at(
                Uuid::new_v4(),
                "admin@boutique.com",
                Utc::now() - Duration::seconds(61),
            )
            .unwrap();
        assert!(tokens.verify(&issued.token).is_err());
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let tokens = service();
        let admin = tokens.issue(Uuid::new_v4(), "admin@boutique.com").unwrap();
        let other = tokens.issue(Uuid::new_v4(), "intruder@boutique.com").unwrap();

        // Other claims under the first token's signature
        let admin_parts: Vec<&str> = admin.token.split('.').collect();
        let other_parts: Vec<&str> = other.token.split('.').collect();
        let forged = format!("{}.{}.{}", other_parts[0], other_parts[1], admin_parts[2]);

        assert!(matches!(tokens.verify(&forged), Err(AppError::InvalidToken)));
        assert!(matches!(tokens.verify("not.a.jwt"), Err(AppError::InvalidToken)));
        assert!(matches!(tokens.verify(""), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_other_secret_is_rejected() {
        let issued = service()
            .issue(Uuid::new_v4(), "admin@boutique.com")
            .unwrap();
        let other = TokenService::new(&config("another-long-test-secret-of-32-bytes", "7d"));
        assert!(matches!(other.verify(&issued.token), Err(AppError::InvalidToken)));
    }
}
