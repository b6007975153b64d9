//! JWT token service
//!
//! Issues and validates HS256 bearer tokens for logged-in employees.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// HMAC secret (at least 32 bytes outside development)
    pub secret: String,
    /// Token lifetime in minutes
    pub expiration_minutes: i64,
    pub issuer: String,
    pub audience: String,
}

/// Claims stored in the token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Employee id
    pub sub: String,
    pub username: String,
    /// Role id, empty when the employee has no role
    pub role: String,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
    pub aud: String,
}

#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    ExpiredToken,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),
}

/// Random printable secret for development runs without `JWT_SECRET`
pub fn generate_printable_secret() -> String {
    const ALLOWED: &[u8] =
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()-_=+";
    let mut rng = rand::thread_rng();
    (0..64)
        .map(|_| ALLOWED[rng.gen_range(0..ALLOWED.len())] as char)
        .collect()
}

/// JWT token service
#[derive(Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("issuer", &self.config.issuer)
            .field("audience", &self.config.audience)
            .finish_non_exhaustive()
    }
}

impl JwtService {
    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issue a token, returning it with its expiry timestamp (seconds)
    pub fn generate_token(
        &self,
        user_id: i64,
        username: &str,
        role_id: Option<i64>,
    ) -> Result<(String, i64), JwtError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.config.expiration_minutes);

        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            role: role_id.map(|r| r.to_string()).unwrap_or_default(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))?;
        Ok((token, claims.exp))
    }

    /// Validate signature, expiry, issuer and audience
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss", "aud"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                _ => JwtError::InvalidToken(e.to_string()),
            }
        })?;

        Ok(token_data.claims)
    }

    /// Extract the token from an `Authorization: Bearer <token>` header
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ").map(str::trim).filter(|t| !t.is_empty())
    }
}

/// Authenticated caller, injected into request extensions by `require_auth`
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    pub role_id: Option<i64>,
}

impl TryFrom<Claims> for CurrentUser {
    type Error = JwtError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let id = claims
            .sub
            .parse()
            .map_err(|_| JwtError::InvalidToken(format!("bad subject: {}", claims.sub)))?;
        Ok(Self {
            id,
            username: claims.username,
            role_id: claims.role.parse().ok(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(expiration_minutes: i64) -> JwtService {
        JwtService::with_config(JwtConfig {
            secret: "unit-test-secret-unit-test-secret-0123".into(),
            expiration_minutes,
            issuer: "timeless-server".into(),
            audience: "timeless-clients".into(),
        })
    }

    #[test]
    fn test_jwt_generation_and_validation() {
        let service = service(60);
        let (token, _) = service.generate_token(7, "ada", Some(2)).unwrap();
        let claims = service.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.username, "ada");

        let user = CurrentUser::try_from(claims).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.role_id, Some(2));
    }

    #[test]
    fn test_expired_token() {
        let service = service(-10);
        let (token, _) = service.generate_token(1, "ada", None).unwrap();
        assert!(matches!(service.validate_token(&token), Err(JwtError::ExpiredToken)));
    }

    #[test]
    fn test_foreign_secret_rejected() {
        let (token, _) = service(60).generate_token(1, "ada", None).unwrap();
        let other = JwtService::with_config(JwtConfig {
            secret: "another-secret-another-secret-another".into(),
            ..service(60).config
        });
        assert!(other.validate_token(&token).is_err());
    }

    #[test]
    fn test_extract_from_header() {
        assert_eq!(JwtService::extract_from_header("Bearer abc"), Some("abc"));
        assert_eq!(JwtService::extract_from_header("Basic abc"), None);
        assert_eq!(JwtService::extract_from_header("Bearer "), None);
    }

    #[test]
    fn test_printable_secret() {
        let secret = generate_printable_secret();
        assert_eq!(secret.len(), 64);
        assert!(secret.is_ascii());
    }
}
