//! Bearer token verification
//!
//! The identity provider (Supabase Auth) signs access tokens with HS256 using
//! the project's JWT secret. The `sub` claim carries the member's UUID.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Access token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (member ID)
    pub sub: String,
    /// Audience, `authenticated` for signed-in members
    pub aud: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Claims {
    /// Get the member ID
    ///
    /// # Errors
    /// Returns an error if the subject is not a UUID
    pub fn member_id(&self) -> AppResult<Uuid> {
        self.sub.parse::<Uuid>().map_err(|_| AppError::InvalidToken)
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Verifies (and, for tooling and tests, issues) member access tokens
#[derive(Clone)]
pub struct TokenVerifier {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    audience: String,
}

impl TokenVerifier {
    /// Create a verifier for the given shared secret and audience
    #[must_use]
    pub fn new(secret: &str, audience: impl Into<String>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            audience: audience.into(),
        }
    }

    /// Decode and validate a token
    ///
    /// # Errors
    /// Returns `TokenExpired` for expired tokens and `InvalidToken` otherwise
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[self.audience.as_str()]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        Ok(token_data.claims)
    }

    /// Resolve a bearer token to the member it was issued for
    ///
    /// # Errors
    /// Returns an error if the token is invalid, expired, or has a non-UUID subject
    pub fn member_id(&self, token: &str) -> AppResult<Uuid> {
        self.verify(token)?.member_id()
    }

    /// Issue a token for a member, valid for `ttl_seconds`
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, member_id: Uuid, ttl_seconds: i64) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: member_id.to_string(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
            email: None,
            role: Some(self.audience.clone()),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("audience", &self.audience)
            .finish_non_exhaustive()
    }
}
