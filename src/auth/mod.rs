//! Request authentication for the Notify API.
//!
//! Every request is signed with a short-lived JWT: HS256 over `{iss, iat}`
//! using the service API key as the symmetric secret. The claims are created
//! on first use and cached for the lifetime of the issuer, so `iat` is fixed
//! at first issue rather than refreshed per request. Callers that need
//! per-request freshness should construct a new client.

use crate::errors::{NotifyError, NotifyResult};
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// JWT claims carried by a request token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Issuer: the service ID.
    pub iss: String,
    /// Issued at (Unix timestamp).
    pub iat: i64,
}

/// Issues signed bearer tokens for API requests.
pub struct TokenIssuer {
    service_id: String,
    api_key: SecretString,
    // Populated once on first issue; the benign first-use race produces
    // equivalent claims either way.
    claims: RwLock<Option<TokenClaims>>,
}

impl TokenIssuer {
    /// Creates a new token issuer.
    pub fn new(service_id: impl Into<String>, api_key: SecretString) -> Self {
        Self {
            service_id: service_id.into(),
            api_key,
            claims: RwLock::new(None),
        }
    }

    /// Returns a signed compact JWT for the Authorization header.
    pub async fn bearer_token(&self) -> NotifyResult<String> {
        let claims = self.current_claims().await;

        let key = EncodingKey::from_secret(self.api_key.expose_secret().as_bytes());
        encode(&Header::new(Algorithm::HS256), &claims, &key).map_err(|e| {
            NotifyError::authentication(format!("failed to sign request token: {}", e))
        })
    }

    /// Returns the cached claims, initializing them if absent.
    async fn current_claims(&self) -> TokenClaims {
        {
            let cached = self.claims.read().await;
            if let Some(ref claims) = *cached {
                return claims.clone();
            }
        }

        let mut cached = self.claims.write().await;
        cached
            .get_or_insert_with(|| TokenClaims {
                iss: self.service_id.clone(),
                iat: Utc::now().timestamp(),
            })
            .clone()
    }

    /// Returns the cached claims, if any have been issued yet.
    pub async fn claims(&self) -> Option<TokenClaims> {
        self.claims.read().await.clone()
    }
}
