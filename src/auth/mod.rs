pub mod jwks;
pub mod jwt;
pub mod middleware;

use std::sync::Arc;

use crate::auth::jwks::JwksCache;
use crate::auth::jwt::Claims;

/// How incoming bearer tokens are checked: against the Supabase project's
/// JWKS endpoint (ES256, the current signing scheme) or, when
/// `SUPABASE_JWT_SECRET` is configured, the legacy shared secret (HS256).
#[derive(Clone)]
pub enum TokenVerifier {
    Jwks(Arc<JwksCache>),
    Secret(String),
}

impl TokenVerifier {
    pub async fn validate(&self, token: &str) -> Result<Claims, String> {
        match self {
            TokenVerifier::Jwks(cache) => cache.validate_token(token).await.map(|td| td.claims),
            TokenVerifier::Secret(secret) => jwt::validate_with_secret(token, secret),
        }
    }
}
