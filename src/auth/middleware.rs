use actix_web::FromRequest;
use actix_web::{Error, HttpRequest, dev::Payload, web};
use serde::Serialize;
use std::future::Future;
use std::pin::Pin;
use uuid::Uuid;

use crate::auth::TokenVerifier;

/// The operator identity resolved from a verified Supabase session token.
///
/// This site has no users table of its own — whoever holds a valid session
/// with the Supabase project is the content manager. When `ADMIN_EMAIL` is
/// configured the token's email must also match it.
#[derive(Debug, Serialize)]
pub struct AdminUser {
    pub id: Uuid,
    pub email: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

/// Optional single-operator restriction, set from `ADMIN_EMAIL` at startup.
#[derive(Clone)]
pub struct AdminEmail(pub Option<String>);

impl FromRequest for AdminUser {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            // 1. Extract the Bearer token from the Authorization header.
            let auth_header = req
                .headers()
                .get("Authorization")
                .and_then(|v| v.to_str().ok())
                .ok_or_else(|| {
                    actix_web::error::ErrorUnauthorized("Missing Authorization header")
                })?;

            let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
                actix_web::error::ErrorUnauthorized("Authorization header must be: Bearer <token>")
            })?;

            // 2. Validate the JWT.
            let verifier = req.app_data::<web::Data<TokenVerifier>>().ok_or_else(|| {
                actix_web::error::ErrorInternalServerError("Token verifier not configured")
            })?;

            let claims = verifier
                .validate(token)
                .await
                .map_err(|e| actix_web::error::ErrorUnauthorized(format!("Invalid token: {e}")))?;

            // 3. Build the identity from the claims.
            let id = claims
                .user_id()
                .map_err(actix_web::error::ErrorUnauthorized)?;

            let email = claims
                .user_email()
                .ok_or_else(|| actix_web::error::ErrorUnauthorized("No email in token claims"))?;

            // 4. Enforce the single-operator restriction when configured.
            if let Some(AdminEmail(Some(admin_email))) =
                req.app_data::<web::Data<AdminEmail>>().map(|d| d.get_ref())
            {
                if !email.eq_ignore_ascii_case(admin_email) {
                    return Err(actix_web::error::ErrorForbidden(
                        "This account is not the site administrator",
                    ));
                }
            }

            Ok(AdminUser {
                id,
                email,
                display_name: claims.display_name(),
                avatar_url: claims.avatar_url(),
            })
        })
    }
}
