use actix_web::{HttpResponse, Responder};

use crate::auth::middleware::AdminUser;

/// GET /api/auth/me — resolve the bearer token to the operator's identity.
/// The login and admin pages branch on this: 401 sends the visitor to the
/// login page, 200 lets them into the content manager.
pub async fn me(user: AdminUser) -> impl Responder {
    HttpResponse::Ok().json(user)
}
