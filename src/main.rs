use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use folio_backend::auth::TokenVerifier;
use folio_backend::auth::jwks::JwksCache;
use folio_backend::auth::middleware::AdminEmail;
use folio_backend::create_pool;
use folio_backend::handlers;
use folio_backend::storage::StorageClient;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let db = create_pool().await;
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    let db_data = web::Data::new(db);

    let supabase_url = std::env::var("SUPABASE_URL").expect("SUPABASE_URL must be set");

    // Prefer the legacy HS256 secret when configured (local development,
    // self-hosted projects); otherwise validate against the project JWKS.
    let verifier = match std::env::var("SUPABASE_JWT_SECRET") {
        Ok(secret) => TokenVerifier::Secret(secret),
        Err(_) => {
            let project_ref = supabase_url
                .strip_prefix("https://")
                .and_then(|s| s.strip_suffix(".supabase.co"))
                .expect("Invalid SUPABASE_URL format. Expected: https://PROJECT.supabase.co");
            let anon_key =
                std::env::var("SUPABASE_ANON_KEY").expect("SUPABASE_ANON_KEY must be set");
            TokenVerifier::Jwks(Arc::new(JwksCache::new(project_ref, &anon_key)))
        }
    };
    let verifier_data = web::Data::new(verifier);

    let service_key =
        std::env::var("SUPABASE_SERVICE_ROLE_KEY").expect("SUPABASE_SERVICE_ROLE_KEY must be set");
    let bucket = std::env::var("STORAGE_BUCKET").unwrap_or_else(|_| "portfolio-images".to_string());
    let storage_data = web::Data::new(StorageClient::new(&supabase_url, &service_key, &bucket));

    let admin_email = web::Data::new(AdminEmail(std::env::var("ADMIN_EMAIL").ok()));

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_addr = format!("0.0.0.0:{port}");
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(db_data.clone())
            .app_data(verifier_data.clone())
            .app_data(storage_data.clone())
            .app_data(admin_email.clone())
            .service(web::scope("/api").configure(handlers::init_routes))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
