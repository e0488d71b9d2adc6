use actix_web::{HttpResponse, Responder, web};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AdminUser;
use crate::db::portfolios as portfolio_db;
use crate::models::portfolio::{ImageUpload, PortfolioInput};
use crate::storage::{self, StorageClient};

/// GET /api/portfolios — all portfolios with nested images, newest first.
pub async fn get_portfolios(db: web::Data<DatabaseConnection>) -> impl Responder {
    match portfolio_db::get_all_with_images(db.get_ref()).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch portfolios: {e}"),
        })),
    }
}

/// GET /api/portfolios/teaser — the home-page teaser: the three most
/// recently inserted portfolios, newest first.
pub async fn get_teaser(db: web::Data<DatabaseConnection>) -> impl Responder {
    match portfolio_db::get_teaser(db.get_ref()).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch portfolios: {e}"),
        })),
    }
}

/// GET /api/portfolios/{id} — a single portfolio with its images. Answers
/// 404 for a missing row, 500 for a failed query.
pub async fn get_portfolio(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match portfolio_db::get_by_id_with_images(db.get_ref(), id).await {
        Ok(Some(item)) => HttpResponse::Ok().json(item),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Portfolio {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// POST /api/portfolios — create a portfolio, then upload any submitted
/// images sequentially. A failed upload is reported but does not abort the
/// remaining files.
pub async fn create_portfolio(
    _user: AdminUser,
    db: web::Data<DatabaseConnection>,
    storage: web::Data<StorageClient>,
    body: web::Json<PortfolioInput>,
) -> impl Responder {
    let input = body.into_inner();
    if let Err(errors) = input.validate() {
        return HttpResponse::UnprocessableEntity().json(errors);
    }

    let created = match portfolio_db::insert_portfolio(db.get_ref(), &input).await {
        Ok(item) => item,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to create portfolio: {e}"),
            }));
        }
    };

    let upload_errors =
        upload_images(storage.get_ref(), db.get_ref(), created.id, &input.images).await;

    HttpResponse::Created().json(serde_json::json!({
        "portfolio": created,
        "upload_errors": upload_errors,
    }))
}

/// PUT /api/portfolios/{id} — update the row; when new images are
/// submitted, the stored set is replaced: old objects are removed
/// best-effort, old rows deleted, then the new files uploaded. With no
/// images submitted the existing set is left untouched.
pub async fn update_portfolio(
    _user: AdminUser,
    db: web::Data<DatabaseConnection>,
    storage: web::Data<StorageClient>,
    path: web::Path<Uuid>,
    body: web::Json<PortfolioInput>,
) -> impl Responder {
    let id = path.into_inner();
    let input = body.into_inner();
    if let Err(errors) = input.validate() {
        return HttpResponse::UnprocessableEntity().json(errors);
    }

    let updated = match portfolio_db::update_portfolio(db.get_ref(), id, &input).await {
        Ok(item) => item,
        Err(sea_orm::DbErr::RecordNotFound(_)) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Portfolio {id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to update portfolio: {e}"),
            }));
        }
    };

    let mut upload_errors = Vec::new();
    if !input.images.is_empty() {
        if let Err(e) = replace_images(storage.get_ref(), db.get_ref(), id).await {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to clear old images: {e}"),
            }));
        }
        upload_errors = upload_images(storage.get_ref(), db.get_ref(), id, &input.images).await;
    }

    HttpResponse::Ok().json(serde_json::json!({
        "portfolio": updated,
        "upload_errors": upload_errors,
    }))
}

/// DELETE /api/portfolios/{id} — delete the row. Image rows cascade;
/// stored objects are left behind (known gap, kept from the original
/// workflow).
pub async fn delete_portfolio(
    _user: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match portfolio_db::delete_portfolio(db.get_ref(), id).await {
        Ok(result) => {
            if result.rows_affected > 0 {
                HttpResponse::Ok().json(serde_json::json!({
                    "message": format!("Portfolio {id} deleted"),
                }))
            } else {
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": format!("Portfolio {id} not found"),
                }))
            }
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete portfolio: {e}"),
        })),
    }
}

/// Upload each submitted image in turn and record its public URL. Failures
/// are collected per file; the loop keeps going.
async fn upload_images(
    storage: &StorageClient,
    db: &DatabaseConnection,
    portfolio_id: Uuid,
    images: &[ImageUpload],
) -> Vec<String> {
    let mut failures = Vec::new();

    for image in images {
        let bytes = match BASE64.decode(&image.data) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("Rejected image payload {}: {e}", image.file_name);
                failures.push(format!("{}: invalid base64 payload", image.file_name));
                continue;
            }
        };

        let path = format!(
            "{portfolio_id}/{}",
            storage::unique_object_name(&image.file_name)
        );
        let content_type = image
            .content_type
            .as_deref()
            .unwrap_or_else(|| storage::content_type_for(&image.file_name));

        if let Err(e) = storage.upload(&path, bytes, content_type).await {
            tracing::warn!("Failed to upload {}: {e}", image.file_name);
            failures.push(format!("{}: upload failed", image.file_name));
            continue;
        }

        let url = storage.public_url(&path);
        if let Err(e) = portfolio_db::insert_image(db, portfolio_id, url).await {
            tracing::warn!("Failed to record image row for {}: {e}", image.file_name);
            failures.push(format!("{}: database insert failed", image.file_name));
        }
    }

    failures
}

/// Clear a portfolio's current image set: remove each stored object
/// best-effort (a missing object only logs a warning), then delete the
/// rows. Delete-before-upload matches the original admin flow; a crash in
/// between leaves the portfolio imageless until the operator retries.
async fn replace_images(
    storage: &StorageClient,
    db: &DatabaseConnection,
    portfolio_id: Uuid,
) -> Result<(), sea_orm::DbErr> {
    let old_images = portfolio_db::get_images(db, portfolio_id).await?;

    for image in &old_images {
        let Some(path) = storage::object_path_from_url(portfolio_id, &image.image_url) else {
            tracing::warn!("Could not derive storage path from {}", image.image_url);
            continue;
        };
        if let Err(e) = storage.remove(&path).await {
            tracing::warn!("Failed to delete stored object {path}: {e}");
        }
    }

    portfolio_db::delete_images(db, portfolio_id).await?;
    Ok(())
}
