use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AdminUser;
use crate::db::experiences as experience_db;
use crate::db::tech_stacks;
use crate::models::experience::ExperienceInput;

/// GET /api/experiences — all experiences with their tech names, most
/// recent start first.
pub async fn get_experiences(db: web::Data<DatabaseConnection>) -> impl Responder {
    match experience_db::get_all_with_techs(db.get_ref()).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch experiences: {e}"),
        })),
    }
}

/// POST /api/experiences — create an experience, then resolve the tech
/// names and attach join rows. Tagging is best-effort: a failure after the
/// experience insert leaves the row untagged rather than failing the whole
/// request, matching the admin workflow this replaces.
pub async fn create_experience(
    _user: AdminUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<ExperienceInput>,
) -> impl Responder {
    let form = match body.into_inner().validate() {
        Ok(form) => form,
        Err(errors) => return HttpResponse::UnprocessableEntity().json(errors),
    };

    let created = match experience_db::insert_experience(db.get_ref(), &form).await {
        Ok(item) => item,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to create experience: {e}"),
            }));
        }
    };

    if let Err(e) = tag_experience(db.get_ref(), created.id, &form.tech_names, false).await {
        tracing::warn!("Failed to tag experience {}: {e}", created.id);
    }

    HttpResponse::Created().json(created)
}

/// PUT /api/experiences/{id} — full-field update, then replace the tag
/// set: every existing join row is deleted and the set re-inserted from
/// the submitted tech string.
pub async fn update_experience(
    _user: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<ExperienceInput>,
) -> impl Responder {
    let id = path.into_inner();
    let form = match body.into_inner().validate() {
        Ok(form) => form,
        Err(errors) => return HttpResponse::UnprocessableEntity().json(errors),
    };

    let updated = match experience_db::update_experience(db.get_ref(), id, &form).await {
        Ok(item) => item,
        Err(sea_orm::DbErr::RecordNotFound(_)) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Experience {id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to update experience: {e}"),
            }));
        }
    };

    if let Err(e) = tag_experience(db.get_ref(), id, &form.tech_names, true).await {
        tracing::warn!("Failed to retag experience {id}: {e}");
    }

    HttpResponse::Ok().json(updated)
}

/// DELETE /api/experiences/{id} — delete the row; join rows cascade in the
/// database.
pub async fn delete_experience(
    _user: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match experience_db::delete_experience(db.get_ref(), id).await {
        Ok(result) => {
            if result.rows_affected > 0 {
                HttpResponse::Ok().json(serde_json::json!({
                    "message": format!("Experience {id} deleted"),
                }))
            } else {
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": format!("Experience {id} not found"),
                }))
            }
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete experience: {e}"),
        })),
    }
}

/// Resolve each tech name through find-or-insert, then attach the join
/// rows — replacing the existing set first when `replace` is set.
async fn tag_experience(
    db: &DatabaseConnection,
    experience_id: Uuid,
    tech_names: &[String],
    replace: bool,
) -> Result<(), sea_orm::DbErr> {
    let tech_ids = tech_stacks::resolve_names(db, tech_names).await?;
    if replace {
        experience_db::replace_techs(db, experience_id, &tech_ids).await
    } else {
        experience_db::attach_techs(db, experience_id, &tech_ids).await
    }
}
