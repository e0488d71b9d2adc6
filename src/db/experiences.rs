use sea_orm::*;
use uuid::Uuid;

use crate::models::experience::{self, ExperienceForm, ExperienceWithTechs};
use crate::models::experience_tech;
use crate::models::tech_stack;

/// Insert a new experience row. Join rows are attached afterwards; if this
/// insert fails, no tagging happens at all.
pub async fn insert_experience(
    db: &DatabaseConnection,
    form: &ExperienceForm,
) -> Result<experience::Model, DbErr> {
    let new_experience = experience::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(form.title.clone()),
        project_start: Set(form.project_start),
        project_end: Set(form.project_end),
        description: Set(form.description.clone()),
    };

    new_experience.insert(db).await
}

/// Fetch all experiences with their tech names, most recent start first.
pub async fn get_all_with_techs(
    db: &DatabaseConnection,
) -> Result<Vec<ExperienceWithTechs>, DbErr> {
    let rows = experience::Entity::find()
        .find_with_related(tech_stack::Entity)
        .order_by_desc(experience::Column::ProjectStart)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(exp, techs)| ExperienceWithTechs::from_join(exp, techs))
        .collect())
}

/// Fetch a single experience row.
pub async fn get_experience_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<experience::Model>, DbErr> {
    experience::Entity::find_by_id(id).one(db).await
}

/// Full-field update of an experience row.
pub async fn update_experience(
    db: &DatabaseConnection,
    id: Uuid,
    form: &ExperienceForm,
) -> Result<experience::Model, DbErr> {
    let item = experience::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Experience not found".to_string()))?;

    let mut active: experience::ActiveModel = item.into();
    active.title = Set(form.title.clone());
    active.project_start = Set(form.project_start);
    active.project_end = Set(form.project_end);
    active.description = Set(form.description.clone());

    active.update(db).await
}

/// Delete an experience row by ID; its join rows cascade in the database.
pub async fn delete_experience(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    experience::Entity::delete_by_id(id).exec(db).await
}

// ── Tagging ──

/// Insert one join row per resolved tech id.
pub async fn attach_techs(
    db: &DatabaseConnection,
    experience_id: Uuid,
    tech_ids: &[Uuid],
) -> Result<(), DbErr> {
    if tech_ids.is_empty() {
        return Ok(());
    }

    let rows = tech_ids.iter().map(|tech_id| experience_tech::ActiveModel {
        experience_id: Set(experience_id),
        tech_id: Set(*tech_id),
    });
    experience_tech::Entity::insert_many(rows).exec(db).await?;
    Ok(())
}

/// Replace the tag set for an experience: delete every existing join row,
/// then insert the new set. After this the join set equals `tech_ids`
/// exactly, regardless of what was there before.
pub async fn replace_techs(
    db: &DatabaseConnection,
    experience_id: Uuid,
    tech_ids: &[Uuid],
) -> Result<(), DbErr> {
    experience_tech::Entity::delete_many()
        .filter(experience_tech::Column::ExperienceId.eq(experience_id))
        .exec(db)
        .await?;

    attach_techs(db, experience_id, tech_ids).await
}
