use sea_orm::*;
use uuid::Uuid;

use crate::models::tech_stack;

/// Find-or-insert a tech stack by exact name and return its id.
pub async fn ensure_tech_stack(db: &DatabaseConnection, name: &str) -> Result<Uuid, DbErr> {
    if let Some(existing) = tech_stack::Entity::find()
        .filter(tech_stack::Column::Name.eq(name))
        .one(db)
        .await?
    {
        return Ok(existing.id);
    }

    let inserted = tech_stack::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
    }
    .insert(db)
    .await?;

    Ok(inserted.id)
}

/// Resolve a list of names to tech-stack ids, one sequential
/// find-or-insert per name.
pub async fn resolve_names(db: &DatabaseConnection, names: &[String]) -> Result<Vec<Uuid>, DbErr> {
    let mut ids = Vec::with_capacity(names.len());
    for name in names {
        ids.push(ensure_tech_stack(db, name).await?);
    }
    Ok(ids)
}
