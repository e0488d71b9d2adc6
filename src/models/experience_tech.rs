use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Join table between experiences and tech stacks. On every experience
/// update the full set for that experience is deleted and re-inserted from
/// the submitted tech string — there is no diffing.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "experience_tech")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub experience_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub tech_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::experience::Entity",
        from = "Column::ExperienceId",
        to = "super::experience::Column::Id"
    )]
    Experience,
    #[sea_orm(
        belongs_to = "super::tech_stack::Entity",
        from = "Column::TechId",
        to = "super::tech_stack::Column::Id"
    )]
    TechStack,
}

impl Related<super::experience::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Experience.def()
    }
}

impl Related<super::tech_stack::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TechStack.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
