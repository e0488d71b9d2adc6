use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `tech_stacks` table. Names are unique and matched
/// exactly — no case folding, no trimming beyond the form's own.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tech_stacks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::experience_tech::Entity")]
    ExperienceTech,
}

impl Related<super::experience_tech::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExperienceTech.def()
    }
}

impl Related<super::experience::Entity> for Entity {
    fn to() -> RelationDef {
        super::experience_tech::Relation::Experience.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::experience_tech::Relation::TechStack.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
