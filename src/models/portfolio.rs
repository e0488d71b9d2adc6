use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::FieldErrors;
use crate::models::portfolio_image::ImageRef;

/// SeaORM entity for the `portfolios` table.
///
/// `description` is raw HTML authored in the admin's rich-text editor and
/// stored verbatim (trusted author, rendered unescaped on public pages).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolios")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub excerpt: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub link: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::portfolio_image::Entity")]
    Images,
}

impl Related<super::portfolio_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Images.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// One image submitted with a portfolio form: the original file name (kept
/// for its extension) and the base64-encoded file contents.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageUpload {
    pub file_name: String,
    pub data: String,
    pub content_type: Option<String>,
}

/// Full-field payload shared by create and update — the admin form always
/// submits every column. A non-empty `images` array replaces the stored
/// image set on update; an empty one leaves it untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioInput {
    pub title: String,
    pub excerpt: String,
    pub description: String,
    pub link: String,
    #[serde(default)]
    pub images: Vec<ImageUpload>,
}

impl PortfolioInput {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.require("title", &self.title, "Title is required");
        errors.require("excerpt", &self.excerpt, "Excerpt is required");
        errors.require("description", &self.description, "Description is required");
        errors.require("link", &self.link, "Link is required");
        errors.into_result()
    }
}

/// Wire shape for the read endpoints: a portfolio with its image rows
/// flattened into an `images` array.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioWithImages {
    pub id: Uuid,
    pub title: String,
    pub excerpt: String,
    pub description: String,
    pub link: String,
    pub created_at: DateTimeUtc,
    pub images: Vec<ImageRef>,
}

impl PortfolioWithImages {
    pub fn from_join(model: Model, images: Vec<super::portfolio_image::Model>) -> Self {
        Self {
            id: model.id,
            title: model.title,
            excerpt: model.excerpt,
            description: model.description,
            link: model.link,
            created_at: model.created_at,
            images: images.into_iter().map(ImageRef::from).collect(),
        }
    }
}
