use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::FieldErrors;

/// SeaORM entity for the `experiences` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub project_start: Date,
    /// `None` means the project is ongoing and renders as "Present".
    pub project_end: Option<Date>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
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

impl Related<super::tech_stack::Entity> for Entity {
    fn to() -> RelationDef {
        super::experience_tech::Relation::TechStack.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::experience_tech::Relation::Experience.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Raw admin-form payload. `tech_input` is the comma-separated string the
/// operator types ("React, Node.js, MySQL"); it is parsed after validation.
#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceInput {
    pub title: String,
    pub project_start: Option<NaiveDate>,
    pub project_end: Option<NaiveDate>,
    pub description: String,
    pub tech_input: String,
}

/// The validated form, with the start date resolved and the tech string
/// parsed into names. Only this shape reaches the database layer.
#[derive(Debug, Clone)]
pub struct ExperienceForm {
    pub title: String,
    pub project_start: NaiveDate,
    pub project_end: Option<NaiveDate>,
    pub description: String,
    pub tech_names: Vec<String>,
}

impl ExperienceInput {
    /// Validation mirrors the admin form: every required field must be
    /// non-blank after trimming. Note that a `tech_input` like `" , "`
    /// passes (the raw string is non-empty) yet parses to zero names; the
    /// experience then simply ends up untagged.
    pub fn validate(self) -> Result<ExperienceForm, FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.require("title", &self.title, "Title is required");
        if self.project_start.is_none() {
            errors.insert("project_start", "Project start is required");
        }
        errors.require("description", &self.description, "Description is required");
        errors.require("tech_input", &self.tech_input, "Tech stack is required");

        match (errors.is_empty(), self.project_start) {
            (true, Some(project_start)) => Ok(ExperienceForm {
                title: self.title,
                project_start,
                project_end: self.project_end,
                description: self.description,
                tech_names: parse_tech_input(&self.tech_input),
            }),
            _ => Err(errors),
        }
    }
}

/// Split a comma-separated tech string into names: trimmed, empties
/// dropped, exact-match duplicates collapsed to their first occurrence.
/// Deduplication is required because `experience_tech` has a composite
/// primary key, so a repeated (experience, tech) pair cannot be inserted.
pub fn parse_tech_input(raw: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for part in raw.split(',') {
        let name = part.trim();
        if name.is_empty() || names.iter().any(|n| n == name) {
            continue;
        }
        names.push(name.to_string());
    }
    names
}

/// Wire shape for the read endpoint: an experience with its tech names
/// flattened out of the join and a preformatted date range.
#[derive(Debug, Clone, Serialize)]
pub struct ExperienceWithTechs {
    pub id: Uuid,
    pub title: String,
    pub project_start: NaiveDate,
    pub project_end: Option<NaiveDate>,
    pub description: String,
    pub period: String,
    pub techs: Vec<String>,
}

impl ExperienceWithTechs {
    pub fn from_join(model: Model, techs: Vec<super::tech_stack::Model>) -> Self {
        Self {
            id: model.id,
            title: model.title,
            period: format_period(model.project_start, model.project_end),
            project_start: model.project_start,
            project_end: model.project_end,
            description: model.description,
            techs: techs.into_iter().map(|t| t.name).collect(),
        }
    }
}

/// "Sep 2023 - Jan 2024", or "Sep 2023 - Present" for an ongoing project.
pub fn format_period(start: NaiveDate, end: Option<NaiveDate>) -> String {
    let start = start.format("%b %Y");
    match end {
        Some(end) => format!("{start} - {}", end.format("%b %Y")),
        None => format!("{start} - Present"),
    }
}
