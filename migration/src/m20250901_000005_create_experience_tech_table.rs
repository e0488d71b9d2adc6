use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `experience_tech` join table.
#[derive(DeriveIden)]
enum ExperienceTech {
    Table,
    ExperienceId,
    TechId,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum TechStacks {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExperienceTech::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExperienceTech::ExperienceId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ExperienceTech::TechId).uuid().not_null())
                    // Composite key: one row per (experience, tech) pair.
                    .primary_key(
                        Index::create()
                            .col(ExperienceTech::ExperienceId)
                            .col(ExperienceTech::TechId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experience_tech_experience_id")
                            .from(ExperienceTech::Table, ExperienceTech::ExperienceId)
                            .to(Experiences::Table, Experiences::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experience_tech_tech_id")
                            .from(ExperienceTech::Table, ExperienceTech::TechId)
                            .to(TechStacks::Table, TechStacks::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ExperienceTech::Table).to_owned())
            .await
    }
}
