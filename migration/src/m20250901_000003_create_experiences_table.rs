use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `experiences` table and its columns.
#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    Title,
    ProjectStart,
    ProjectEnd,
    Description,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiences::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Experiences::Title).string().not_null())
                    .col(ColumnDef::new(Experiences::ProjectStart).date().not_null())
                    // NULL means the project is ongoing.
                    .col(ColumnDef::new(Experiences::ProjectEnd).date())
                    .col(ColumnDef::new(Experiences::Description).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await
    }
}
