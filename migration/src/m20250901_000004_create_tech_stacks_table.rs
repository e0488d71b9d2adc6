use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `tech_stacks` table and its columns.
#[derive(DeriveIden)]
enum TechStacks {
    Table,
    Id,
    Name,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TechStacks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TechStacks::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    // Exact-match dedup: find-or-insert keys on this column.
                    .col(
                        ColumnDef::new(TechStacks::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TechStacks::Table).to_owned())
            .await
    }
}
