use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `portfolio_images` table and its columns.
#[derive(DeriveIden)]
enum PortfolioImages {
    Table,
    Id,
    PortfolioId,
    ImageUrl,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Portfolios {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PortfolioImages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioImages::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PortfolioImages::PortfolioId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PortfolioImages::ImageUrl).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolio_images_portfolio_id")
                            .from(PortfolioImages::Table, PortfolioImages::PortfolioId)
                            .to(Portfolios::Table, Portfolios::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The replace flow always selects by portfolio.
        manager
            .create_index(
                Index::create()
                    .name("idx_portfolio_images_portfolio_id")
                    .table(PortfolioImages::Table)
                    .col(PortfolioImages::PortfolioId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PortfolioImages::Table).to_owned())
            .await
    }
}
