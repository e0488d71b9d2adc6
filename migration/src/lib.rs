pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_portfolios_table;
mod m20250901_000002_create_portfolio_images_table;
mod m20250901_000003_create_experiences_table;
mod m20250901_000004_create_tech_stacks_table;
mod m20250901_000005_create_experience_tech_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_portfolios_table::Migration),
            Box::new(m20250901_000002_create_portfolio_images_table::Migration),
            Box::new(m20250901_000003_create_experiences_table::Migration),
            Box::new(m20250901_000004_create_tech_stacks_table::Migration),
            Box::new(m20250901_000005_create_experience_tech_table::Migration),
        ]
    }
}
