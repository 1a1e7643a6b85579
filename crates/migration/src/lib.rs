mod m20250612_094512_create_tables;
mod m20250612_101048_seed_games;

use sea_orm_migration::prelude::*;

pub use sea_orm_migration::MigratorTrait;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250612_094512_create_tables::Migration),
            Box::new(m20250612_101048_seed_games::Migration),
        ]
    }
}
