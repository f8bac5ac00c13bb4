//! Database migrations for the prelaunch signup service.
//!
//! This module contains all database migrations using SeaORM Migration.

pub use sea_orm_migration::prelude::*;

mod m2025_08_20_000001_create_prelaunch_signups;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(
            m2025_08_20_000001_create_prelaunch_signups::Migration,
        )]
    }
}
