//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20250612_000001_create_users_table;
mod m20250612_000002_create_catalog_tables;
mod m20250615_000001_create_order_tables;
mod m20250701_000001_create_wastage_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250612_000001_create_users_table::Migration),
            Box::new(m20250612_000002_create_catalog_tables::Migration),
            Box::new(m20250615_000001_create_order_tables::Migration),
            Box::new(m20250701_000001_create_wastage_table::Migration),
        ]
    }
}
