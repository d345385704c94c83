pub use sea_orm_migration::prelude::*;

mod m20251210_000001_create_user_table;
mod m20251210_000002_create_guild_config_table;
mod m20251211_000003_create_moderation_log_table;
mod m20251211_000004_create_giveaway_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251210_000001_create_user_table::Migration),
            Box::new(m20251210_000002_create_guild_config_table::Migration),
            Box::new(m20251211_000003_create_moderation_log_table::Migration),
            Box::new(m20251211_000004_create_giveaway_table::Migration),
        ]
    }
}
