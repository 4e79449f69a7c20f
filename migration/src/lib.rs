pub use sea_orm_migration::prelude::*;

mod m20260829_000001_user;
mod m20260829_000002_character;
mod m20260829_000003_location;
mod m20260829_000004_user_favorite_character;
mod m20260829_000005_user_favorite_location;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260829_000001_user::Migration),
            Box::new(m20260829_000002_character::Migration),
            Box::new(m20260829_000003_location::Migration),
            Box::new(m20260829_000004_user_favorite_character::Migration),
            Box::new(m20260829_000005_user_favorite_location::Migration),
        ]
    }
}
