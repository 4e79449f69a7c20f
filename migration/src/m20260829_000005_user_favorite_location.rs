use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260829_000001_user::User, m20260829_000003_location::Location};

static PK_USER_FAVORITE_LOCATION: &str = "pk-user_favorite_location";
static IDX_USER_FAVORITE_LOCATION_USER_ID: &str = "idx-user_favorite_location-user_id";
static FK_USER_FAVORITE_LOCATION_USER_ID: &str = "fk-user_favorite_location-user_id";
static FK_USER_FAVORITE_LOCATION_LOCATION_ID: &str = "fk-user_favorite_location-location_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline so the table also works on the
        // SQLite fallback backend, which cannot add constraints after the fact.
        manager
            .create_table(
                Table::create()
                    .table(UserFavoriteLocation::Table)
                    .if_not_exists()
                    .col(integer(UserFavoriteLocation::UserId))
                    .col(integer(UserFavoriteLocation::LocationId))
                    .primary_key(
                        Index::create()
                            .name(PK_USER_FAVORITE_LOCATION)
                            .col(UserFavoriteLocation::UserId)
                            .col(UserFavoriteLocation::LocationId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_FAVORITE_LOCATION_USER_ID)
                            .from(UserFavoriteLocation::Table, UserFavoriteLocation::UserId)
                            .to(User::Table, User::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_FAVORITE_LOCATION_LOCATION_ID)
                            .from(
                                UserFavoriteLocation::Table,
                                UserFavoriteLocation::LocationId,
                            )
                            .to(Location::Table, Location::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_FAVORITE_LOCATION_USER_ID)
                    .table(UserFavoriteLocation::Table)
                    .col(UserFavoriteLocation::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_FAVORITE_LOCATION_USER_ID)
                    .table(UserFavoriteLocation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserFavoriteLocation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserFavoriteLocation {
    Table,
    UserId,
    LocationId,
}
