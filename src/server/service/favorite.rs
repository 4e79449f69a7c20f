use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        character::CharacterRepository,
        favorite::{
            character::FavoriteCharacterRepository, location::FavoriteLocationRepository,
        },
        location::LocationRepository,
        user::UserRepository,
    },
    error::{favorite::FavoriteError, Error},
};

/// Maintains the per-user favorite sets.
///
/// Every mutation runs inside a transaction so the existence checks and the
/// junction write observe the same snapshot; an early error return drops the
/// transaction and rolls it back. Duplicate detection rides on the junction
/// composite primary key: the insert itself is the membership check, so
/// concurrent adds of the same pair cannot both succeed.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a character to a user's favorite set.
    ///
    /// Fails loudly if the pair is already present rather than succeeding
    /// as a no-op.
    pub async fn add_character(&self, user_id: i32, character_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        if UserRepository::new(&txn).get(user_id).await?.is_none() {
            return Err(FavoriteError::UserNotFound(user_id).into());
        }

        if CharacterRepository::new(&txn)
            .get(character_id)
            .await?
            .is_none()
        {
            return Err(FavoriteError::CharacterNotFound(character_id).into());
        }

        let favorite_repository = FavoriteCharacterRepository::new(&txn);

        if let Err(err) = favorite_repository.create(user_id, character_id).await {
            return match err.sql_err() {
                Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => {
                    Err(FavoriteError::AlreadyFavorite.into())
                }
                _ => Err(err.into()),
            };
        }

        txn.commit().await?;

        Ok(())
    }

    /// Removes a character from a user's favorite set.
    ///
    /// Fails loudly if the pair was never favorited.
    pub async fn remove_character(&self, user_id: i32, character_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        if UserRepository::new(&txn).get(user_id).await?.is_none() {
            return Err(FavoriteError::UserNotFound(user_id).into());
        }

        if CharacterRepository::new(&txn)
            .get(character_id)
            .await?
            .is_none()
        {
            return Err(FavoriteError::CharacterNotFound(character_id).into());
        }

        let delete_result = FavoriteCharacterRepository::new(&txn)
            .delete(user_id, character_id)
            .await?;

        if delete_result.rows_affected == 0 {
            return Err(FavoriteError::NotAFavorite.into());
        }

        txn.commit().await?;

        Ok(())
    }

    /// Adds a location to a user's favorite set.
    pub async fn add_location(&self, user_id: i32, location_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        if UserRepository::new(&txn).get(user_id).await?.is_none() {
            return Err(FavoriteError::UserNotFound(user_id).into());
        }

        if LocationRepository::new(&txn)
            .get(location_id)
            .await?
            .is_none()
        {
            return Err(FavoriteError::LocationNotFound(location_id).into());
        }

        let favorite_repository = FavoriteLocationRepository::new(&txn);

        if let Err(err) = favorite_repository.create(user_id, location_id).await {
            return match err.sql_err() {
                Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => {
                    Err(FavoriteError::AlreadyFavorite.into())
                }
                _ => Err(err.into()),
            };
        }

        txn.commit().await?;

        Ok(())
    }

    /// Removes a location from a user's favorite set.
    pub async fn remove_location(&self, user_id: i32, location_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        if UserRepository::new(&txn).get(user_id).await?.is_none() {
            return Err(FavoriteError::UserNotFound(user_id).into());
        }

        if LocationRepository::new(&txn)
            .get(location_id)
            .await?
            .is_none()
        {
            return Err(FavoriteError::LocationNotFound(location_id).into());
        }

        let delete_result = FavoriteLocationRepository::new(&txn)
            .delete(user_id, location_id)
            .await?;

        if delete_result.rows_affected == 0 {
            return Err(FavoriteError::NotAFavorite.into());
        }

        txn.commit().await?;

        Ok(())
    }

    /// Returns both favorite sets for a user, eagerly resolved to the
    /// mirrored catalog rows
    pub async fn get_favorites(
        &self,
        user_id: i32,
    ) -> Result<(Vec<entity::character::Model>, Vec<entity::location::Model>), Error> {
        if UserRepository::new(self.db).get(user_id).await?.is_none() {
            return Err(FavoriteError::UserNotFound(user_id).into());
        }

        let characters = FavoriteCharacterRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;
        let locations = FavoriteLocationRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;

        Ok((characters, locations))
    }
}
