use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter,
};

pub struct FavoriteLocationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteLocationRepository<'a, C> {
    /// Creates a new instance of [`FavoriteLocationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a favorite pair
    ///
    /// Both the user and the location must already exist; the junction's
    /// foreign keys reject anything else, and its composite primary key
    /// rejects a duplicate pair.
    pub async fn create(
        &self,
        user_id: i32,
        location_id: i32,
    ) -> Result<entity::user_favorite_location::Model, DbErr> {
        let favorite = entity::user_favorite_location::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            location_id: ActiveValue::Set(location_id),
        };

        favorite.insert(self.db).await
    }

    /// Membership check for a single pair
    pub async fn get(
        &self,
        user_id: i32,
        location_id: i32,
    ) -> Result<Option<entity::user_favorite_location::Model>, DbErr> {
        entity::prelude::UserFavoriteLocation::find_by_id((user_id, location_id))
            .one(self.db)
            .await
    }

    /// Deletes a favorite pair
    ///
    /// Returns OK regardless of the pair existing; check
    /// [`DeleteResult::rows_affected`] for the outcome.
    pub async fn delete(&self, user_id: i32, location_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::UserFavoriteLocation::delete_by_id((user_id, location_id))
            .exec(self.db)
            .await
    }

    /// Resolves all locations favorited by the given user, eagerly, so
    /// serialization never needs to touch the store again
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::location::Model>, DbErr> {
        let rows = entity::prelude::UserFavoriteLocation::find()
            .filter(entity::user_favorite_location::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Location)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, location)| location)
            .collect())
    }
}
