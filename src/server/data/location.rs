use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

pub struct LocationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LocationRepository<'a, C> {
    /// Creates a new instance of [`LocationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a location mirrored from the upstream catalog, keeping the
    /// catalog's ID as the primary key. Used by seeding and test fixtures;
    /// no HTTP route mutates locations.
    pub async fn create(
        &self,
        location_id: i32,
        name: String,
    ) -> Result<entity::location::Model, DbErr> {
        let location = entity::location::ActiveModel {
            id: ActiveValue::Set(location_id),
            name: ActiveValue::Set(name),
        };

        location.insert(self.db).await
    }

    pub async fn get(&self, location_id: i32) -> Result<Option<entity::location::Model>, DbErr> {
        entity::prelude::Location::find_by_id(location_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::location::Model>, DbErr> {
        entity::prelude::Location::find().all(self.db).await
    }
}
