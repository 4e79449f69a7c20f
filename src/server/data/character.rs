use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a character mirrored from the upstream catalog, keeping the
    /// catalog's ID as the primary key. Used by seeding and test fixtures;
    /// no HTTP route mutates characters.
    pub async fn create(
        &self,
        character_id: i32,
        name: String,
    ) -> Result<entity::character::Model, DbErr> {
        let character = entity::character::ActiveModel {
            id: ActiveValue::Set(character_id),
            name: ActiveValue::Set(name),
        };

        character.insert(self.db).await
    }

    pub async fn get(&self, character_id: i32) -> Result<Option<entity::character::Model>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find().all(self.db).await
    }
}
