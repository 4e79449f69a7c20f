use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

/// Insert a user row with the given email and a placeholder password
pub async fn insert_user(
    db: &DatabaseConnection,
    email: &str,
) -> Result<entity::user::Model, TestError> {
    let user = entity::user::ActiveModel {
        email: ActiveValue::Set(email.to_string()),
        password: ActiveValue::Set("hunter2".to_string()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(user.insert(db).await?)
}

/// Insert a character row mirroring an upstream catalog entry
pub async fn insert_character(
    db: &DatabaseConnection,
    character_id: i32,
    name: &str,
) -> Result<entity::character::Model, TestError> {
    let character = entity::character::ActiveModel {
        id: ActiveValue::Set(character_id),
        name: ActiveValue::Set(name.to_string()),
    };

    Ok(character.insert(db).await?)
}

/// Insert a location row mirroring an upstream catalog entry
pub async fn insert_location(
    db: &DatabaseConnection,
    location_id: i32,
    name: &str,
) -> Result<entity::location::Model, TestError> {
    let location = entity::location::ActiveModel {
        id: ActiveValue::Set(location_id),
        name: ActiveValue::Set(name.to_string()),
    };

    Ok(location.insert(db).await?)
}

/// Insert a favorite pair linking an existing user and character
pub async fn insert_favorite_character(
    db: &DatabaseConnection,
    user_id: i32,
    character_id: i32,
) -> Result<entity::user_favorite_character::Model, TestError> {
    let favorite = entity::user_favorite_character::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        character_id: ActiveValue::Set(character_id),
    };

    Ok(favorite.insert(db).await?)
}

/// Insert a favorite pair linking an existing user and location
pub async fn insert_favorite_location(
    db: &DatabaseConnection,
    user_id: i32,
    location_id: i32,
) -> Result<entity::user_favorite_location::Model, TestError> {
    let favorite = entity::user_favorite_location::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        location_id: ActiveValue::Set(location_id),
    };

    Ok(favorite.insert(db).await?)
}
