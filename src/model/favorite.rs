use serde::{Deserialize, Serialize};

use crate::model::show::{CharacterDto, LocationDto};

/// Both favorite sets for one user. Set order is whatever the store
/// returns; callers must not rely on it.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoritesDto {
    pub characters: Vec<CharacterDto>,
    pub locations: Vec<LocationDto>,
}

/// Confirmation body for adding or removing a character favorite
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CharacterFavoriteDto {
    pub message: String,
    pub user_id: i32,
    pub character_id: i32,
}

/// Confirmation body for adding or removing a location favorite
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LocationFavoriteDto {
    pub message: String,
    pub user_id: i32,
    pub location_id: i32,
}
