use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
}

impl From<entity::character::Model> for CharacterDto {
    fn from(character: entity::character::Model) -> Self {
        Self {
            id: character.id,
            name: character.name,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LocationDto {
    pub id: i32,
    pub name: String,
}

impl From<entity::location::Model> for LocationDto {
    fn from(location: entity::location::Model) -> Self {
        Self {
            id: location.id,
            name: location.name,
        }
    }
}
