pub use super::character::Entity as Character;
pub use super::location::Entity as Location;
pub use super::user::Entity as User;
pub use super::user_favorite_character::Entity as UserFavoriteCharacter;
pub use super::user_favorite_location::Entity as UserFavoriteLocation;
