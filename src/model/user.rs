use serde::{Deserialize, Serialize};

/// Public representation of a user account.
///
/// Deliberately omits the password column; it must never appear in any
/// response body.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

/// Request body for creating a user. Both fields are required; presence is
/// checked by the user service so a missing field maps to a 400 rather than
/// a deserialization failure.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateUserDto {
    pub email: Option<String>,
    pub password: Option<String>,
}
