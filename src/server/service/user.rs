use sea_orm::DatabaseConnection;

use crate::{
    model::user::CreateUserDto,
    server::{
        data::user::UserRepository,
        error::{user::UserError, Error},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user account.
    ///
    /// Both email and password must be present and non-empty. A duplicate
    /// email surfaces as [`UserError::EmailTaken`] via the unique constraint
    /// rather than a lookup beforehand, so concurrent registrations cannot
    /// race past the check.
    pub async fn create_user(&self, new_user: CreateUserDto) -> Result<entity::user::Model, Error> {
        let email = match new_user.email {
            Some(email) if !email.is_empty() => email,
            _ => return Err(UserError::MissingField("email").into()),
        };
        let password = match new_user.password {
            Some(password) if !password.is_empty() => password,
            _ => return Err(UserError::MissingField("password").into()),
        };

        let user_repository = UserRepository::new(self.db);

        match user_repository.create(email.clone(), password).await {
            Ok(user) => Ok(user),
            Err(err) => match err.sql_err() {
                Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => {
                    Err(UserError::EmailTaken(email).into())
                }
                _ => Err(err.into()),
            },
        }
    }

    /// Fetches one user or fails with a 404-mapped error
    pub async fn get_user(&self, user_id: i32) -> Result<entity::user::Model, Error> {
        let user_repository = UserRepository::new(self.db);

        user_repository
            .get(user_id)
            .await?
            .ok_or_else(|| UserError::NotFound(user_id).into())
    }

    /// Lists every registered user
    pub async fn get_users(&self) -> Result<Vec<entity::user::Model>, Error> {
        let user_repository = UserRepository::new(self.db);

        Ok(user_repository.get_all().await?)
    }
}
