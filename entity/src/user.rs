use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_favorite_character::Entity")]
    UserFavoriteCharacter,
    #[sea_orm(has_many = "super::user_favorite_location::Entity")]
    UserFavoriteLocation,
}

impl Related<super::user_favorite_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserFavoriteCharacter.def()
    }
}

impl Related<super::user_favorite_location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserFavoriteLocation.def()
    }
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_favorite_character::Relation::Character.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::user_favorite_character::Relation::User
                .def()
                .rev(),
        )
    }
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_favorite_location::Relation::Location.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_favorite_location::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
