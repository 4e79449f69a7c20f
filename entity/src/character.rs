use sea_orm::entity::prelude::*;

/// A show character mirrored from the upstream catalog, keyed by the
/// catalog's own ID rather than an auto-assigned one.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_favorite_character::Entity")]
    UserFavoriteCharacter,
}

impl Related<super::user_favorite_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserFavoriteCharacter.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_favorite_character::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::user_favorite_character::Relation::Character
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}
