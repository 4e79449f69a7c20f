use sea_orm::entity::prelude::*;

/// A show location mirrored from the upstream catalog, keyed by the
/// catalog's own ID rather than an auto-assigned one.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "location")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_favorite_location::Entity")]
    UserFavoriteLocation,
}

impl Related<super::user_favorite_location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserFavoriteLocation.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_favorite_location::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::user_favorite_location::Relation::Location
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}
