use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A postal address. `country` is deliberately free text rather than a
/// foreign key into `countries`; the two are independent columns.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "addresses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    #[sea_orm(unique)]
    pub slug: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::school::Entity> for Entity {
    fn to() -> RelationDef {
        super::school_address::Relation::School.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::school_address::Relation::Address.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
