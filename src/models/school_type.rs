use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "school_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "type", unique)]
    pub type_name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub icon: String,
    pub created_date: DateTime,
    pub updated_date: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::school::Entity> for Entity {
    fn to() -> RelationDef {
        super::school_school_type::Relation::School.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::school_school_type::Relation::SchoolType.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
