use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "educational_levels")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub level_name: String,
    pub color: String,
    pub created_date: DateTime,
    pub updated_date: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::school::Entity> for Entity {
    fn to() -> RelationDef {
        super::school_educational_level::Relation::School.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::school_educational_level::Relation::EducationalLevel
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}
