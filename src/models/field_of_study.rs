use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "fields_of_study")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::scholarship::Entity> for Entity {
    fn to() -> RelationDef {
        super::scholarship_field::Relation::Scholarship.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::scholarship_field::Relation::FieldOfStudy.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
