use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "scholarship_levels")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub scholarship_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub educational_level_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::scholarship::Entity",
        from = "Column::ScholarshipId",
        to = "super::scholarship::Column::Id"
    )]
    Scholarship,
    #[sea_orm(
        belongs_to = "super::educational_level::Entity",
        from = "Column::EducationalLevelId",
        to = "super::educational_level::Column::Id"
    )]
    EducationalLevel,
}

impl ActiveModelBehavior for ActiveModel {}
