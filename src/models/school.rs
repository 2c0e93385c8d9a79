use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "schools")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Stored media path of the logo, set by the upload pipeline.
    pub logo: Option<String>,
    pub cover_image: Option<String>,
    pub name: String,
    pub local_name: String,
    pub short_name: String,
    pub code: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub established: Option<Date>,
    pub founder: String,
    pub president: String,
    pub endowment: Decimal,
    pub location: String,
    pub motto: String,
    pub tuition: Decimal,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(unique)]
    pub uuid: Uuid,
    pub created_date: DateTime,
    pub updated_date: DateTime,
    pub is_active: bool,
    pub self_data: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::platform_profile::Entity")]
    PlatformProfile,
}

impl Related<super::platform_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlatformProfile.def()
    }
}

impl Related<super::school_type::Entity> for Entity {
    fn to() -> RelationDef {
        super::school_school_type::Relation::SchoolType.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::school_school_type::Relation::School.def().rev())
    }
}

impl Related<super::educational_level::Entity> for Entity {
    fn to() -> RelationDef {
        super::school_educational_level::Relation::EducationalLevel.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::school_educational_level::Relation::School.def().rev())
    }
}

impl Related<super::address::Entity> for Entity {
    fn to() -> RelationDef {
        super::school_address::Relation::Address.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::school_address::Relation::School.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
