use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Operator-set application window status. There are no automated
/// transitions between these values.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
pub enum ApplicationStatus {
    #[sea_orm(string_value = "Open")]
    Open,
    #[sea_orm(string_value = "Closed")]
    Closed,
    #[sea_orm(string_value = "Upcoming")]
    Upcoming,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "scholarships")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub uuid: Uuid,
    #[sea_orm(unique)]
    pub slug: String,
    pub thumbnail: Option<String>,
    #[sea_orm(unique)]
    pub name: String,
    pub local_name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub local_description: String,
    pub provider: String,
    pub website: String,
    pub amount: Option<Decimal>,
    pub full_tuition_coverage: bool,
    pub stipend: Option<Decimal>,
    #[sea_orm(column_type = "Text")]
    pub eligibility_criteria: String,
    pub min_gpa: Option<Decimal>,
    #[sea_orm(column_type = "Text")]
    pub required_documents: String,
    pub application_deadline: Option<Date>,
    pub application_open_date: Option<Date>,
    pub application_status: ApplicationStatus,
    pub renewable: bool,
    pub duration: String,
    pub contact_email: String,
    #[sea_orm(column_type = "Text")]
    pub notes: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::country::Entity> for Entity {
    fn to() -> RelationDef {
        super::scholarship_country::Relation::Country.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::scholarship_country::Relation::Scholarship.def().rev())
    }
}

impl Related<super::educational_level::Entity> for Entity {
    fn to() -> RelationDef {
        super::scholarship_level::Relation::EducationalLevel.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::scholarship_level::Relation::Scholarship.def().rev())
    }
}

impl Related<super::field_of_study::Entity> for Entity {
    fn to() -> RelationDef {
        super::scholarship_field::Relation::FieldOfStudy.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::scholarship_field::Relation::Scholarship.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
