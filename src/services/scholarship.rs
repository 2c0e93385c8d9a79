use crate::{
    error::{AppError, AppResult},
    models::{
        scholarship, scholarship_country, scholarship_field, scholarship_level, ApplicationStatus,
        CountryModel, EducationalLevelModel, FieldOfStudyModel, Scholarship, ScholarshipModel,
    },
    utils::slug,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

#[derive(Debug, Clone, Default)]
pub struct ScholarshipInput {
    pub name: String,
    pub local_name: String,
    pub description: String,
    pub local_description: String,
    pub provider: String,
    pub website: String,
    pub amount: Option<rust_decimal::Decimal>,
    pub full_tuition_coverage: bool,
    pub stipend: Option<rust_decimal::Decimal>,
    pub eligibility_criteria: String,
    pub min_gpa: Option<rust_decimal::Decimal>,
    pub required_documents: String,
    pub application_deadline: Option<chrono::NaiveDate>,
    pub application_open_date: Option<chrono::NaiveDate>,
    pub application_status: Option<ApplicationStatus>,
    pub renewable: bool,
    pub duration: String,
    pub contact_email: String,
    pub notes: String,
}

pub struct ScholarshipService {
    db: DatabaseConnection,
}

impl ScholarshipService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        page: u64,
        per_page: u64,
        include_inactive: bool,
        status: Option<ApplicationStatus>,
        search: Option<&str>,
    ) -> AppResult<(Vec<ScholarshipModel>, u64)> {
        let mut query = Scholarship::find();
        if !include_inactive {
            query = query.filter(scholarship::Column::IsActive.eq(true));
        }
        if let Some(status) = status {
            query = query.filter(scholarship::Column::ApplicationStatus.eq(status));
        }
        if let Some(term) = search {
            let pattern = format!("%{}%", term);
            query = query.filter(
                sea_orm::Condition::any()
                    .add(scholarship::Column::Name.like(pattern.clone()))
                    .add(scholarship::Column::LocalName.like(pattern)),
            );
        }

        let paginator = query
            .order_by_asc(scholarship::Column::Name)
            .paginate(&self.db, per_page);
        let total = paginator.num_items().await?;
        let scholarships = paginator.fetch_page(page.saturating_sub(1)).await?;
        Ok((scholarships, total))
    }

    pub async fn get_by_slug(&self, slug_value: &str) -> AppResult<ScholarshipModel> {
        let scholarship = Scholarship::find()
            .filter(scholarship::Column::Slug.eq(slug_value))
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;
        Ok(scholarship)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<ScholarshipModel> {
        let scholarship = Scholarship::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;
        Ok(scholarship)
    }

    /// Create a scholarship. The slug is derived from name and provider,
    /// so two awards with the same name from different providers diverge
    /// even before the random suffix is considered.
    pub async fn create(&self, input: ScholarshipInput) -> AppResult<ScholarshipModel> {
        let now = chrono::Utc::now().naive_utc();
        let new_scholarship = scholarship::ActiveModel {
            uuid: Set(uuid::Uuid::new_v4()),
            slug: Set(slug::generate(&[&input.name, &input.provider])),
            thumbnail: Set(None),
            name: Set(input.name),
            local_name: Set(input.local_name),
            description: Set(input.description),
            local_description: Set(input.local_description),
            provider: Set(input.provider),
            website: Set(input.website),
            amount: Set(input.amount),
            full_tuition_coverage: Set(input.full_tuition_coverage),
            stipend: Set(input.stipend),
            eligibility_criteria: Set(input.eligibility_criteria),
            min_gpa: Set(input.min_gpa),
            required_documents: Set(input.required_documents),
            application_deadline: Set(input.application_deadline),
            application_open_date: Set(input.application_open_date),
            application_status: Set(input
                .application_status
                .unwrap_or(ApplicationStatus::Upcoming)),
            renewable: Set(input.renewable),
            duration: Set(input.duration),
            contact_email: Set(input.contact_email),
            notes: Set(input.notes),
            created_at: Set(now),
            updated_at: Set(now),
            is_active: Set(true),
            ..Default::default()
        };
        Ok(new_scholarship.insert(&self.db).await?)
    }

    /// Update mutable fields, addressed by slug like the public detail
    /// route. The slug and uuid are never regenerated.
    pub async fn update(
        &self,
        slug_value: &str,
        input: ScholarshipInput,
    ) -> AppResult<ScholarshipModel> {
        let existing = self.get_by_slug(slug_value).await?;
        let now = chrono::Utc::now().naive_utc();
        let current_status = existing.application_status;
        let mut active: scholarship::ActiveModel = existing.into();
        active.name = Set(input.name);
        active.local_name = Set(input.local_name);
        active.description = Set(input.description);
        active.local_description = Set(input.local_description);
        active.provider = Set(input.provider);
        active.website = Set(input.website);
        active.amount = Set(input.amount);
        active.full_tuition_coverage = Set(input.full_tuition_coverage);
        active.stipend = Set(input.stipend);
        active.eligibility_criteria = Set(input.eligibility_criteria);
        active.min_gpa = Set(input.min_gpa);
        active.required_documents = Set(input.required_documents);
        active.application_deadline = Set(input.application_deadline);
        active.application_open_date = Set(input.application_open_date);
        active.application_status = Set(input.application_status.unwrap_or(current_status));
        active.renewable = Set(input.renewable);
        active.duration = Set(input.duration);
        active.contact_email = Set(input.contact_email);
        active.notes = Set(input.notes);
        active.updated_at = Set(now);
        Ok(active.update(&self.db).await?)
    }

    pub async fn deactivate(&self, slug_value: &str) -> AppResult<ScholarshipModel> {
        let existing = self.get_by_slug(slug_value).await?;
        self.set_active(existing, false).await
    }

    pub async fn restore(&self, id: i32) -> AppResult<ScholarshipModel> {
        let existing = self.get_by_id(id).await?;
        self.set_active(existing, true).await
    }

    async fn set_active(
        &self,
        existing: ScholarshipModel,
        active_flag: bool,
    ) -> AppResult<ScholarshipModel> {
        let now = chrono::Utc::now().naive_utc();
        let mut active: scholarship::ActiveModel = existing.into();
        active.is_active = Set(active_flag);
        active.updated_at = Set(now);
        Ok(active.update(&self.db).await?)
    }

    pub async fn set_thumbnail(&self, id: i32, url: Option<String>) -> AppResult<ScholarshipModel> {
        let existing = self.get_by_id(id).await?;
        let now = chrono::Utc::now().naive_utc();
        let mut active: scholarship::ActiveModel = existing.into();
        active.thumbnail = Set(url);
        active.updated_at = Set(now);
        Ok(active.update(&self.db).await?)
    }

    /// Replace the scholarship's target country links.
    pub async fn set_target_countries(
        &self,
        scholarship_id: i32,
        country_ids: Vec<i32>,
    ) -> AppResult<()> {
        self.get_by_id(scholarship_id).await?;
        scholarship_country::Entity::delete_many()
            .filter(scholarship_country::Column::ScholarshipId.eq(scholarship_id))
            .exec(&self.db)
            .await?;
        for country_id in country_ids {
            let link = scholarship_country::ActiveModel {
                scholarship_id: Set(scholarship_id),
                country_id: Set(country_id),
            };
            link.insert(&self.db).await?;
        }
        Ok(())
    }

    /// Replace the scholarship's target level links.
    pub async fn set_target_levels(
        &self,
        scholarship_id: i32,
        level_ids: Vec<i32>,
    ) -> AppResult<()> {
        self.get_by_id(scholarship_id).await?;
        scholarship_level::Entity::delete_many()
            .filter(scholarship_level::Column::ScholarshipId.eq(scholarship_id))
            .exec(&self.db)
            .await?;
        for level_id in level_ids {
            let link = scholarship_level::ActiveModel {
                scholarship_id: Set(scholarship_id),
                educational_level_id: Set(level_id),
            };
            link.insert(&self.db).await?;
        }
        Ok(())
    }

    /// Replace the scholarship's target field links.
    pub async fn set_target_fields(
        &self,
        scholarship_id: i32,
        field_ids: Vec<i32>,
    ) -> AppResult<()> {
        self.get_by_id(scholarship_id).await?;
        scholarship_field::Entity::delete_many()
            .filter(scholarship_field::Column::ScholarshipId.eq(scholarship_id))
            .exec(&self.db)
            .await?;
        for field_id in field_ids {
            let link = scholarship_field::ActiveModel {
                scholarship_id: Set(scholarship_id),
                field_of_study_id: Set(field_id),
            };
            link.insert(&self.db).await?;
        }
        Ok(())
    }

    pub async fn get_target_countries(
        &self,
        scholarship: &ScholarshipModel,
    ) -> AppResult<Vec<CountryModel>> {
        Ok(scholarship
            .find_related(crate::models::Country)
            .all(&self.db)
            .await?)
    }

    pub async fn get_target_levels(
        &self,
        scholarship: &ScholarshipModel,
    ) -> AppResult<Vec<EducationalLevelModel>> {
        Ok(scholarship
            .find_related(crate::models::EducationalLevel)
            .all(&self.db)
            .await?)
    }

    pub async fn get_target_fields(
        &self,
        scholarship: &ScholarshipModel,
    ) -> AppResult<Vec<FieldOfStudyModel>> {
        Ok(scholarship
            .find_related(crate::models::FieldOfStudy)
            .all(&self.db)
            .await?)
    }
}
