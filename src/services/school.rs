use crate::{
    error::{AppError, AppResult},
    models::{
        platform_profile, school, school_address, school_educational_level, school_school_type,
        AddressModel, EducationalLevelModel, PlatformProfile, PlatformProfileModel, School,
        SchoolModel, SchoolTypeModel,
    },
    utils::slug,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

/// Field set shared by create and update operations.
#[derive(Debug, Clone, Default)]
pub struct SchoolInput {
    pub name: String,
    pub local_name: String,
    pub short_name: String,
    pub code: String,
    pub description: String,
    pub established: Option<chrono::NaiveDate>,
    pub founder: String,
    pub president: String,
    pub endowment: rust_decimal::Decimal,
    pub location: String,
    pub motto: String,
    pub tuition: rust_decimal::Decimal,
    pub self_data: String,
}

pub struct SchoolService {
    db: DatabaseConnection,
}

impl SchoolService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List schools with pagination. Inactive records are hidden unless
    /// `include_inactive` is set (admin listings).
    pub async fn list(
        &self,
        page: u64,
        per_page: u64,
        include_inactive: bool,
        search: Option<&str>,
    ) -> AppResult<(Vec<SchoolModel>, u64)> {
        let mut query = School::find();
        if !include_inactive {
            query = query.filter(school::Column::IsActive.eq(true));
        }
        if let Some(term) = search {
            let pattern = format!("%{}%", term);
            query = query.filter(
                sea_orm::Condition::any()
                    .add(school::Column::Name.like(pattern.clone()))
                    .add(school::Column::LocalName.like(pattern.clone()))
                    .add(school::Column::ShortName.like(pattern)),
            );
        }

        let paginator = query
            .order_by_asc(school::Column::Name)
            .paginate(&self.db, per_page);
        let total = paginator.num_items().await?;
        let schools = paginator.fetch_page(page.saturating_sub(1)).await?;
        Ok((schools, total))
    }

    pub async fn get_by_slug(&self, slug_value: &str) -> AppResult<SchoolModel> {
        let school = School::find()
            .filter(school::Column::Slug.eq(slug_value))
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;
        Ok(school)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<SchoolModel> {
        let school = School::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;
        Ok(school)
    }

    /// Create a school. The uuid is assigned here, once; the slug is
    /// derived from the name plus a random suffix. A duplicate name or
    /// slug surfaces as a constraint violation from the store.
    pub async fn create(&self, input: SchoolInput) -> AppResult<SchoolModel> {
        let now = chrono::Utc::now().naive_utc();
        let new_school = school::ActiveModel {
            name: Set(input.name.clone()),
            local_name: Set(input.local_name),
            short_name: Set(input.short_name),
            code: Set(input.code),
            description: Set(input.description),
            established: Set(input.established),
            founder: Set(input.founder),
            president: Set(input.president),
            endowment: Set(input.endowment),
            location: Set(input.location),
            motto: Set(input.motto),
            tuition: Set(input.tuition),
            slug: Set(slug::generate(&[&input.name])),
            uuid: Set(uuid::Uuid::new_v4()),
            logo: Set(None),
            cover_image: Set(None),
            created_date: Set(now),
            updated_date: Set(now),
            is_active: Set(true),
            self_data: Set(input.self_data),
            ..Default::default()
        };
        Ok(new_school.insert(&self.db).await?)
    }

    /// Update mutable fields, addressed by slug like the public detail
    /// route. The slug and uuid are never regenerated.
    pub async fn update(&self, slug_value: &str, input: SchoolInput) -> AppResult<SchoolModel> {
        let existing = self.get_by_slug(slug_value).await?;
        let now = chrono::Utc::now().naive_utc();
        let mut active: school::ActiveModel = existing.into();
        active.name = Set(input.name);
        active.local_name = Set(input.local_name);
        active.short_name = Set(input.short_name);
        active.code = Set(input.code);
        active.description = Set(input.description);
        active.established = Set(input.established);
        active.founder = Set(input.founder);
        active.president = Set(input.president);
        active.endowment = Set(input.endowment);
        active.location = Set(input.location);
        active.motto = Set(input.motto);
        active.tuition = Set(input.tuition);
        active.self_data = Set(input.self_data);
        active.updated_date = Set(now);
        Ok(active.update(&self.db).await?)
    }

    /// Soft delete: flips is_active off, row stays in place.
    pub async fn deactivate(&self, slug_value: &str) -> AppResult<SchoolModel> {
        let existing = self.get_by_slug(slug_value).await?;
        self.set_active(existing, false).await
    }

    pub async fn restore(&self, id: i32) -> AppResult<SchoolModel> {
        let existing = self.get_by_id(id).await?;
        self.set_active(existing, true).await
    }

    async fn set_active(&self, existing: SchoolModel, active_flag: bool) -> AppResult<SchoolModel> {
        let now = chrono::Utc::now().naive_utc();
        let mut active: school::ActiveModel = existing.into();
        active.is_active = Set(active_flag);
        active.updated_date = Set(now);
        Ok(active.update(&self.db).await?)
    }

    pub async fn set_logo(&self, id: i32, url: Option<String>) -> AppResult<SchoolModel> {
        let existing = self.get_by_id(id).await?;
        let now = chrono::Utc::now().naive_utc();
        let mut active: school::ActiveModel = existing.into();
        active.logo = Set(url);
        active.updated_date = Set(now);
        Ok(active.update(&self.db).await?)
    }

    pub async fn set_cover_image(&self, id: i32, url: Option<String>) -> AppResult<SchoolModel> {
        let existing = self.get_by_id(id).await?;
        let now = chrono::Utc::now().naive_utc();
        let mut active: school::ActiveModel = existing.into();
        active.cover_image = Set(url);
        active.updated_date = Set(now);
        Ok(active.update(&self.db).await?)
    }

    /// Replace the school's type links.
    pub async fn set_school_types(&self, school_id: i32, type_ids: Vec<i32>) -> AppResult<()> {
        self.get_by_id(school_id).await?;
        school_school_type::Entity::delete_many()
            .filter(school_school_type::Column::SchoolId.eq(school_id))
            .exec(&self.db)
            .await?;
        for type_id in type_ids {
            let link = school_school_type::ActiveModel {
                school_id: Set(school_id),
                school_type_id: Set(type_id),
            };
            link.insert(&self.db).await?;
        }
        Ok(())
    }

    /// Replace the school's educational level links.
    pub async fn set_educational_levels(&self, school_id: i32, level_ids: Vec<i32>) -> AppResult<()> {
        self.get_by_id(school_id).await?;
        school_educational_level::Entity::delete_many()
            .filter(school_educational_level::Column::SchoolId.eq(school_id))
            .exec(&self.db)
            .await?;
        for level_id in level_ids {
            let link = school_educational_level::ActiveModel {
                school_id: Set(school_id),
                educational_level_id: Set(level_id),
            };
            link.insert(&self.db).await?;
        }
        Ok(())
    }

    /// Replace the school's address links.
    pub async fn set_addresses(&self, school_id: i32, address_ids: Vec<i32>) -> AppResult<()> {
        self.get_by_id(school_id).await?;
        school_address::Entity::delete_many()
            .filter(school_address::Column::SchoolId.eq(school_id))
            .exec(&self.db)
            .await?;
        for address_id in address_ids {
            let link = school_address::ActiveModel {
                school_id: Set(school_id),
                address_id: Set(address_id),
            };
            link.insert(&self.db).await?;
        }
        Ok(())
    }

    pub async fn get_school_types(&self, school: &SchoolModel) -> AppResult<Vec<SchoolTypeModel>> {
        Ok(school
            .find_related(crate::models::SchoolType)
            .all(&self.db)
            .await?)
    }

    pub async fn get_educational_levels(
        &self,
        school: &SchoolModel,
    ) -> AppResult<Vec<EducationalLevelModel>> {
        Ok(school
            .find_related(crate::models::EducationalLevel)
            .all(&self.db)
            .await?)
    }

    pub async fn get_addresses(&self, school: &SchoolModel) -> AppResult<Vec<AddressModel>> {
        Ok(school
            .find_related(crate::models::Address)
            .all(&self.db)
            .await?)
    }

    /// Attach a platform presence to a school. The through-record carries
    /// the profile URL and its own creation timestamp.
    pub async fn attach_platform_profile(
        &self,
        school_id: i32,
        platform_id: i32,
        profile_url: &str,
    ) -> AppResult<PlatformProfileModel> {
        self.get_by_id(school_id).await?;
        let now = chrono::Utc::now().naive_utc();
        let profile = platform_profile::ActiveModel {
            school_id: Set(school_id),
            platform_id: Set(platform_id),
            profile_url: Set(profile_url.to_string()),
            created_date: Set(now),
            ..Default::default()
        };
        Ok(profile.insert(&self.db).await?)
    }

    pub async fn detach_platform_profile(&self, profile_id: i32) -> AppResult<()> {
        let profile = PlatformProfile::find_by_id(profile_id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;
        profile.delete(&self.db).await?;
        Ok(())
    }

    pub async fn get_platform_profiles(
        &self,
        school_id: i32,
    ) -> AppResult<Vec<PlatformProfileModel>> {
        let profiles = PlatformProfile::find()
            .filter(platform_profile::Column::SchoolId.eq(school_id))
            .order_by_asc(platform_profile::Column::Id)
            .all(&self.db)
            .await?;
        Ok(profiles)
    }
}
