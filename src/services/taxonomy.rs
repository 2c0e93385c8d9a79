use crate::{
    error::{AppError, AppResult},
    models::{
        educational_level, field_of_study, EducationalLevel, EducationalLevelModel, FieldOfStudy,
        FieldOfStudyModel,
    },
};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, Set,
};

/// Catalog maintenance for educational levels and fields of study.
pub struct TaxonomyService {
    db: DatabaseConnection,
}

impl TaxonomyService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_levels(&self) -> AppResult<Vec<EducationalLevelModel>> {
        let levels = EducationalLevel::find()
            .order_by_asc(educational_level::Column::LevelName)
            .all(&self.db)
            .await?;
        Ok(levels)
    }

    pub async fn get_level(&self, id: i32) -> AppResult<EducationalLevelModel> {
        let level = EducationalLevel::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;
        Ok(level)
    }

    pub async fn create_level(
        &self,
        level_name: &str,
        color: &str,
    ) -> AppResult<EducationalLevelModel> {
        let now = chrono::Utc::now().naive_utc();
        let new_level = educational_level::ActiveModel {
            level_name: Set(level_name.to_string()),
            color: Set(color.to_string()),
            created_date: Set(now),
            updated_date: Set(now),
            ..Default::default()
        };
        Ok(new_level.insert(&self.db).await?)
    }

    pub async fn update_level(
        &self,
        id: i32,
        level_name: &str,
        color: &str,
    ) -> AppResult<EducationalLevelModel> {
        let existing = self.get_level(id).await?;
        let now = chrono::Utc::now().naive_utc();
        let mut active: educational_level::ActiveModel = existing.into();
        active.level_name = Set(level_name.to_string());
        active.color = Set(color.to_string());
        active.updated_date = Set(now);
        Ok(active.update(&self.db).await?)
    }

    pub async fn delete_level(&self, id: i32) -> AppResult<()> {
        let level = self.get_level(id).await?;
        level.delete(&self.db).await?;
        Ok(())
    }

    pub async fn list_fields(&self) -> AppResult<Vec<FieldOfStudyModel>> {
        let fields = FieldOfStudy::find()
            .order_by_asc(field_of_study::Column::Name)
            .all(&self.db)
            .await?;
        Ok(fields)
    }

    pub async fn get_field(&self, id: i32) -> AppResult<FieldOfStudyModel> {
        let field = FieldOfStudy::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;
        Ok(field)
    }

    pub async fn create_field(&self, name: &str) -> AppResult<FieldOfStudyModel> {
        let new_field = field_of_study::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };
        Ok(new_field.insert(&self.db).await?)
    }

    pub async fn update_field(&self, id: i32, name: &str) -> AppResult<FieldOfStudyModel> {
        let existing = self.get_field(id).await?;
        let mut active: field_of_study::ActiveModel = existing.into();
        active.name = Set(name.to_string());
        Ok(active.update(&self.db).await?)
    }

    pub async fn delete_field(&self, id: i32) -> AppResult<()> {
        let field = self.get_field(id).await?;
        field.delete(&self.db).await?;
        Ok(())
    }
}
