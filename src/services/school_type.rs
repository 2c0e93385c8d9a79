use crate::{
    error::{AppError, AppResult},
    models::{school_type, SchoolType, SchoolTypeModel},
};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, Set,
};

pub struct SchoolTypeService {
    db: DatabaseConnection,
}

impl SchoolTypeService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> AppResult<Vec<SchoolTypeModel>> {
        let types = SchoolType::find()
            .order_by_asc(school_type::Column::TypeName)
            .all(&self.db)
            .await?;
        Ok(types)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<SchoolTypeModel> {
        let school_type = SchoolType::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;
        Ok(school_type)
    }

    pub async fn create(
        &self,
        type_name: &str,
        description: &str,
        icon: &str,
    ) -> AppResult<SchoolTypeModel> {
        let now = chrono::Utc::now().naive_utc();
        let new_type = school_type::ActiveModel {
            type_name: Set(type_name.to_string()),
            description: Set(description.to_string()),
            icon: Set(icon.to_string()),
            created_date: Set(now),
            updated_date: Set(now),
            ..Default::default()
        };
        Ok(new_type.insert(&self.db).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        type_name: &str,
        description: &str,
        icon: &str,
    ) -> AppResult<SchoolTypeModel> {
        let existing = self.get_by_id(id).await?;
        let now = chrono::Utc::now().naive_utc();
        let mut active: school_type::ActiveModel = existing.into();
        active.type_name = Set(type_name.to_string());
        active.description = Set(description.to_string());
        active.icon = Set(icon.to_string());
        active.updated_date = Set(now);
        Ok(active.update(&self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let school_type = self.get_by_id(id).await?;
        school_type.delete(&self.db).await?;
        Ok(())
    }
}
