use crate::{
    error::{AppError, AppResult},
    models::{platform, Platform, PlatformModel},
};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, Set,
};

pub struct PlatformService {
    db: DatabaseConnection,
}

impl PlatformService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> AppResult<Vec<PlatformModel>> {
        let platforms = Platform::find()
            .order_by_asc(platform::Column::Name)
            .all(&self.db)
            .await?;
        Ok(platforms)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<PlatformModel> {
        let platform = Platform::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;
        Ok(platform)
    }

    pub async fn create(&self, name: &str, url: &str, icon: &str) -> AppResult<PlatformModel> {
        let new_platform = platform::ActiveModel {
            name: Set(name.to_string()),
            url: Set(url.to_string()),
            icon: Set(icon.to_string()),
            ..Default::default()
        };
        Ok(new_platform.insert(&self.db).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        name: &str,
        url: &str,
        icon: &str,
    ) -> AppResult<PlatformModel> {
        let existing = self.get_by_id(id).await?;
        let mut active: platform::ActiveModel = existing.into();
        active.name = Set(name.to_string());
        active.url = Set(url.to_string());
        active.icon = Set(icon.to_string());
        Ok(active.update(&self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let platform = self.get_by_id(id).await?;
        platform.delete(&self.db).await?;
        Ok(())
    }
}
