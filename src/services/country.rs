use crate::{
    error::{AppError, AppResult},
    models::{country, Country, CountryModel},
    utils::slug,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};

pub struct CountryService {
    db: DatabaseConnection,
}

impl CountryService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> AppResult<Vec<CountryModel>> {
        let countries = Country::find()
            .order_by_asc(country::Column::Name)
            .all(&self.db)
            .await?;
        Ok(countries)
    }

    pub async fn get_by_slug(&self, slug_value: &str) -> AppResult<CountryModel> {
        let country = Country::find()
            .filter(country::Column::Slug.eq(slug_value))
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;
        Ok(country)
    }

    /// Create a country. The slug is derived from name and code.
    pub async fn create(
        &self,
        name: &str,
        local_name: &str,
        code: &str,
    ) -> AppResult<CountryModel> {
        let new_country = country::ActiveModel {
            name: Set(name.to_string()),
            slug: Set(slug::generate(&[name, code])),
            local_name: Set(local_name.to_string()),
            code: Set(code.to_string()),
            ..Default::default()
        };
        Ok(new_country.insert(&self.db).await?)
    }

    /// Update name/local_name/code. The slug stays as first assigned.
    pub async fn update(
        &self,
        slug_value: &str,
        name: &str,
        local_name: &str,
        code: &str,
    ) -> AppResult<CountryModel> {
        let existing = self.get_by_slug(slug_value).await?;
        let mut active: country::ActiveModel = existing.into();
        active.name = Set(name.to_string());
        active.local_name = Set(local_name.to_string());
        active.code = Set(code.to_string());
        Ok(active.update(&self.db).await?)
    }

    pub async fn delete(&self, slug_value: &str) -> AppResult<()> {
        let country = self.get_by_slug(slug_value).await?;
        country.delete(&self.db).await?;
        Ok(())
    }
}
