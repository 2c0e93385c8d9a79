use crate::{
    error::{AppError, AppResult},
    models::{address, Address, AddressModel},
    utils::slug,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};

#[derive(Debug, Clone, Default)]
pub struct AddressInput {
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    /// Free text, intentionally not a reference into the countries table.
    pub country: String,
}

pub struct AddressService {
    db: DatabaseConnection,
}

impl AddressService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> AppResult<Vec<AddressModel>> {
        let addresses = Address::find()
            .order_by_asc(address::Column::City)
            .all(&self.db)
            .await?;
        Ok(addresses)
    }

    pub async fn get_by_slug(&self, slug_value: &str) -> AppResult<AddressModel> {
        let address = Address::find()
            .filter(address::Column::Slug.eq(slug_value))
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;
        Ok(address)
    }

    /// Create an address. The slug is derived from the full postal
    /// composite; the store rejects duplicates of the same composite key.
    pub async fn create(&self, input: AddressInput) -> AppResult<AddressModel> {
        let new_address = address::ActiveModel {
            name: Set(input.name),
            street: Set(input.street.clone()),
            city: Set(input.city.clone()),
            state: Set(input.state.clone()),
            zip_code: Set(input.zip_code.clone()),
            country: Set(input.country.clone()),
            slug: Set(slug::generate(&[
                &input.street,
                &input.city,
                &input.state,
                &input.zip_code,
                &input.country,
            ])),
            ..Default::default()
        };
        Ok(new_address.insert(&self.db).await?)
    }

    /// Update postal fields. The slug stays as first assigned.
    pub async fn update(&self, slug_value: &str, input: AddressInput) -> AppResult<AddressModel> {
        let existing = self.get_by_slug(slug_value).await?;
        let mut active: address::ActiveModel = existing.into();
        active.name = Set(input.name);
        active.street = Set(input.street);
        active.city = Set(input.city);
        active.state = Set(input.state);
        active.zip_code = Set(input.zip_code);
        active.country = Set(input.country);
        Ok(active.update(&self.db).await?)
    }

    pub async fn delete(&self, slug_value: &str) -> AppResult<()> {
        let address = self.get_by_slug(slug_value).await?;
        address.delete(&self.db).await?;
        Ok(())
    }
}
