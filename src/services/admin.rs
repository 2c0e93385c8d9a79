use crate::{
    error::{AppError, AppResult},
    models::{scholarship, school, user, Country, Scholarship, School, User, UserModel},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};
use serde::Serialize;
use utoipa::ToSchema;

pub struct AdminService {
    db: DatabaseConnection,
}

impl AdminService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_stats(&self) -> AppResult<AdminStats> {
        let total_users = User::find().count(&self.db).await?;
        let total_schools = School::find().count(&self.db).await?;
        let active_schools = School::find()
            .filter(school::Column::IsActive.eq(true))
            .count(&self.db)
            .await?;
        let total_scholarships = Scholarship::find().count(&self.db).await?;
        let active_scholarships = Scholarship::find()
            .filter(scholarship::Column::IsActive.eq(true))
            .count(&self.db)
            .await?;
        let total_countries = Country::find().count(&self.db).await?;

        Ok(AdminStats {
            total_users,
            total_schools,
            active_schools,
            total_scholarships,
            active_scholarships,
            total_countries,
        })
    }

    pub async fn list_users(&self, page: u64, per_page: u64) -> AppResult<(Vec<UserModel>, u64)> {
        let paginator = User::find()
            .order_by_desc(user::Column::CreatedAt)
            .paginate(&self.db, per_page);

        let total = paginator.num_items().await?;
        let users = paginator.fetch_page(page.saturating_sub(1)).await?;
        Ok((users, total))
    }

    pub async fn update_user_role(&self, user_id: i32, role: &str) -> AppResult<UserModel> {
        let valid_roles = ["user", "admin", "banned"];
        if !valid_roles.contains(&role) {
            return Err(AppError::Validation(format!(
                "Invalid role. Must be one of: {}",
                valid_roles.join(", ")
            )));
        }

        let existing = User::find_by_id(user_id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: user::ActiveModel = existing.into();
        active.role = sea_orm::ActiveValue::Set(role.to_string());
        let updated = active.update(&self.db).await?;
        Ok(updated)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminStats {
    pub total_users: u64,
    pub total_schools: u64,
    pub active_schools: u64,
    pub total_scholarships: u64,
    pub active_scholarships: u64,
    pub total_countries: u64,
}
