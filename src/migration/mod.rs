use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users_table;
mod m20250301_000002_create_school_types_table;
mod m20250301_000003_create_countries_table;
mod m20250301_000004_create_educational_levels_table;
mod m20250301_000005_create_fields_of_study_table;
mod m20250301_000006_create_platforms_table;
mod m20250301_000007_create_schools_table;
mod m20250301_000008_create_addresses_tables;
mod m20250301_000009_create_platform_profiles_table;
mod m20250301_000010_create_school_link_tables;
mod m20250301_000011_create_scholarships_table;
mod m20250301_000012_create_scholarship_target_tables;
mod m20250301_000013_create_refresh_tokens_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users_table::Migration),
            Box::new(m20250301_000002_create_school_types_table::Migration),
            Box::new(m20250301_000003_create_countries_table::Migration),
            Box::new(m20250301_000004_create_educational_levels_table::Migration),
            Box::new(m20250301_000005_create_fields_of_study_table::Migration),
            Box::new(m20250301_000006_create_platforms_table::Migration),
            Box::new(m20250301_000007_create_schools_table::Migration),
            Box::new(m20250301_000008_create_addresses_tables::Migration),
            Box::new(m20250301_000009_create_platform_profiles_table::Migration),
            Box::new(m20250301_000010_create_school_link_tables::Migration),
            Box::new(m20250301_000011_create_scholarships_table::Migration),
            Box::new(m20250301_000012_create_scholarship_target_tables::Migration),
            Box::new(m20250301_000013_create_refresh_tokens_table::Migration),
        ]
    }
}
