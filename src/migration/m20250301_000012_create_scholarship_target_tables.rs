use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum ScholarshipCountries {
    Table,
    ScholarshipId,
    CountryId,
}

#[derive(DeriveIden)]
enum ScholarshipLevels {
    Table,
    ScholarshipId,
    EducationalLevelId,
}

#[derive(DeriveIden)]
enum ScholarshipFields {
    Table,
    ScholarshipId,
    FieldOfStudyId,
}

#[derive(DeriveIden)]
enum Scholarships {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Countries {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum EducationalLevels {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum FieldsOfStudy {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ScholarshipCountries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScholarshipCountries::ScholarshipId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScholarshipCountries::CountryId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(ScholarshipCountries::ScholarshipId)
                            .col(ScholarshipCountries::CountryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scholarship_countries_scholarship")
                            .from(
                                ScholarshipCountries::Table,
                                ScholarshipCountries::ScholarshipId,
                            )
                            .to(Scholarships::Table, Scholarships::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scholarship_countries_country")
                            .from(ScholarshipCountries::Table, ScholarshipCountries::CountryId)
                            .to(Countries::Table, Countries::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ScholarshipLevels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScholarshipLevels::ScholarshipId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScholarshipLevels::EducationalLevelId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(ScholarshipLevels::ScholarshipId)
                            .col(ScholarshipLevels::EducationalLevelId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scholarship_levels_scholarship")
                            .from(ScholarshipLevels::Table, ScholarshipLevels::ScholarshipId)
                            .to(Scholarships::Table, Scholarships::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scholarship_levels_level")
                            .from(
                                ScholarshipLevels::Table,
                                ScholarshipLevels::EducationalLevelId,
                            )
                            .to(EducationalLevels::Table, EducationalLevels::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ScholarshipFields::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScholarshipFields::ScholarshipId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScholarshipFields::FieldOfStudyId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(ScholarshipFields::ScholarshipId)
                            .col(ScholarshipFields::FieldOfStudyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scholarship_fields_scholarship")
                            .from(ScholarshipFields::Table, ScholarshipFields::ScholarshipId)
                            .to(Scholarships::Table, Scholarships::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scholarship_fields_field")
                            .from(ScholarshipFields::Table, ScholarshipFields::FieldOfStudyId)
                            .to(FieldsOfStudy::Table, FieldsOfStudy::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ScholarshipFields::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ScholarshipLevels::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ScholarshipCountries::Table).to_owned())
            .await
    }
}
