use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum SchoolSchoolTypes {
    Table,
    SchoolId,
    SchoolTypeId,
}

#[derive(DeriveIden)]
enum SchoolEducationalLevels {
    Table,
    SchoolId,
    EducationalLevelId,
}

#[derive(DeriveIden)]
enum Schools {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum SchoolTypes {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum EducationalLevels {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SchoolSchoolTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SchoolSchoolTypes::SchoolId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SchoolSchoolTypes::SchoolTypeId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(SchoolSchoolTypes::SchoolId)
                            .col(SchoolSchoolTypes::SchoolTypeId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_school_school_types_school")
                            .from(SchoolSchoolTypes::Table, SchoolSchoolTypes::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_school_school_types_type")
                            .from(SchoolSchoolTypes::Table, SchoolSchoolTypes::SchoolTypeId)
                            .to(SchoolTypes::Table, SchoolTypes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SchoolEducationalLevels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SchoolEducationalLevels::SchoolId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SchoolEducationalLevels::EducationalLevelId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(SchoolEducationalLevels::SchoolId)
                            .col(SchoolEducationalLevels::EducationalLevelId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_school_educational_levels_school")
                            .from(
                                SchoolEducationalLevels::Table,
                                SchoolEducationalLevels::SchoolId,
                            )
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_school_educational_levels_level")
                            .from(
                                SchoolEducationalLevels::Table,
                                SchoolEducationalLevels::EducationalLevelId,
                            )
                            .to(EducationalLevels::Table, EducationalLevels::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SchoolEducationalLevels::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SchoolSchoolTypes::Table).to_owned())
            .await
    }
}
