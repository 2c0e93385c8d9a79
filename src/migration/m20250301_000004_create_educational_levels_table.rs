use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum EducationalLevels {
    Table,
    Id,
    LevelName,
    Color,
    CreatedDate,
    UpdatedDate,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EducationalLevels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EducationalLevels::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EducationalLevels::LevelName)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EducationalLevels::Color)
                            .string_len(32)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(EducationalLevels::CreatedDate)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(EducationalLevels::UpdatedDate)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EducationalLevels::Table).to_owned())
            .await
    }
}
