use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Scholarships {
    Table,
    Id,
    Uuid,
    Slug,
    Thumbnail,
    Name,
    LocalName,
    Description,
    LocalDescription,
    Provider,
    Website,
    Amount,
    FullTuitionCoverage,
    Stipend,
    EligibilityCriteria,
    MinGpa,
    RequiredDocuments,
    ApplicationDeadline,
    ApplicationOpenDate,
    ApplicationStatus,
    Renewable,
    Duration,
    ContactEmail,
    Notes,
    CreatedAt,
    UpdatedAt,
    IsActive,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Scholarships::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Scholarships::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Scholarships::Uuid)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Scholarships::Slug)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Scholarships::Thumbnail).string_len(255).null())
                    .col(
                        ColumnDef::new(Scholarships::Name)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Scholarships::LocalName)
                            .string_len(255)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Scholarships::Description).text().not_null())
                    .col(
                        ColumnDef::new(Scholarships::LocalDescription)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Scholarships::Provider)
                            .string_len(255)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Scholarships::Website)
                            .string_len(255)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Scholarships::Amount).decimal_len(12, 2).null())
                    .col(
                        ColumnDef::new(Scholarships::FullTuitionCoverage)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Scholarships::Stipend).decimal_len(12, 2).null())
                    .col(
                        ColumnDef::new(Scholarships::EligibilityCriteria)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Scholarships::MinGpa).decimal_len(4, 2).null())
                    .col(
                        ColumnDef::new(Scholarships::RequiredDocuments)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Scholarships::ApplicationDeadline)
                            .date()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Scholarships::ApplicationOpenDate)
                            .date()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Scholarships::ApplicationStatus)
                            .string_len(50)
                            .not_null()
                            .default("Upcoming"),
                    )
                    .col(
                        ColumnDef::new(Scholarships::Renewable)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Scholarships::Duration)
                            .string_len(255)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Scholarships::ContactEmail)
                            .string_len(255)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Scholarships::Notes).text().not_null())
                    .col(
                        ColumnDef::new(Scholarships::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Scholarships::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Scholarships::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Scholarships::Table).to_owned())
            .await
    }
}
