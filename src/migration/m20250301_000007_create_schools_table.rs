use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Schools {
    Table,
    Id,
    Logo,
    CoverImage,
    Name,
    LocalName,
    ShortName,
    Code,
    Description,
    Established,
    Founder,
    President,
    Endowment,
    Location,
    Motto,
    Tuition,
    Slug,
    Uuid,
    CreatedDate,
    UpdatedDate,
    IsActive,
    SelfData,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Schools::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Schools::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Schools::Logo).string_len(255).null())
                    .col(ColumnDef::new(Schools::CoverImage).string_len(255).null())
                    .col(ColumnDef::new(Schools::Name).string_len(75).not_null())
                    .col(
                        ColumnDef::new(Schools::LocalName)
                            .string_len(128)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Schools::ShortName)
                            .string_len(25)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Schools::Code)
                            .string_len(15)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Schools::Description).text().not_null())
                    .col(ColumnDef::new(Schools::Established).date().null())
                    .col(
                        ColumnDef::new(Schools::Founder)
                            .string_len(125)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Schools::President)
                            .string_len(125)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Schools::Endowment)
                            // 16 is the widest precision sea-query renders on sqlite
                            .decimal_len(16, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Schools::Location)
                            .string_len(255)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Schools::Motto)
                            .string_len(250)
                            .not_null()
                            .default("N/A"),
                    )
                    .col(
                        ColumnDef::new(Schools::Tuition)
                            .decimal_len(16, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Schools::Slug)
                            .string_len(75)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Schools::Uuid).uuid().not_null().unique_key())
                    .col(
                        ColumnDef::new(Schools::CreatedDate)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Schools::UpdatedDate)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Schools::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Schools::SelfData)
                            .string_len(128)
                            .not_null()
                            .default(""),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_schools_self_data")
                    .table(Schools::Table)
                    .col(Schools::SelfData)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Schools::Table).to_owned())
            .await
    }
}
