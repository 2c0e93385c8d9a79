use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Addresses {
    Table,
    Id,
    Name,
    Street,
    City,
    State,
    ZipCode,
    Country,
    Slug,
}

#[derive(DeriveIden)]
enum SchoolAddresses {
    Table,
    SchoolId,
    AddressId,
}

#[derive(DeriveIden)]
enum Schools {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Addresses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Addresses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Addresses::Name)
                            .string_len(128)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Addresses::Street)
                            .string_len(255)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Addresses::City)
                            .string_len(128)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Addresses::State)
                            .string_len(128)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Addresses::ZipCode)
                            .string_len(10)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Addresses::Country)
                            .string_len(128)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Addresses::Slug)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // Duplicate composite addresses are rejected at the store level.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_addresses_composite")
                    .table(Addresses::Table)
                    .col(Addresses::Street)
                    .col(Addresses::City)
                    .col(Addresses::State)
                    .col(Addresses::ZipCode)
                    .col(Addresses::Country)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SchoolAddresses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SchoolAddresses::SchoolId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SchoolAddresses::AddressId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(SchoolAddresses::SchoolId)
                            .col(SchoolAddresses::AddressId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_school_addresses_school")
                            .from(SchoolAddresses::Table, SchoolAddresses::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_school_addresses_address")
                            .from(SchoolAddresses::Table, SchoolAddresses::AddressId)
                            .to(Addresses::Table, Addresses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SchoolAddresses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Addresses::Table).to_owned())
            .await
    }
}
