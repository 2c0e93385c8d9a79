use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum PlatformProfiles {
    Table,
    Id,
    SchoolId,
    PlatformId,
    ProfileUrl,
    CreatedDate,
}

#[derive(DeriveIden)]
enum Schools {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Platforms {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlatformProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PlatformProfiles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PlatformProfiles::SchoolId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlatformProfiles::PlatformId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlatformProfiles::ProfileUrl)
                            .string_len(255)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(PlatformProfiles::CreatedDate)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_platform_profiles_school")
                            .from(PlatformProfiles::Table, PlatformProfiles::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_platform_profiles_platform")
                            .from(PlatformProfiles::Table, PlatformProfiles::PlatformId)
                            .to(Platforms::Table, Platforms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One profile per school/platform pair.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_platform_profiles_school_platform")
                    .table(PlatformProfiles::Table)
                    .col(PlatformProfiles::SchoolId)
                    .col(PlatformProfiles::PlatformId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlatformProfiles::Table).to_owned())
            .await
    }
}
