//! Create `profile` table.
//!
//! `skills` is kept as a jsonb array; job preferences are flattened into
//! three columns.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(uuid(Profile::Id).primary_key())
                    .col(text(Profile::Name).not_null())
                    .col(text(Profile::Email).unique_key().not_null())
                    .col(text(Profile::Phone).not_null())
                    .col(json_binary(Profile::Skills).not_null())
                    .col(text(Profile::Experience).not_null())
                    .col(text(Profile::Education).not_null())
                    .col(text(Profile::JobLocation).not_null())
                    .col(text(Profile::JobType).not_null())
                    .col(text(Profile::JobIndustry).not_null())
                    .col(text(Profile::ProfileImage).not_null())
                    .col(timestamp_with_time_zone(Profile::CreatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_profile_created_at")
                    .table(Profile::Table)
                    .col(Profile::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Profile::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Profile {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Skills,
    Experience,
    Education,
    JobLocation,
    JobType,
    JobIndustry,
    ProfileImage,
    CreatedAt,
}
