//! Migration to create the prelaunch_signups table.
//!
//! One row per completed signup. The unique index on email is the
//! authoritative dedupe guard; the endpoint's pre-insert check is advisory.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PrelaunchSignups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PrelaunchSignups::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PrelaunchSignups::Name).text().not_null())
                    .col(ColumnDef::new(PrelaunchSignups::Email).text().not_null())
                    .col(
                        ColumnDef::new(PrelaunchSignups::Industry)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PrelaunchSignups::JobTitle)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PrelaunchSignups::Organisation)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PrelaunchSignups::Phone).text().not_null())
                    .col(ColumnDef::new(PrelaunchSignups::Interest).text().null())
                    .col(
                        ColumnDef::new(PrelaunchSignups::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_prelaunch_signups_email_unique")
                    .table(PrelaunchSignups::Table)
                    .col(PrelaunchSignups::Email)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PrelaunchSignups::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PrelaunchSignups {
    Table,
    Id,
    Name,
    Email,
    Industry,
    JobTitle,
    Organisation,
    Phone,
    Interest,
    CreatedAt,
}
