use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_club_table::Club,
    m20260301_000002_create_user_table::User,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(integer(Event::ClubId))
                    .col(integer(Event::CreatedBy))
                    .col(string(Event::Title))
                    .col(text(Event::Description).default(""))
                    .col(date(Event::Date))
                    .col(string(Event::Time))
                    .col(string(Event::Location).default(""))
                    .col(string_null(Event::ImageUrl))
                    .col(string_null(Event::ImagePath))
                    .col(string_null(Event::ImageBucket))
                    .col(
                        timestamp(Event::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Event::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_club_id")
                            .from(Event::Table, Event::ClubId)
                            .to(Club::Table, Club::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_created_by")
                            .from(Event::Table, Event::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_event_date")
                    .table(Event::Table)
                    .col(Event::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    ClubId,
    CreatedBy,
    Title,
    Description,
    Date,
    Time,
    Location,
    ImageUrl,
    ImagePath,
    ImageBucket,
    CreatedAt,
    UpdatedAt,
}
