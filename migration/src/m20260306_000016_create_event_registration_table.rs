use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000002_create_user_table::User,
    m20260306_000014_create_event_table::Event,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventRegistration::Table)
                    .if_not_exists()
                    .col(integer(EventRegistration::EventId))
                    .col(integer(EventRegistration::UserId))
                    .col(string(EventRegistration::Status).default("registered"))
                    .col(
                        timestamp(EventRegistration::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(EventRegistration::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(EventRegistration::EventId)
                            .col(EventRegistration::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_registration_event_id")
                            .from(EventRegistration::Table, EventRegistration::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_registration_user_id")
                            .from(EventRegistration::Table, EventRegistration::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventRegistration::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventRegistration {
    Table,
    EventId,
    UserId,
    Status,
    CreatedAt,
    UpdatedAt,
}
