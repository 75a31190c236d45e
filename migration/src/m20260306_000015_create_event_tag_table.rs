use sea_orm_migration::{prelude::*, schema::*};

use super::m20260306_000014_create_event_table::Event;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventTag::Table)
                    .if_not_exists()
                    .col(integer(EventTag::EventId))
                    .col(string(EventTag::Tag))
                    .primary_key(
                        Index::create()
                            .col(EventTag::EventId)
                            .col(EventTag::Tag),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_tag_event_id")
                            .from(EventTag::Table, EventTag::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventTag {
    Table,
    EventId,
    Tag,
}
