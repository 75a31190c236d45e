use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Connection::Table)
                    .if_not_exists()
                    .col(integer(Connection::SenderId))
                    .col(integer(Connection::ReceiverId))
                    .col(string(Connection::Status).default("pending"))
                    .col(
                        timestamp(Connection::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Connection::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(Connection::SenderId)
                            .col(Connection::ReceiverId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_connection_sender_id")
                            .from(Connection::Table, Connection::SenderId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_connection_receiver_id")
                            .from(Connection::Table, Connection::ReceiverId)
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
                    .name("idx_connection_receiver_id_status")
                    .table(Connection::Table)
                    .col(Connection::ReceiverId)
                    .col(Connection::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Connection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Connection {
    Table,
    SenderId,
    ReceiverId,
    Status,
    CreatedAt,
    UpdatedAt,
}
