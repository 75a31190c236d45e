use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000002_create_user_table::User,
    m20260303_000008_create_deadline_table::Deadline,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserDeadline::Table)
                    .if_not_exists()
                    .col(integer(UserDeadline::UserId))
                    .col(string(UserDeadline::DeadlineId))
                    .col(integer(UserDeadline::CourseId))
                    .col(string(UserDeadline::CourseCode))
                    .col(string(UserDeadline::CourseName))
                    .col(string(UserDeadline::Section))
                    .col(string(UserDeadline::Kind))
                    .col(string(UserDeadline::Title))
                    .col(text(UserDeadline::Details).default(""))
                    .col(string_null(UserDeadline::SubmissionLink))
                    .col(timestamp(UserDeadline::LastDate))
                    .col(string(UserDeadline::CreatedByName).default(""))
                    .col(boolean(UserDeadline::Completed).default(false))
                    .col(timestamp_null(UserDeadline::CompletedAt))
                    .primary_key(
                        Index::create()
                            .col(UserDeadline::UserId)
                            .col(UserDeadline::DeadlineId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_deadline_user_id")
                            .from(UserDeadline::Table, UserDeadline::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_deadline_deadline_id")
                            .from(UserDeadline::Table, UserDeadline::DeadlineId)
                            .to(Deadline::Table, Deadline::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_deadline_user_id_last_date")
                    .table(UserDeadline::Table)
                    .col(UserDeadline::UserId)
                    .col(UserDeadline::LastDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserDeadline::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserDeadline {
    Table,
    UserId,
    DeadlineId,
    CourseId,
    CourseCode,
    CourseName,
    Section,
    Kind,
    Title,
    Details,
    SubmissionLink,
    LastDate,
    CreatedByName,
    Completed,
    CompletedAt,
}
