use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000002_create_user_table::User,
    m20260302_000004_create_course_table::Course,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mark::Table)
                    .if_not_exists()
                    .col(integer(Mark::UserId))
                    .col(integer(Mark::CourseId))
                    .col(string(Mark::Category))
                    .col(string(Mark::DeadlineId).default(""))
                    .col(double(Mark::Obtained))
                    .col(double(Mark::OutOf))
                    .col(
                        timestamp(Mark::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(Mark::UserId)
                            .col(Mark::CourseId)
                            .col(Mark::Category)
                            .col(Mark::DeadlineId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mark_user_id")
                            .from(Mark::Table, Mark::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mark_course_id")
                            .from(Mark::Table, Mark::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mark::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Mark {
    Table,
    UserId,
    CourseId,
    Category,
    DeadlineId,
    Obtained,
    OutOf,
    UpdatedAt,
}
