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
                    .table(Deadline::Table)
                    .if_not_exists()
                    .col(string(Deadline::Id))
                    .col(integer(Deadline::CourseId))
                    .col(string(Deadline::Section))
                    .col(string(Deadline::Kind))
                    .col(string(Deadline::Title))
                    .col(text(Deadline::Details).default(""))
                    .col(string_null(Deadline::SubmissionLink))
                    .col(timestamp(Deadline::LastDate))
                    .col(integer(Deadline::CreatedBy))
                    .col(
                        timestamp(Deadline::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Deadline::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(Deadline::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deadline_course_id")
                            .from(Deadline::Table, Deadline::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deadline_created_by")
                            .from(Deadline::Table, Deadline::CreatedBy)
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
                    .name("idx_deadline_course_id_section")
                    .table(Deadline::Table)
                    .col(Deadline::CourseId)
                    .col(Deadline::Section)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Deadline::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Deadline {
    Table,
    Id,
    CourseId,
    Section,
    Kind,
    Title,
    Details,
    SubmissionLink,
    LastDate,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
