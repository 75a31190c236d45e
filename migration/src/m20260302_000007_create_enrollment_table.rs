use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000002_create_user_table::User, m20260302_000004_create_course_table::Course,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Enrollment::Table)
                    .if_not_exists()
                    .col(integer(Enrollment::UserId))
                    .col(integer(Enrollment::CourseId))
                    .col(string(Enrollment::Section))
                    .col(
                        timestamp(Enrollment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(Enrollment::UserId)
                            .col(Enrollment::CourseId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_user_id")
                            .from(Enrollment::Table, Enrollment::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_course_id")
                            .from(Enrollment::Table, Enrollment::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Fan-out looks up every user in a course section
        manager
            .create_index(
                Index::create()
                    .name("idx_enrollment_course_id_section")
                    .table(Enrollment::Table)
                    .col(Enrollment::CourseId)
                    .col(Enrollment::Section)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Enrollment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Enrollment {
    Table,
    UserId,
    CourseId,
    Section,
    CreatedAt,
}
