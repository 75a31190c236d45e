use sea_orm_migration::{prelude::*, schema::*};

use super::m20260302_000005_create_course_section_table::CourseSection;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClassSchedule::Table)
                    .if_not_exists()
                    .col(pk_auto(ClassSchedule::Id))
                    .col(integer(ClassSchedule::SectionId))
                    .col(string(ClassSchedule::Kind))
                    .col(string(ClassSchedule::Faculty).default(""))
                    .col(text(ClassSchedule::Details).default(""))
                    .col(string(ClassSchedule::Days).default(""))
                    .col(string(ClassSchedule::StartTime).default(""))
                    .col(string(ClassSchedule::EndTime).default(""))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_class_schedule_section_id")
                            .from(ClassSchedule::Table, ClassSchedule::SectionId)
                            .to(CourseSection::Table, CourseSection::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_class_schedule_section_id_kind")
                    .table(ClassSchedule::Table)
                    .col(ClassSchedule::SectionId)
                    .col(ClassSchedule::Kind)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClassSchedule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClassSchedule {
    Table,
    Id,
    SectionId,
    Kind,
    Faculty,
    Details,
    Days,
    StartTime,
    EndTime,
}
