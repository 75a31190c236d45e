use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Club::Table)
                    .if_not_exists()
                    .col(pk_auto(Club::Id))
                    .col(string_uniq(Club::Name))
                    .col(string_uniq(Club::AdminEmail))
                    .col(string_uniq(Club::SecretKey))
                    .col(
                        timestamp(Club::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Club::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Club {
    Table,
    Id,
    Name,
    AdminEmail,
    SecretKey,
    CreatedAt,
}
