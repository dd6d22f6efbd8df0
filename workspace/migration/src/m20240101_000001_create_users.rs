use crate::entity_iden::EntityIden;
use model::entities::prelude::*;
use model::entities::user;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::table())
                    .if_not_exists()
                    .col(pk_auto(User::column(user::Column::Id)))
                    .col(string_len(User::column(user::Column::UserName), 100).unique_key())
                    // PHC strings are longer than the 100 characters allowed for the raw password
                    .col(string_len(User::column(user::Column::PasswordHash), 255))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::table()).to_owned())
            .await
    }
}
