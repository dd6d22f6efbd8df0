use crate::entity_iden::EntityIden;
use model::entities::prelude::*;
use model::entities::{hero, user};
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hero::table())
                    .if_not_exists()
                    .col(pk_auto(Hero::column(hero::Column::Id)))
                    .col(string_len(Hero::column(hero::Column::FullName), 100))
                    .col(integer_null(Hero::column(hero::Column::UserId)))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_heroes_users")
                            .from(Hero::table(), Hero::column(hero::Column::UserId))
                            .to(User::table(), User::column(user::Column::Id))
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_heroes_user_id")
                    .table(Hero::table())
                    .col(Hero::column(hero::Column::UserId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hero::table()).to_owned())
            .await
    }
}
