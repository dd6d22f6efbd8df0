use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use tracing::{debug, info, instrument, trace, warn};
use validator::Validate;

use crate::entities::{hero, prelude::*};
use crate::error::{RepositoryError, Result, is_foreign_key_violation};

/// Input for creating a hero.
#[derive(Debug, Clone, Validate)]
pub struct NewHero {
    #[validate(length(min = 1, max = 100))]
    pub full_name: String,
    pub user_id: Option<i32>,
}

/// Input for renaming an existing hero. Only the full name is mutable.
#[derive(Debug, Clone, Validate)]
pub struct HeroUpdate {
    pub id: i32,
    #[validate(length(min = 1, max = 100))]
    pub full_name: String,
}

/// CRUD access to the `heroes` table over a borrowed connection handle.
pub struct HeroesRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> HeroesRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Insert a new hero and return it with its generated id.
    ///
    /// The owner, when given, must be an existing user.
    #[instrument(skip(self))]
    pub async fn create(&self, new_hero: NewHero) -> Result<hero::Model> {
        trace!("Entering HeroesRepository::create");
        new_hero.validate()?;

        if let Some(user_id) = new_hero.user_id {
            trace!("Checking that owner {} exists", user_id);
            if User::find_by_id(user_id).one(self.conn).await?.is_none() {
                warn!("Refusing to create hero for unknown user {}", user_id);
                return Err(RepositoryError::UnknownUser(user_id));
            }
        }

        let owner = new_hero.user_id;
        let active = hero::ActiveModel {
            full_name: Set(new_hero.full_name),
            user_id: Set(owner),
            ..Default::default()
        };

        match active.insert(self.conn).await {
            Ok(created) => {
                info!("Hero created with ID: {}, full name: {}", created.id, created.full_name);
                Ok(created)
            }
            // The owner can disappear between the lookup and the insert.
            Err(err) if is_foreign_key_violation(&err) => {
                warn!("Owner vanished while creating hero: {}", err);
                Err(RepositoryError::UnknownUser(owner.unwrap_or_default()))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Overwrite the full name of the hero identified by `changes.id`.
    #[instrument(skip(self))]
    pub async fn update(&self, changes: HeroUpdate) -> Result<hero::Model> {
        trace!("Entering HeroesRepository::update for hero {}", changes.id);
        changes.validate()?;

        let existing = match Hero::find_by_id(changes.id).one(self.conn).await? {
            Some(existing) => existing,
            None => {
                warn!("Hero with ID {} not found for update", changes.id);
                return Err(RepositoryError::HeroNotFound(changes.id));
            }
        };

        debug!("Renaming hero {} from '{}' to '{}'", existing.id, existing.full_name, changes.full_name);
        let mut active: hero::ActiveModel = existing.into();
        active.full_name = Set(changes.full_name);

        match active.update(self.conn).await {
            Ok(updated) => {
                info!("Hero with ID {} updated successfully", updated.id);
                Ok(updated)
            }
            Err(DbErr::RecordNotUpdated) => {
                warn!("Hero with ID {} was removed before the update landed", changes.id);
                Err(RepositoryError::HeroNotFound(changes.id))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// All heroes owned by `user_id`, in id order.
    #[instrument(skip(self))]
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<hero::Model>> {
        let heroes = Hero::find()
            .filter(hero::Column::UserId.eq(user_id))
            .order_by_asc(hero::Column::Id)
            .all(self.conn)
            .await?;

        debug!("Retrieved {} heroes for user {}", heroes.len(), user_id);
        Ok(heroes)
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, hero_id: i32) -> Result<Option<hero::Model>> {
        let hero = Hero::find_by_id(hero_id).one(self.conn).await?;
        if hero.is_none() {
            debug!("No hero with ID {}", hero_id);
        }
        Ok(hero)
    }

    /// Remove a hero. Fails with `HeroNotFound` when nothing was deleted.
    #[instrument(skip(self))]
    pub async fn delete(&self, hero_id: i32) -> Result<()> {
        let result = Hero::delete_by_id(hero_id).exec(self.conn).await?;
        debug!("Delete operation completed. Rows affected: {}", result.rows_affected);

        if result.rows_affected == 0 {
            warn!("Hero with ID {} not found for deletion", hero_id);
            return Err(RepositoryError::HeroNotFound(hero_id));
        }

        info!("Hero with ID {} deleted successfully", hero_id);
        Ok(())
    }
}
