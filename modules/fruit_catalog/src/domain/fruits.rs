use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::contract::model::{Fruit, FruitUpdate, NewFruit};
use crate::domain::error::DomainError;
use crate::domain::repo::{FruitsRepository, StoreError};
use crate::domain::users::UsersService;

/// Fruit catalog service: name uniqueness, owner association and CRUD.
/// Consults the users service to resolve owner/requester emails.
#[derive(Clone)]
pub struct FruitsService {
    repo: Arc<dyn FruitsRepository>,
    users: UsersService,
}

impl FruitsService {
    pub fn new(repo: Arc<dyn FruitsRepository>, users: UsersService) -> Self {
        Self { repo, users }
    }

    #[instrument(
        name = "fruit_catalog.fruits.create",
        skip(self),
        fields(name = %new_fruit.name, owner = %new_fruit.owner_email)
    )]
    pub async fn create(&self, new_fruit: NewFruit) -> Result<Fruit, DomainError> {
        info!("Creating new fruit");

        // Advisory pre-check for the deterministic conflict on the serial
        // path; the unique index on name is the real guard.
        if self
            .repo
            .name_exists(&new_fruit.name)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
        {
            return Err(DomainError::fruit_name_exists(new_fruit.name));
        }

        let owner = self
            .users
            .resolve_by_email(&new_fruit.owner_email)
            .await?
            .ok_or_else(|| DomainError::user_not_found(&new_fruit.owner_email))?;

        let fruit = Fruit {
            id: Uuid::new_v4(),
            name: new_fruit.name,
            kind: new_fruit.kind,
            character: new_fruit.character,
            abilities: new_fruit.abilities,
            owner_user_id: owner.id,
        };

        match self.repo.insert(fruit.clone()).await {
            Ok(()) => {
                info!("Successfully created fruit with id={}", fruit.id);
                Ok(fruit)
            }
            // Lost the race against a concurrent create with the same name.
            Err(StoreError::UniqueViolation(_)) => {
                Err(DomainError::fruit_name_exists(fruit.name))
            }
            Err(e) => Err(DomainError::database(e.to_string())),
        }
    }

    #[instrument(name = "fruit_catalog.fruits.get", skip(self), fields(fruit_id = %id))]
    pub async fn get(&self, id: Uuid) -> Result<Fruit, DomainError> {
        debug!("Getting fruit by id");
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::fruit_not_found(id))
    }

    /// List fruits, optionally restricted to an exact `kind` value.
    /// Always succeeds with an (possibly empty) vec.
    #[instrument(name = "fruit_catalog.fruits.list", skip(self))]
    pub async fn list(&self, kind: Option<&str>) -> Result<Vec<Fruit>, DomainError> {
        debug!("Listing fruits");
        self.repo
            .list(kind)
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }

    /// Full replacement of the mutable fields. The requester is passed
    /// explicitly and must be the fruit's current owner; the check is a
    /// plain branch evaluated on every call.
    #[instrument(
        name = "fruit_catalog.fruits.update",
        skip(self, update),
        fields(fruit_id = %id, requester = %requester_email)
    )]
    pub async fn update(
        &self,
        id: Uuid,
        update: FruitUpdate,
        requester_email: &str,
    ) -> Result<Fruit, DomainError> {
        info!("Updating fruit");

        let requester = self
            .users
            .resolve_by_email(requester_email)
            .await?
            .ok_or_else(|| DomainError::user_not_found(requester_email))?;

        let current = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::fruit_not_found(id))?;

        if current.owner_user_id != requester.id {
            return Err(DomainError::not_owner(requester.id, id));
        }

        let new_owner = self
            .users
            .resolve_by_email(&update.owner_email)
            .await?
            .ok_or_else(|| DomainError::user_not_found(&update.owner_email))?;

        let fruit = Fruit {
            id,
            name: update.name,
            kind: update.kind,
            character: update.character,
            abilities: update.abilities,
            owner_user_id: new_owner.id,
        };

        match self.repo.update(fruit.clone()).await {
            Ok(true) => {
                info!("Successfully updated fruit");
                Ok(fruit)
            }
            // Deleted between the ownership check and the write.
            Ok(false) => Err(DomainError::fruit_not_found(id)),
            // Renamed into an existing fruit's name.
            Err(StoreError::UniqueViolation(_)) => {
                Err(DomainError::fruit_name_exists(fruit.name))
            }
            Err(e) => Err(DomainError::database(e.to_string())),
        }
    }

    /// Delete by id. Reviews referencing the fruit are left in place.
    #[instrument(name = "fruit_catalog.fruits.delete", skip(self), fields(fruit_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        info!("Deleting fruit");

        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        if !deleted {
            return Err(DomainError::fruit_not_found(id));
        }

        info!("Successfully deleted fruit");
        Ok(())
    }
}
