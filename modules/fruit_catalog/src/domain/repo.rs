use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::contract::model::{Fruit, Review, User};

/// Failure surface of the persistence ports.
///
/// Unique-index violations are kept distinct from everything else so the
/// services can answer `Conflict` from the store's own report instead of
/// trusting their advisory pre-checks (which race under concurrency).
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Port for the user store: lookup by email and constrained insert.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Load a user by email. Emails are unique, so at most one row matches.
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;
    /// Insert a fully-formed user.
    ///
    /// Service computes id/timestamps/validation; repo persists. A duplicate
    /// email surfaces as `StoreError::UniqueViolation`.
    async fn insert(&self, user: User) -> StoreResult<()>;
}

/// Port for the fruit store.
#[async_trait]
pub trait FruitsRepository: Send + Sync {
    /// Load a fruit by id.
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Fruit>>;
    /// Advisory existence check by name; the unique index remains the
    /// authoritative guard.
    async fn name_exists(&self, name: &str) -> StoreResult<bool>;
    /// Insert a fully-formed fruit. A duplicate name surfaces as
    /// `StoreError::UniqueViolation`.
    async fn insert(&self, fruit: Fruit) -> StoreResult<()>;
    /// Replace an existing fruit (by primary key in `fruit.id`).
    /// Returns false when no row with that id exists.
    async fn update(&self, fruit: Fruit) -> StoreResult<bool>;
    /// Delete by id. Returns true if a row was deleted.
    async fn delete(&self, id: Uuid) -> StoreResult<bool>;
    /// List fruits, optionally restricted to an exact `kind` value.
    async fn list(&self, kind: Option<&str>) -> StoreResult<Vec<Fruit>>;
}

/// Port for the review store.
#[async_trait]
pub trait ReviewsRepository: Send + Sync {
    /// Insert a fully-formed review.
    async fn insert(&self, review: Review) -> StoreResult<()>;
    /// List all reviews referencing the given fruit id.
    async fn list_for_fruit(&self, fruit_id: Uuid) -> StoreResult<Vec<Review>>;
    /// List every review, unfiltered.
    async fn list_all(&self) -> StoreResult<Vec<Review>>;
}
