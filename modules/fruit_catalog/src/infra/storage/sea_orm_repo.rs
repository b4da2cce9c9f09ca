//! SeaORM-backed repository implementations for the domain ports.
//!
//! Each struct is generic over `C: ConnectionTrait`, so you can construct it
//! with a `DatabaseConnection` **or** a transactional connection.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set, SqlErr,
};
use uuid::Uuid;

use crate::contract::model::{Fruit, Review, User};
use crate::domain::repo::{
    FruitsRepository, ReviewsRepository, StoreError, StoreResult, UsersRepository,
};
use crate::infra::storage::entity::{fruits, reviews, users};
use crate::infra::storage::mapper;

/// Classify a database error for the port surface. Unique-index hits become
/// `UniqueViolation`; everything else keeps its context chain.
fn map_db_err(op: &'static str, err: DbErr) -> StoreError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => StoreError::UniqueViolation(msg),
        _ => StoreError::Other(anyhow::Error::new(err).context(op)),
    }
}

/// SeaORM repository impl for users.
/// Holds a connection object; its lifetime/ownership is up to the caller.
pub struct SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> UsersRepository for SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let found = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.conn)
            .await
            .map_err(|e| map_db_err("find user by email failed", e))?;
        Ok(found.map(mapper::user_to_contract))
    }

    async fn insert(&self, user: User) -> StoreResult<()> {
        let m = users::ActiveModel {
            id: Set(user.id),
            email: Set(user.email),
            last_login: Set(user.last_login),
        };
        let _ = m
            .insert(&self.conn)
            .await
            .map_err(|e| map_db_err("insert user failed", e))?;
        Ok(())
    }
}

/// SeaORM repository impl for fruits.
pub struct SeaOrmFruitsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmFruitsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> FruitsRepository for SeaOrmFruitsRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Fruit>> {
        let found = fruits::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(|e| map_db_err("find fruit by id failed", e))?;
        Ok(found.map(mapper::fruit_to_contract))
    }

    async fn name_exists(&self, name: &str) -> StoreResult<bool> {
        let count = fruits::Entity::find()
            .filter(fruits::Column::Name.eq(name))
            .count(&self.conn)
            .await
            .map_err(|e| map_db_err("fruit name_exists failed", e))?;
        Ok(count > 0)
    }

    async fn insert(&self, fruit: Fruit) -> StoreResult<()> {
        let m = fruits::ActiveModel {
            id: Set(fruit.id),
            name: Set(fruit.name),
            kind: Set(fruit.kind),
            character: Set(fruit.character),
            abilities: Set(fruit.abilities),
            owner_user_id: Set(fruit.owner_user_id),
        };
        let _ = m
            .insert(&self.conn)
            .await
            .map_err(|e| map_db_err("insert fruit failed", e))?;
        Ok(())
    }

    async fn update(&self, fruit: Fruit) -> StoreResult<bool> {
        // Full replacement by PK via ActiveModel::update.
        let m = fruits::ActiveModel {
            id: Set(fruit.id),
            name: Set(fruit.name),
            kind: Set(fruit.kind),
            character: Set(fruit.character),
            abilities: Set(fruit.abilities),
            owner_user_id: Set(fruit.owner_user_id),
        };
        match m.update(&self.conn).await {
            Ok(_) => Ok(true),
            Err(DbErr::RecordNotUpdated) => Ok(false),
            Err(e) => Err(map_db_err("update fruit failed", e)),
        }
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let res = fruits::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .map_err(|e| map_db_err("delete fruit failed", e))?;
        Ok(res.rows_affected > 0)
    }

    async fn list(&self, kind: Option<&str>) -> StoreResult<Vec<Fruit>> {
        let mut query = fruits::Entity::find();
        if let Some(kind) = kind {
            query = query.filter(fruits::Column::Kind.eq(kind));
        }
        let rows = query
            .all(&self.conn)
            .await
            .map_err(|e| map_db_err("list fruits failed", e))?;
        Ok(rows.into_iter().map(mapper::fruit_to_contract).collect())
    }
}

/// SeaORM repository impl for reviews.
pub struct SeaOrmReviewsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmReviewsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> ReviewsRepository for SeaOrmReviewsRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn insert(&self, review: Review) -> StoreResult<()> {
        let m = reviews::ActiveModel {
            id: Set(review.id),
            fruit_id: Set(review.fruit_id),
            rating: Set(review.rating),
            comment: Set(review.comment),
        };
        let _ = m
            .insert(&self.conn)
            .await
            .map_err(|e| map_db_err("insert review failed", e))?;
        Ok(())
    }

    async fn list_for_fruit(&self, fruit_id: Uuid) -> StoreResult<Vec<Review>> {
        let rows = reviews::Entity::find()
            .filter(reviews::Column::FruitId.eq(fruit_id))
            .all(&self.conn)
            .await
            .map_err(|e| map_db_err("list reviews for fruit failed", e))?;
        Ok(rows.into_iter().map(mapper::review_to_contract).collect())
    }

    async fn list_all(&self) -> StoreResult<Vec<Review>> {
        let rows = reviews::Entity::find()
            .all(&self.conn)
            .await
            .map_err(|e| map_db_err("list reviews failed", e))?;
        Ok(rows.into_iter().map(mapper::review_to_contract).collect())
    }
}
