use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::api::rest::routes;
use crate::config::FruitCatalogConfig;
use crate::domain::fruits::FruitsService;
use crate::domain::reviews::ReviewsService;
use crate::domain::users::UsersService;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::sea_orm_repo::{
    SeaOrmFruitsRepository, SeaOrmReviewsRepository, SeaOrmUsersRepository,
};

/// Module facade: wires repositories to domain services and exposes the
/// REST router. One instance per running server.
#[derive(Clone)]
pub struct FruitCatalog {
    users: Arc<UsersService>,
    fruits: Arc<FruitsService>,
    reviews: Arc<ReviewsService>,
    config: Arc<FruitCatalogConfig>,
}

impl FruitCatalog {
    /// Bring the schema up to date. Call once before `new`.
    pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
        info!("Running fruit_catalog database migrations");
        Migrator::up(db, None).await?;
        Ok(())
    }

    pub fn new(db: DatabaseConnection, config: FruitCatalogConfig) -> Self {
        let users_repo = Arc::new(SeaOrmUsersRepository::new(db.clone()));
        let fruits_repo = Arc::new(SeaOrmFruitsRepository::new(db.clone()));
        let reviews_repo = Arc::new(SeaOrmReviewsRepository::new(db));

        let users = UsersService::new(users_repo);
        let fruits = FruitsService::new(fruits_repo.clone(), users.clone());
        let reviews = ReviewsService::new(reviews_repo, fruits_repo);

        Self {
            users: Arc::new(users),
            fruits: Arc::new(fruits),
            reviews: Arc::new(reviews),
            config: Arc::new(config),
        }
    }

    /// REST surface of the module, ready to be merged into the app router.
    pub fn router(&self) -> Router {
        routes::register_routes(
            self.users.clone(),
            self.fruits.clone(),
            self.reviews.clone(),
            self.config.clone(),
        )
    }
}
