use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::{Extension, Router};
use utoipa::OpenApi;

use crate::api::rest::{dto, error, handlers};
use crate::config::FruitCatalogConfig;
use crate::domain::fruits::FruitsService;
use crate::domain::reviews::ReviewsService;
use crate::domain::users::UsersService;

/// OpenAPI document covering the whole REST surface of this module.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fruitdex API",
        description = "Devil fruit registry: users, fruits and reviews"
    ),
    paths(
        handlers::list_fruits,
        handlers::list_fruits_flat,
        handlers::get_fruit,
        handlers::create_fruit,
        handlers::update_fruit,
        handlers::delete_fruit,
        handlers::list_paramecia,
        handlers::list_logia,
        handlers::list_zoan,
        handlers::add_review,
        handlers::list_reviews_for_fruit,
        handlers::list_all_reviews,
        handlers::login,
    ),
    components(schemas(
        dto::FruitDto,
        dto::CreateFruitReq,
        dto::UpdateFruitReq,
        dto::FruitListDto,
        dto::FruitUpdatedDto,
        dto::MessageDto,
        dto::ReviewDto,
        dto::CreateReviewReq,
        dto::ReviewListDto,
        dto::UserDto,
        dto::LoginReq,
        error::ErrorBody,
    )),
    tags(
        (name = "fruits", description = "Fruit catalog operations"),
        (name = "reviews", description = "Fruit review operations"),
        (name = "users", description = "User registration")
    )
)]
pub struct ApiDoc;

pub fn register_routes(
    users: Arc<UsersService>,
    fruits: Arc<FruitsService>,
    reviews: Arc<ReviewsService>,
    config: Arc<FruitCatalogConfig>,
) -> Router {
    // Static segments take priority over `{id}` captures, so /fruits/list,
    // /fruits/add, /fruits/reviews and /fruits/type/* coexist with /fruits/{id}.
    Router::new()
        .route("/fruits", get(handlers::list_fruits))
        .route("/fruits/list", get(handlers::list_fruits_flat))
        .route("/fruits/add", post(handlers::create_fruit))
        .route("/fruits/reviews", get(handlers::list_all_reviews))
        .route("/fruits/type/paramecia", get(handlers::list_paramecia))
        .route("/fruits/type/logia", get(handlers::list_logia))
        .route("/fruits/type/zoan", get(handlers::list_zoan))
        .route("/fruits/update/{id}", put(handlers::update_fruit))
        .route(
            "/fruits/{id}",
            get(handlers::get_fruit).delete(handlers::delete_fruit),
        )
        .route("/fruits/{id}/reviews", get(handlers::list_reviews_for_fruit))
        .route("/fruits/{id}/reviews/add", post(handlers::add_review))
        .route("/user/login", post(handlers::login))
        .layer(Extension(users))
        .layer(Extension(fruits))
        .layer(Extension(reviews))
        .layer(Extension(config))
}
