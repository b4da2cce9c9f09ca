use axum::{
    extract::Path,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::Json,
    Extension,
};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::rest::dto::{
    CreateFruitReq, CreateReviewReq, FruitDto, FruitListDto, FruitUpdatedDto, LoginReq,
    MessageDto, ReviewDto, ReviewListDto, UpdateFruitReq, UserDto,
};
use crate::api::rest::error::{map_create_fruit_error, ApiError, ErrorBody};
use crate::config::FruitCatalogConfig;
use crate::contract::model::{KIND_LOGIA, KIND_PARAMECIA, KIND_ZOAN};
use crate::domain::fruits::FruitsService;
use crate::domain::reviews::ReviewsService;
use crate::domain::users::UsersService;

/// List all fruits (enveloped)
#[utoipa::path(
    get,
    path = "/fruits",
    tag = "fruits",
    responses(
        (status = 200, description = "All fruits", body = FruitListDto),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn list_fruits(
    Extension(svc): Extension<std::sync::Arc<FruitsService>>,
) -> Result<Json<FruitListDto>, ApiError> {
    match svc.list(None).await {
        Ok(fruits) => Ok(Json(FruitListDto {
            fruits: fruits.into_iter().map(FruitDto::from).collect(),
        })),
        Err(e) => {
            error!("Failed to list fruits: {}", e);
            Err(e.into())
        }
    }
}

/// List all fruits (flat array)
#[utoipa::path(
    get,
    path = "/fruits/list",
    tag = "fruits",
    responses(
        (status = 200, description = "All fruits", body = [FruitDto]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn list_fruits_flat(
    Extension(svc): Extension<std::sync::Arc<FruitsService>>,
) -> Result<Json<Vec<FruitDto>>, ApiError> {
    match svc.list(None).await {
        Ok(fruits) => Ok(Json(fruits.into_iter().map(FruitDto::from).collect())),
        Err(e) => {
            error!("Failed to list fruits: {}", e);
            Err(e.into())
        }
    }
}

/// Get a specific fruit by ID
#[utoipa::path(
    get,
    path = "/fruits/{id}",
    tag = "fruits",
    params(("id" = Uuid, Path, description = "Fruit UUID")),
    responses(
        (status = 200, description = "Fruit found", body = FruitDto),
        (status = 404, description = "Fruit not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn get_fruit(
    Extension(svc): Extension<std::sync::Arc<FruitsService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<FruitDto>, ApiError> {
    info!("Getting fruit with id: {}", id);

    match svc.get(id).await {
        Ok(fruit) => Ok(Json(FruitDto::from(fruit))),
        Err(e) => {
            error!("Failed to get fruit {}: {}", id, e);
            Err(e.into())
        }
    }
}

/// Create a new fruit
#[utoipa::path(
    post,
    path = "/fruits/add",
    tag = "fruits",
    request_body = CreateFruitReq,
    responses(
        (status = 201, description = "Created fruit", body = FruitDto),
        (status = 400, description = "Fruit name already exists", body = ErrorBody),
        (status = 404, description = "Owner not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn create_fruit(
    Extension(svc): Extension<std::sync::Arc<FruitsService>>,
    Json(req): Json<CreateFruitReq>,
) -> Result<(StatusCode, Json<FruitDto>), ApiError> {
    info!("Creating fruit: {:?}", req);

    match svc.create(req.into()).await {
        Ok(fruit) => Ok((StatusCode::CREATED, Json(FruitDto::from(fruit)))),
        Err(e) => {
            error!("Failed to create fruit: {}", e);
            Err(map_create_fruit_error(e))
        }
    }
}

/// Replace a fruit's fields; the requester must be its current owner
#[utoipa::path(
    put,
    path = "/fruits/update/{id}",
    tag = "fruits",
    params(("id" = Uuid, Path, description = "Fruit UUID")),
    request_body = UpdateFruitReq,
    responses(
        (status = 200, description = "Updated fruit", body = FruitUpdatedDto),
        (status = 403, description = "Requester does not own the fruit", body = ErrorBody),
        (status = 404, description = "Fruit or user not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn update_fruit(
    Extension(svc): Extension<std::sync::Arc<FruitsService>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateFruitReq>,
) -> Result<Json<FruitUpdatedDto>, ApiError> {
    info!("Updating fruit {} with: {:?}", id, req);

    let requester = req.logged_in_user.clone();

    match svc.update(id, req.into(), &requester).await {
        Ok(fruit) => Ok(Json(FruitUpdatedDto {
            message: "Fruit has been updated".to_string(),
            updated_fruit: FruitDto::from(fruit),
        })),
        Err(e) => {
            error!("Failed to update fruit {}: {}", id, e);
            Err(e.into())
        }
    }
}

/// Delete a fruit by ID
#[utoipa::path(
    delete,
    path = "/fruits/{id}",
    tag = "fruits",
    params(("id" = Uuid, Path, description = "Fruit UUID")),
    responses(
        (status = 200, description = "Fruit deleted", body = MessageDto),
        (status = 404, description = "Fruit not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn delete_fruit(
    Extension(svc): Extension<std::sync::Arc<FruitsService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageDto>, ApiError> {
    info!("Deleting fruit: {}", id);

    match svc.delete(id).await {
        Ok(()) => Ok(Json(MessageDto {
            message: "Fruit has been deleted".to_string(),
        })),
        Err(e) => {
            error!("Failed to delete fruit {}: {}", id, e);
            Err(e.into())
        }
    }
}

async fn list_fruits_of_kind(
    svc: &FruitsService,
    kind: &str,
) -> Result<Json<Vec<FruitDto>>, ApiError> {
    match svc.list(Some(kind)).await {
        Ok(fruits) => Ok(Json(fruits.into_iter().map(FruitDto::from).collect())),
        Err(e) => {
            error!("Failed to list {} fruits: {}", kind, e);
            Err(e.into())
        }
    }
}

/// List Paramecia-type fruits
#[utoipa::path(
    get,
    path = "/fruits/type/paramecia",
    tag = "fruits",
    responses(
        (status = 200, description = "Paramecia fruits", body = [FruitDto]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn list_paramecia(
    Extension(svc): Extension<std::sync::Arc<FruitsService>>,
) -> Result<Json<Vec<FruitDto>>, ApiError> {
    list_fruits_of_kind(&svc, KIND_PARAMECIA).await
}

/// List Logia-type fruits
#[utoipa::path(
    get,
    path = "/fruits/type/logia",
    tag = "fruits",
    responses(
        (status = 200, description = "Logia fruits", body = [FruitDto]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn list_logia(
    Extension(svc): Extension<std::sync::Arc<FruitsService>>,
) -> Result<Json<Vec<FruitDto>>, ApiError> {
    list_fruits_of_kind(&svc, KIND_LOGIA).await
}

/// List Zoan-type fruits
#[utoipa::path(
    get,
    path = "/fruits/type/zoan",
    tag = "fruits",
    responses(
        (status = 200, description = "Zoan fruits", body = [FruitDto]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn list_zoan(
    Extension(svc): Extension<std::sync::Arc<FruitsService>>,
) -> Result<Json<Vec<FruitDto>>, ApiError> {
    list_fruits_of_kind(&svc, KIND_ZOAN).await
}

/// Add a review to a fruit
#[utoipa::path(
    post,
    path = "/fruits/{id}/reviews/add",
    tag = "reviews",
    params(("id" = Uuid, Path, description = "Fruit UUID")),
    request_body = CreateReviewReq,
    responses(
        (status = 201, description = "Created review", body = ReviewDto),
        (status = 400, description = "Body fruitId does not match path", body = ErrorBody),
        (status = 404, description = "Fruit not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn add_review(
    Extension(svc): Extension<std::sync::Arc<ReviewsService>>,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateReviewReq>,
) -> Result<(StatusCode, Json<ReviewDto>), ApiError> {
    info!("Adding review for fruit {}: {:?}", id, req);

    // The path id is authoritative; a body fruitId may restate it but
    // must not contradict it.
    if let Some(body_id) = req.fruit_id {
        if body_id != id {
            return Err(ApiError::bad_request(
                "Review fruitId does not match the fruit in the path",
            ));
        }
    }

    match svc.add(req.into_new_review(id)).await {
        Ok(review) => Ok((StatusCode::CREATED, Json(ReviewDto::from(review)))),
        Err(e) => {
            error!("Failed to add review for fruit {}: {}", id, e);
            Err(e.into())
        }
    }
}

/// List reviews for a fruit
#[utoipa::path(
    get,
    path = "/fruits/{id}/reviews",
    tag = "reviews",
    params(("id" = Uuid, Path, description = "Fruit UUID")),
    responses(
        (status = 200, description = "Reviews for the fruit", body = ReviewListDto),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn list_reviews_for_fruit(
    Extension(svc): Extension<std::sync::Arc<ReviewsService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReviewListDto>, ApiError> {
    match svc.list_for_fruit(id).await {
        Ok(reviews) => Ok(Json(ReviewListDto {
            reviews: reviews.into_iter().map(ReviewDto::from).collect(),
        })),
        Err(e) => {
            error!("Failed to list reviews for fruit {}: {}", id, e);
            Err(e.into())
        }
    }
}

/// List every review
#[utoipa::path(
    get,
    path = "/fruits/reviews",
    tag = "reviews",
    responses(
        (status = 200, description = "All reviews", body = ReviewListDto),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn list_all_reviews(
    Extension(svc): Extension<std::sync::Arc<ReviewsService>>,
) -> Result<Json<ReviewListDto>, ApiError> {
    match svc.list_all().await {
        Ok(reviews) => Ok(Json(ReviewListDto {
            reviews: reviews.into_iter().map(ReviewDto::from).collect(),
        })),
        Err(e) => {
            error!("Failed to list reviews: {}", e);
            Err(e.into())
        }
    }
}

/// Register-or-reject login. On success the new user's id is issued as a
/// session cookie.
#[utoipa::path(
    post,
    path = "/user/login",
    tag = "users",
    request_body = LoginReq,
    responses(
        (status = 200, description = "User registered, session cookie set", body = UserDto),
        (status = 400, description = "Invalid email format", body = ErrorBody),
        (status = 409, description = "Email already registered", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn login(
    Extension(svc): Extension<std::sync::Arc<UsersService>>,
    Extension(config): Extension<std::sync::Arc<FruitCatalogConfig>>,
    Json(req): Json<LoginReq>,
) -> Result<(HeaderMap, Json<UserDto>), ApiError> {
    info!("Login attempt for email: {}", req.email);

    match svc.login(&req.email).await {
        Ok(user) => {
            let cookie = format!(
                "{}={}; Path=/; HttpOnly",
                config.session_cookie_name, user.id
            );
            let value = HeaderValue::from_str(&cookie).map_err(|e| {
                error!("Failed to build session cookie: {}", e);
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            })?;
            let mut headers = HeaderMap::new();
            headers.insert(header::SET_COOKIE, value);
            Ok((headers, Json(UserDto::from(user))))
        }
        Err(e) => {
            error!("Failed to log in {}: {}", req.email, e);
            Err(e.into())
        }
    }
}
