use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::contract::model::{Fruit, FruitUpdate, NewFruit, NewReview, Review, User};

/// REST DTO for fruit representation with serde/utoipa
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FruitDto {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub character: String,
    pub abilities: String,
    pub owner_user_id: Uuid,
}

/// REST DTO for creating a new fruit. `user` carries the owner's email.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFruitReq {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub character: String,
    pub abilities: String,
    pub user: String,
}

/// REST DTO for replacing a fruit. `user` is the (possibly new) owner's
/// email; `loggedInUser` identifies the requester for the ownership check.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFruitReq {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub character: String,
    pub abilities: String,
    pub user: String,
    pub logged_in_user: String,
}

/// REST DTO for the enveloped fruit list response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FruitListDto {
    pub fruits: Vec<FruitDto>,
}

/// REST DTO for a successful update, echoing the new state
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FruitUpdatedDto {
    pub message: String,
    pub updated_fruit: FruitDto,
}

/// REST DTO for confirmation-only responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// REST DTO for review representation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: Uuid,
    pub fruit_id: Uuid,
    pub rating: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// REST DTO for adding a review. `fruitId` may be omitted; when present it
/// must match the fruit id in the request path.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewReq {
    pub fruit_id: Option<Uuid>,
    pub rating: i32,
    pub comment: Option<String>,
}

/// REST DTO for the enveloped review list response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewListDto {
    pub reviews: Vec<ReviewDto>,
}

/// REST DTO for user representation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    pub last_login: DateTime<Utc>,
}

/// REST DTO for the register-or-reject login request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginReq {
    pub email: String,
}

// Conversion implementations between REST DTOs and contract models

impl From<Fruit> for FruitDto {
    fn from(fruit: Fruit) -> Self {
        Self {
            id: fruit.id,
            name: fruit.name,
            kind: fruit.kind,
            character: fruit.character,
            abilities: fruit.abilities,
            owner_user_id: fruit.owner_user_id,
        }
    }
}

impl From<CreateFruitReq> for NewFruit {
    fn from(req: CreateFruitReq) -> Self {
        Self {
            name: req.name,
            kind: req.kind,
            character: req.character,
            abilities: req.abilities,
            owner_email: req.user,
        }
    }
}

impl From<UpdateFruitReq> for FruitUpdate {
    fn from(req: UpdateFruitReq) -> Self {
        Self {
            name: req.name,
            kind: req.kind,
            character: req.character,
            abilities: req.abilities,
            owner_email: req.user,
        }
    }
}

impl From<Review> for ReviewDto {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            fruit_id: review.fruit_id,
            rating: review.rating,
            comment: review.comment,
        }
    }
}

impl CreateReviewReq {
    /// Combine with the fruit id from the path to form the domain input.
    pub fn into_new_review(self, fruit_id: Uuid) -> NewReview {
        NewReview {
            fruit_id,
            rating: self.rating,
            comment: self.comment,
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            last_login: user.last_login,
        }
    }
}
