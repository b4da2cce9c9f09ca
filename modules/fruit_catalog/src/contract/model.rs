use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Fruit type values the catalog exposes dedicated views for.
/// `kind` itself stays free-form; anything else is stored verbatim.
pub const KIND_PARAMECIA: &str = "Paramecia";
pub const KIND_LOGIA: &str = "Logia";
pub const KIND_ZOAN: &str = "Zoan";

/// Pure user model for the domain layer (no serde)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub last_login: DateTime<Utc>,
}

/// Pure fruit model. `kind` is the wire-level `type` field; the rename
/// happens at the REST DTO boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fruit {
    pub id: Uuid,
    pub name: String,
    pub kind: String,
    pub character: String,
    pub abilities: String,
    pub owner_user_id: Uuid,
}

/// Data for creating a new fruit. The owner is referenced by email and
/// resolved to a user id at creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFruit {
    pub name: String,
    pub kind: String,
    pub character: String,
    pub abilities: String,
    pub owner_email: String,
}

/// Full replacement data for a fruit update. Every mutable field is
/// replaced, including the owner (referenced by email).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FruitUpdate {
    pub name: String,
    pub kind: String,
    pub character: String,
    pub abilities: String,
    pub owner_email: String,
}

/// Pure review model, linked to exactly one fruit by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: Uuid,
    pub fruit_id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
}

/// Data for adding a new review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub fruit_id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
}
