use thiserror::Error;
use uuid::Uuid;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User not found: {email}")]
    UserNotFound { email: String },

    #[error("Fruit not found: {id}")]
    FruitNotFound { id: Uuid },

    #[error("User with this email already exists")]
    EmailAlreadyExists { email: String },

    #[error("Devil Fruit already exists")]
    FruitNameExists { name: String },

    #[error("User not authorised to edit fruit")]
    NotOwner { user_id: Uuid, fruit_id: Uuid },

    #[error("Invalid email format: '{email}'")]
    InvalidEmail { email: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn user_not_found(email: impl Into<String>) -> Self {
        Self::UserNotFound {
            email: email.into(),
        }
    }

    pub fn fruit_not_found(id: Uuid) -> Self {
        Self::FruitNotFound { id }
    }

    pub fn email_already_exists(email: impl Into<String>) -> Self {
        Self::EmailAlreadyExists {
            email: email.into(),
        }
    }

    pub fn fruit_name_exists(name: impl Into<String>) -> Self {
        Self::FruitNameExists { name: name.into() }
    }

    pub fn not_owner(user_id: Uuid, fruit_id: Uuid) -> Self {
        Self::NotOwner { user_id, fruit_id }
    }

    pub fn invalid_email(email: impl Into<String>) -> Self {
        Self::InvalidEmail {
            email: email.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}
