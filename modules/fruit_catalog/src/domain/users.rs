use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::contract::model::User;
use crate::domain::error::DomainError;
use crate::domain::repo::{StoreError, UsersRepository};

/// User/session service: owns user records and the register-or-reject
/// login flow. Depends only on the repository port, not on infra types.
#[derive(Clone)]
pub struct UsersService {
    repo: Arc<dyn UsersRepository>,
}

impl UsersService {
    pub fn new(repo: Arc<dyn UsersRepository>) -> Self {
        Self { repo }
    }

    /// Register-or-reject semantics, preserved from the legacy service:
    /// an email that is already registered fails with a conflict; a new
    /// email creates the user with `last_login` set to now. The returned
    /// user's id doubles as the session token the transport layer hands
    /// back to the caller.
    #[instrument(name = "fruit_catalog.users.login", skip(self), fields(email = %email))]
    pub async fn login(&self, email: &str) -> Result<User, DomainError> {
        info!("Logging in user");

        self.validate_email(email)?;

        // Advisory pre-check: gives the deterministic conflict on the
        // serial path. The unique index on email is the real guard.
        if self
            .find_by_email(email)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .is_some()
        {
            return Err(DomainError::email_already_exists(email));
        }

        let user = User {
            id: Uuid::new_v4(),
            email: email.to_owned(),
            last_login: Utc::now(),
        };

        match self.repo.insert(user.clone()).await {
            Ok(()) => {
                info!("Successfully registered user with id={}", user.id);
                Ok(user)
            }
            // Lost the race against a concurrent registration.
            Err(StoreError::UniqueViolation(_)) => Err(DomainError::email_already_exists(email)),
            Err(e) => Err(DomainError::database(e.to_string())),
        }
    }

    /// Resolve an email to a user, used by the fruit catalog to turn
    /// owner/requester emails into user ids.
    #[instrument(name = "fruit_catalog.users.resolve_by_email", skip(self), fields(email = %email))]
    pub async fn resolve_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        debug!("Resolving user by email");
        self.find_by_email(email)
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.repo.find_by_email(email).await
    }

    fn validate_email(&self, email: &str) -> Result<(), DomainError> {
        if email.is_empty() || !email.contains('@') || !email.contains('.') {
            return Err(DomainError::invalid_email(email.to_string()));
        }
        Ok(())
    }
}
