//! # User Client
//!
//! High-level API for the `User` table.
use crate::model::{User, UserQuery};
use crate::service::{ServiceError, UserRepository};
use crate::user_actor::UserError;
use async_trait::async_trait;
use record_actor::{FrameworkError, RecordClient, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    /// Registers a user. Fails with [`UserError::AlreadyExists`] if the user id is taken.
    #[instrument(skip(self, user), fields(user_id = %user.user_id))]
    pub async fn create_user(&self, user: User) -> Result<User, UserError> {
        debug!("Sending request");
        let user_id = user.user_id.clone();
        self.inner.insert(user).await.map_err(|e| match e {
            FrameworkError::Conflict(_) => UserError::AlreadyExists(user_id),
            other => Self::map_error(other),
        })
    }

    #[instrument(skip(self))]
    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Option<User>, UserError> {
        debug!("Sending request");
        self.inner
            .find(UserQuery::ByUserId(user_id.to_string()))
            .await
            .map_err(Self::map_error)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.list().await
    }
}

#[async_trait]
impl RecordClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        UserError::ActorCommunicationError(e.to_string())
    }
}

#[async_trait]
impl UserRepository for UserClient {
    async fn find_user_by_external_id(&self, user_id: &str) -> Result<Option<User>, ServiceError> {
        self.find_by_user_id(user_id)
            .await
            .map_err(|e| ServiceError::Store(e.to_string()))
    }
}
