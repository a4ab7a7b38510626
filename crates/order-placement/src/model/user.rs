//! A registered customer, looked up by the external `user_id` callers supply.
//!
//! # Record Store
//! `User` implements [`Record`](record_actor::Record) with `user_id` as its unique key, so a
//! second user with the same external id is rejected on insert.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Internal identity of a stored User.
///
/// Not to be confused with [`User::user_id`], the externally supplied handle orders refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserKey(pub u64);

impl From<u64> for UserKey {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for UserKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// Represents a registered user in the system.
///
/// # Record Store
/// This struct implements the [`Record`](record_actor::Record) trait.
/// It is unique on `user_id` and can be looked up by it with [`UserQuery::ByUserId`].
/// Order placement only ever reads users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<UserKey>,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl User {
    /// Creates an unsaved User.
    pub fn new(
        user_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            user_id: user_id.into(),
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Secondary lookups on the User table.
#[derive(Debug, Clone, PartialEq)]
pub enum UserQuery {
    ByUserId(String),
}
