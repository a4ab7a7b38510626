//! Record trait implementation for the User domain type.
//!
//! Enforces the registration rules (required fields, email shape, password length) and
//! uniqueness of the external `user_id`.

use super::error::UserError;
use crate::model::{User, UserKey, UserQuery};
use record_actor::Record;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 4;

impl Record for User {
    type Id = UserKey;
    type Query = UserQuery;
    type Error = UserError;

    fn id(&self) -> Option<UserKey> {
        self.id
    }

    fn with_id(self, id: UserKey) -> Self {
        Self { id: Some(id), ..self }
    }

    fn matches(&self, query: &UserQuery) -> bool {
        match query {
            UserQuery::ByUserId(user_id) => &self.user_id == user_id,
        }
    }

    fn validate(&self) -> Result<(), UserError> {
        for (field, value) in [
            ("user id", &self.user_id),
            ("name", &self.name),
            ("email", &self.email),
            ("password", &self.password),
        ] {
            if value.trim().is_empty() {
                return Err(UserError::MissingField(field));
            }
        }
        if !is_plausible_email(&self.email) {
            return Err(UserError::InvalidEmail(self.email.clone()));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(UserError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(())
    }

    fn conflicts_with(&self, other: &Self) -> bool {
        self.user_id == other.user_id
    }
}

// local@domain, both sides non-empty, no whitespace
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
