//! User Data

use crate::domain::users::{errors::UsersServiceError, records::UserUuid};

pub const USERNAME_MAX_LENGTH: usize = 150;
pub const EMAIL_MAX_LENGTH: usize = 254;
pub const PERSON_NAME_MAX_LENGTH: usize = 150;

/// New User Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub uuid: UserUuid,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl NewUser {
    /// Check the payload before it reaches the store.
    ///
    /// # Errors
    ///
    /// Returns [`UsersServiceError::Validation`] describing the first failing field.
    pub fn validate(&self) -> Result<(), UsersServiceError> {
        let username_len = self.username.chars().count();

        if username_len == 0 || username_len > USERNAME_MAX_LENGTH {
            return Err(invalid("username must be between 1 and 150 characters"));
        }

        if !self
            .username
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '@' | '+' | '-'))
        {
            return Err(invalid("username contains invalid characters"));
        }

        if self.email.chars().count() > EMAIL_MAX_LENGTH {
            return Err(invalid("email must be at most 254 characters"));
        }

        match self.email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => return Err(invalid("email is not a valid address")),
        }

        if self.first_name.chars().count() > PERSON_NAME_MAX_LENGTH
            || self.last_name.chars().count() > PERSON_NAME_MAX_LENGTH
        {
            return Err(invalid("names must be at most 150 characters"));
        }

        Ok(())
    }
}

fn invalid(message: &str) -> UsersServiceError {
    UsersServiceError::Validation(message.to_string())
}
