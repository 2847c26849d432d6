//! Credentials for note.com accounts
//!
//! Credentials arrive out of band, as query parameters on the transport
//! request that carries the tool call. They live for one invocation only.

use crate::error::AppError;
use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;
use std::fmt;

/// Query parameter carrying the login identifier
pub const EMAIL_PARAM: &str = "email";

/// Query parameter carrying the password
pub const PASSWORD_PARAM: &str = "password";

/// Login credentials for a note.com account
pub struct Credentials {
    /// Account identifier (email address or note ID)
    pub email: String,

    password: SecretString,
}

impl Credentials {
    /// Create new credentials
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Extract credentials from transport query parameters.
    ///
    /// Empty values count as missing. `email` is checked before `password`.
    pub fn from_query(query: &HashMap<String, String>) -> Result<Self, AppError> {
        let email = non_empty(query, EMAIL_PARAM)
            .ok_or_else(|| AppError::missing_parameter(EMAIL_PARAM))?;
        let password = non_empty(query, PASSWORD_PARAM)
            .ok_or_else(|| AppError::missing_parameter(PASSWORD_PARAM))?;
        Ok(Self::new(email, password))
    }

    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &"[redacted]")
            .field("password", &"[redacted]")
            .finish()
    }
}

fn non_empty<'a>(query: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    query
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}
