use crate::{Error, Result};
use std::fmt;

/// Environment variable holding the login username.
pub const USERNAME_VAR: &str = "LOGIN_USERNAME";
/// Environment variable holding the login password.
pub const PASSWORD_VAR: &str = "LOGIN_PASSWORD";

/// The username/password pair, read once at startup and never persisted.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Read credentials from the process environment.
    ///
    /// Fails if either variable is unset or empty. Values are passed
    /// through untouched, no trimming.
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            std::env::var(USERNAME_VAR).ok(),
            std::env::var(PASSWORD_VAR).ok(),
        )
    }

    /// Build credentials from raw optional values. An empty string counts
    /// as unset.
    pub fn from_values(username: Option<String>, password: Option<String>) -> Result<Self> {
        match (username, password) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Ok(Self { username, password })
            }
            _ => Err(Error::MissingCredentials(USERNAME_VAR, PASSWORD_VAR)),
        }
    }
}

impl fmt::Debug for Credentials {
    // Keeps the password out of logs and panic messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
