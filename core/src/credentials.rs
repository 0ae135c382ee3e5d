//! Trello API key and token, loaded once from the environment.

use std::fmt;

use serde::Serialize;

use crate::error::TrelloError;

pub const API_KEY_VAR: &str = "TRELLO_API_KEY";
pub const API_TOKEN_VAR: &str = "TRELLO_API_TOKEN";

/// Immutable key/token pair sent with every request.
///
/// Serializes as `{"key": ..., "token": ...}` so it can be flattened into
/// write bodies.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    key: String,
    token: String,
}

impl Credentials {
    pub fn new(key: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            token: token.into(),
        }
    }

    /// Read both variables from the process environment.
    pub fn from_env() -> Result<Self, TrelloError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read both variables through `lookup`. Every missing or empty variable
    /// is reported, not just the first.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TrelloError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let key = lookup(API_KEY_VAR).filter(|v| !v.is_empty());
        let token = lookup(API_TOKEN_VAR).filter(|v| !v.is_empty());

        match (key, token) {
            (Some(key), Some(token)) => {
                tracing::debug!("Trello credentials loaded from environment");
                Ok(Self { key, token })
            }
            (key, token) => {
                let mut vars = Vec::new();
                if key.is_none() {
                    vars.push(API_KEY_VAR.to_string());
                }
                if token.is_none() {
                    vars.push(API_TOKEN_VAR.to_string());
                }
                Err(TrelloError::EnvVar { vars })
            }
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Credentials as query pairs for read requests.
    pub(crate) fn query_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("key".to_string(), self.key.clone()),
            ("token".to_string(), self.token.clone()),
        ]
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("token", &"<redacted>")
            .finish()
    }
}
