//! Error types for the Trello card workflow.
//!
//! # Design
//! Every transport failure, unexpected status and malformed body collapses
//! into `ApiRequest`, carrying the underlying cause. Callers only ever log and
//! abort on it, so no finer split exists. The not-found variants name what
//! was searched for.

use std::error::Error as StdError;

/// Errors produced while loading credentials or talking to Trello.
#[derive(Debug, thiserror::Error)]
pub enum TrelloError {
    /// One or more credential variables were missing or empty.
    #[error(
        "The following environment authentication variables were empty or not found: {}.",
        .vars.join(", ")
    )]
    EnvVar { vars: Vec<String> },

    /// Any failure while communicating with the API.
    #[error("An error occurred while communicating with Trello's API: {0}.")]
    ApiRequest(#[source] Box<dyn StdError + Send + Sync>),

    /// No list on the board carries the requested name.
    #[error("The following list could not be found in Trello: {0}.")]
    ListNotFound(String),

    /// No label on the board carries the requested name.
    #[error("The following label could not be found in Trello: {0}.")]
    LabelNotFound(String),
}

impl TrelloError {
    pub(crate) fn api<E>(cause: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        TrelloError::ApiRequest(cause.into())
    }
}
