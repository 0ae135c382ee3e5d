//! Trello records used by the card workflow.
//!
//! # Design
//! Only the fields the workflow reads are modelled; serde ignores the rest of
//! each Trello payload. Identifiers are opaque strings assigned by the API and
//! are never constructed or validated locally.

use serde::{Deserialize, Serialize};

/// A board, as returned by `GET {board_url}.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardInfo {
    pub id: String,
    pub name: String,
}

/// One list (column) of a board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListInfo {
    pub id: String,
    pub name: String,
}

/// A label defined on a board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabelInfo {
    pub id: String,
    pub name: String,
}

/// A freshly created card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardInfo {
    pub id: String,
    pub url: String,
}

/// Only the id of a created comment action is kept.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CommentAction {
    pub id: String,
}

/// Outcome of searching a board's labels by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelLookup {
    Found(LabelInfo),
    Missing,
}

/// Body for `POST /1/boards/{id}/labels`. A `None` color is sent as JSON
/// `null`, which Trello stores as a colorless label.
#[derive(Debug, Clone, Serialize)]
pub struct NewLabel<'a> {
    pub name: &'a str,
    pub color: Option<&'a str>,
}

/// Body for `POST /1/cards`.
#[derive(Debug, Clone, Serialize)]
pub struct NewCard<'a> {
    #[serde(rename = "idList")]
    pub list_id: &'a str,
    pub name: &'a str,
    #[serde(rename = "idLabels")]
    pub label_id: &'a str,
    pub desc: &'a str,
}

/// Body for `POST /1/cards/{id}/actions/comments`.
#[derive(Debug, Clone, Serialize)]
pub struct NewComment<'a> {
    pub text: &'a str,
}
