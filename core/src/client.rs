//! Stateless HTTP request builder and response parser for the Trello API.
//!
//! # Design
//! `TrelloClient` holds the API base URL and the credentials, and carries no
//! mutable state between calls. Each operation is split into a `build_*`
//! method that produces an `HttpRequest` and a `parse_*` method that consumes
//! an `HttpResponse`. The round-trip itself happens behind `Transport`.
//!
//! Read requests carry the credentials as query pairs; write requests merge
//! them into the JSON body next to the payload fields.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::credentials::Credentials;
use crate::error::TrelloError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, StatusError};
use crate::types::{
    BoardInfo, CardInfo, CommentAction, LabelInfo, LabelLookup, ListInfo, NewCard, NewComment,
    NewLabel,
};

pub const DEFAULT_API_URL: &str = "https://api.trello.com";

/// Write body: credentials and payload fields side by side in one object.
#[derive(Serialize)]
struct Authenticated<'a, T: Serialize> {
    #[serde(flatten)]
    credentials: &'a Credentials,
    #[serde(flatten)]
    payload: &'a T,
}

/// Synchronous, stateless client for the Trello REST API.
#[derive(Debug, Clone)]
pub struct TrelloClient {
    base_url: String,
    credentials: Credentials,
}

impl TrelloClient {
    pub fn new(base_url: &str, credentials: Credentials) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    /// Trello serves a board's data at its public URL with `.json` appended.
    /// A trailing slash on `board_url` is dropped first so `.../test/` still
    /// resolves.
    pub fn build_get_board(&self, board_url: &str) -> HttpRequest {
        self.get(format!("{}.json", board_url.trim_end_matches('/')))
    }

    pub fn build_get_lists(&self, board_id: &str) -> HttpRequest {
        self.get(format!("{}/1/boards/{board_id}/lists", self.base_url))
    }

    pub fn build_get_labels(&self, board_id: &str) -> HttpRequest {
        self.get(format!("{}/1/boards/{board_id}/labels", self.base_url))
    }

    pub fn build_create_label(&self, board_id: &str, name: &str) -> Result<HttpRequest, TrelloError> {
        let payload = NewLabel { name, color: None };
        self.post(format!("{}/1/boards/{board_id}/labels", self.base_url), &payload)
    }

    pub fn build_create_card(&self, card: &NewCard<'_>) -> Result<HttpRequest, TrelloError> {
        self.post(format!("{}/1/cards", self.base_url), card)
    }

    pub fn build_create_comment(&self, card_id: &str, text: &str) -> Result<HttpRequest, TrelloError> {
        let payload = NewComment { text };
        self.post(
            format!("{}/1/cards/{card_id}/actions/comments", self.base_url),
            &payload,
        )
    }

    pub fn parse_get_board(&self, response: HttpResponse) -> Result<BoardInfo, TrelloError> {
        parse_body(response)
    }

    /// Id of the first list, in response order, whose name equals `list_name`
    /// exactly.
    pub fn parse_find_list(&self, response: HttpResponse, list_name: &str) -> Result<String, TrelloError> {
        let lists: Vec<ListInfo> = parse_body(response)?;
        lists
            .into_iter()
            .find(|list| list.name == list_name)
            .map(|list| list.id)
            .ok_or_else(|| TrelloError::ListNotFound(list_name.to_string()))
    }

    /// First label, in response order, whose name equals `label_name` exactly.
    pub fn parse_find_label(&self, response: HttpResponse, label_name: &str) -> Result<LabelLookup, TrelloError> {
        let labels: Vec<LabelInfo> = parse_body(response)?;
        Ok(labels
            .into_iter()
            .find(|label| label.name == label_name)
            .map_or(LabelLookup::Missing, LabelLookup::Found))
    }

    pub fn parse_create_label(&self, response: HttpResponse) -> Result<LabelInfo, TrelloError> {
        parse_body(response)
    }

    pub fn parse_create_card(&self, response: HttpResponse) -> Result<CardInfo, TrelloError> {
        parse_body(response)
    }

    /// Only the new comment's id is returned.
    pub fn parse_create_comment(&self, response: HttpResponse) -> Result<String, TrelloError> {
        let action: CommentAction = parse_body(response)?;
        Ok(action.id)
    }

    fn get(&self, path: String) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path,
            query: self.credentials.query_pairs(),
            headers: vec![("accept".to_string(), "application/json".to_string())],
            body: None,
        }
    }

    fn post<T: Serialize>(&self, path: String, payload: &T) -> Result<HttpRequest, TrelloError> {
        let body = serde_json::to_string(&Authenticated {
            credentials: &self.credentials,
            payload,
        })
        .map_err(TrelloError::api)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path,
            query: Vec::new(),
            headers: vec![
                ("accept".to_string(), "application/json".to_string()),
                ("content-type".to_string(), "application/json".to_string()),
            ],
            body: Some(body),
        })
    }
}

/// Trello answers 200 for reads and writes; 201 is accepted as well.
fn check_status(response: &HttpResponse) -> Result<(), TrelloError> {
    match response.status {
        200 | 201 => Ok(()),
        status => Err(TrelloError::api(StatusError {
            status,
            body: response.body.clone(),
        })),
    }
}

fn parse_body<T: DeserializeOwned>(response: HttpResponse) -> Result<T, TrelloError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(TrelloError::api)
}
