use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
    #[serde(rename = "shortLink")]
    pub short_link: String,
    #[serde(skip)]
    pub lists: Vec<List>,
    #[serde(skip)]
    pub labels: Vec<Label>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct List {
    pub id: String,
    pub name: String,
    #[serde(rename = "idBoard")]
    pub board_id: String,
    pub closed: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Label {
    pub id: String,
    pub name: String,
    #[serde(rename = "idBoard")]
    pub board_id: String,
    pub color: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub url: String,
    #[serde(rename = "idList")]
    pub list_id: String,
    #[serde(rename = "idLabels")]
    pub label_ids: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    #[serde(rename = "idCard")]
    pub card_id: String,
    pub text: String,
}

#[derive(Deserialize)]
pub struct Auth {
    pub key: Option<String>,
    pub token: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateLabel {
    pub key: Option<String>,
    pub token: Option<String>,
    pub name: String,
    pub color: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateCard {
    pub key: Option<String>,
    pub token: Option<String>,
    #[serde(rename = "idList")]
    pub list_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(rename = "idLabels", default)]
    pub label_ids: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateComment {
    pub key: Option<String>,
    pub token: Option<String>,
    pub text: String,
}

/// In-memory Trello account. Only requests carrying `key` and `token` that
/// match the store's pair are served.
#[derive(Debug, Default)]
pub struct Store {
    pub key: String,
    pub token: String,
    pub boards: Vec<Board>,
    pub cards: Vec<Card>,
    pub comments: Vec<Comment>,
}

impl Store {
    pub fn new(key: &str, token: &str) -> Self {
        Self {
            key: key.to_string(),
            token: token.to_string(),
            ..Self::default()
        }
    }

    /// Add a board reachable at `/b/{short_link}/{slug}.json`. Returns its id.
    pub fn add_board(&mut self, name: &str, short_link: &str) -> String {
        let id = new_id();
        self.boards.push(Board {
            id: id.clone(),
            name: name.to_string(),
            short_link: short_link.to_string(),
            lists: Vec::new(),
            labels: Vec::new(),
        });
        id
    }

    /// Returns the new list's id, or `None` for an unknown board.
    pub fn add_list(&mut self, board_id: &str, name: &str) -> Option<String> {
        let board = self.board_mut(board_id)?;
        let id = new_id();
        board.lists.push(List {
            id: id.clone(),
            name: name.to_string(),
            board_id: board_id.to_string(),
            closed: false,
        });
        Some(id)
    }

    /// Returns the new label's id, or `None` for an unknown board.
    pub fn add_label(&mut self, board_id: &str, name: &str, color: Option<&str>) -> Option<String> {
        let board = self.board_mut(board_id)?;
        let id = new_id();
        board.labels.push(Label {
            id: id.clone(),
            name: name.to_string(),
            board_id: board_id.to_string(),
            color: color.map(str::to_string),
        });
        Some(id)
    }

    pub fn board(&self, board_id: &str) -> Option<&Board> {
        self.boards.iter().find(|b| b.id == board_id)
    }

    fn board_mut(&mut self, board_id: &str) -> Option<&mut Board> {
        self.boards.iter_mut().find(|b| b.id == board_id)
    }

    fn authorize(&self, key: Option<&str>, token: Option<&str>) -> Result<(), (StatusCode, String)> {
        if key != Some(self.key.as_str()) {
            return Err((StatusCode::UNAUTHORIZED, "invalid key".to_string()));
        }
        if token != Some(self.token.as_str()) {
            return Err((StatusCode::UNAUTHORIZED, "invalid token".to_string()));
        }
        Ok(())
    }
}

pub type Db = Arc<RwLock<Store>>;

type ApiResult<T> = Result<T, (StatusCode, String)>;

/// Ids look like Trello's 24-character hex object ids.
fn new_id() -> String {
    Uuid::new_v4().simple().to_string()[..24].to_string()
}

/// A store with one board named `test` at `/b/X/test`, lists `TO DO` and
/// `DONE`, and no labels.
pub fn demo_store(key: &str, token: &str) -> Store {
    let mut store = Store::new(key, token);
    let board_id = store.add_board("test", "X");
    store.add_list(&board_id, "TO DO");
    store.add_list(&board_id, "DONE");
    store
}

pub fn db(store: Store) -> Db {
    Arc::new(RwLock::new(store))
}

pub fn app(db: Db) -> Router {
    Router::new()
        .route("/b/{short_link}/{slug}", get(get_board))
        .route("/1/boards/{board_id}/lists", get(list_lists))
        .route("/1/boards/{board_id}/labels", get(list_labels).post(create_label))
        .route("/1/cards", post(create_card))
        .route("/1/cards/{card_id}/actions/comments", post(create_comment))
        .with_state(db)
}

pub async fn run(listener: TcpListener, db: Db) -> Result<(), std::io::Error> {
    axum::serve(listener, app(db)).await
}

async fn get_board(
    State(db): State<Db>,
    Path((short_link, slug)): Path<(String, String)>,
    Query(auth): Query<Auth>,
) -> ApiResult<Json<Value>> {
    let store = db.read().await;
    store.authorize(auth.key.as_deref(), auth.token.as_deref())?;
    if !slug.ends_with(".json") {
        return Err((StatusCode::NOT_FOUND, "board not found".to_string()));
    }
    let board = store
        .boards
        .iter()
        .find(|b| b.short_link == short_link)
        .ok_or((StatusCode::NOT_FOUND, "board not found".to_string()))?;
    Ok(Json(json!({
        "id": board.id,
        "name": board.name,
        "desc": "",
        "closed": false,
        "shortLink": board.short_link,
        "url": format!("https://trello.com/b/{}/{}", board.short_link, slug.trim_end_matches(".json")),
        "lists": board.lists,
        "labels": board.labels,
    })))
}

async fn list_lists(
    State(db): State<Db>,
    Path(board_id): Path<String>,
    Query(auth): Query<Auth>,
) -> ApiResult<Json<Vec<List>>> {
    let store = db.read().await;
    store.authorize(auth.key.as_deref(), auth.token.as_deref())?;
    let board = store
        .board(&board_id)
        .ok_or((StatusCode::NOT_FOUND, "invalid id".to_string()))?;
    Ok(Json(board.lists.clone()))
}

async fn list_labels(
    State(db): State<Db>,
    Path(board_id): Path<String>,
    Query(auth): Query<Auth>,
) -> ApiResult<Json<Vec<Label>>> {
    let store = db.read().await;
    store.authorize(auth.key.as_deref(), auth.token.as_deref())?;
    let board = store
        .board(&board_id)
        .ok_or((StatusCode::NOT_FOUND, "invalid id".to_string()))?;
    Ok(Json(board.labels.clone()))
}

async fn create_label(
    State(db): State<Db>,
    Path(board_id): Path<String>,
    Json(input): Json<CreateLabel>,
) -> ApiResult<Json<Label>> {
    let mut store = db.write().await;
    store.authorize(input.key.as_deref(), input.token.as_deref())?;
    let id = store
        .add_label(&board_id, &input.name, input.color.as_deref())
        .ok_or((StatusCode::NOT_FOUND, "invalid id".to_string()))?;
    let label = store
        .board(&board_id)
        .and_then(|b| b.labels.iter().find(|l| l.id == id))
        .cloned()
        .ok_or((StatusCode::INTERNAL_SERVER_ERROR, "label vanished".to_string()))?;
    Ok(Json(label))
}

async fn create_card(State(db): State<Db>, Json(input): Json<CreateCard>) -> ApiResult<Json<Card>> {
    let mut store = db.write().await;
    store.authorize(input.key.as_deref(), input.token.as_deref())?;

    let board = store
        .boards
        .iter()
        .find(|b| b.lists.iter().any(|l| l.id == input.list_id))
        .ok_or((StatusCode::BAD_REQUEST, "invalid value for idList".to_string()))?;

    let label_ids: Vec<String> = input
        .label_ids
        .as_deref()
        .unwrap_or("")
        .split(',')
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect();
    if let Some(unknown) = label_ids
        .iter()
        .find(|id| !board.labels.iter().any(|l| &l.id == *id))
    {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("invalid value for idLabels: {unknown}"),
        ));
    }

    let id = new_id();
    let card = Card {
        url: format!("https://trello.com/c/{}", &id[..8]),
        id,
        name: input.name,
        desc: input.desc,
        list_id: input.list_id,
        label_ids,
    };
    store.cards.push(card.clone());
    Ok(Json(card))
}

async fn create_comment(
    State(db): State<Db>,
    Path(card_id): Path<String>,
    Json(input): Json<CreateComment>,
) -> ApiResult<Json<Value>> {
    let mut store = db.write().await;
    store.authorize(input.key.as_deref(), input.token.as_deref())?;
    if !store.cards.iter().any(|c| c.id == card_id) {
        return Err((StatusCode::NOT_FOUND, "The requested resource was not found.".to_string()));
    }
    let comment = Comment {
        id: new_id(),
        card_id,
        text: input.text,
    };
    store.comments.push(comment.clone());
    Ok(Json(json!({
        "id": comment.id,
        "type": "commentCard",
        "data": { "text": comment.text, "card": { "id": comment.card_id } },
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_24_hex_chars() {
        let id = new_id();
        assert_eq!(id.len(), 24);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn demo_store_has_board_and_lists() {
        let store = demo_store("k", "t");
        assert_eq!(store.boards.len(), 1);
        let board = &store.boards[0];
        assert_eq!(board.name, "test");
        let names: Vec<&str> = board.lists.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["TO DO", "DONE"]);
        assert!(board.labels.is_empty());
    }

    #[test]
    fn add_list_to_unknown_board_is_none() {
        let mut store = Store::new("k", "t");
        assert!(store.add_list("nope", "TO DO").is_none());
    }

    #[test]
    fn authorize_checks_key_then_token() {
        let store = Store::new("k", "t");
        assert!(store.authorize(Some("k"), Some("t")).is_ok());
        assert_eq!(store.authorize(Some("x"), Some("t")).unwrap_err().1, "invalid key");
        assert_eq!(store.authorize(Some("k"), Some("x")).unwrap_err().1, "invalid token");
        assert_eq!(store.authorize(Some("k"), None).unwrap_err().1, "invalid token");
    }

    #[test]
    fn label_serializes_null_color() {
        let label = Label {
            id: "LB1".to_string(),
            name: "Label A".to_string(),
            board_id: "B1".to_string(),
            color: None,
        };
        let json = serde_json::to_value(&label).unwrap();
        assert_eq!(json["color"], Value::Null);
        assert_eq!(json["idBoard"], "B1");
    }
}
