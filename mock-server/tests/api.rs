use axum::http::{self, Method, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, db, demo_store, Card, Db, Label, List};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

/// A request with a JSON content type whenever a body is given.
fn request(method: Method, uri: &str, body: Option<&str>) -> Request<String> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(body) => builder
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(body.to_string()),
        None => builder.body(String::new()),
    }
    .unwrap()
}

fn demo() -> (Db, String) {
    let db = db(demo_store("k", "t"));
    let board_id = db.try_read().unwrap().boards[0].id.clone();
    (db, board_id)
}

// --- board ---

#[tokio::test]
async fn board_json_by_short_link() {
    let (db, board_id) = demo();
    let resp = app(db)
        .oneshot(request(Method::GET, "/b/X/test.json?key=k&token=t", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let board: Value = body_json(resp).await;
    assert_eq!(board["id"], board_id.as_str());
    assert_eq!(board["name"], "test");
}

#[tokio::test]
async fn board_without_json_suffix_is_404() {
    let (db, _) = demo();
    let resp = app(db)
        .oneshot(request(Method::GET, "/b/X/test?key=k&token=t", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_board_is_404() {
    let (db, _) = demo();
    let resp = app(db)
        .oneshot(request(Method::GET, "/b/nope/test.json?key=k&token=t", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wrong_key_is_401() {
    let (db, _) = demo();
    let resp = app(db)
        .oneshot(request(Method::GET, "/b/X/test.json?key=bad&token=t", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_bytes(resp).await.as_ref(), b"invalid key");
}

#[tokio::test]
async fn missing_token_is_401() {
    let (db, board_id) = demo();
    let resp = app(db)
        .oneshot(request(
            Method::GET,
            &format!("/1/boards/{board_id}/lists?key=k"),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// --- lists & labels ---

#[tokio::test]
async fn lists_in_board_order() {
    let (db, board_id) = demo();
    let resp = app(db)
        .oneshot(request(
            Method::GET,
            &format!("/1/boards/{board_id}/lists?key=k&token=t"),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let lists: Vec<List> = body_json(resp).await;
    let names: Vec<&str> = lists.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["TO DO", "DONE"]);
}

#[tokio::test]
async fn labels_empty_then_created() {
    let (db, board_id) = demo();

    let resp = app(db.clone())
        .oneshot(request(
            Method::GET,
            &format!("/1/boards/{board_id}/labels?key=k&token=t"),
            None,
        ))
        .await
        .unwrap();
    let labels: Vec<Label> = body_json(resp).await;
    assert!(labels.is_empty());

    let resp = app(db.clone())
        .oneshot(request(
            Method::POST,
            &format!("/1/boards/{board_id}/labels"),
            Some(r#"{"key":"k","token":"t","name":"Label A","color":null}"#),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let created: Label = body_json(resp).await;
    assert_eq!(created.name, "Label A");
    assert!(created.color.is_none());

    let resp = app(db)
        .oneshot(request(
            Method::GET,
            &format!("/1/boards/{board_id}/labels?key=k&token=t"),
            None,
        ))
        .await
        .unwrap();
    let labels: Vec<Label> = body_json(resp).await;
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].id, created.id);
}

#[tokio::test]
async fn lists_of_unknown_board_is_404() {
    let (db, _) = demo();
    let resp = app(db)
        .oneshot(request(Method::GET, "/1/boards/nope/lists?key=k&token=t", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- cards & comments ---

#[tokio::test]
async fn card_then_comment() {
    let (db, board_id) = demo();
    let (list_id, label_id) = {
        let mut store = db.try_write().unwrap();
        let list_id = store.boards[0].lists[0].id.clone();
        let label_id = store.add_label(&board_id, "Label A", None).unwrap();
        (list_id, label_id)
    };

    let body = serde_json::json!({
        "key": "k", "token": "t",
        "idList": list_id, "name": "New Card", "idLabels": label_id, "desc": "desc",
    });
    let resp = app(db.clone())
        .oneshot(request(Method::POST, "/1/cards", Some(&body.to_string())))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let card: Card = body_json(resp).await;
    assert_eq!(card.name, "New Card");
    assert_eq!(card.label_ids, vec![label_id]);
    assert!(card.url.starts_with("https://trello.com/c/"));

    let resp = app(db.clone())
        .oneshot(request(
            Method::POST,
            &format!("/1/cards/{}/actions/comments", card.id),
            Some(r#"{"key":"k","token":"t","text":"hi"}"#),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let comment: Value = body_json(resp).await;
    assert!(comment["id"].is_string());
    assert_eq!(comment["data"]["text"], "hi");

    let store = db.read().await;
    assert_eq!(store.cards.len(), 1);
    assert_eq!(store.comments.len(), 1);
    assert_eq!(store.comments[0].card_id, card.id);
}

#[tokio::test]
async fn card_on_unknown_list_is_400() {
    let (db, _) = demo();
    let resp = app(db.clone())
        .oneshot(request(
            Method::POST,
            "/1/cards",
            Some(r#"{"key":"k","token":"t","idList":"nope","name":"x","desc":""}"#),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(db.read().await.cards.is_empty());
}

#[tokio::test]
async fn card_with_unknown_label_is_400() {
    let (db, _) = demo();
    let list_id = db.read().await.boards[0].lists[0].id.clone();
    let body = serde_json::json!({
        "key": "k", "token": "t", "idList": list_id, "name": "x", "idLabels": "nope", "desc": "",
    });
    let resp = app(db)
        .oneshot(request(Method::POST, "/1/cards", Some(&body.to_string())))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn comment_on_unknown_card_is_404() {
    let (db, _) = demo();
    let resp = app(db)
        .oneshot(request(
            Method::POST,
            "/1/cards/nope/actions/comments",
            Some(r#"{"key":"k","token":"t","text":"hi"}"#),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
