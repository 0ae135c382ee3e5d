use tokio::net::TcpListener;

/// Serves the demo board at `http://127.0.0.1:$PORT/b/X/test`. Credentials
/// come from `TRELLO_API_KEY` / `TRELLO_API_TOKEN`, defaulting to `key` and
/// `token`.
#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let key = std::env::var("TRELLO_API_KEY").unwrap_or_else(|_| "key".to_string());
    let token = std::env::var("TRELLO_API_TOKEN").unwrap_or_else(|_| "token".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("listening on {addr}, board url http://{addr}/b/X/test");
    mock_server::run(listener, mock_server::db(mock_server::demo_store(&key, &token))).await
}
