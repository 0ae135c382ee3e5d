use std::process;

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use trello_cli::{create_card, Args, UreqTransport, FAILURE_EXIT_CODE};
use trello_core::{Credentials, Resolver, TrelloClient};

fn main() {
    // Load environment
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout only carries checkpoint lines.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            eprintln!("[AUTHENTICATION ERROR] {e}");
            process::exit(FAILURE_EXIT_CODE);
        }
    };

    let client = TrelloClient::new(&args.api_url, credentials);
    let resolver = Resolver::new(client, UreqTransport::new());

    match create_card(&resolver, &args, |checkpoint| println!("{checkpoint}")) {
        Ok(card) => info!(card_id = %card.id, card_url = %card.url, "Card workflow complete"),
        Err(e) => {
            error!("{e}");
            debug!(?args, "Arguments of the failed run");
            process::exit(FAILURE_EXIT_CODE);
        }
    }
}
