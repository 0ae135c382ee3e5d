use clap::Parser;
use trello_core::DEFAULT_API_URL;

/// Create a Trello card on the given board and list, with a label (created
/// when missing), a description and a first comment.
///
/// Credentials are read from TRELLO_API_KEY and TRELLO_API_TOKEN.
#[derive(Debug, Clone, Parser)]
#[command(name = "trello-cli", version)]
pub struct Args {
    /// URL of the board that you wish to create the card on
    #[arg(long = "board_url", alias = "board-url")]
    pub board_url: String,

    /// Name of the list (column) to create the card on
    #[arg(long = "list_name", alias = "list-name")]
    pub list_name: String,

    /// Title of the card to be created
    #[arg(long = "card_name", alias = "card-name")]
    pub card_name: String,

    /// Description of the card to be created
    #[arg(long = "card_description", alias = "card-description")]
    pub card_description: String,

    /// Comment to be created with the card
    #[arg(long = "card_comment", alias = "card-comment")]
    pub card_comment: String,

    /// Name of the label to apply to the card. If the label does not exist,
    /// it will be created
    #[arg(long = "label_name", alias = "label-name")]
    pub label_name: String,

    /// Base URL of the Trello REST API
    #[arg(long = "api-url", env = "TRELLO_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
}
