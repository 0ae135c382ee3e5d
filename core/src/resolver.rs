//! Board, list, label, card and comment operations over a `Transport`.
//!
//! Each operation builds one request with `TrelloClient`, executes it and
//! parses the response. Operations never retry. Label creation is a separate
//! call: `find_label` only reports whether the label exists.

use tracing::debug;

use crate::client::TrelloClient;
use crate::error::TrelloError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{BoardInfo, CardInfo, LabelInfo, LabelLookup, NewCard};

pub struct Resolver<T> {
    client: TrelloClient,
    transport: T,
}

impl<T: Transport> Resolver<T> {
    pub fn new(client: TrelloClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn resolve_board(&self, board_url: &str) -> Result<BoardInfo, TrelloError> {
        debug!(board_url, "Looking up board");
        let response = self.execute(self.client.build_get_board(board_url))?;
        let board = self.client.parse_get_board(response)?;
        debug!(board_id = %board.id, board_name = %board.name, "Board resolved");
        Ok(board)
    }

    pub fn resolve_list(&self, board_id: &str, list_name: &str) -> Result<String, TrelloError> {
        debug!(board_id, list_name, "Looking up list");
        let response = self.execute(self.client.build_get_lists(board_id))?;
        let list_id = self.client.parse_find_list(response, list_name)?;
        debug!(list_id = %list_id, "List resolved");
        Ok(list_id)
    }

    pub fn find_label(&self, board_id: &str, label_name: &str) -> Result<LabelLookup, TrelloError> {
        debug!(board_id, label_name, "Looking up label");
        let response = self.execute(self.client.build_get_labels(board_id))?;
        let lookup = self.client.parse_find_label(response, label_name)?;
        debug!(found = matches!(lookup, LabelLookup::Found(_)), "Label lookup finished");
        Ok(lookup)
    }

    /// Create a colorless label. No existence check is made here.
    pub fn create_label(&self, board_id: &str, label_name: &str) -> Result<LabelInfo, TrelloError> {
        debug!(board_id, label_name, "Creating label");
        let response = self.execute(self.client.build_create_label(board_id, label_name)?)?;
        let label = self.client.parse_create_label(response)?;
        debug!(label_id = %label.id, "Label created");
        Ok(label)
    }

    pub fn create_card(&self, card: &NewCard<'_>) -> Result<CardInfo, TrelloError> {
        debug!(list_id = card.list_id, card_name = card.name, "Creating card");
        let response = self.execute(self.client.build_create_card(card)?)?;
        let created = self.client.parse_create_card(response)?;
        debug!(card_id = %created.id, card_url = %created.url, "Card created");
        Ok(created)
    }

    /// Returns the id of the new comment.
    pub fn create_comment(&self, card_id: &str, text: &str) -> Result<String, TrelloError> {
        debug!(card_id, "Creating comment");
        let response = self.execute(self.client.build_create_comment(card_id, text)?)?;
        let comment_id = self.client.parse_create_comment(response)?;
        debug!(comment_id = %comment_id, "Comment created");
        Ok(comment_id)
    }

    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TrelloError> {
        let method = request.method;
        let path = request.path.clone();
        let response = self.transport.execute(request).map_err(|e| {
            debug!(?method, %path, error = %e, "Transport failure");
            TrelloError::ApiRequest(e)
        })?;
        debug!(?method, %path, status = response.status, "Response received");
        Ok(response)
    }
}
