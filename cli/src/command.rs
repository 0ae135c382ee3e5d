//! The card workflow: board, list, label (found or created), card, comment.
//!
//! Steps run strictly in order and stop at the first failure. Nothing is
//! rolled back: a label or card created before a later failure stays on the
//! board.

use std::fmt;

use tracing::info;
use trello_core::{
    BoardInfo, CardInfo, LabelInfo, LabelLookup, NewCard, Resolver, Transport, TrelloError,
};

use crate::args::Args;

/// Progress reported after each successful step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Checkpoint {
    BoardFound(BoardInfo),
    ListFound(String),
    LabelFound(LabelInfo),
    LabelCreated(LabelInfo),
    CardCreated(CardInfo),
    CommentCreated(String),
}

impl fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Checkpoint::BoardFound(_) => write!(f, "[CHECKPOINT] Board ID found."),
            Checkpoint::ListFound(_) => write!(f, "[CHECKPOINT] List ID found."),
            Checkpoint::LabelFound(_) => write!(f, "[CHECKPOINT] Label ID found."),
            Checkpoint::LabelCreated(_) => {
                write!(f, "[CHECKPOINT] Label not found. Created a new one.")
            }
            Checkpoint::CardCreated(card) => {
                write!(f, "[CHECKPOINT] Card created. Url: {}", card.url)
            }
            Checkpoint::CommentCreated(_) => write!(f, "[FINISH] Comment created."),
        }
    }
}

/// Run the whole workflow, calling `report` after every step that succeeds.
pub fn create_card<T, F>(resolver: &Resolver<T>, args: &Args, mut report: F) -> Result<CardInfo, TrelloError>
where
    T: Transport,
    F: FnMut(&Checkpoint),
{
    let board = resolver.resolve_board(&args.board_url)?;
    let board_id = board.id.clone();
    report(&Checkpoint::BoardFound(board));

    let list_id = resolver.resolve_list(&board_id, &args.list_name)?;
    report(&Checkpoint::ListFound(list_id.clone()));

    let label = match resolver.find_label(&board_id, &args.label_name)? {
        LabelLookup::Found(label) => {
            report(&Checkpoint::LabelFound(label.clone()));
            label
        }
        LabelLookup::Missing => {
            info!(reason = %TrelloError::LabelNotFound(args.label_name.clone()), "Creating label");
            let label = resolver.create_label(&board_id, &args.label_name)?;
            report(&Checkpoint::LabelCreated(label.clone()));
            label
        }
    };

    let card = resolver.create_card(&NewCard {
        list_id: &list_id,
        name: &args.card_name,
        label_id: &label.id,
        desc: &args.card_description,
    })?;
    report(&Checkpoint::CardCreated(card.clone()));

    let comment_id = resolver.create_comment(&card.id, &args.card_comment)?;
    report(&Checkpoint::CommentCreated(comment_id));

    Ok(card)
}
