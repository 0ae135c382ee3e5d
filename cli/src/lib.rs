//! Command-line host for `trello-core`.
//!
//! # Overview
//! Parses the card arguments, performs the HTTP round-trips with ureq and
//! drives the card workflow, printing one checkpoint line per step.
//!
//! # Design
//! - `executor::UreqTransport` is the only code that does network I/O.
//! - `command::create_card` is generic over `Transport` so the workflow can
//!   run against a mock in tests.
//! - Process exit and logging setup stay in `main.rs`.

pub mod args;
pub mod command;
pub mod executor;

pub use args::Args;
pub use command::{create_card, Checkpoint};
pub use executor::{UreqTransport, REQUEST_TIMEOUT};

/// Exit status for any failed run, including missing credentials.
pub const FAILURE_EXIT_CODE: i32 = -1;
