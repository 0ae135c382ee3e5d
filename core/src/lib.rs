//! Synchronous Trello API core for creating a labelled, commented card.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). `Resolver` strings the two
//! halves together over any `Transport`, so the host only supplies the HTTP
//! round-trip.
//!
//! # Design
//! - `TrelloClient` is stateless: it holds the base URL and the credentials.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Name lookups are exact, case-sensitive and first-match-wins.
//! - Label lookup returns `LabelLookup`; creating a missing label is a
//!   separate, explicit call.

pub mod client;
pub mod credentials;
pub mod error;
pub mod http;
pub mod resolver;
pub mod types;

pub use client::{TrelloClient, DEFAULT_API_URL};
pub use credentials::Credentials;
pub use error::TrelloError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, StatusError, Transport, TransportError};
pub use resolver::Resolver;
pub use types::{BoardInfo, CardInfo, LabelInfo, LabelLookup, ListInfo, NewCard, NewComment, NewLabel};
