#![deny(clippy::all, clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::must_use_candidate)]
//! # trellor
//!
//! trellor is a convenient wrapper library around the Trello REST API.
//!
//! This library can fetch and modify:
//! - [`List`]
//! - [`Card`]
//! - [`Action`] (comments)
//!
//! Every request carries the client's `key` and `token` credentials, and
//! every endpoint method funnels through one shared request dispatcher.
//! An HTTP error reply from the API is logged and surfaced as `Ok(None)`
//! rather than an error, so callers can treat "the API refused" and "no
//! such thing" uniformly.
//!
//! ## Example: Finding a list on a board by name.
//!
//! ```rust,no_run
//! # type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
//! use trellor::{Client, List};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new("api key", "oauth token", "board id");
//!
//!     match List::find(&client, "Done").await? {
//!         Some(list) => println!("List ID: {}", list.id()),
//!         None => println!("List not found."),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! [`List`]:   crate::models::list::List
//! [`Card`]:   crate::models::card::Card
//! [`Action`]: crate::models::action::Action

/// Client module contains [`Client`] for dispatching API requests.
pub mod client;

/// Maps Trello label color names to their hex codes.
pub mod colors;

/// Contains [`Error`]s that can be thrown by the library.
///
/// [`Error`]: crate::error::Error
pub mod error;

pub(crate) mod models;

pub(crate) mod result;

pub use client::Client;
pub use models::*;
