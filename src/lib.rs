//! Client for a remote collection of motorcycle listings.
//!
//! [`store::CollectionStore`] mirrors the remote collection in memory and
//! exposes `list`, `create`, `update` and `delete`, each a single HTTP round
//! trip. Everything else supports it: the listing model and validation,
//! the HTTP client, search helpers, and the command-line front end.

pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod listing;
pub mod logging;
pub mod mvi;
pub mod remote;
pub mod search;
pub mod store;

pub use error::StoreError;
