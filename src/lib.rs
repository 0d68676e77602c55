//! A small GraphQL server over a fixed book catalogue.
//!
//! Two endpoints, each with a schema of its own:
//!
//! - `POST /hello/graphql` answers `{ hello }` with `"world"`.
//! - `POST /bookByID/graphql` answers `{ bookByID(id: Int) { id title author isbn quantity } }`
//!   with the matching book, or `null`.
//!
//! The books live in a [`BookStore`] that is built once at startup and never changes. The
//! schemas are built once as well and shared by all requests.

// Only used by the integration tests.
#[cfg(test)]
use reqwest as _;

pub mod app_builder;
pub use app_builder::{BOOK_BY_ID_PATH, HELLO_PATH, ServeOptions, build_app};

pub mod book;
pub use book::Book;

pub mod config;
pub use config::Config;

pub mod errors;

mod handlers;

pub mod logging;

pub mod schema;

pub mod server;
pub use server::serve;

pub mod store;
pub use store::BookStore;
