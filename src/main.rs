//! The `bookql` server binary.

// The binary only drives the library; these are used there.
use async_graphql as _;
use async_graphql_axum as _;
use axum as _;
use serde as _;
use serde_json as _;
use thiserror as _;
use tower_http as _;
use tracing as _;
use tracing_subscriber as _;
// Only used by the integration tests.
#[cfg(test)]
use reqwest as _;

use bookql::{Config, errors::ServerError, serve};
use clap::Parser as _;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    serve(&Config::parse()).await
}
