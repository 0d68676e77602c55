//! Command-line configuration.

use crate::app_builder::ServeOptions;
use clap::Parser;
use std::net::SocketAddr;

/// Serve `hello` and `bookByID` GraphQL queries over HTTP.
#[derive(Clone, Debug, Parser, PartialEq, Eq)]
#[command(version, about)]
pub struct Config {
    /// The address to listen on.
    #[arg(long, default_value = "127.0.0.1:8081")]
    pub listen: SocketAddr,

    /// Respond with compact instead of indented JSON.
    #[arg(long)]
    pub compact: bool,

    /// Do not serve GraphiQL on `GET` requests.
    #[arg(long)]
    pub no_graphiql: bool,

    /// Log filter directives, used unless `RUST_LOG` is set.
    #[arg(long, default_value = "info")]
    pub log: String,

    /// Print the schemas in SDL and exit.
    #[arg(long)]
    pub print_schema: bool,
}

impl Config {
    /// How responses should be served.
    #[inline]
    #[must_use]
    pub const fn serve_options(&self) -> ServeOptions {
        ServeOptions {
            pretty: !self.compact,
            graphiql: !self.no_graphiql,
        }
    }
}
