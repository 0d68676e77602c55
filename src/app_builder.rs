//! Construction of the router serving both endpoints.

use crate::{
    handlers::{Endpoint, execute, graphiql},
    schema::{build_book_schema, build_hello_schema},
    store::BookStore,
};
use async_graphql::ObjectType;
use axum::{Router, routing::post};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// The path the `hello` schema is served on.
pub const HELLO_PATH: &str = "/hello/graphql";

/// The path the `bookByID` schema is served on.
pub const BOOK_BY_ID_PATH: &str = "/bookByID/graphql";

/// How responses are served. Shared by both endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServeOptions {
    /// Indent JSON responses.
    pub pretty: bool,
    /// Serve GraphiQL on `GET`. A `GET` with a `query` URL parameter executes it instead.
    pub graphiql: bool,
}

impl Default for ServeOptions {
    #[inline]
    fn default() -> Self {
        Self {
            pretty: true,
            graphiql: true,
        }
    }
}

/// Builder function for the Router app.
///
/// Both schemas are built here, once, and shared by every request.
#[inline]
#[must_use]
pub fn build_app(store: BookStore, options: ServeOptions) -> Router {
    let hello = Endpoint {
        schema: build_hello_schema(),
        path: HELLO_PATH,
        pretty: options.pretty,
    };
    let books = Endpoint {
        schema: build_book_schema(store),
        path: BOOK_BY_ID_PATH,
        pretty: options.pretty,
    };

    Router::new()
        .merge(routes(hello, options.graphiql))
        .merge(routes(books, options.graphiql))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// The routes of a single endpoint.
fn routes<Q>(endpoint: Endpoint<Q>, graphiql_enabled: bool) -> Router
where
    Q: ObjectType + Clone + 'static,
{
    let path = endpoint.path;
    let mut method_router = post(execute::<Q>);
    if graphiql_enabled {
        method_router = method_router.get(graphiql::<Q>);
    }

    Router::new()
        .route(path, method_router)
        .with_state(endpoint)
}
