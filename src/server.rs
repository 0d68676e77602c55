//! Running the server.

use crate::{
    app_builder::{BOOK_BY_ID_PATH, HELLO_PATH, build_app},
    config::Config,
    errors::ServerError,
    logging,
    schema::{build_book_schema, build_hello_schema},
    store::BookStore,
};
use std::future::pending;
use tokio::{net::TcpListener, signal::ctrl_c};

/// Start the server described by `config` and serve until interrupted.
///
/// With [`print_schema`](Config::print_schema) set, the schemas are printed instead.
///
/// # Errors
///
/// Returns an error if the store is inconsistent, logging cannot be set up, the listener cannot
/// bind, or serving fails.
#[inline]
pub async fn serve(config: &Config) -> Result<(), ServerError> {
    let store = BookStore::catalogue()?;

    if config.print_schema {
        println!("# {HELLO_PATH}\n{}", build_hello_schema().sdl());
        println!("# {BOOK_BY_ID_PATH}\n{}", build_book_schema(store).sdl());
        return Ok(());
    }

    logging::init(&config.log)?;
    tracing::info!(books = store.len(), "book store ready");

    let app = build_app(store, config.serve_options());
    let listener = TcpListener::bind(config.listen)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.listen,
            source,
        })?;
    tracing::info!(
        addr = %listener.local_addr()?,
        paths = ?[HELLO_PATH, BOOK_BY_ID_PATH],
        "server started"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Resolves when the process is asked to stop.
async fn shutdown_signal() {
    if let Err(err) = ctrl_c().await {
        tracing::error!(error = %err, "unable to listen for shutdown signal");
        // Never resolve; the server keeps running until killed.
        pending::<()>().await;
    }
}
