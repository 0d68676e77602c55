//! Log subscriber setup.

use crate::errors::ServerError;
use tracing_subscriber::EnvFilter;

/// Install the global log subscriber. `RUST_LOG` takes precedence over `directives`.
///
/// # Errors
///
/// Returns [`ServerError::Logging`] if the directives are invalid or a subscriber is already
/// installed.
#[inline]
pub fn init(directives: &str) -> Result<(), ServerError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(directives).map_err(|err| ServerError::Logging(err.into()))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(ServerError::Logging)
}
