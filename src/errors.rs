//! Error types used by the store, the request dispatcher and the server.

use async_graphql::ParseRequestError;
use axum::{
    Json,
    extract::rejection::{BytesRejection, FormRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Error as JsonError, json};
use std::{error::Error, io::Error as IoError, net::SocketAddr};
use thiserror::Error;

/// Convenience alias.
type BoxError = Box<dyn Error + Send + Sync>;

/// Errors that may occur when building a [`BookStore`](crate::store::BookStore).
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    /// Two books share an identifier.
    #[error("Book id {id} occurs more than once.")]
    DuplicateId {
        /// The repeated identifier.
        id: i32,
    },
}

/// Errors that may occur when decoding a request or encoding its response. These never reach a
/// resolver.
///
/// Most decoding failures are answered in-band: the client receives `200 OK` and a GraphQL
/// `errors` entry, as if an empty query had been sent. Only transport failures, such as an
/// oversized or unreadable body, and encoding failures carry another status.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DispatchError {
    /// The request body could not be read.
    #[error("The request body could not be read: {0}")]
    Body(#[from] BytesRejection),
    /// A form body could not be read or holds malformed parameters.
    #[error("The form body is not a valid GraphQL request: {0}")]
    Form(#[from] FormRejection),
    /// The request body is not a valid GraphQL request.
    #[error("The request body is not a valid GraphQL request: {0}")]
    Request(#[from] ParseRequestError),
    /// The response could not be serialized.
    #[error("The response could not be encoded: {0}")]
    Encode(#[source] JsonError),
}

impl DispatchError {
    /// The status code sent along with the error.
    ///
    /// Errors answered with `200 OK` are reported as part of a GraphQL response.
    #[inline]
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Body(rejection) => rejection.status(),
            Self::Form(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            Self::Request(ParseRequestError::PayloadTooLarge) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Form(_) | Self::Request(_) => StatusCode::OK,
            Self::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the error is reported inside a GraphQL response rather than with an error status.
    #[inline]
    #[must_use]
    pub fn is_in_band(&self) -> bool {
        self.status() == StatusCode::OK
    }
}

impl IntoResponse for DispatchError {
    #[inline]
    fn into_response(self) -> Response {
        tracing::warn!(status = %self.status(), error = %self, "rejected request");
        let body = json!({ "errors": [{ "message": self.to_string() }] });
        (self.status(), Json(body)).into_response()
    }
}

/// Errors that stop the server from starting or keep it from serving.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ServerError {
    /// The book store is inconsistent.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The log subscriber could not be installed.
    #[error("Failed to set up logging: {0}")]
    Logging(#[source] BoxError),
    /// The listener could not bind to the requested address.
    #[error("Unable to bind {addr}: {source}")]
    Bind {
        /// The address that was requested.
        addr: SocketAddr,
        /// The source error.
        #[source]
        source: IoError,
    },
    /// An IO error while serving.
    #[error(transparent)]
    Serve(#[from] IoError),
}
