//! The HTTP handlers: decoding GraphQL requests, executing them and encoding the responses.

use crate::errors::DispatchError;
use async_graphql::{
    EmptyMutation, EmptySubscription, ObjectType, Request, Schema, ServerError as GraphQLError,
    Variables, http::GraphiQLSource,
};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Form,
    body::Bytes,
    extract::{FromRequest, Query, Request as HttpRequest, State},
    http::{HeaderMap, HeaderValue, Uri, header::CONTENT_TYPE},
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize as _};
use serde_json::{Serializer, ser::PrettyFormatter};

/// The content type of every GraphQL response.
const JSON_UTF8: &str = "application/json; charset=utf-8";

/// The content type of a request body holding a bare query document.
const GRAPHQL: &str = "application/graphql";

/// The content type of a request body holding URL-encoded parameters.
const FORM: &str = "application/x-www-form-urlencoded";

/// Everything a handler needs to serve one endpoint.
#[derive(Clone)]
pub(crate) struct Endpoint<Q> {
    /// The schema requests are executed against.
    pub(crate) schema: Schema<Q, EmptyMutation, EmptySubscription>,
    /// The path the endpoint is served on, used to point GraphiQL at it.
    pub(crate) path: &'static str,
    /// Whether responses are indented.
    pub(crate) pretty: bool,
}

/// Execute a GraphQL request against the endpoint's schema.
///
/// Everything is answered with `200 OK`, including queries the schema rejects and requests that
/// cannot be decoded; their errors are part of the response body. Only failures that
/// [`DispatchError::status`] maps elsewhere are answered with another status.
pub(crate) async fn execute<Q>(
    State(endpoint): State<Endpoint<Q>>,
    input: Result<GraphQLInput, DispatchError>,
) -> Result<Response, DispatchError>
where
    Q: ObjectType + 'static,
{
    let response = match input {
        Ok(GraphQLInput(request)) => endpoint.schema.execute(request).await,
        Err(err) if err.is_in_band() => {
            tracing::debug!(error = %err, "undecodable request");
            async_graphql::Response::from_errors(vec![GraphQLError::new(err.to_string(), None)])
        }
        Err(err) => return Err(err),
    };
    encode(response, endpoint.pretty)
}

/// Serve GraphiQL pointed at the endpoint.
///
/// A `GET` carrying a `query` URL parameter is executed instead, so links to a query work.
pub(crate) async fn graphiql<Q>(
    State(endpoint): State<Endpoint<Q>>,
    Query(params): Query<UrlParams>,
) -> Result<Response, DispatchError>
where
    Q: ObjectType + 'static,
{
    if let Some(request) = params.into_request() {
        let response = endpoint.schema.execute(request).await;
        return encode(response, endpoint.pretty);
    }

    Ok(Html(GraphiQLSource::build().endpoint(endpoint.path).finish()).into_response())
}

/// A GraphQL request read from the URL or the body.
///
/// A non-empty `query` URL parameter takes precedence over the body. Otherwise the body is read
/// according to its content type: `application/graphql` holds a bare document, a form carries the
/// same parameters as the URL, and anything else, or nothing, is JSON.
#[derive(Debug)]
pub(crate) struct GraphQLInput(pub(crate) Request);

impl<S> FromRequest<S> for GraphQLInput
where
    S: Send + Sync,
{
    type Rejection = DispatchError;

    async fn from_request(req: HttpRequest, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(request) = UrlParams::from_uri(req.uri()).into_request() {
            return Ok(Self(request));
        }

        let request = match media_type(req.headers()).as_deref() {
            Some(GRAPHQL) => {
                let body = Bytes::from_request(req, state).await?;
                Request::new(String::from_utf8_lossy(&body))
            }
            Some(FORM) => {
                let Form(params) = Form::<UrlParams>::from_request(req, state).await?;
                params.into_request().unwrap_or_else(|| Request::new(""))
            }
            Some(_) | None => GraphQLRequest::<DispatchError>::from_request(req, state)
                .await?
                .into_inner(),
        };
        Ok(Self(request))
    }
}

/// The request parameters carried by a URL query string or a form body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UrlParams {
    /// The query document.
    query: Option<String>,
    /// The variables, as a JSON object.
    variables: Option<String>,
    /// The operation to run.
    operation_name: Option<String>,
}

impl UrlParams {
    /// Read the parameters of a URL. A query string that cannot be read carries none.
    fn from_uri(uri: &Uri) -> Self {
        let Ok(Query(params)) = Query::try_from_uri(uri) else {
            return Self::default();
        };
        params
    }

    /// The request described by the parameters, if they hold a query.
    ///
    /// Variables that are not valid JSON are ignored.
    fn into_request(self) -> Option<Request> {
        let query = self.query.filter(|query| !query.is_empty())?;
        let mut request = Request::new(query);

        if let Some(variables) = self.variables {
            match serde_json::from_str(&variables) {
                Ok(variables) => request = request.variables(Variables::from_json(variables)),
                Err(err) => tracing::debug!(error = %err, "ignoring undecodable variables"),
            }
        }
        if let Some(name) = self.operation_name.filter(|name| !name.is_empty()) {
            request = request.operation_name(name);
        }

        Some(request)
    }
}

/// The media type of a request body, lowercased and without parameters.
fn media_type(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(CONTENT_TYPE)?.to_str().ok()?;
    let essence = value.split(';').next()?;
    Some(essence.trim().to_ascii_lowercase())
}

/// Encode a response, tab-indented if `pretty` is set.
fn encode(response: async_graphql::Response, pretty: bool) -> Result<Response, DispatchError> {
    let mut encoded = if pretty {
        let mut body = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut body, PrettyFormatter::with_indent(b"\t"));
        response
            .serialize(&mut serializer)
            .map_err(DispatchError::Encode)?;
        body.into_response()
    } else {
        GraphQLResponse::from(response).into_response()
    };

    drop(
        encoded
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8)),
    );
    Ok(encoded)
}
