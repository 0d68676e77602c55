//! The two GraphQL schemas and their resolvers.
//!
//! Each endpoint has a schema of its own with a single root field:
//!
//! ```graphql
//! # /hello/graphql
//! { hello }
//!
//! # /bookByID/graphql
//! { bookByID(id: 1) { id title author isbn quantity } }
//! ```
//!
//! Neither schema has mutations or subscriptions.

use crate::{book::Book, store::BookStore};
use async_graphql::{Context, EmptyMutation, EmptySubscription, MaybeUndefined, Object, Schema};

/// The schema served on `/hello/graphql`.
pub type HelloSchema = Schema<HelloQuery, EmptyMutation, EmptySubscription>;

/// The schema served on `/bookByID/graphql`.
pub type BookSchema = Schema<BookQuery, EmptyMutation, EmptySubscription>;

/// The root query of [`HelloSchema`].
#[derive(Clone, Copy, Debug, Default)]
pub struct HelloQuery;

#[Object(name = "RootQuery")]
impl HelloQuery {
    /// Always `"world"`.
    #[expect(clippy::unused_async, reason = "Resolvers must be asynchronous.")]
    async fn hello(&self) -> &'static str {
        resolve_hello()
    }
}

/// The root query of [`BookSchema`]. The books themselves are schema data, see
/// [`build_book_schema`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BookQuery;

#[Object(name = "RootQuery")]
impl BookQuery {
    /// The book with the given id. Null if there is none, or if no usable id was given.
    #[graphql(name = "bookByID")]
    #[expect(clippy::unused_async, reason = "Resolvers must be asynchronous.")]
    async fn book_by_id(&self, ctx: &Context<'_>, id: MaybeUndefined<i32>) -> Option<Book> {
        let store = ctx.data_unchecked::<BookStore>();
        resolve_book_by_id(store, id.into())
    }
}

/// The `id` argument of `bookByID`, as the resolver sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdArgument {
    /// An integer was given.
    Valid(i32),
    /// Something other than an integer was given, i.e. an explicit `null`. Wrongly typed
    /// literals never get this far; the query engine rejects them during validation.
    Invalid,
    /// No argument was given.
    Absent,
}

impl From<MaybeUndefined<i32>> for IdArgument {
    #[inline]
    fn from(value: MaybeUndefined<i32>) -> Self {
        match value {
            MaybeUndefined::Value(id) => Self::Valid(id),
            MaybeUndefined::Null => Self::Invalid,
            MaybeUndefined::Undefined => Self::Absent,
        }
    }
}

/// Resolve the `hello` field.
#[inline]
#[must_use]
pub const fn resolve_hello() -> &'static str {
    "world"
}

/// Resolve the `bookByID` field.
///
/// An unusable argument resolves to [`None`] rather than an error, the same as an id no book has.
#[inline]
#[must_use]
pub fn resolve_book_by_id(store: &BookStore, argument: IdArgument) -> Option<Book> {
    match argument {
        IdArgument::Valid(id) => {
            let book = store.lookup(id);
            tracing::debug!(id, found = book.is_some(), "book lookup");
            book
        },
        IdArgument::Invalid | IdArgument::Absent => {
            tracing::debug!(?argument, "book lookup without a usable id");
            None
        },
    }
}

/// Build the schema answering `hello`.
#[inline]
#[must_use]
pub fn build_hello_schema() -> HelloSchema {
    Schema::build(HelloQuery, EmptyMutation, EmptySubscription).finish()
}

/// Build the schema answering `bookByID`, resolving against `store`.
#[inline]
#[must_use]
pub fn build_book_schema(store: BookStore) -> BookSchema {
    Schema::build(BookQuery, EmptyMutation, EmptySubscription)
        .data(store)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::{
        IdArgument, build_book_schema, build_hello_schema, resolve_book_by_id, resolve_hello,
    };
    use crate::{book::Book, store::BookStore};
    use async_graphql::{MaybeUndefined, Request, Variables, value};
    use serde_json::json;

    /// The store every test resolves against.
    fn store() -> BookStore {
        BookStore::catalogue().expect("catalogue has unique ids")
    }

    /// `hello` is a constant.
    #[tokio::test]
    async fn hello_query() {
        assert_eq!(resolve_hello(), "world");

        let response = build_hello_schema().execute("{ hello }").await;
        assert!(response.errors.is_empty());
        assert_eq!(response.data, value!({ "hello": "world" }));
    }

    /// Arguments to `hello` are a validation error, not a different answer.
    #[tokio::test]
    async fn hello_takes_no_arguments() {
        let response = build_hello_schema().execute(r#"{ hello(name: "x") }"#).await;
        assert!(!response.errors.is_empty());
    }

    /// Known ids resolve to the full book.
    #[tokio::test]
    async fn book_by_id_found() {
        let schema = build_book_schema(store());
        let response = schema
            .execute("{ bookByID(id: 1) { id title author isbn quantity } }")
            .await;

        assert!(response.errors.is_empty());
        assert_eq!(
            response.data,
            value!({
                "bookByID": {
                    "id": 1,
                    "title": "Book 1",
                    "author": "Author 1",
                    "isbn": "1234567890",
                    "quantity": 5,
                }
            })
        );
    }

    /// Ids can be passed as variables.
    #[tokio::test]
    async fn book_by_id_variable() {
        let schema = build_book_schema(store());
        let request = Request::new("query Find($id: Int) { bookByID(id: $id) { title isbn } }")
            .variables(Variables::from_json(json!({ "id": 2 })));
        let response = schema.execute(request).await;

        assert!(response.errors.is_empty());
        assert_eq!(
            response.data,
            value!({ "bookByID": { "title": "Book 2", "isbn": "0987654321" } })
        );
    }

    /// Unknown, null and missing ids all resolve to null without errors.
    #[tokio::test]
    async fn book_by_id_absent() {
        let schema = build_book_schema(store());
        for query in [
            "{ bookByID(id: 999) { id } }",
            "{ bookByID(id: null) { id } }",
            "{ bookByID { id } }",
            "query Find($id: Int) { bookByID(id: $id) { id } }",
        ] {
            let response = schema.execute(query).await;
            assert!(response.errors.is_empty(), "{query}");
            assert_eq!(response.data, value!({ "bookByID": null }), "{query}");
        }
    }

    /// Wrongly typed literals are rejected by validation before resolving.
    #[tokio::test]
    async fn book_by_id_wrong_type() {
        let schema = build_book_schema(store());
        let response = schema.execute(r#"{ bookByID(id: "1") { id } }"#).await;
        assert!(!response.errors.is_empty());
    }

    /// The schemas are independent of one another.
    #[tokio::test]
    async fn schemas_are_separate() {
        let response = build_hello_schema().execute("{ bookByID(id: 1) { id } }").await;
        assert!(!response.errors.is_empty());

        let response = build_book_schema(store()).execute("{ hello }").await;
        assert!(!response.errors.is_empty());
    }

    /// The exported schema matches the documented surface.
    #[test]
    fn schema_definitions() {
        let hello = build_hello_schema().sdl();
        assert!(hello.contains("type RootQuery"));
        assert!(hello.contains("hello: String!"));

        let books = build_book_schema(store()).sdl();
        assert!(books.contains("bookByID(id: Int): Book"));
        assert!(books.contains("type Book"));
        for field in [
            "id: Int!",
            "title: String!",
            "author: String!",
            "isbn: String!",
            "quantity: Int!",
        ] {
            assert!(books.contains(field), "{field}");
        }
    }

    /// The argument mapping keeps the three cases apart, and only a valid id is looked up.
    #[test]
    fn id_argument() {
        assert_eq!(IdArgument::from(MaybeUndefined::Value(7)), IdArgument::Valid(7));
        assert_eq!(IdArgument::from(MaybeUndefined::Null), IdArgument::Invalid);
        assert_eq!(IdArgument::from(MaybeUndefined::Undefined), IdArgument::Absent);

        let store = store();
        assert_eq!(resolve_book_by_id(&store, IdArgument::Invalid), None);
        assert_eq!(resolve_book_by_id(&store, IdArgument::Absent), None);
        assert_eq!(resolve_book_by_id(&store, IdArgument::Valid(999)), None);
        assert_eq!(
            resolve_book_by_id(&store, IdArgument::Valid(2)),
            Some(Book::new(2, "Book 2", "Author 2", "0987654321", 3))
        );
    }
}
