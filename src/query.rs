//! Query string extraction for the API routes.

use axum::extract::{FromRequestParts, Query};

use crate::Error;

/// Deserializes the query string into `T` like [Query], but a missing or
/// unparsable parameter is rejected with [Error::InvalidQuery] so that the
/// client receives a 400 Bad Request with an empty body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(Error))]
pub struct QueryParams<T>(pub T);
