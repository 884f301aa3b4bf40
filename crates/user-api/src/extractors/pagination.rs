//! Pagination extractor
//!
//! Never rejects. Each key is read on its own, so a bad or repeated key only
//! affects itself; a query string that cannot be decoded at all is treated
//! like an empty one.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use std::convert::Infallible;
use user_service::dto::ListUsersQuery;

/// Page/page_size query of the list endpoint
#[derive(Debug, Clone, Default)]
pub struct PageQuery(pub ListUsersQuery);

#[async_trait]
impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();

        Ok(PageQuery(ListUsersQuery::from_pairs(pairs)))
    }
}
