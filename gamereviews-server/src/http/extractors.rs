//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;

/// Raw id path segment (`review_id`, `comment_id`).
///
/// The text is handed to the store, which casts it and rejects anything that
/// is not an integer. A segment axum cannot decode at all (invalid UTF-8
/// such as `%FF`) is rejected here with the same `bad request`.
pub struct IdParam(pub String);

impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("undecodable id segment: {}", rejection);
                ApiError::BadRequest
            })?;

        Ok(Self(id))
    }
}
