//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::response::ApiError;

/// Raw `:rsvp_id` segment
#[derive(Debug, Deserialize)]
struct RsvpIdParams {
    rsvp_id: String,
}

/// RSVP ID taken from the path, rejected with 400 when it is not a UUID
#[derive(Debug, Clone, Copy)]
pub struct RsvpIdPath(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for RsvpIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<RsvpIdParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        params
            .rsvp_id
            .parse()
            .map(Self)
            .map_err(|_| ApiError::invalid_path(format!("Invalid rsvp_id format: {}", params.rsvp_id)))
    }
}
