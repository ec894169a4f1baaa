use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON request body.
///
/// An empty body, or one sent without a JSON content type, yields
/// `T::default()` so the handler's own validation answers with its message.
/// A JSON body that does not parse answers 400 in the shared error format.
pub struct JsonBody<T>(pub T);

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

fn invalid_body() -> AppError {
    AppError::bad_request("INVALID_BODY", "request body must be a JSON object")
}

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json = is_json(req.headers());
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(error = %rejection, "request body unreadable");
            invalid_body()
        })?;

        if !json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        let Json(value) = Json::<T>::from_bytes(&bytes).map_err(|rejection| {
            tracing::debug!(error = %rejection, "request body rejected");
            invalid_body()
        })?;
        Ok(Self(value))
    }
}
