/*
 * Responsibility
 *  - Read the single path parameter and parse it as a UUID
 *  - Malformed ids become 400 before any data-store call
 *  - The tag type keeps an event id from being passed where an activity id is expected
 */
use std::marker::PhantomData;

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

use crate::error::AppError;

#[derive(Clone, Copy)]
pub struct PathId<T> {
    pub id: Uuid,
    _marker: PhantomData<T>,
}

impl<T> PathId<T> {
    fn new(id: Uuid) -> Self {
        Self {
            id,
            _marker: PhantomData,
        }
    }
}

fn parse_or_bad_request(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::bad_request("INVALID_ID", "invalid id"))
}

impl<S, T> FromRequestParts<S> for PathId<T>
where
    S: Send + Sync,
    T: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bad_request("INVALID_ID", "invalid id"))?;
        let id = parse_or_bad_request(&raw)?;
        Ok(Self::new(id))
    }
}

impl<T> std::fmt::Debug for PathId<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathId").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_or_bad_request(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn rejects_non_uuid() {
        let err = parse_or_bad_request("42").unwrap_err();
        assert!(matches!(err, AppError::BadRequest { code: "INVALID_ID", .. }));
    }
}
