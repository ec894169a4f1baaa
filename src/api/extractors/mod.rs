/*
 * Responsibility
 * - Request extractors shared by handlers
 *   - AuthCtx: identity (+ role) placed by the auth middleware
 *   - PathId<T>: UUID path segments, 400 on malformed input
 *   - JsonBody<T>: JSON bodies, empty body as T::default(), 400 on malformed JSON
 */
pub mod auth_ctx;
pub mod json_body;
pub mod path_id;

pub use auth_ctx::{AuthCtx, AuthCtxExtractor};
pub use json_body::JsonBody;
pub use path_id::{ActivityId, EventId, StudentId};
