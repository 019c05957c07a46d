//! Success-response envelope.
//!
//! Handlers whose body is exactly `{ "data": ... }` return [`DataResponse`]
//! rather than building the object by hand; mixed shapes (checkout payloads,
//! upload summaries) still assemble their own JSON.

use serde::Serialize;

/// The `{ "data": T }` envelope shared by list, detail, and mutation
/// responses.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
