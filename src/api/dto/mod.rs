//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `doc` - Doc-related request/response DTOs
//! - `chapter` - Chapter response DTO
//! - `envelope` - The uniform `{code, data, msg}` response wrapper

mod chapter;
mod doc;
mod envelope;

pub use chapter::ChapterResponse;
pub use doc::{CreateDocRequest, DocResponse, GetDocQuery, ListDocsQuery, UpdateDocRequest};
pub use envelope::{Envelope, MSG_DELETED, MSG_FAILURE, MSG_SUCCESS};

/// Timestamp rendering used by every response DTO.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";
