//! Chapter response DTO.

use serde::Serialize;
use utoipa::ToSchema;

use crate::api::dto::TIMESTAMP_FORMAT;
use crate::models::Chapter;

/// Response body for a chapter nested under its Doc.
#[derive(Debug, Serialize, ToSchema)]
pub struct ChapterResponse {
    pub id: i32,
    pub doc_id: i32,
    pub title: String,
    pub content: String,
    pub sort: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Chapter> for ChapterResponse {
    fn from(chapter: Chapter) -> Self {
        Self {
            id: chapter.id,
            doc_id: chapter.doc_id,
            title: chapter.title,
            content: chapter.content,
            sort: chapter.sort,
            created_at: chapter.created_at.to_jiff().strftime(TIMESTAMP_FORMAT).to_string(),
            updated_at: chapter.updated_at.to_jiff().strftime(TIMESTAMP_FORMAT).to_string(),
        }
    }
}
