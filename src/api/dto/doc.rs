//! Doc-related DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::api::dto::{ChapterResponse, TIMESTAMP_FORMAT};
use crate::models::{Chapter, Doc, NewDoc, UpdateDoc};
use crate::utils::validate::OrderedRules;

/// Default page number when `offset` is missing or unparseable.
const DEFAULT_PAGE: i64 = 1;
/// Default page size when `limit` is missing or unparseable.
const DEFAULT_LIMIT: i64 = 20;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a new doc.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateDocRequest {
    #[validate(length(min = 1, max = 60, message = "Name must be between 1 and 60 characters"))]
    #[schema(min_length = 1, max_length = 60)]
    pub name: String,
    #[validate(length(
        min = 1,
        max = 60,
        message = "Display name must be between 1 and 60 characters"
    ))]
    #[schema(min_length = 1, max_length = 60)]
    pub display_name: String,
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0, max = 10, message = "Level must be between 0 and 10"))]
    #[schema(minimum = 0, maximum = 10)]
    #[serde(default)]
    pub level: i32,
}

impl CreateDocRequest {
    /// Converts the request DTO into a NewDoc model for database insertion.
    pub fn into_new_doc(self) -> NewDoc {
        NewDoc {
            name: self.name,
            display_name: self.display_name,
            description: self.description,
            level: self.level,
        }
    }
}

impl OrderedRules for CreateDocRequest {
    fn field_order() -> &'static [&'static str] {
        &["name", "display_name", "description", "level"]
    }
}

/// Request body for updating a doc. The update endpoint takes the full field
/// set, so this mirrors the create payload.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateDocRequest {
    #[validate(length(min = 1, max = 60, message = "Name must be between 1 and 60 characters"))]
    #[schema(min_length = 1, max_length = 60)]
    pub name: String,
    #[validate(length(
        min = 1,
        max = 60,
        message = "Display name must be between 1 and 60 characters"
    ))]
    #[schema(min_length = 1, max_length = 60)]
    pub display_name: String,
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0, max = 10, message = "Level must be between 0 and 10"))]
    #[schema(minimum = 0, maximum = 10)]
    #[serde(default)]
    pub level: i32,
}

impl UpdateDocRequest {
    /// Converts the request DTO into an UpdateDoc model for database update.
    pub fn into_update_doc(self) -> UpdateDoc {
        UpdateDoc {
            name: self.name,
            display_name: self.display_name,
            description: self.description,
            level: self.level,
        }
    }
}

impl OrderedRules for UpdateDocRequest {
    fn field_order() -> &'static [&'static str] {
        &["name", "display_name", "description", "level"]
    }
}

/// Query parameters for fetching a single doc.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct GetDocQuery {
    /// Related collection to eager-load; only "chapters" is recognized
    pub relation: Option<String>,
}

impl GetDocQuery {
    /// Whether the caller asked for the chapters relation.
    pub fn wants_chapters(&self) -> bool {
        self.relation
            .as_deref()
            .is_some_and(|r| r.eq_ignore_ascii_case("chapters"))
    }
}

/// Query parameters for the doc listing.
///
/// `offset` and `limit` arrive as raw text and fall back to their defaults
/// when missing or unparseable, matching the lenient parsing of the admin UI.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListDocsQuery {
    /// 1-based page number (default 1)
    pub offset: Option<String>,
    /// Page size (default 20)
    pub limit: Option<String>,
    /// Free-text search over doc names
    #[serde(rename = "searchStr")]
    pub search_str: Option<String>,
    /// Sort column, optionally suffixed with "desc"
    #[serde(rename = "orderBy")]
    pub order_by: Option<String>,
}

impl ListDocsQuery {
    /// 1-based page number with fallback parsing.
    pub fn page(&self) -> i64 {
        parse_or(self.offset.as_deref(), DEFAULT_PAGE)
    }

    /// Page size with fallback parsing.
    pub fn per_page(&self) -> i64 {
        parse_or(self.limit.as_deref(), DEFAULT_LIMIT)
    }
}

fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    match raw.and_then(|s| s.trim().parse::<i64>().ok()) {
        Some(n) if n > 0 => n,
        _ => default,
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for doc data, with chapters projected recursively when the
/// caller asked for the relation.
#[derive(Debug, Serialize, ToSchema)]
pub struct DocResponse {
    pub id: i32,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub level: i32,
    pub chapters: Vec<ChapterResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl DocResponse {
    /// Builds the response shape from a doc and its optionally loaded
    /// chapters, preserving chapter order.
    pub fn new(doc: Doc, chapters: Option<Vec<Chapter>>) -> Self {
        Self {
            id: doc.id,
            name: doc.name,
            display_name: doc.display_name,
            description: doc.description,
            level: doc.level,
            chapters: chapters
                .unwrap_or_default()
                .into_iter()
                .map(ChapterResponse::from)
                .collect(),
            created_at: doc.created_at.to_jiff().strftime(TIMESTAMP_FORMAT).to_string(),
            updated_at: doc.updated_at.to_jiff().strftime(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_and_limit_defaults() {
        let query = ListDocsQuery::default();
        assert_eq!(query.page(), 1);
        assert_eq!(query.per_page(), 20);
    }

    #[test]
    fn test_page_and_limit_fallback_on_garbage() {
        let query = ListDocsQuery {
            offset: Some("three".to_string()),
            limit: Some("".to_string()),
            ..Default::default()
        };
        assert_eq!(query.page(), 1);
        assert_eq!(query.per_page(), 20);
    }

    #[test]
    fn test_page_and_limit_reject_non_positive() {
        let query = ListDocsQuery {
            offset: Some("0".to_string()),
            limit: Some("-5".to_string()),
            ..Default::default()
        };
        assert_eq!(query.page(), 1);
        assert_eq!(query.per_page(), 20);
    }

    #[test]
    fn test_page_and_limit_parse_valid_values() {
        let query = ListDocsQuery {
            offset: Some("3".to_string()),
            limit: Some(" 50 ".to_string()),
            ..Default::default()
        };
        assert_eq!(query.page(), 3);
        assert_eq!(query.per_page(), 50);
    }

    #[test]
    fn test_wants_chapters() {
        let query = GetDocQuery {
            relation: Some("chapters".to_string()),
        };
        assert!(query.wants_chapters());

        let query = GetDocQuery {
            relation: Some("Chapters".to_string()),
        };
        assert!(query.wants_chapters());

        let query = GetDocQuery {
            relation: Some("comments".to_string()),
        };
        assert!(!query.wants_chapters());

        assert!(!GetDocQuery::default().wants_chapters());
    }

    #[test]
    fn test_create_request_decodes_with_defaults() {
        let request: CreateDocRequest =
            serde_json::from_str(r#"{"name":"rust","display_name":"Rust"}"#).unwrap();
        assert_eq!(request.description, "");
        assert_eq!(request.level, 0);
        assert!(validator::Validate::validate(&request).is_ok());
    }

    #[test]
    fn test_into_new_doc_copies_all_fields() {
        let request = CreateDocRequest {
            name: "rust".to_string(),
            display_name: "Rust".to_string(),
            description: "systems language".to_string(),
            level: 2,
        };
        let new_doc = request.into_new_doc();
        assert_eq!(new_doc.name, "rust");
        assert_eq!(new_doc.display_name, "Rust");
        assert_eq!(new_doc.description, "systems language");
        assert_eq!(new_doc.level, 2);
    }

    fn sample_doc() -> Doc {
        Doc {
            id: 7,
            name: "rust".to_string(),
            display_name: "Rust".to_string(),
            description: "systems language".to_string(),
            level: 2,
            created_at: jiff::civil::datetime(2026, 7, 14, 8, 30, 0, 0).into(),
            updated_at: jiff::civil::datetime(2026, 7, 15, 9, 45, 0, 0).into(),
        }
    }

    fn sample_chapter(id: i32, sort: i32, title: &str) -> Chapter {
        Chapter {
            id,
            doc_id: 7,
            title: title.to_string(),
            content: format!("{title} body"),
            sort,
            created_at: jiff::civil::datetime(2026, 7, 14, 8, 30, 0, 0).into(),
            updated_at: jiff::civil::datetime(2026, 7, 14, 8, 30, 0, 0).into(),
        }
    }

    #[test]
    fn test_doc_response_projects_chapters_in_order() {
        // Chapters arrive pre-sorted by (sort, id); the projection must not
        // reorder them.
        let chapters = vec![
            sample_chapter(3, 1, "Getting started"),
            sample_chapter(1, 2, "Ownership"),
            sample_chapter(2, 3, "Lifetimes"),
        ];
        let response = DocResponse::new(sample_doc(), Some(chapters));

        assert_eq!(response.id, 7);
        assert_eq!(response.chapters.len(), 3);
        let titles: Vec<&str> = response
            .chapters
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(titles, ["Getting started", "Ownership", "Lifetimes"]);
        assert!(response.chapters.iter().all(|c| c.doc_id == 7));
    }

    #[test]
    fn test_doc_response_without_chapters_serializes_empty_array() {
        let response = DocResponse::new(sample_doc(), None);
        assert!(response.chapters.is_empty());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["chapters"], serde_json::json!([]));
    }

    #[test]
    fn test_doc_response_timestamp_rendering() {
        let response = DocResponse::new(sample_doc(), Some(vec![sample_chapter(1, 1, "Intro")]));
        assert_eq!(response.created_at, "2026-07-14T08:30:00.000Z");
        assert_eq!(response.updated_at, "2026-07-15T09:45:00.000Z");
        assert_eq!(response.chapters[0].created_at, "2026-07-14T08:30:00.000Z");
    }
}
