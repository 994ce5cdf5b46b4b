//! Doc service for business logic operations.
//!
//! Provides a higher-level API for doc operations, encapsulating the
//! relation-aware lookup and coordinating with the repository layer.

use crate::error::{AppError, AppResult};
use crate::models::{Chapter, Doc, NewDoc, UpdateDoc};
use crate::repositories::{ChapterRepository, DocRepository, OrderBy};

/// Doc service for handling doc-related business logic.
///
/// Wraps the doc and chapter repositories. Since repositories use `Arc`
/// internally via the connection pool, cloning is cheap.
#[derive(Clone)]
pub struct DocService {
    docs: DocRepository,
    chapters: ChapterRepository,
}

impl DocService {
    /// Creates a new DocService with the given repositories.
    pub fn new(docs: DocRepository, chapters: ChapterRepository) -> Self {
        Self { docs, chapters }
    }

    /// Gets a doc by its ID, optionally eager-loading its chapters.
    ///
    /// # Arguments
    /// * `id` - The doc's ID
    /// * `with_chapters` - Whether to load the chapters relation
    ///
    /// # Returns
    /// The doc and, when requested, its chapters in display order;
    /// `NotFound` error when the id does not exist.
    pub async fn get_doc(
        &self,
        id: i32,
        with_chapters: bool,
    ) -> AppResult<(Doc, Option<Vec<Chapter>>)> {
        let doc = self.find_existing(id).await?;
        let chapters = if with_chapters {
            Some(self.chapters.list_for_doc(id).await?)
        } else {
            None
        };
        Ok((doc, chapters))
    }

    /// Creates a new doc.
    pub async fn create_doc(&self, new_doc: NewDoc) -> AppResult<Doc> {
        self.docs.create(new_doc).await
    }

    /// Updates a doc's data.
    ///
    /// Verifies the doc exists first so a missing id surfaces as `NotFound`
    /// rather than a bare database error.
    pub async fn update_doc(&self, id: i32, changes: UpdateDoc) -> AppResult<Doc> {
        self.find_existing(id).await?;
        self.docs.update(id, changes).await
    }

    /// Deletes a doc.
    ///
    /// # Returns
    /// `true` if a row was deleted, `false` if the id did not exist.
    pub async fn delete_doc(&self, id: i32) -> AppResult<bool> {
        let affected = self.docs.delete(id).await?;
        Ok(affected > 0)
    }

    /// Lists docs filtered, ordered, and paginated.
    ///
    /// # Arguments
    /// * `search` - Optional name search term
    /// * `order_by` - Raw order-by expression, resolved against the whitelist
    /// * `page` - 1-based page number
    /// * `limit` - Page size
    pub async fn list_docs(
        &self,
        search: Option<&str>,
        order_by: Option<&str>,
        page: i64,
        limit: i64,
    ) -> AppResult<Vec<Doc>> {
        self.docs
            .list(search, OrderBy::parse(order_by), page, limit)
            .await
    }

    async fn find_existing(&self, id: i32) -> AppResult<Doc> {
        self.docs.find_by_id(id).await?.ok_or(AppError::NotFound {
            entity: "doc".to_string(),
            field: "id".to_string(),
            value: id.to_string(),
        })
    }
}
