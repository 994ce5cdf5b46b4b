//! Chapter repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::Chapter;

/// Chapter repository holding an async connection pool.
#[derive(Clone)]
pub struct ChapterRepository {
    pool: AsyncDbPool,
}

impl ChapterRepository {
    /// Creates a new ChapterRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Lists the chapters of a doc in display order (sort, then id).
    pub async fn list_for_doc(&self, parent_id: i32) -> Result<Vec<Chapter>, AppError> {
        use crate::schema::chapters::dsl::*;
        let mut conn = self.pool.get().await?;

        chapters
            .filter(doc_id.eq(parent_id))
            .order((sort.asc(), id.asc()))
            .select(Chapter::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
