//! Doc repository for async database operations.
//!
//! Provides CRUD operations plus the filtered, ordered, paginated listing
//! for the docs table using diesel_async.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Doc, NewDoc, UpdateDoc};

/// Sortable columns of the docs table.
///
/// The order-by string from the query is resolved against this explicit
/// whitelist; anything unrecognized falls back to the default ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderColumn {
    Id,
    Name,
    DisplayName,
    Level,
    CreatedAt,
    UpdatedAt,
}

/// A resolved ordering: column plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub column: OrderColumn,
    pub descending: bool,
}

impl OrderBy {
    /// Default listing order: newest docs first.
    pub const DEFAULT: OrderBy = OrderBy {
        column: OrderColumn::CreatedAt,
        descending: true,
    };

    /// Parses an order-by expression like "name" or "level desc".
    ///
    /// Unknown columns and malformed expressions yield the default order.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::DEFAULT;
        };
        let mut parts = raw.split_whitespace();
        let column = match parts.next() {
            Some(c) => c,
            None => return Self::DEFAULT,
        };
        let column = match column.to_ascii_lowercase().as_str() {
            "id" => OrderColumn::Id,
            "name" => OrderColumn::Name,
            "display_name" => OrderColumn::DisplayName,
            "level" => OrderColumn::Level,
            "created_at" => OrderColumn::CreatedAt,
            "updated_at" => OrderColumn::UpdatedAt,
            _ => return Self::DEFAULT,
        };
        let descending = match parts.next() {
            None => false,
            Some(dir) if dir.eq_ignore_ascii_case("desc") => true,
            Some(dir) if dir.eq_ignore_ascii_case("asc") => false,
            Some(_) => return Self::DEFAULT,
        };
        OrderBy { column, descending }
    }
}

/// Doc repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap
/// (just reference count increment).
#[derive(Clone)]
pub struct DocRepository {
    pool: AsyncDbPool,
}

impl DocRepository {
    /// Creates a new DocRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Creates a new doc in the database.
    ///
    /// # Returns
    /// The created doc with generated id and timestamps
    pub async fn create(&self, new_doc: NewDoc) -> Result<Doc, AppError> {
        use crate::schema::docs::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(docs)
            .values(&new_doc)
            .returning(Doc::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a doc by its ID.
    ///
    /// # Returns
    /// `Some(Doc)` if found, `None` otherwise
    pub async fn find_by_id(&self, doc_id: i32) -> Result<Option<Doc>, AppError> {
        use crate::schema::docs::dsl::*;
        let mut conn = self.pool.get().await?;

        docs.filter(id.eq(doc_id))
            .select(Doc::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Updates a doc's data and bumps its updated_at timestamp.
    ///
    /// # Returns
    /// The updated doc
    pub async fn update(&self, doc_id: i32, changes: UpdateDoc) -> Result<Doc, AppError> {
        use crate::schema::docs::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(docs.filter(id.eq(doc_id)))
            .set((&changes, updated_at.eq(diesel::dsl::now)))
            .returning(Doc::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes a doc from the database.
    ///
    /// # Returns
    /// The number of affected rows (0 or 1)
    pub async fn delete(&self, doc_id: i32) -> Result<usize, AppError> {
        use crate::schema::docs::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(docs.filter(id.eq(doc_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Lists docs filtered by a name search term, ordered by the resolved
    /// order-by expression, paginated by (page, limit).
    pub async fn list(
        &self,
        search: Option<&str>,
        order_by: OrderBy,
        page: i64,
        limit: i64,
    ) -> Result<Vec<Doc>, AppError> {
        use crate::schema::docs;
        let mut conn = self.pool.get().await?;

        let mut query = docs::table.select(Doc::as_select()).into_boxed();

        if let Some(term) = search
            && !term.trim().is_empty()
        {
            query = query.filter(docs::name.ilike(format!("%{}%", term.trim())));
        }

        query = match (order_by.column, order_by.descending) {
            (OrderColumn::Id, false) => query.order(docs::id.asc()),
            (OrderColumn::Id, true) => query.order(docs::id.desc()),
            (OrderColumn::Name, false) => query.order(docs::name.asc()),
            (OrderColumn::Name, true) => query.order(docs::name.desc()),
            (OrderColumn::DisplayName, false) => query.order(docs::display_name.asc()),
            (OrderColumn::DisplayName, true) => query.order(docs::display_name.desc()),
            (OrderColumn::Level, false) => query.order(docs::level.asc()),
            (OrderColumn::Level, true) => query.order(docs::level.desc()),
            (OrderColumn::CreatedAt, false) => query.order(docs::created_at.asc()),
            (OrderColumn::CreatedAt, true) => query.order(docs::created_at.desc()),
            (OrderColumn::UpdatedAt, false) => query.order(docs::updated_at.asc()),
            (OrderColumn::UpdatedAt, true) => query.order(docs::updated_at.desc()),
        };

        query
            .offset((page - 1) * limit)
            .limit(limit)
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_by_defaults_when_absent() {
        assert_eq!(OrderBy::parse(None), OrderBy::DEFAULT);
        assert_eq!(OrderBy::parse(Some("")), OrderBy::DEFAULT);
    }

    #[test]
    fn test_order_by_parses_column() {
        let order = OrderBy::parse(Some("name"));
        assert_eq!(order.column, OrderColumn::Name);
        assert!(!order.descending);
    }

    #[test]
    fn test_order_by_parses_desc_suffix() {
        let order = OrderBy::parse(Some("level desc"));
        assert_eq!(order.column, OrderColumn::Level);
        assert!(order.descending);

        let order = OrderBy::parse(Some("created_at ASC"));
        assert_eq!(order.column, OrderColumn::CreatedAt);
        assert!(!order.descending);
    }

    #[test]
    fn test_order_by_rejects_unknown_column() {
        // Unknown columns must not reach the database.
        assert_eq!(OrderBy::parse(Some("password")), OrderBy::DEFAULT);
        assert_eq!(OrderBy::parse(Some("name; drop table docs")), OrderBy::DEFAULT);
    }

    #[test]
    fn test_order_by_rejects_malformed_direction() {
        assert_eq!(OrderBy::parse(Some("name sideways")), OrderBy::DEFAULT);
    }
}
