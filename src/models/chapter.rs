use diesel::prelude::*;
use jiff_diesel::DateTime;

use crate::models::Doc;

/// Chapter model for reading from database.
/// Chapters belong to a Doc and carry an explicit `sort` position.
#[derive(Debug, Queryable, Selectable, Identifiable, Associations, Clone)]
#[diesel(table_name = crate::schema::chapters)]
#[diesel(belongs_to(Doc))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Chapter {
    pub id: i32,
    pub doc_id: i32,
    pub title: String,
    pub content: String,
    pub sort: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}
