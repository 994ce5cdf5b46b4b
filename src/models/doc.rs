use diesel::prelude::*;
use jiff_diesel::DateTime;
use serde::Deserialize;

/// Doc model for reading from database.
/// A Doc is a document/category node; its chapters live in their own table
/// and are loaded separately when the caller asks for the relation.
#[derive(Debug, Queryable, Selectable, Identifiable, Clone)]
#[diesel(table_name = crate::schema::docs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Doc {
    pub id: i32,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub level: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// NewDoc model for inserting new records.
/// Timestamps are filled by the database defaults.
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::docs)]
pub struct NewDoc {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub level: i32,
}

/// UpdateDoc model for update-by-id.
///
/// The update endpoint takes the full field set, so these are concrete
/// values rather than the optional-field changeset used for partial updates.
#[derive(Debug, AsChangeset, Deserialize, Clone)]
#[diesel(table_name = crate::schema::docs)]
pub struct UpdateDoc {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub level: i32,
}
