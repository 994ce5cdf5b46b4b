//! HTTP request handlers.
//!
//! Handlers are organized by resource:
//! - `docs` - Doc CRUD and listing
//! - `health` - Health check and probe endpoints

pub mod docs;
pub mod health;
