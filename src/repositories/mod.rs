//! Repository layer for data access operations.
//!
//! Provides async CRUD operations for all domain entities.

mod chapter_repo;
mod doc_repo;

pub use chapter_repo::ChapterRepository;
pub use doc_repo::{DocRepository, OrderBy, OrderColumn};

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Since `AsyncDbPool` uses `Arc` internally, cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub docs: DocRepository,
    pub chapters: ChapterRepository,
}

impl Repositories {
    /// Creates a new Repositories instance with all repositories initialized.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            docs: DocRepository::new(pool.clone()),
            chapters: ChapterRepository::new(pool),
        }
    }
}
