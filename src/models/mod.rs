mod chapter;
mod doc;

pub use chapter::Chapter;
pub use doc::{Doc, NewDoc, UpdateDoc};
