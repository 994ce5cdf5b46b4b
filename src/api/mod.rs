//! HTTP API layer.
//!
//! Contains handlers, DTOs, middleware, router assembly, and the
//! OpenAPI document.

pub mod doc;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
