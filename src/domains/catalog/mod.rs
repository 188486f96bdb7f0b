//! Prompt catalog domain.
//!
//! A categorized, keyword-searchable library of static prompt snippets.
//! The catalog is built once at startup from embedded text constants and is
//! read-only for the lifetime of the process; every query is a pure,
//! in-memory computation.
//!
//! ## Architecture
//!
//! - `content/` - Embedded prompt bodies (one file per category)
//! - `category.rs` - The closed category enumeration
//! - `catalog.rs` - Catalog structure and the five query operations
//! - `registry.rs` - Central content registration
//! - `service.rs` - Process-wide service + MCP prompts projection
//! - `types.rs` - Success payload records
//! - `error.rs` - Catalog error taxonomy
//!
//! ## Adding content
//!
//! 1. Add the body constant in the category's file under `content/`
//! 2. Append it to that file's `PROMPTS` slice
//!
//! New categories additionally need a `Category` variant and a line in
//! `registry.rs`.

pub mod catalog;
pub mod category;
pub mod content;
mod error;
mod registry;
mod service;
pub mod types;

pub use catalog::{CatalogBuilder, PromptCatalog, PromptEntry, DEFAULT_SEPARATOR};
pub use category::Category;
pub use error::CatalogError;
pub use registry::register_all;
pub use service::{CatalogService, PromptProjectionError};
