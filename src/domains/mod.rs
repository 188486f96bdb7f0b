//! Domains module containing business logic organized by bounded contexts.
//!
//! - **catalog**: the static prompt library and its query operations
//! - **tools**: the MCP tool surface exposing those operations to clients

pub mod catalog;
pub mod tools;
