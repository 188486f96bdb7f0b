//! Frontend Prompts MCP Server
//!
//! This crate provides an MCP (Model Context Protocol) server over a static,
//! categorized library of frontend development prompts. The catalog is built
//! once at startup from embedded text constants and answered read-only for
//! the process lifetime.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the main server, and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **catalog**: the prompt library and its five query operations
//!   - **tools**: MCP tools exposing those operations to clients
//!
//! # Example
//!
//! ```rust,no_run
//! use fe_prompts_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
pub use domains::catalog::{Category, PromptCatalog};
