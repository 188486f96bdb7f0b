//! Tool definitions module.
//!
//! Each catalog operation is exposed as one tool, defined in its own file
//! with:
//! - Parameters struct (serde + schemars)
//! - `execute()` method (core logic over the catalog)
//! - `http_handler()` method (HTTP transport, via ToolRegistry)
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file here (e.g., `my_tool.rs`)
//! 2. Define params, execute(), and http_handler()
//! 3. Export it below
//! 4. Add route in `router.rs` and register in `registry.rs`

mod combine_prompts;
mod common;
mod get_categories;
mod get_prompt;
mod get_prompts_by_category;
mod search_prompts;

pub use combine_prompts::{CombinePromptsParams, CombinePromptsTool};
pub use get_categories::{GetCategoriesParams, GetCategoriesTool};
pub use get_prompt::{GetPromptParams, GetPromptTool};
pub use get_prompts_by_category::{GetPromptsByCategoryParams, GetPromptsByCategoryTool};
pub use search_prompts::{SearchPromptsParams, SearchPromptsTool};
