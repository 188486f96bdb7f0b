//! Success payload types for catalog queries.
//!
//! Each query operation returns one of these records; tools serialize them
//! as JSON text content for clients.

use serde::Serialize;

use super::category::Category;

/// Result of listing the registered categories.
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesResult {
    /// Category identifiers in registration order.
    pub categories: Vec<Category>,
    pub total: usize,
}

/// A single named prompt with its full body.
#[derive(Debug, Clone, Serialize)]
pub struct PromptInfo {
    pub name: String,
    pub content: String,
}

/// Result of listing every prompt in one category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryListing {
    pub category: Category,
    /// Prompts in registration order, not alphabetical.
    pub prompts: Vec<PromptInfo>,
    pub total: usize,
}

/// Result of fetching a single prompt.
#[derive(Debug, Clone, Serialize)]
pub struct PromptBody {
    pub category: Category,
    pub name: String,
    /// Verbatim body, no trimming or re-encoding.
    pub content: String,
}

/// Identity of a prompt included in a combined output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptRef {
    pub category: Category,
    pub name: String,
}

/// Result of concatenating the prompts of several categories.
#[derive(Debug, Clone, Serialize)]
pub struct CombinedPrompts {
    /// The joined text: one block per prompt, blocks separated by the
    /// requested separator, no trailing separator.
    pub content: String,
    pub total_included: usize,
    /// The (category, name) pairs actually included, in output order.
    pub included: Vec<PromptRef>,
    /// Echo of the requested category list, including duplicates and
    /// categories that were skipped.
    pub requested: Vec<Category>,
}

/// A single search hit.
#[derive(Debug, Clone, Serialize)]
pub struct SearchMatch {
    pub category: Category,
    pub name: String,
    /// Heuristic ranking: +10 for a name hit plus one per non-overlapping
    /// body occurrence of the keyword.
    pub relevance: u32,
    /// First 200 characters of the body, with "..." appended when the body
    /// is longer.
    pub snippet: String,
}

/// Result of a keyword search across the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub keyword: String,
    /// Matches ordered by descending relevance; ties keep discovery order.
    pub results: Vec<SearchMatch>,
    pub total_found: usize,
}
