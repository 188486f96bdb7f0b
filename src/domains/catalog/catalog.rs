//! The prompt catalog structure and its query operations.
//!
//! The catalog is a two-level mapping (category -> prompt name -> body) built
//! exactly once and read-only afterwards. Every operation is a pure,
//! synchronous read: no I/O, no locking, no blocking. A catalog behind an
//! `Arc` is safe to share across concurrent requests as-is.

use tracing::debug;

use super::category::Category;
use super::error::CatalogError;
use super::types::{
    CategoriesResult, CategoryListing, CombinedPrompts, PromptBody, PromptInfo, PromptRef,
    SearchMatch, SearchResults,
};

/// Separator placed between prompt blocks when combining categories.
pub const DEFAULT_SEPARATOR: &str = "\n\n---\n\n";

/// Maximum number of characters included in a search snippet.
const SNIPPET_LIMIT: usize = 200;

/// A single registered prompt.
#[derive(Debug, Clone)]
pub struct PromptEntry {
    /// Name, unique within its category only.
    pub name: &'static str,

    /// Immutable markdown body.
    pub body: &'static str,
}

/// The catalog root: categories in registration order, each owning its
/// prompts in registration order.
#[derive(Debug, Clone, Default)]
pub struct PromptCatalog {
    categories: Vec<(Category, Vec<PromptEntry>)>,
}

/// Builder used during initialization.
///
/// Registration order is preserved; it defines the iteration order of every
/// listing, combine, and search operation.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    categories: Vec<(Category, Vec<PromptEntry>)>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a prompt under a category.
    ///
    /// The category is created on first use; subsequent prompts append in
    /// order. Duplicate `(category, name)` pairs are detected at `build`.
    pub fn prompt(mut self, category: Category, name: &'static str, body: &'static str) -> Self {
        let entry = PromptEntry { name, body };
        match self.categories.iter_mut().find(|(c, _)| *c == category) {
            Some((_, entries)) => entries.push(entry),
            None => self.categories.push((category, vec![entry])),
        }
        self
    }

    /// Validate the registered content and produce the catalog.
    ///
    /// A duplicate `(category, name)` registration is the initialization
    /// failure mode; callers fall back to an empty catalog so queries
    /// degrade to CategoryNotFound instead of serving ambiguous content.
    pub fn build(self) -> Result<PromptCatalog, CatalogError> {
        for (category, entries) in &self.categories {
            for (i, entry) in entries.iter().enumerate() {
                if entries[..i].iter().any(|e| e.name == entry.name) {
                    return Err(CatalogError::initialization(format!(
                        "duplicate prompt '{}' in category '{}'",
                        entry.name, category
                    )));
                }
            }
        }

        Ok(PromptCatalog {
            categories: self.categories,
        })
    }
}

impl PromptCatalog {
    /// An empty catalog, used as the fallback when initialization fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of prompts across all categories.
    pub fn len(&self) -> usize {
        self.categories.iter().map(|(_, e)| e.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate every `(category, entry)` pair in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &PromptEntry)> {
        self.categories
            .iter()
            .flat_map(|(category, entries)| entries.iter().map(move |e| (*category, e)))
    }

    fn entries(&self, category: Category) -> Option<&[PromptEntry]> {
        self.categories
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, entries)| entries.as_slice())
    }

    /// List the registered categories in registration order.
    ///
    /// Cannot fail; an empty catalog yields an empty list.
    pub fn categories(&self) -> CategoriesResult {
        let categories: Vec<Category> = self.categories.iter().map(|(c, _)| *c).collect();
        CategoriesResult {
            total: categories.len(),
            categories,
        }
    }

    /// List every prompt registered under one category.
    pub fn list_by_category(&self, category: Category) -> Result<CategoryListing, CatalogError> {
        let entries = self
            .entries(category)
            .ok_or(CatalogError::CategoryNotFound(category))?;

        let prompts: Vec<PromptInfo> = entries
            .iter()
            .map(|e| PromptInfo {
                name: e.name.to_string(),
                content: e.body.to_string(),
            })
            .collect();

        Ok(CategoryListing {
            category,
            total: prompts.len(),
            prompts,
        })
    }

    /// Fetch a single prompt body by exact (case-sensitive) name.
    pub fn get(&self, category: Category, name: &str) -> Result<PromptBody, CatalogError> {
        let entries = self
            .entries(category)
            .ok_or(CatalogError::CategoryNotFound(category))?;

        let entry = entries
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| CatalogError::prompt_not_found(category, name))?;

        Ok(PromptBody {
            category,
            name: entry.name.to_string(),
            content: entry.body.to_string(),
        })
    }

    /// Concatenate the prompts of the requested categories.
    ///
    /// Categories are visited in the given order; duplicates re-include
    /// their prompts, unknown categories are silently skipped. Zero
    /// resulting blocks is reported as NoMatches, not an empty join.
    pub fn combine(
        &self,
        requested: &[Category],
        separator: &str,
    ) -> Result<CombinedPrompts, CatalogError> {
        let mut blocks = Vec::new();
        let mut included = Vec::new();

        for &category in requested {
            let Some(entries) = self.entries(category) else {
                debug!("Skipping unregistered category: {}", category);
                continue;
            };

            for entry in entries {
                blocks.push(format!(
                    "# Category: {}\n## Prompt: {}\n\n{}",
                    category, entry.name, entry.body
                ));
                included.push(PromptRef {
                    category,
                    name: entry.name.to_string(),
                });
            }
        }

        if blocks.is_empty() {
            return Err(CatalogError::NoMatches);
        }

        Ok(CombinedPrompts {
            content: blocks.join(separator),
            total_included: blocks.len(),
            included,
            requested: requested.to_vec(),
        })
    }

    /// Search prompt names and bodies for a keyword.
    ///
    /// Matching is a case-insensitive substring test. The relevance score is
    /// a flat +10 for a name hit (regardless of how often the keyword recurs
    /// in the name) plus one per non-overlapping body occurrence. Results are
    /// sorted by descending score; the sort is stable, so ties keep the order
    /// in which matches were discovered. Zero matches is a normal, empty
    /// success.
    pub fn search(&self, keyword: &str, categories: Option<&[Category]>) -> SearchResults {
        let needle = keyword.to_lowercase();
        let mut results = Vec::new();

        // An empty needle would match everywhere; the tool boundary rejects
        // it, treat it as no matches here.
        if !needle.is_empty() {
            let default_order: Vec<Category> =
                self.categories.iter().map(|(c, _)| *c).collect();
            let scope = categories.unwrap_or(&default_order);

            for &category in scope {
                let Some(entries) = self.entries(category) else {
                    continue;
                };

                for entry in entries {
                    let name_hit = entry.name.to_lowercase().contains(&needle);
                    let body_hits = count_occurrences(&entry.body.to_lowercase(), &needle);

                    if !name_hit && body_hits == 0 {
                        continue;
                    }

                    let relevance = if name_hit { 10 + body_hits } else { body_hits };
                    results.push(SearchMatch {
                        category,
                        name: entry.name.to_string(),
                        relevance,
                        snippet: make_snippet(entry.body),
                    });
                }
            }

            results.sort_by(|a, b| b.relevance.cmp(&a.relevance));
        }

        SearchResults {
            keyword: keyword.to_string(),
            total_found: results.len(),
            results,
        }
    }
}

/// Count non-overlapping occurrences of `needle` in `haystack`.
///
/// Both sides are expected to be lower-cased already.
fn count_occurrences(haystack: &str, needle: &str) -> u32 {
    haystack.matches(needle).count() as u32
}

/// Take the first 200 characters of a body, appending an ellipsis marker
/// only when the body is actually longer.
fn make_snippet(body: &str) -> String {
    let mut chars = body.chars();
    let snippet: String = chars.by_ref().take(SNIPPET_LIMIT).collect();
    if chars.next().is_some() {
        format!("{}...", snippet)
    } else {
        snippet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A small catalog with known content, independent of the embedded set.
    fn test_catalog() -> PromptCatalog {
        CatalogBuilder::new()
            .prompt(
                Category::React,
                "component-creation",
                "Create a React component. A component should stay small and pure.",
            )
            .prompt(Category::React, "hooks-usage", "Prefer hooks over class lifecycles.")
            .prompt(Category::Fe, "css-architecture", "Organize CSS by component scope.")
            .prompt(Category::Common, "code-review", "Review the code for defects.")
            .build()
            .unwrap()
    }

    #[test]
    fn test_categories_in_registration_order() {
        let catalog = test_catalog();
        let result = catalog.categories();
        assert_eq!(
            result.categories,
            vec![Category::React, Category::Fe, Category::Common]
        );
        assert_eq!(result.total, 3);
    }

    #[test]
    fn test_list_matches_individual_gets() {
        let catalog = test_catalog();
        let listing = catalog.list_by_category(Category::React).unwrap();
        assert_eq!(listing.total, 2);
        assert_eq!(listing.prompts[0].name, "component-creation");
        assert_eq!(listing.prompts[1].name, "hooks-usage");

        for prompt in &listing.prompts {
            let fetched = catalog.get(Category::React, &prompt.name).unwrap();
            assert_eq!(fetched.content, prompt.content);
        }
    }

    #[test]
    fn test_get_unknown_name_is_prompt_not_found() {
        let catalog = test_catalog();
        let err = catalog.get(Category::React, "no-such-prompt").unwrap_err();
        assert_eq!(
            err,
            CatalogError::prompt_not_found(Category::React, "no-such-prompt")
        );
    }

    #[test]
    fn test_get_is_case_sensitive() {
        let catalog = test_catalog();
        assert!(catalog.get(Category::React, "Component-Creation").is_err());
    }

    #[test]
    fn test_empty_catalog_reports_category_not_found() {
        let catalog = PromptCatalog::empty();
        assert_eq!(catalog.categories().total, 0);
        assert_eq!(
            catalog.list_by_category(Category::React).unwrap_err(),
            CatalogError::CategoryNotFound(Category::React)
        );
    }

    #[test]
    fn test_combine_block_structure() {
        let catalog = test_catalog();
        let combined = catalog.combine(&[Category::Fe], DEFAULT_SEPARATOR).unwrap();
        assert_eq!(combined.total_included, 1);
        assert_eq!(
            combined.content,
            "# Category: fe\n## Prompt: css-architecture\n\nOrganize CSS by component scope."
        );
        assert_eq!(
            combined.included,
            vec![PromptRef {
                category: Category::Fe,
                name: "css-architecture".to_string()
            }]
        );
        assert_eq!(combined.requested, vec![Category::Fe]);
    }

    #[test]
    fn test_combine_concatenation_is_associative() {
        let catalog = test_catalog();
        let fe = catalog.combine(&[Category::Fe], DEFAULT_SEPARATOR).unwrap();
        let common = catalog
            .combine(&[Category::Common], DEFAULT_SEPARATOR)
            .unwrap();
        let both = catalog
            .combine(&[Category::Fe, Category::Common], DEFAULT_SEPARATOR)
            .unwrap();

        assert_eq!(
            both.content,
            format!("{}{}{}", fe.content, DEFAULT_SEPARATOR, common.content)
        );
        assert_eq!(both.total_included, fe.total_included + common.total_included);
    }

    #[test]
    fn test_combine_duplicates_reinclude() {
        let catalog = test_catalog();
        let combined = catalog
            .combine(&[Category::Fe, Category::Fe], DEFAULT_SEPARATOR)
            .unwrap();
        assert_eq!(combined.total_included, 2);
        assert_eq!(combined.requested, vec![Category::Fe, Category::Fe]);
    }

    #[test]
    fn test_combine_skips_unregistered_categories() {
        let catalog = CatalogBuilder::new()
            .prompt(Category::Fe, "css-architecture", "body")
            .build()
            .unwrap();

        let combined = catalog
            .combine(&[Category::React, Category::Fe], DEFAULT_SEPARATOR)
            .unwrap();
        assert_eq!(combined.total_included, 1);
        assert_eq!(combined.requested, vec![Category::React, Category::Fe]);
    }

    #[test]
    fn test_combine_nothing_found() {
        let catalog = test_catalog();
        assert_eq!(
            catalog.combine(&[], DEFAULT_SEPARATOR).unwrap_err(),
            CatalogError::NoMatches
        );

        let empty = PromptCatalog::empty();
        assert_eq!(
            empty
                .combine(&[Category::React, Category::Common], DEFAULT_SEPARATOR)
                .unwrap_err(),
            CatalogError::NoMatches
        );
    }

    #[test]
    fn test_combine_custom_separator() {
        let catalog = test_catalog();
        let combined = catalog
            .combine(&[Category::Fe, Category::Common], "\n===\n")
            .unwrap();
        assert_eq!(combined.content.matches("\n===\n").count(), 1);
        assert!(!combined.content.ends_with("\n===\n"));
    }

    #[test]
    fn test_search_name_hit_scores_flat_ten_plus_body() {
        let catalog = test_catalog();
        // "component-creation" name contains "component" (+10); the body
        // contains "component" twice, case-insensitive.
        let results = catalog.search("component", Some(&[Category::React]));
        assert_eq!(results.total_found, 1);
        let hit = &results.results[0];
        assert_eq!(hit.name, "component-creation");
        assert_eq!(hit.relevance, 12);
    }

    #[test]
    fn test_search_body_only_hit_counts_occurrences() {
        let catalog = test_catalog();
        let results = catalog.search("CSS", None);
        assert_eq!(results.total_found, 1);
        assert_eq!(results.results[0].category, Category::Fe);
        assert_eq!(results.results[0].relevance, 1);
    }

    #[test]
    fn test_search_orders_by_descending_relevance_stable() {
        let catalog = CatalogBuilder::new()
            .prompt(Category::React, "first", "alpha alpha")
            .prompt(Category::React, "second", "alpha alpha")
            .prompt(Category::Fe, "alpha-guide", "alpha")
            .build()
            .unwrap();

        let results = catalog.search("alpha", None);
        assert_eq!(results.total_found, 3);
        // Name hit wins (10 + 1), then the two body-only ties keep
        // discovery order.
        assert_eq!(results.results[0].name, "alpha-guide");
        assert_eq!(results.results[0].relevance, 11);
        assert_eq!(results.results[1].name, "first");
        assert_eq!(results.results[2].name, "second");
        assert_eq!(results.results[1].relevance, 2);
    }

    #[test]
    fn test_search_restricted_to_category_without_matches() {
        let catalog = CatalogBuilder::new()
            .prompt(Category::React, "rendering", "render fast")
            .prompt(Category::Fe, "performance-budget", "performance matters")
            .build()
            .unwrap();

        let results = catalog.search("performance", Some(&[Category::React]));
        assert_eq!(results.total_found, 0);
        assert!(results.results.is_empty());
    }

    #[test]
    fn test_search_no_matches_is_empty_success() {
        let catalog = test_catalog();
        let results = catalog.search("kubernetes", None);
        assert_eq!(results.total_found, 0);
        assert!(results.results.is_empty());
    }

    #[test]
    fn test_search_counts_non_overlapping_occurrences() {
        let catalog = CatalogBuilder::new()
            .prompt(Category::Common, "letters", "aaaa")
            .build()
            .unwrap();

        let results = catalog.search("aa", None);
        assert_eq!(results.results[0].relevance, 2);
    }

    #[test]
    fn test_snippet_truncation_boundary() {
        let exactly_200 = "y".repeat(200);
        assert_eq!(make_snippet(&exactly_200), exactly_200);
        assert!(!make_snippet(&exactly_200).ends_with("..."));

        let shorter = "short body";
        assert_eq!(make_snippet(shorter), shorter);

        let longer = "z".repeat(250);
        let snippet = make_snippet(&longer);
        assert_eq!(snippet.chars().count(), 203);
        assert!(snippet.ends_with("..."));
        assert_eq!(snippet[..200], "z".repeat(200));
    }

    #[test]
    fn test_builder_rejects_duplicate_names() {
        let err = CatalogBuilder::new()
            .prompt(Category::React, "dup", "one")
            .prompt(Category::React, "dup", "two")
            .build()
            .unwrap_err();
        assert!(matches!(err, CatalogError::Initialization(_)));
    }

    #[test]
    fn test_same_name_allowed_across_categories() {
        let catalog = CatalogBuilder::new()
            .prompt(Category::React, "style-guide", "react style")
            .prompt(Category::Fe, "style-guide", "fe style")
            .build()
            .unwrap();

        assert_eq!(
            catalog.get(Category::React, "style-guide").unwrap().content,
            "react style"
        );
        assert_eq!(
            catalog.get(Category::Fe, "style-guide").unwrap().content,
            "fe style"
        );
    }
}
