//! Catalog content registration.
//!
//! This is the central place where embedded content enters the catalog.
//! When adding a category:
//! 1. Add the variant in `category.rs`
//! 2. Create the content file in `content/`
//! 3. Register it here in `register_all()`

use super::catalog::{CatalogBuilder, PromptCatalog};
use super::category::Category;
use super::content;
use super::error::CatalogError;

/// Registration order of categories; this fixes the iteration order of
/// every listing and search.
const REGISTRATION: &[(Category, &[(&str, &str)])] = &[
    (Category::React, content::react::PROMPTS),
    (Category::Fe, content::fe::PROMPTS),
    (Category::Common, content::common::PROMPTS),
];

/// Build the catalog from the embedded content set.
pub fn register_all() -> Result<PromptCatalog, CatalogError> {
    let mut builder = CatalogBuilder::new();
    for &(category, prompts) in REGISTRATION {
        for &(name, body) in prompts {
            builder = builder.prompt(category, name, body);
        }
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_all_builds() {
        let catalog = register_all().unwrap();
        assert!(!catalog.is_empty());

        let categories = catalog.categories();
        assert_eq!(
            categories.categories,
            vec![Category::React, Category::Fe, Category::Common]
        );
    }

    #[test]
    fn test_embedded_content_is_well_formed() {
        let catalog = register_all().unwrap();
        for (category, entry) in catalog.iter() {
            assert!(!entry.name.is_empty(), "empty name in {}", category);
            assert!(!entry.body.is_empty(), "empty body for {}", entry.name);
            assert!(
                !entry.name.contains('/'),
                "'{}' would break the category/name composite form",
                entry.name
            );
        }
    }

    #[test]
    fn test_known_entries_reachable() {
        let catalog = register_all().unwrap();
        assert!(catalog.get(Category::React, "component-creation").is_ok());
        assert!(catalog.get(Category::Fe, "accessibility-review").is_ok());
        assert!(catalog.get(Category::Common, "code-review").is_ok());
    }
}
