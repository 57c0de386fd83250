//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_collection--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity name searchable: copy the id from
//! the DOM inspector and it points at the `domain/{entity}/` directory.

/// List of records with search and filters.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail / configuration form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Overview page with counters.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Administration and connection pages.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Free-form page (gallery, reference, not found).
pub const PAGE_CAT_CUSTOM: &str = "custom";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_SYSTEM,
    PAGE_CAT_CUSTOM,
];

/// Validate that a page id matches the `{entity}--{category}` format
/// and that the category is a known one.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_collection--list"));
        assert!(is_valid_page_id("a002_field--detail"));
        assert!(!is_valid_page_id("a001_collection"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_collection--grid"));
    }
}
