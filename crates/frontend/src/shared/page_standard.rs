//! Page category constants.
//!
//! Every page rendered inside a tab declares an HTML `id` of the form
//! `{entity}--{category}` (e.g. `"a004_purchase--list"`) and a
//! `data-page-category` taken from the constants below.

/// Table with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Create / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Report over derived data.
pub const PAGE_CAT_REPORT: &str = "report";

/// Multi-step action page (combined purchase and sale).
pub const PAGE_CAT_USECASE: &str = "usecase";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_REPORT,
    PAGE_CAT_USECASE,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, cat)) if !entity.is_empty() && ALL_CATEGORIES.contains(&cat))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids() {
        assert!(is_valid_page_id("a007_transport--detail"));
        assert!(!is_valid_page_id("a007_transport"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a007_transport--dashboard"));
    }
}
