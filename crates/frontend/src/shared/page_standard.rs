//! Page category constants.
//!
//! Every console page declares:
//!   - HTML `id` in the format `{resource}--{category}` (e.g. `"a002_areas--list"`)
//!   - `data-page-category` with one of the constants below

/// Paginated table with filters.
pub const PAGE_CAT_LIST: &str = "list";

/// Create/edit form or read-only view of a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Login and other pages outside the resource screens.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// `{resource}--{category}` page id
pub fn page_id(full_name: &str, category: &str) -> String {
    format!("{}--{}", full_name, category)
}
