pub mod api;
pub mod date_format;
pub mod list_state;
pub mod modal;
pub mod pagination;
pub mod ref_cache;
pub mod search;
pub mod validation;
