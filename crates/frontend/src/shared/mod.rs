pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod notify;
pub mod page_frame;
pub mod page_standard;
pub mod ref_data;
pub mod search_list;
