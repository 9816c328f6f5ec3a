pub mod details;
pub mod list;
pub mod return_modal;
