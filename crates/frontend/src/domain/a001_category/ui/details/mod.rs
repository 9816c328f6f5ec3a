//! Category editor, shown inline above the category table.
//!
//! - view_model.rs: form state and the save command
//! - view.rs: the form itself

mod view;
mod view_model;

pub use view::CategoryDetails;
pub use view_model::CategoryDetailsViewModel;
