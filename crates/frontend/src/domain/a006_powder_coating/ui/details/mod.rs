//! Process editor, shown inline above the process table.

mod view;
mod view_model;

pub use view::ProcessDetails;
pub use view_model::ProcessDetailsViewModel;
