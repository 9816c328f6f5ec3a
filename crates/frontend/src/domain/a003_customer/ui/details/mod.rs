//! Customer editor. Lives in the shared modal slot under
//! `ModalKind::CustomerEditor`; the payload is the customer being edited,
//! or nothing for a new one.

mod view;
mod view_model;

pub use view::CustomerModal;
pub use view_model::CustomerDetailsViewModel;
