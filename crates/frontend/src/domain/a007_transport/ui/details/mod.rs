//! Transport create / edit screen: one customer, any number of bags, each
//! bag holding one or more items.
//!
//! - view_model.rs: form reducer wiring, loading and saving
//! - view.rs: customer picker, bag cards and the item rows inside them

mod view;
mod view_model;

pub use view::TransportDetails;
pub use view_model::TransportDetailsViewModel;
