//! "Add purchase" screen, opened as its own tab.

mod view;
mod view_model;

pub use view::AddPurchase;
pub use view_model::AddPurchaseViewModel;
