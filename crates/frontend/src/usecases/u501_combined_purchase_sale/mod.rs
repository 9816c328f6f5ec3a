//! Records a purchase and its immediate sale in one submission.

mod api;
mod view;

pub use view::CombinedPurchaseSaleView;
